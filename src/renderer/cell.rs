/// Represents a 24-bit RGB color
///
/// Value type, compared by exact channel equality.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Per-channel linear interpolation, truncating toward zero.
    pub fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
        Rgb(
            lerp_channel(a.0, b.0, t),
            lerp_channel(a.1, b.1, t),
            lerp_channel(a.2, b.2, t),
        )
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t) as u8
}

/// Represents a single character cell on the terminal
///
/// Uses TrueColor (RGB) for maximum quality. `fg == None` means the glyph
/// carries no foreground ink (it is a blank). `bg == None` is a sentinel for
/// "reset to the terminal default" and is never produced by downsampling;
/// the serializer emits a different escape for each of the three cases.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell {
    pub glyph: char,
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: None,
            bg: None,
        }
    }
}

/// A finished terminal frame: `height` rows x `width` columns of cells,
/// row-major. Immutable once produced by the downsampler.
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[y * self.width + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_truncates_toward_zero() {
        let a = Rgb(15, 20, 35);
        let b = Rgb(5, 10, 18);
        // halfway: (35+18)/2 = 26.5 truncates to 26
        assert_eq!(Rgb::lerp(a, b, 0.5), Rgb(10, 15, 26));
        assert_eq!(Rgb::lerp(a, b, 0.0), a);
        assert_eq!(Rgb::lerp(a, b, 1.0), b);
    }

    #[test]
    fn test_grid_indexing_is_row_major() {
        let mut cells = vec![Cell::default(); 6];
        cells[4].glyph = 'x';
        let grid = CellGrid::new(3, 2, cells);
        assert_eq!(grid.cell(1, 1).glyph, 'x');
        assert_eq!(grid.rows().count(), 2);
    }
}
