use super::canvas::Canvas;
use super::cell::{Cell, CellGrid, Rgb};
use super::glyphs::{DOT_BITS, GLYPHS};

/// Fold a hi-res canvas into a grid of terminal cells.
///
/// Each output cell covers the 2x4 pixel block at `(x*2+dx, y*4+dy)`. The
/// cell background is the truncated average of all in-bounds sub-pixel
/// backgrounds; lit sub-pixels set their braille dot bit and contribute to
/// the foreground average. Sub-positions falling outside the canvas are
/// skipped, not zero-filled.
pub fn downsample(canvas: &Canvas, out_width: usize, out_height: usize) -> CellGrid {
    let mut cells = Vec::with_capacity(out_width * out_height);
    for y in 0..out_height {
        for x in 0..out_width {
            cells.push(fold_block(canvas, x, y));
        }
    }
    CellGrid::new(out_width, out_height, cells)
}

fn fold_block(canvas: &Canvas, cell_x: usize, cell_y: usize) -> Cell {
    let mut dot_mask = 0u8;
    let mut bg_sum = ColorSum::default();
    let mut fg_sum = ColorSum::default();

    for dy in 0..4 {
        for dx in 0..2 {
            let px = cell_x * 2 + dx;
            let py = cell_y * 4 + dy;
            if px >= canvas.width() || py >= canvas.height() {
                continue;
            }
            bg_sum.add(canvas.background_at(px, py));
            if let Some(color) = canvas.lit_at(px, py) {
                dot_mask |= DOT_BITS[dy][dx];
                fg_sum.add(color);
            }
        }
    }

    if dot_mask == 0 {
        Cell {
            glyph: ' ',
            fg: None,
            bg: Some(bg_sum.average()),
        }
    } else {
        Cell {
            glyph: GLYPHS[dot_mask as usize],
            fg: Some(fg_sum.average()),
            bg: Some(bg_sum.average()),
        }
    }
}

#[derive(Default)]
struct ColorSum {
    r: u32,
    g: u32,
    b: u32,
    count: u32,
}

impl ColorSum {
    fn add(&mut self, c: Rgb) {
        self.r += c.0 as u32;
        self.g += c.1 as u32;
        self.b += c.2 as u32;
        self.count += 1;
    }

    /// Truncated per-channel average; black when nothing was accumulated.
    fn average(&self) -> Rgb {
        if self.count == 0 {
            return Rgb(0, 0, 0);
        }
        Rgb(
            (self.r / self.count) as u8,
            (self.g / self.count) as u8,
            (self.b / self.count) as u8,
        )
    }
}
