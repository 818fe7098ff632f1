use super::cell::{CellGrid, Rgb};

const ESC: &str = "\x1b";

/// Serialize a cell grid into a minimal ANSI escape stream.
///
/// One line of text per row, rows joined by `\n`. Within a row the last
/// emitted foreground and background are tracked so that a run of cells
/// sharing both colors costs one color-change pair regardless of length;
/// output size is proportional to color transitions, not cells. Every row
/// ends with a full reset, so no control state dangles past the frame.
pub fn serialize(grid: &CellGrid) -> String {
    // 24 bytes is a generous upper bound per cell (two color sets + glyph)
    let mut out = String::with_capacity(grid.width() * grid.height() * 24);
    let mut first_row = true;

    for row in grid.rows() {
        if !first_row {
            out.push('\n');
        }
        first_row = false;

        // trackers reset to absent each row: the trailing reset of the
        // previous row already restored the terminal defaults, so a
        // row-leading cell with an absent color costs nothing
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;

        for cell in row {
            if cell.bg != last_bg {
                match cell.bg {
                    Some(bg) => push_color(&mut out, "[48;2;", bg),
                    None => push_reset(&mut out),
                }
                last_bg = cell.bg;
            }
            if cell.fg != last_fg {
                match cell.fg {
                    Some(fg) => push_color(&mut out, "[38;2;", fg),
                    None => {
                        out.push_str(ESC);
                        out.push_str("[39m");
                    }
                }
                last_fg = cell.fg;
            }
            out.push(cell.glyph);
        }
        push_reset(&mut out);
    }
    out
}

fn push_reset(out: &mut String) {
    out.push_str(ESC);
    out.push_str("[0m");
}

fn push_color(out: &mut String, prefix: &str, Rgb(r, g, b): Rgb) {
    out.push_str(ESC);
    out.push_str(prefix);
    push_u8(out, r);
    out.push(';');
    push_u8(out, g);
    out.push(';');
    push_u8(out, b);
    out.push('m');
}

// Decimal writer without a format! round trip.
#[inline]
fn push_u8(out: &mut String, mut n: u8) {
    if n >= 100 {
        out.push((b'0' + n / 100) as char);
        n %= 100;
        out.push((b'0' + n / 10) as char);
        out.push((b'0' + n % 10) as char);
    } else if n >= 10 {
        out.push((b'0' + n / 10) as char);
        out.push((b'0' + n % 10) as char);
    } else {
        out.push((b'0' + n) as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::cell::Cell;

    fn grid_of(width: usize, height: usize, cell: Cell) -> CellGrid {
        CellGrid::new(width, height, vec![cell; width * height])
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_uniform_row_coalesces_to_one_color_pair() {
        let cell = Cell {
            glyph: 'x',
            fg: Some(Rgb(1, 2, 3)),
            bg: Some(Rgb(4, 5, 6)),
        };
        let out = serialize(&grid_of(10, 1, cell));
        assert_eq!(count(&out, "\x1b[38;2;1;2;3m"), 1);
        assert_eq!(count(&out, "\x1b[48;2;4;5;6m"), 1);
        assert_eq!(count(&out, "x"), 10);
        assert_eq!(count(&out, "\x1b[0m"), 1);
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_color_change_emits_new_codes() {
        let a = Cell {
            glyph: 'a',
            fg: Some(Rgb(1, 1, 1)),
            bg: Some(Rgb(2, 2, 2)),
        };
        let b = Cell {
            glyph: 'b',
            fg: Some(Rgb(3, 3, 3)),
            bg: Some(Rgb(2, 2, 2)),
        };
        let grid = CellGrid::new(2, 1, vec![a, b]);
        let out = serialize(&grid);
        // bg unchanged between cells: set once; fg set twice
        assert_eq!(count(&out, "\x1b[48;2;2;2;2m"), 1);
        assert_eq!(count(&out, "\x1b[38;2;"), 2);
    }

    #[test]
    fn test_row_leading_blank_cells_emit_no_default_fg() {
        // trackers start as absent, so an unlit leading cell matches them
        // and costs only its glyph
        let blank = Cell {
            glyph: ' ',
            fg: None,
            bg: Some(Rgb(9, 9, 9)),
        };
        let out = serialize(&grid_of(3, 1, blank));
        assert_eq!(count(&out, "\x1b[39m"), 0);
        assert_eq!(count(&out, "\x1b[38;2;"), 0);
    }

    #[test]
    fn test_default_fg_emitted_only_on_transition_to_absent() {
        let inked = Cell {
            glyph: 'x',
            fg: Some(Rgb(1, 1, 1)),
            bg: Some(Rgb(9, 9, 9)),
        };
        let blank = Cell {
            glyph: ' ',
            fg: None,
            bg: Some(Rgb(9, 9, 9)),
        };
        let grid = CellGrid::new(4, 1, vec![blank, inked, blank, blank]);
        let out = serialize(&grid);
        // once when ink stops, never for the leading blank or the run
        assert_eq!(count(&out, "\x1b[39m"), 1);
        assert_eq!(count(&out, "\x1b[38;2;1;1;1m"), 1);
    }

    #[test]
    fn test_row_leading_absent_background_emits_nothing() {
        let cell = Cell {
            glyph: '.',
            fg: Some(Rgb(1, 1, 1)),
            bg: None,
        };
        let out = serialize(&grid_of(1, 1, cell));
        // only the trailing per-row reset; absent bg matches the row-start state
        assert_eq!(count(&out, "\x1b[0m"), 1);
        assert_eq!(count(&out, "\x1b[48;2;"), 0);
    }

    #[test]
    fn test_absent_background_after_color_emits_full_reset() {
        let colored = Cell {
            glyph: 'x',
            fg: Some(Rgb(1, 1, 1)),
            bg: Some(Rgb(2, 2, 2)),
        };
        let sentinel = Cell {
            glyph: '.',
            fg: Some(Rgb(1, 1, 1)),
            bg: None,
        };
        let grid = CellGrid::new(2, 1, vec![colored, sentinel]);
        let out = serialize(&grid);
        // one reset for the sentinel transition, one trailing per-row reset
        assert_eq!(count(&out, "\x1b[0m"), 2);
        assert_eq!(count(&out, "\x1b[48;2;"), 1);
    }

    #[test]
    fn test_trackers_reset_per_row() {
        let cell = Cell {
            glyph: 'x',
            fg: Some(Rgb(1, 2, 3)),
            bg: Some(Rgb(4, 5, 6)),
        };
        let out = serialize(&grid_of(2, 3, cell));
        assert_eq!(out.lines().count(), 3);
        // each row re-emits both colors even though they match the prior row
        assert_eq!(count(&out, "\x1b[38;2;1;2;3m"), 3);
        assert_eq!(count(&out, "\x1b[48;2;4;5;6m"), 3);
        for line in out.lines() {
            assert!(line.ends_with("\x1b[0m"));
        }
    }

    #[test]
    fn test_three_digit_channels_render_in_decimal() {
        let cell = Cell {
            glyph: 'x',
            fg: Some(Rgb(255, 0, 120)),
            bg: Some(Rgb(10, 200, 3)),
        };
        let out = serialize(&grid_of(1, 1, cell));
        assert!(out.contains("\x1b[38;2;255;0;120m"));
        assert!(out.contains("\x1b[48;2;10;200;3m"));
    }
}
