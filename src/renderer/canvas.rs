use super::cell::Rgb;

/// High-resolution pixel canvas backing one rendered frame.
///
/// The canvas is 2x wider and 4x taller than the terminal cell grid it will
/// be folded into. Each pixel has a background color (set at creation to a
/// vertical gradient), a foreground mask bit, and an optional explicit
/// foreground color. A lit pixel without an explicit foreground reads back
/// its background color.
///
/// A canvas lives for exactly one frame: composed, downsampled, dropped.
pub struct Canvas {
    width: usize,
    height: usize,
    background: Vec<Rgb>,
    mask: Vec<bool>,
    foreground: Vec<Option<Rgb>>,
}

impl Canvas {
    /// Create a canvas with the background filled by a vertical gradient
    /// from `top` to `bottom` and no foreground pixels lit.
    pub fn new(width: usize, height: usize, top: Rgb, bottom: Rgb) -> Self {
        let mut background = Vec::with_capacity(width * height);
        let denom = height.saturating_sub(1).max(1) as f32;
        for y in 0..height {
            let row_color = Rgb::lerp(top, bottom, y as f32 / denom);
            for _ in 0..width {
                background.push(row_color);
            }
        }
        Self {
            width,
            height,
            background,
            mask: vec![false; width * height],
            foreground: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            None
        } else {
            Some(y as usize * self.width + x as usize)
        }
    }

    /// Light a single foreground pixel. Out-of-bounds writes are dropped.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.mask[i] = true;
            self.foreground[i] = Some(color);
        }
    }

    /// Overwrite the background color of an in-bounds pixel.
    pub fn set_background(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.background[i] = color;
        }
    }

    /// Background color of a pixel. `x` and `y` must be in bounds.
    pub fn background_at(&self, x: usize, y: usize) -> Rgb {
        debug_assert!(x < self.width && y < self.height);
        self.background[y * self.width + x]
    }

    /// Effective foreground at a pixel: `None` when unlit, the explicit
    /// foreground when one was set, the background color otherwise.
    /// `x` and `y` must be in bounds.
    pub fn lit_at(&self, x: usize, y: usize) -> Option<Rgb> {
        debug_assert!(x < self.width && y < self.height);
        let i = y * self.width + x;
        if self.mask[i] {
            Some(self.foreground[i].unwrap_or(self.background[i]))
        } else {
            None
        }
    }

    /// Fill the half-open rectangle `[x0,x1) x [y0,y1)`, clipped to the
    /// canvas. An empty range draws nothing.
    pub fn draw_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let cx0 = x0.max(0);
        let cy0 = y0.max(0);
        let cx1 = x1.min(self.width as i32);
        let cy1 = y1.min(self.height as i32);
        for y in cy0..cy1 {
            for x in cx0..cx1 {
                self.plot(x, y, color);
            }
        }
    }

    /// Fill the ellipse centered at `(cx, cy)` with radii `rx`, `ry`.
    /// Zero radii are clamped to 1.
    pub fn draw_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgb) {
        let rx = rx.max(1);
        let ry = ry.max(1);
        for y in (cy - ry).max(0)..=(cy + ry).min(self.height as i32 - 1) {
            for x in (cx - rx).max(0)..=(cx + rx).min(self.width as i32 - 1) {
                let nx = (x - cx) as f32 / rx as f32;
                let ny = (y - cy) as f32 / ry as f32;
                if nx * nx + ny * ny <= 1.0 {
                    self.plot(x, y, color);
                }
            }
        }
    }

    /// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints
    /// inclusive. Visits every integer point on the segment exactly once
    /// for any slope or direction.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = x0;
        let mut y = y0;
        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: Rgb = Rgb(15, 20, 35);
    const BOTTOM: Rgb = Rgb(5, 10, 18);

    fn canvas(w: usize, h: usize) -> Canvas {
        Canvas::new(w, h, TOP, BOTTOM)
    }

    #[test]
    fn test_gradient_endpoints_and_midpoint() {
        let c = canvas(4, 3);
        assert_eq!(c.background_at(0, 0), TOP);
        assert_eq!(c.background_at(3, 2), BOTTOM);
        // midpoint row is the truncated per-channel average
        assert_eq!(c.background_at(1, 1), Rgb(10, 15, 26));
    }

    #[test]
    fn test_gradient_single_row_does_not_divide_by_zero() {
        let c = canvas(3, 1);
        assert_eq!(c.background_at(0, 0), TOP);
    }

    #[test]
    fn test_horizontal_line_has_no_gaps_or_duplicates() {
        let mut c = canvas(10, 4);
        c.draw_line(0, 0, 5, 0, Rgb(255, 0, 0));
        for x in 0..=5 {
            assert_eq!(c.lit_at(x, 0), Some(Rgb(255, 0, 0)), "x={}", x);
        }
        for x in 6..10 {
            assert_eq!(c.lit_at(x, 0), None);
        }
        for x in 0..10 {
            assert_eq!(c.lit_at(x, 1), None);
        }
    }

    #[test]
    fn test_line_direction_independent() {
        let mut fwd = canvas(8, 8);
        let mut rev = canvas(8, 8);
        fwd.draw_line(1, 1, 6, 4, Rgb(1, 2, 3));
        rev.draw_line(6, 4, 1, 1, Rgb(1, 2, 3));
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(fwd.lit_at(x, y).is_some(), rev.lit_at(x, y).is_some());
            }
        }
    }

    #[test]
    fn test_primitives_clip_out_of_bounds() {
        let mut c = canvas(4, 4);
        c.draw_line(-10, -10, 20, 20, Rgb(9, 9, 9));
        c.draw_rect(-5, -5, 100, 100, Rgb(9, 9, 9));
        c.draw_ellipse(-3, -3, 50, 50, Rgb(9, 9, 9));
        // every in-bounds pixel was covered by the rect; nothing crashed
        for y in 0..4 {
            for x in 0..4 {
                assert!(c.lit_at(x, y).is_some());
            }
        }
    }

    #[test]
    fn test_rect_empty_range_draws_nothing() {
        let mut c = canvas(4, 4);
        c.draw_rect(3, 3, 3, 3, Rgb(9, 9, 9));
        c.draw_rect(3, 3, 1, 1, Rgb(9, 9, 9));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(c.lit_at(x, y), None);
            }
        }
    }

    #[test]
    fn test_redraw_is_idempotent() {
        let mut once = canvas(6, 6);
        let mut twice = canvas(6, 6);
        once.draw_rect(1, 1, 4, 4, Rgb(7, 8, 9));
        twice.draw_rect(1, 1, 4, 4, Rgb(7, 8, 9));
        twice.draw_rect(1, 1, 4, 4, Rgb(7, 8, 9));
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(once.lit_at(x, y), twice.lit_at(x, y));
            }
        }
    }

    #[test]
    fn test_ellipse_degenerate_radius_clamps() {
        let mut c = canvas(6, 6);
        c.draw_ellipse(3, 3, 0, 0, Rgb(1, 1, 1));
        assert_eq!(c.lit_at(3, 3), Some(Rgb(1, 1, 1)));
    }

    #[test]
    fn test_later_draw_overwrites_earlier() {
        let mut c = canvas(4, 4);
        c.draw_rect(0, 0, 4, 4, Rgb(1, 1, 1));
        c.draw_line(0, 0, 3, 0, Rgb(2, 2, 2));
        assert_eq!(c.lit_at(2, 0), Some(Rgb(2, 2, 2)));
        assert_eq!(c.lit_at(2, 1), Some(Rgb(1, 1, 1)));
    }
}
