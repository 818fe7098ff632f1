//! The fixed scene: two samurai facing off in night rain.
//!
//! `compose` is a pure function of `(frame_index, canvas size)`. Layers are
//! painted in order and later layers win on overlapping pixels: gradient
//! sky, ground band, rain, the two figures, the slash.

use crate::renderer::{Canvas, Rgb};

pub const SKY_TOP: Rgb = Rgb(15, 20, 35);
pub const SKY_BOTTOM: Rgb = Rgb(5, 10, 18);

const GROUND: Rgb = Rgb(10, 12, 18);
const GROUND_SPECK: Rgb = Rgb(80, 90, 120);
const RAIN: Rgb = Rgb(120, 160, 200);
const BLADE: Rgb = Rgb(190, 195, 205);
const SLASH: Rgb = Rgb(240, 220, 120);
const LEFT_BODY: Rgb = Rgb(200, 200, 210);

// Rain scroll constants. Changing any of these changes the whole pattern.
const RAIN_STEP_X: u64 = 7;
const RAIN_STEP_Y: u64 = 3;
const RAIN_SPEED: u64 = 2;
const RAIN_MODULUS: u64 = 17;

const SHIMMER_BASE: f32 = 30.0;
const SHIMMER_AMPLITUDE: f32 = 20.0;
const SHIMMER_PERIOD: f32 = 6.0;

// Canvas width (in pixels) at which the figures are drawn at scale 1.
const REFERENCE_WIDTH: usize = 240;

/// Compose one frame of the scene onto a fresh canvas of the given pixel
/// dimensions.
pub fn compose(frame: u64, width: usize, height: usize) -> Canvas {
    let mut canvas = Canvas::new(width, height, SKY_TOP, SKY_BOTTOM);
    let w = width as i32;
    let h = height as i32;
    let scale = (width / REFERENCE_WIDTH).max(1) as i32;

    draw_ground(&mut canvas, frame, w, h);
    draw_rain(&mut canvas, frame, w, h);

    let mid_y = h * 45 / 100;
    let left_x = (w * 22 / 100).max(16 * scale);
    let right_x = w * 72 / 100;

    let shimmer = (SHIMMER_BASE + SHIMMER_AMPLITUDE * (frame as f32 / SHIMMER_PERIOD).sin()) as u8;
    draw_samurai(&mut canvas, left_x, mid_y, 1, scale, LEFT_BODY);
    draw_samurai(&mut canvas, right_x, mid_y, -1, scale, Rgb(210, 180, shimmer));

    draw_slash(&mut canvas, frame, w, mid_y, scale);
    canvas
}

fn draw_ground(canvas: &mut Canvas, frame: u64, w: i32, h: i32) {
    let ground_top = h * 72 / 100;
    for y in ground_top..h {
        for x in 0..w {
            canvas.set_background(x, y, GROUND);
        }
    }
    // sparse puddle glints drifting along the bottom edge
    for x in 0..w {
        if (x as u64 + frame) % 23 == 0 {
            canvas.plot(x, h - 6, GROUND_SPECK);
            canvas.plot(x, h - 5, GROUND_SPECK);
        }
    }
}

fn draw_rain(canvas: &mut Canvas, frame: u64, w: i32, h: i32) {
    for y in 0..h {
        for x in 0..w {
            let phase = x as u64 * RAIN_STEP_X + y as u64 * RAIN_STEP_Y + frame * RAIN_SPEED;
            if phase % RAIN_MODULUS == 0 {
                canvas.plot(x, y, RAIN);
                canvas.plot(x, y + 1, RAIN);
            }
        }
    }
}

/// One figure, anchored at the top-center of the helmet. `facing` (+1 or -1)
/// mirrors the sword side.
fn draw_samurai(canvas: &mut Canvas, cx: i32, top: i32, facing: i32, scale: i32, body: Rgb) {
    let s = scale;

    // helmet bowl with flared crest lines
    canvas.draw_ellipse(cx, top + 4 * s, 5 * s, 4 * s, body);
    canvas.draw_line(cx - 5 * s, top + 2 * s, cx - 8 * s, top, body);
    canvas.draw_line(cx + 5 * s, top + 2 * s, cx + 8 * s, top, body);

    // torso, then two legs
    canvas.draw_rect(cx - 4 * s, top + 8 * s, cx + 4 * s, top + 20 * s, body);
    canvas.draw_rect(cx - 4 * s, top + 20 * s, cx - s, top + 30 * s, body);
    canvas.draw_rect(cx + s, top + 20 * s, cx + 4 * s, top + 30 * s, body);

    // sword held out to the facing side: two near-parallel edge lines
    let hilt_x = cx + facing * 5 * s;
    let hilt_y = top + 12 * s;
    let tip_x = hilt_x + facing * 12 * s;
    let tip_y = hilt_y - 9 * s;
    canvas.draw_line(hilt_x, hilt_y, tip_x, tip_y, BLADE);
    canvas.draw_line(hilt_x + facing * s, hilt_y, tip_x + facing * s, tip_y, BLADE);
}

fn draw_slash(canvas: &mut Canvas, frame: u64, w: i32, mid_y: i32, scale: i32) {
    let s = scale;
    let x0 = w * 45 / 100;
    let y0 = mid_y + 14 * s;
    let sweep = ((frame as f32 / 4.0).sin() * 4.0 * s as f32) as i32;
    canvas.draw_line(x0, y0, x0 + 12 * s, y0 - sweep, SLASH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose(42, 80, 48);
        let b = compose(42, 80, 48);
        for y in 0..48 {
            for x in 0..80 {
                assert_eq!(a.background_at(x, y), b.background_at(x, y));
                assert_eq!(a.lit_at(x, y), b.lit_at(x, y));
            }
        }
    }

    #[test]
    fn test_ground_band_covers_bottom_of_canvas() {
        let canvas = compose(0, 80, 100);
        assert_eq!(canvas.background_at(0, 99), GROUND);
        assert_eq!(canvas.background_at(79, 80), GROUND);
        // above the band the gradient survives
        assert_eq!(canvas.background_at(0, 0), SKY_TOP);
    }

    #[test]
    fn test_rain_scrolls_with_frame() {
        // a pixel on the rain lattice at frame 0 moves off it by frame 1
        let f0 = compose(0, 34, 40);
        let f1 = compose(1, 34, 40);
        // (x*7 + y*3) % 17 == 0 at (x=17, y=0), above the figures
        assert!(f0.lit_at(17, 0).is_some());
        assert!(f1.lit_at(17, 0).is_none());
    }

    #[test]
    fn test_tiny_canvas_composes_without_panic() {
        let canvas = compose(7, 2, 4);
        assert_eq!(canvas.width(), 2);
        assert_eq!(canvas.height(), 4);
    }
}
