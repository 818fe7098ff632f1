pub mod canvas;
pub mod cell;
pub mod downsample;
pub mod glyphs;
pub mod serialize;

pub use canvas::Canvas;
pub use cell::{Cell, CellGrid, Rgb};
pub use downsample::downsample;
pub use serialize::serialize;

/// Render one frame of the scene as terminal-ready text.
///
/// `width` and `height` are terminal cells; the scene is composed on a
/// canvas with 2x horizontal and 4x vertical oversampling, folded into
/// braille glyphs, and serialized with run-length color coalescing. Pure
/// and headless: equal arguments yield byte-identical output, and every
/// row is self-terminated with a reset.
pub fn render(frame_index: u64, width: usize, height: usize) -> String {
    let canvas = crate::scene::compose(frame_index, width * 2, height * 4);
    let grid = downsample(&canvas, width, height);
    serialize(&grid)
}
