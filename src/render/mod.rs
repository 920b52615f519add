pub mod frame;
pub mod palette;

use crate::ppu::{NesPPU, PatternTableHalf};
use frame::FrameSink;

pub const PATTERN_TABLE_SIZE: usize = 128;

/// Draws the 256 tiles of one pattern table half as a 16x16 grid
/// (128x128 pixels) with its top left corner at (`left`, `top`).
pub fn render_pattern_table<S: FrameSink>(
    ppu: &NesPPU,
    half: PatternTableHalf,
    frame: &mut S,
    left: usize,
    top: usize,
) {
    for row in 0..16u16 {
	for col in 0..16u16 {
	    for y in 0..8u16 {
		for x in 0..8u8 {
		    let rgba = ppu.get_tile_pixel(half, row, col, x, y);
		    frame.set_pixel(
			left + col as usize * 8 + x as usize,
			top + row as usize * 8 + y as usize,
			rgba,
		    );
		}
	    }
	}
    }
}
