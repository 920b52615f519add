// Session configuration, fixed before the first tick.

/// PPU counter limits.
///
/// The scanline counter runs from -1 (pre-render) up to `scanline_wrap - 1`
/// and then returns to -1, so the default wrap of 261 yields 262 scanlines
/// per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub dots_per_scanline: i32,
    pub scanline_wrap: i32,
    pub vblank_start_scanline: i32,
}

impl Default for Timing {
    fn default() -> Self {
	Timing {
	    dots_per_scanline: 341,
	    scanline_wrap: 261,
	    vblank_start_scanline: 241,
	}
    }
}

/// Where the pixel emitted on each dot comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelSource {
    /// Background tile under the beam, decoded from nametable + pattern table.
    Background,
    /// Random opaque colour, useful to check the sink wiring without a ROM.
    Noise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub timing: Timing,
    pub pixel_source: PixelSource,
    /// PPU dots per CPU cycle.
    pub cpu_divider: u32,
}

impl Default for Config {
    fn default() -> Self {
	Config {
	    timing: Timing::default(),
	    pixel_source: PixelSource::Background,
	    cpu_divider: 3,
	}
    }
}
