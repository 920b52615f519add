// PPU address space
//
// ------- 0x4000
//  Palettes, mirrors (not implemented)
// ------- 0x3F00
//  Nametables 0x2000-0x2FFF, mirrored up to 0x3EFF
// ------- 0x2000
//  Pattern tables (CHR ROM)
// ------- 0x0000

pub mod registers;

use rand::Rng;

use crate::cartridge::Mirroring;
use crate::config::{PixelSource, Timing};
use crate::error::AccessError;
use crate::render::palette::PLACEHOLDER_PALETTE;
use registers::addr::AddrRegister;
use registers::control::ControlRegister;
use registers::mask::MaskRegister;
use registers::oam::OamRegisters;
use registers::scroll::ScrollRegister;
use registers::status::StatusRegister;

pub const NAME_TABLE_SIZE: usize = 1024;
pub const SCREEN_WIDTH: i32 = 256;
pub const SCREEN_HEIGHT: i32 = 240;

const PATTERN_TABLES_END: u16 = 0x1FFF;
const NAME_TABLES: u16 = 0x2000;
const NAME_TABLES_MIRRORS_END: u16 = 0x3EFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternTableHalf {
    Left,
    Right,
}

impl PatternTableHalf {
    pub fn base_addr(&self) -> u16 {
	match self {
	    PatternTableHalf::Left => 0x0000,
	    PatternTableHalf::Right => 0x1000,
	}
    }
}

/// The pixel under the beam for the current dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpuPixel {
    pub color: u32,
    pub x: i32,
    pub y: i32,
}

impl PpuPixel {
    pub fn is_visible(&self) -> bool {
	(0..SCREEN_WIDTH).contains(&self.x) && (0..SCREEN_HEIGHT).contains(&self.y)
    }
}

pub struct NesPPU<'a> {
    chr_rom: &'a [u8],
    mirroring: Mirroring,
    timing: Timing,

    dot: i32,
    scanline: i32,
    frame_complete: bool,

    ctrl: ControlRegister,
    mask: MaskRegister,
    status: StatusRegister,
    // Write toggle shared by PPUSCROLL and PPUADDR.
    address_latch: bool,
    addr: AddrRegister,
    scroll: ScrollRegister,
    oam: OamRegisters,

    name_table: [[u8; NAME_TABLE_SIZE]; 2],
    last_fault: Option<AccessError>,
}

impl<'a> NesPPU<'a> {
    pub fn new(chr_rom: &'a [u8], mirroring: Mirroring, timing: Timing) -> Self {
	NesPPU {
	    chr_rom,
	    mirroring,
	    timing,
	    dot: 0,
	    scanline: 0,
	    frame_complete: false,
	    ctrl: ControlRegister::new(),
	    mask: MaskRegister::new(),
	    status: StatusRegister::new(),
	    address_latch: false,
	    addr: AddrRegister::new(),
	    scroll: ScrollRegister::new(),
	    oam: OamRegisters::new(),
	    name_table: [[0; NAME_TABLE_SIZE]; 2],
	    last_fault: None,
	}
    }

    /// Advances one dot.
    pub fn tick(&mut self) {
	if self.scanline == -1 && self.dot == 0 {
	    self.status.reset_vblank_started();
	}
	if self.scanline == self.timing.vblank_start_scanline && self.dot == 0 {
	    self.status.set_vblank_started(true);
	}

	self.dot += 1;
	if self.dot >= self.timing.dots_per_scanline {
	    self.dot = 0;
	    self.scanline += 1;
	    if self.scanline >= self.timing.scanline_wrap {
		self.scanline = -1;
		self.frame_complete = true;
		log::debug!("frame complete");
	    }
	}
    }

    pub fn dot(&self) -> i32 {
	self.dot
    }

    pub fn scanline(&self) -> i32 {
	self.scanline
    }

    /// Moves the beam, e.g. to start a test right before a wrap.
    pub fn set_position(&mut self, scanline: i32, dot: i32) {
	self.scanline = scanline;
	self.dot = dot;
    }

    /// Level signal, stays set until the driver clears it.
    pub fn frame_complete(&self) -> bool {
	self.frame_complete
    }

    pub fn clear_frame_complete(&mut self) {
	self.frame_complete = false;
    }

    pub fn status(&self) -> &StatusRegister {
	&self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusRegister {
	&mut self.status
    }

    pub fn address_latch(&self) -> bool {
	self.address_latch
    }

    pub fn vram_address(&self) -> u16 {
	self.addr.get()
    }

    pub fn vram_temp_address(&self) -> u16 {
	self.addr.temp()
    }

    pub fn scroll(&self) -> &ScrollRegister {
	&self.scroll
    }

    pub fn oam(&self) -> &OamRegisters {
	&self.oam
    }

    pub fn name_table(&self) -> &[[u8; NAME_TABLE_SIZE]; 2] {
	&self.name_table
    }

    pub fn last_fault(&self) -> Option<AccessError> {
	self.last_fault
    }

    // -- CPU-visible registers ------------------------------------------

    pub fn write_to_ctrl(&mut self, value: u8) {
	self.ctrl.update(value);
    }

    pub fn write_to_mask(&mut self, value: u8) {
	self.mask.update(value);
    }

    pub fn read_mask(&self) -> u8 {
	self.mask.bits()
    }

    /// Side-effect free; the clearing happens in [`NesPPU::finish_status_read`].
    pub fn read_status(&self) -> u8 {
	self.status.snapshot()
    }

    /// Runs once the $2002 value has reached the CPU.
    pub fn finish_status_read(&mut self) {
	self.status.reset_vblank_started();
	self.address_latch = false;
    }

    pub fn write_to_oam_addr(&mut self, value: u8) {
	self.oam.write_addr(value);
    }

    pub fn write_to_oam_data(&mut self, value: u8) {
	self.oam.write_data(value);
    }

    pub fn read_oam_data(&self) -> u8 {
	self.oam.read_data()
    }

    pub fn write_to_scroll(&mut self, value: u8) {
	self.scroll.write(value, &mut self.address_latch);
    }

    pub fn write_to_ppu_addr(&mut self, value: u8) {
	self.addr.update(value, &mut self.address_latch);
    }

    pub fn write_to_data(&mut self, value: u8) {
	let addr = self.addr.get();
	self.ppu_write(addr, value);
	self.increment_vram_addr();
    }

    pub fn read_data(&mut self) -> u8 {
	let addr = self.addr.get();
	let result = self.ppu_read(addr);
	self.increment_vram_addr();
	result
    }

    fn increment_vram_addr(&mut self) {
	self.addr.increment(self.ctrl.vram_addr_increment());
    }

    // -- PPU address space ----------------------------------------------

    /// Folds an address onto (physical table, offset); only the low 12 bits
    /// of the nametable window count, so $0000-$1FFF alias it too.
    //
    // Horizontal:
    //   [ A ] [ a ]
    //   [ B ] [ b ]
    //
    // Vertical:
    //   [ A ] [ B ]
    //   [ a ] [ b ]
    pub fn mirror_vram_addr(&self, addr: u16) -> (usize, usize) {
	let logical = addr.wrapping_sub(NAME_TABLES) & 0x0FFF;
	let quadrant = logical / 0x0400;
	let table = match (self.mirroring, quadrant) {
	    (Mirroring::Vertical, 0) | (Mirroring::Vertical, 2) => 0,
	    (Mirroring::Vertical, _) => 1,
	    (Mirroring::Horizontal, 0) | (Mirroring::Horizontal, 1) => 0,
	    (Mirroring::Horizontal, _) => 1,
	};
	(table, (logical & 0x03FF) as usize)
    }

    fn peek(&self, addr: u16) -> Result<u8, AccessError> {
	match addr {
	    0..=PATTERN_TABLES_END => self
		.chr_rom
		.get(addr as usize)
		.copied()
		.ok_or(AccessError::UnmappedVram { address: addr }),
	    NAME_TABLES..=NAME_TABLES_MIRRORS_END => {
		let (table, offset) = self.mirror_vram_addr(addr);
		Ok(self.name_table[table][offset])
	    }
	    _ => Err(AccessError::UnmappedVram { address: addr }),
	}
    }

    pub fn ppu_read(&mut self, addr: u16) -> u8 {
	match self.peek(addr) {
	    Ok(value) => value,
	    Err(err) => self.fault(err),
	}
    }

    pub fn ppu_write(&mut self, addr: u16, value: u8) {
	match addr {
	    0..=PATTERN_TABLES_END => {
		self.fault(AccessError::ReadOnlyVram {
		    address: addr,
		    value,
		});
	    }
	    NAME_TABLES..=NAME_TABLES_MIRRORS_END => {
		let (table, offset) = self.mirror_vram_addr(addr);
		self.name_table[table][offset] = value;
	    }
	    _ => {
		self.fault(AccessError::UnmappedVram { address: addr });
	    }
	}
    }

    fn fault(&mut self, err: AccessError) -> u8 {
	log::warn!("{}", err);
	self.last_fault = Some(err);
	0
    }

    // -- Pixels -----------------------------------------------------------

    /// 2-bit palette index of one pixel of a pattern table tile.
    ///
    /// Tiles are 16 bytes, 16 per row of the table: the low plane sits at
    /// `tile + offset_y`, the high plane 8 bytes later, and bit 7 is the
    /// leftmost pixel. `row` and `col` wrap at 16, the offsets at 8.
    pub fn tile_palette_index(
	&self,
	half: PatternTableHalf,
	row: u16,
	col: u16,
	offset_x: u8,
	offset_y: u16,
    ) -> u8 {
	let (row, col) = (row & 0x0F, col & 0x0F);
	let (offset_x, offset_y) = (offset_x & 0x07, offset_y & 0x07);

	let tile_addr = half.base_addr() + 16 * (16 * row + col);
	let plane0 = self.peek(tile_addr + offset_y).unwrap_or(0);
	let plane1 = self.peek(tile_addr + offset_y + 8).unwrap_or(0);
	let mask = 0x80 >> offset_x;

	let lo = (plane0 & mask != 0) as u8;
	let hi = (plane1 & mask != 0) as u8;
	hi << 1 | lo
    }

    pub fn get_tile_pixel(
	&self,
	half: PatternTableHalf,
	row: u16,
	col: u16,
	offset_x: u8,
	offset_y: u16,
    ) -> u32 {
	PLACEHOLDER_PALETTE[self.tile_palette_index(half, row, col, offset_x, offset_y) as usize]
    }

    pub fn current_pixel(&self, source: PixelSource) -> PpuPixel {
	let x = self.dot - 1;
	let y = self.scanline;
	let mut pixel = PpuPixel {
	    color: PLACEHOLDER_PALETTE[0],
	    x,
	    y,
	};
	if !pixel.is_visible() {
	    return pixel;
	}

	pixel.color = match source {
	    PixelSource::Noise => 0xFF00_0000 | rand::thread_rng().gen::<u32>(),
	    PixelSource::Background => self.background_pixel(x as u16, y as u16),
	};
	pixel
    }

    fn background_pixel(&self, x: u16, y: u16) -> u32 {
	let tile_addr = self.ctrl.nametable_addr() + (y / 8) * 32 + x / 8;
	let tile = self.peek(tile_addr).unwrap_or(0) as u16;
	self.get_tile_pixel(
	    self.ctrl.background_pattern_half(),
	    tile / 16,
	    tile % 16,
	    (x % 8) as u8,
	    y % 8,
	)
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::cartridge::CHR_ROM_PAGE_SIZE;

    pub fn new_ppu(chr: &[u8], mirroring: Mirroring) -> NesPPU<'_> {
	NesPPU::new(chr, mirroring, Timing::default())
    }

    #[test]
    fn test_dot_wraps_into_next_scanline() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Horizontal);
	ppu.set_position(-1, 340);
	ppu.tick();
	assert_eq!((ppu.scanline(), ppu.dot()), (0, 0));
	assert!(!ppu.frame_complete());
    }

    #[test]
    fn test_last_scanline_wraps_to_pre_render_and_completes_frame() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Horizontal);
	ppu.set_position(260, 340);
	ppu.tick();
	assert_eq!((ppu.scanline(), ppu.dot()), (-1, 0));
	assert!(ppu.frame_complete());

	// level signal: stays up until cleared from outside
	ppu.tick();
	assert!(ppu.frame_complete());
	ppu.clear_frame_complete();
	assert!(!ppu.frame_complete());
    }

    #[test]
    fn test_vblank_set_at_241_and_cleared_at_pre_render() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Horizontal);

	ppu.set_position(240, 340);
	ppu.tick();
	assert!(!ppu.status().is_in_vblank());
	ppu.tick(); // (241, 0) -> sets
	assert!(ppu.status().is_in_vblank());
	assert_eq!(ppu.read_status() & 0x80, 0x80);

	ppu.set_position(-1, 0);
	ppu.tick();
	assert!(!ppu.status().is_in_vblank());
    }

    #[test]
    fn test_full_frame_is_262_scanlines() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Horizontal);
	ppu.set_position(-1, 0);

	let mut ticks = 0;
	while !ppu.frame_complete() {
	    ppu.tick();
	    ticks += 1;
	}
	assert_eq!(ticks, 341 * 262);
	assert_eq!((ppu.scanline(), ppu.dot()), (-1, 0));
    }

    #[test]
    fn test_status_read_clears_after_the_fact() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Horizontal);
	ppu.status_mut().set_vblank_started(true);
	ppu.write_to_ppu_addr(0x21);
	assert!(ppu.address_latch());

	assert_eq!(ppu.read_status(), 0x80);
	// reading alone changes nothing
	assert_eq!(ppu.read_status(), 0x80);

	ppu.finish_status_read();
	assert_eq!(ppu.read_status(), 0x00);
	assert!(!ppu.address_latch());
    }

    #[test]
    fn test_ppu_addr_latch() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Horizontal);

	ppu.write_to_ppu_addr(0x21);
	assert_eq!(ppu.vram_address(), 0x0000);
	assert!(ppu.address_latch());

	ppu.write_to_ppu_addr(0x05);
	assert_eq!(ppu.vram_address(), 0x2105);
	assert!(!ppu.address_latch());
    }

    #[test]
    fn test_scroll_shares_the_latch() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Horizontal);

	ppu.write_to_scroll(0x08);
	assert_eq!(ppu.scroll().scroll_x, 0x08);
	// PPUADDR now takes the low half
	ppu.write_to_ppu_addr(0x34);
	assert!(!ppu.address_latch());
	assert_eq!(ppu.vram_temp_address(), 0x0034);
	assert_eq!(ppu.vram_address(), 0x0034);
    }

    #[test]
    fn test_data_write_and_read_with_increment() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Horizontal);

	ppu.write_to_ppu_addr(0x23);
	ppu.write_to_ppu_addr(0x05);
	ppu.write_to_data(0x66);
	ppu.write_to_data(0x77);
	assert_eq!(ppu.vram_address(), 0x2307);
	assert_eq!(ppu.name_table()[0][0x305], 0x66);
	assert_eq!(ppu.name_table()[0][0x306], 0x77);

	ppu.write_to_ppu_addr(0x23);
	ppu.write_to_ppu_addr(0x05);
	assert_eq!(ppu.read_data(), 0x66);
	assert_eq!(ppu.read_data(), 0x77);
    }

    #[test]
    fn test_data_step_of_32() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Horizontal);

	ppu.write_to_ctrl(0b0000_0100);
	ppu.write_to_ppu_addr(0x21);
	ppu.write_to_ppu_addr(0xFF);
	ppu.write_to_data(0x66);
	ppu.write_to_data(0x77);
	assert_eq!(ppu.vram_address(), 0x223F);
	assert_eq!(ppu.name_table()[0][0x1FF], 0x66);
	assert_eq!(ppu.name_table()[0][0x21F], 0x77);
    }

    #[test]
    fn test_vertical_mirroring() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Vertical);

	assert_eq!(ppu.mirror_vram_addr(0x2000), (0, 0));
	assert_eq!(ppu.mirror_vram_addr(0x2400), (1, 0));
	assert_eq!(ppu.mirror_vram_addr(0x2800), (0, 0));
	assert_eq!(ppu.mirror_vram_addr(0x2C00), (1, 0));
	// below the window the fold wraps instead of underflowing
	assert_eq!(ppu.mirror_vram_addr(0x0400), (1, 0));
	assert_eq!(ppu.mirror_vram_addr(0x1FFF), (1, 0x3FF));

	ppu.ppu_write(0x2C05, 0x42);
	assert_eq!(ppu.name_table()[1][0x005], 0x42);
	assert_eq!(ppu.ppu_read(0x2405), 0x42);
    }

    #[test]
    fn test_horizontal_mirroring() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Horizontal);

	assert_eq!(ppu.mirror_vram_addr(0x2000), (0, 0));
	assert_eq!(ppu.mirror_vram_addr(0x2400), (0, 0));
	assert_eq!(ppu.mirror_vram_addr(0x2800), (1, 0));
	assert_eq!(ppu.mirror_vram_addr(0x2FFF), (1, 0x3FF));

	ppu.ppu_write(0x2805, 0x42);
	assert_eq!(ppu.ppu_read(0x2C05), 0x42);
	assert_eq!(ppu.ppu_read(0x2005), 0x00);
    }

    #[test]
    fn test_nametable_mirror_above_0x3000() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Vertical);
	ppu.ppu_write(0x3456, 0x99);
	assert_eq!(ppu.ppu_read(0x2456), 0x99);
	assert_eq!(ppu.name_table()[1][0x056], 0x99);
    }

    #[test]
    fn test_missing_chr_traps_pattern_reads() {
	let mut ppu = new_ppu(&[], Mirroring::Horizontal);

	assert_eq!(ppu.ppu_read(0x0010), 0);
	assert_eq!(
	    ppu.last_fault(),
	    Some(AccessError::UnmappedVram { address: 0x0010 })
	);
	assert_eq!(ppu.tile_palette_index(PatternTableHalf::Right, 3, 3, 0, 0), 0);
	ppu.set_position(0, 1);
	assert_eq!(ppu.current_pixel(PixelSource::Background).color, PLACEHOLDER_PALETTE[0]);
    }

    #[test]
    fn test_pattern_tables_read_chr() {
	let mut chr = vec![0; CHR_ROM_PAGE_SIZE];
	chr[0x1234] = 0x5A;
	let mut ppu = new_ppu(&chr, Mirroring::Vertical);

	assert_eq!(ppu.ppu_read(0x1234), 0x5A);
	ppu.ppu_write(0x1234, 0x00);
	assert_eq!(
	    ppu.last_fault(),
	    Some(AccessError::ReadOnlyVram {
		address: 0x1234,
		value: 0x00
	    })
	);
	assert_eq!(ppu.ppu_read(0x1234), 0x5A);
    }

    #[test]
    fn test_palette_space_is_a_logged_trap() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Vertical);

	assert_eq!(ppu.ppu_read(0x3F00), 0);
	assert_eq!(
	    ppu.last_fault(),
	    Some(AccessError::UnmappedVram { address: 0x3F00 })
	);
	ppu.ppu_write(0x3F10, 0x0F);
	assert_eq!(
	    ppu.last_fault(),
	    Some(AccessError::UnmappedVram { address: 0x3F10 })
	);
    }

    #[test]
    fn test_tile_pixel_decoding() {
	let mut chr = vec![0; CHR_ROM_PAGE_SIZE];
	// right half, row 1, col 2 -> 0x1000 + 16 * 18 = 0x1120
	let tile = 0x1120;
	chr[tile + 3] = 0b1010_0000; // low plane, line 3
	chr[tile + 3 + 8] = 0b0110_0000; // high plane, line 3
	let ppu = new_ppu(&chr, Mirroring::Vertical);

	let half = PatternTableHalf::Right;
	assert_eq!(ppu.tile_palette_index(half, 1, 2, 0, 3), 0b01);
	assert_eq!(ppu.tile_palette_index(half, 1, 2, 1, 3), 0b10);
	assert_eq!(ppu.tile_palette_index(half, 1, 2, 2, 3), 0b11);
	assert_eq!(ppu.tile_palette_index(half, 1, 2, 3, 3), 0b00);
	// neighbouring line and the left half stay blank
	assert_eq!(ppu.tile_palette_index(half, 1, 2, 0, 2), 0);
	assert_eq!(ppu.tile_palette_index(PatternTableHalf::Left, 1, 2, 0, 3), 0);

	assert_eq!(ppu.get_tile_pixel(half, 1, 2, 2, 3), PLACEHOLDER_PALETTE[3]);
    }

    #[test]
    fn test_tile_offsets_wrap_inside_the_tile() {
	let mut chr = vec![0; CHR_ROM_PAGE_SIZE];
	let tile = 0x1120;
	chr[tile + 3] = 0b1010_0000;
	chr[tile + 3 + 8] = 0b0110_0000;
	let ppu = new_ppu(&chr, Mirroring::Vertical);

	let half = PatternTableHalf::Right;
	// offset_x 8 is column 0 again, not a shift overflow
	assert_eq!(ppu.tile_palette_index(half, 1, 2, 8, 3), 0b01);
	assert_eq!(ppu.tile_palette_index(half, 1, 2, 0xFA, 3), 0b11);
	// offset_y 11 stays on line 3 of the low plane
	assert_eq!(ppu.tile_palette_index(half, 1, 2, 0, 11), 0b01);
	assert_eq!(ppu.tile_palette_index(half, 17, 18, 1, 3), 0b10);
	assert_eq!(ppu.get_tile_pixel(half, 1, 2, 255, 0xFFFF), PLACEHOLDER_PALETTE[0]);
    }

    #[test]
    fn test_current_pixel_coordinates() {
	let chr = vec![0; CHR_ROM_PAGE_SIZE];
	let mut ppu = new_ppu(&chr, Mirroring::Vertical);

	ppu.set_position(10, 0);
	assert!(!ppu.current_pixel(PixelSource::Background).is_visible());

	ppu.set_position(10, 1);
	let pixel = ppu.current_pixel(PixelSource::Background);
	assert_eq!((pixel.x, pixel.y), (0, 10));
	assert!(pixel.is_visible());

	ppu.set_position(-1, 5);
	assert!(!ppu.current_pixel(PixelSource::Noise).is_visible());

	ppu.set_position(239, 256);
	let pixel = ppu.current_pixel(PixelSource::Noise);
	assert!(pixel.is_visible());
	assert_eq!(pixel.color >> 24, 0xFF);
    }

    #[test]
    fn test_background_pixel_uses_nametable_tile() {
	let mut chr = vec![0; CHR_ROM_PAGE_SIZE];
	// tile 0x11 of the left half, line 2, fully set in both planes
	chr[0x0110 + 2] = 0xFF;
	chr[0x0110 + 2 + 8] = 0xFF;
	let mut ppu = new_ppu(&chr, Mirroring::Vertical);

	// tile (x 1, y 0) of nametable 0
	ppu.ppu_write(0x2001, 0x11);
	ppu.set_position(2, 8 + 5); // x = 12, y = 2
	assert_eq!(
	    ppu.current_pixel(PixelSource::Background).color,
	    PLACEHOLDER_PALETTE[3]
	);
	ppu.set_position(3, 8 + 5);
	assert_eq!(
	    ppu.current_pixel(PixelSource::Background).color,
	    PLACEHOLDER_PALETTE[0]
	);
    }
}
