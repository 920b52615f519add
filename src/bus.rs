use crate::cartridge::Rom;
use crate::config::Config;
use crate::cpu::Mem;
use crate::error::AccessError;
use crate::ppu::registers::{self, PPU_REGISTERS_MAP};
use crate::ppu::NesPPU;

//  _______________ 0x10000
// |               |
// |   PRG ROM     |  16KB bank mirrored twice, or 32KB
// |_______________| 0x8000
// |               |
// |   (unmapped)  |
// |_______________| 0x4018
// |   APU / IO    |  stubbed
// |_______________| 0x4000
// |               |
// | PPU registers |  8 registers mirrored every 8 bytes
// |_______________| 0x2000
// |               |
// |   RAM mirrors |
// |_______________| 0x0800
// |   RAM (2KB)   |
// |_______________| 0x0000

const RAM: u16 = 0x0000;
const RAM_MIRRORS_END: u16 = 0x1FFF;
const PPU_REGISTERS: u16 = 0x2000;
const PPU_REGISTERS_MIRRORS_END: u16 = 0x3FFF;
const APU_IO_REGISTERS: u16 = 0x4000;
const APU_IO_REGISTERS_END: u16 = 0x4017;
const PRG_ROM: u16 = 0x8000;
const PRG_ROM_END: u16 = 0xFFFF;

/// Value seen on the data lines when nothing answers.
pub const OPEN_BUS: u8 = 0x00;

pub struct Bus<'a> {
    cpu_vram: [u8; 2048],
    rom: Rom<'a>,
    ppu: NesPPU<'a>,
    tick_count: u32,
    last_fault: Option<AccessError>,
}

impl<'a> Bus<'a> {
    pub fn new(rom: Rom<'a>, config: &Config) -> Self {
	let ppu = NesPPU::new(rom.chr_rom, rom.screen_mirroring, config.timing);

	Bus {
	    cpu_vram: [0; 2048],
	    rom,
	    ppu,
	    tick_count: 0,
	    last_fault: None,
	}
    }

    pub fn ppu(&self) -> &NesPPU<'a> {
	&self.ppu
    }

    pub fn ppu_mut(&mut self) -> &mut NesPPU<'a> {
	&mut self.ppu
    }

    pub fn rom(&self) -> &Rom<'a> {
	&self.rom
    }

    pub fn tick_count(&self) -> u32 {
	self.tick_count
    }

    pub fn increment_tick_count(&mut self) {
	self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Most recent recoverable access error seen on the CPU bus.
    pub fn last_fault(&self) -> Option<AccessError> {
	self.last_fault
    }

    fn read_prg_rom(&self, addr: u16) -> u8 {
	self.rom.read_prg(addr - PRG_ROM)
    }

    fn fault(&mut self, err: AccessError) -> u8 {
	log::warn!("{}", err);
	self.last_fault = Some(err);
	OPEN_BUS
    }

    fn read_ppu_register(&mut self, addr: u16) -> u8 {
	let register = registers::mirror_down(addr);
	let info = PPU_REGISTERS_MAP.get(&register);
	let readable = info.map_or(false, |info| info.is_readable());

	match register {
	    registers::PPUMASK if readable => self.ppu.read_mask(),
	    registers::PPUSTATUS if readable => self.ppu.read_status(),
	    registers::OAMDATA if readable => self.ppu.read_oam_data(),
	    registers::PPUDATA if readable => self.ppu.read_data(),
	    _ => self.fault(AccessError::WriteOnlyRegister {
		register: info.map_or("PPU register", |info| info.name),
		address: addr,
	    }),
	}
    }

    fn write_ppu_register(&mut self, addr: u16, data: u8) {
	let register = registers::mirror_down(addr);
	let info = PPU_REGISTERS_MAP.get(&register);
	let writable = info.map_or(false, |info| info.is_writable());
	let name = info.map_or("PPU register", |info| info.name);

	if writable {
	    log::trace!("{} <- {:#04X}", name, data);
	}
	match register {
	    registers::PPUCTRL if writable => self.ppu.write_to_ctrl(data),
	    registers::PPUMASK if writable => self.ppu.write_to_mask(data),
	    registers::OAMADDR if writable => self.ppu.write_to_oam_addr(data),
	    registers::OAMDATA if writable => self.ppu.write_to_oam_data(data),
	    registers::PPUSCROLL if writable => self.ppu.write_to_scroll(data),
	    registers::PPUADDR if writable => self.ppu.write_to_ppu_addr(data),
	    registers::PPUDATA if writable => self.ppu.write_to_data(data),
	    _ => {
		self.fault(AccessError::ReadOnlyRegister {
		    register: name,
		    address: addr,
		    value: data,
		});
	    }
	}
    }
}

impl Mem for Bus<'_> {
    fn mem_read(&mut self, addr: u16) -> u8 {
	match addr {
	    RAM..=RAM_MIRRORS_END => {
		// 11 address lines reach the 2KB RAM, the upper 2 bits of the
		// 13-bit range are ignored
		let mirror_down_addr = addr & 0b0000_0111_1111_1111;
		self.cpu_vram[mirror_down_addr as usize]
	    }
	    PPU_REGISTERS..=PPU_REGISTERS_MIRRORS_END => self.read_ppu_register(addr),
	    APU_IO_REGISTERS..=APU_IO_REGISTERS_END => OPEN_BUS,
	    PRG_ROM..=PRG_ROM_END => self.read_prg_rom(addr),
	    _ => self.fault(AccessError::Unmapped { address: addr }),
	}
    }

    fn mem_write(&mut self, addr: u16, data: u8) {
	match addr {
	    RAM..=RAM_MIRRORS_END => {
		let mirror_down_addr = addr & 0b0000_0111_1111_1111;
		self.cpu_vram[mirror_down_addr as usize] = data;
	    }
	    PPU_REGISTERS..=PPU_REGISTERS_MIRRORS_END => self.write_ppu_register(addr, data),
	    APU_IO_REGISTERS..=APU_IO_REGISTERS_END => {}
	    // PRG ROM is not writable on NROM
	    _ => {
		self.fault(AccessError::Unmapped { address: addr });
	    }
	}
    }

    fn post_read(&mut self, addr: u16) {
	if let PPU_REGISTERS..=PPU_REGISTERS_MIRRORS_END = addr {
	    if registers::mirror_down(addr) == registers::PPUSTATUS {
		self.ppu.finish_status_read();
	    }
	}
    }
}
