pub mod addr;
pub mod control;
pub mod mask;
pub mod oam;
pub mod scroll;
pub mod status;

use std::collections::HashMap;

pub const PPUCTRL: u16 = 0x2000;
pub const PPUMASK: u16 = 0x2001;
pub const PPUSTATUS: u16 = 0x2002;
pub const OAMADDR: u16 = 0x2003;
pub const OAMDATA: u16 = 0x2004;
pub const PPUSCROLL: u16 = 0x2005;
pub const PPUADDR: u16 = 0x2006;
pub const PPUDATA: u16 = 0x2007;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

/// Static description of one register in the CPU-visible PPU window.
#[derive(Debug)]
pub struct RegisterInfo {
    pub address: u16,
    pub name: &'static str,
    pub access: Access,
}

impl RegisterInfo {
    pub const fn new(address: u16, name: &'static str, access: Access) -> Self {
	RegisterInfo {
	    address,
	    name,
	    access,
	}
    }

    pub fn is_readable(&self) -> bool {
	self.access != Access::WriteOnly
    }

    pub fn is_writable(&self) -> bool {
	self.access != Access::ReadOnly
    }
}

pub static PPU_REGISTERS: [RegisterInfo; 8] = [
    RegisterInfo::new(PPUCTRL, "PPUCTRL", Access::WriteOnly),
    RegisterInfo::new(PPUMASK, "PPUMASK", Access::ReadWrite),
    RegisterInfo::new(PPUSTATUS, "PPUSTATUS", Access::ReadOnly),
    RegisterInfo::new(OAMADDR, "OAMADDR", Access::WriteOnly),
    RegisterInfo::new(OAMDATA, "OAMDATA", Access::ReadWrite),
    RegisterInfo::new(PPUSCROLL, "PPUSCROLL", Access::WriteOnly),
    RegisterInfo::new(PPUADDR, "PPUADDR", Access::WriteOnly),
    RegisterInfo::new(PPUDATA, "PPUDATA", Access::ReadWrite),
];

lazy_static! {
    pub static ref PPU_REGISTERS_MAP: HashMap<u16, &'static RegisterInfo> = {
	let mut map = HashMap::new();
	for register in PPU_REGISTERS.iter() {
	    map.insert(register.address, register);
	}
	map
    };
}

/// Folds any address of $2000-$3FFF onto $2000-$2007.
pub fn mirror_down(addr: u16) -> u16 {
    addr & 0b0010_0000_0000_0111
}
