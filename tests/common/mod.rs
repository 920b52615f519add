#![allow(dead_code)]

use nesbus::{Cpu, Pins};

pub const PRG_BANK: usize = 16 * 1024;
pub const CHR_BANK: usize = 8 * 1024;

/// iNES image for mapper 0. PRG byte `i` holds `i as u8` (plus `prg_salt`
/// in the second bank), CHR is zeroed.
pub fn nrom_image(prg_banks: u8, vertical: bool) -> Vec<u8> {
    let mut raw = vec![
        0x4E, 0x45, 0x53, 0x1A, prg_banks, 1, vertical as u8, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];
    for i in 0..prg_banks as usize * PRG_BANK {
        let salt = if i >= PRG_BANK { 0x80 } else { 0 };
        raw.push((i as u8) ^ salt);
    }
    raw.extend(std::iter::repeat(0).take(CHR_BANK));
    raw
}

/// Counts its cycles and always asks to read the zero page.
pub struct IdleCpu {
    pub cycles: u64,
}

impl IdleCpu {
    pub fn new() -> Self {
        IdleCpu { cycles: 0 }
    }
}

impl Cpu for IdleCpu {
    fn tick(&mut self, _pins: Pins) -> Pins {
        self.cycles += 1;
        Pins::read(0x0000)
    }

    fn program_counter(&self) -> u16 {
        self.cycles as u16
    }
}
