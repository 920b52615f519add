// Cartridge
//
//  ------------
// | NES Header |
//  ------------
// | Trainer    |  (512 bytes, only if flags 6 bit 2)
//  ------------   BUS   -----
// | PRG ROM    | ----- | CPU |
//  ------------         -----
// | CHR ROM    | ----- | PPU |
//  ------------         -----

// NES Header
//
// NES Signature  PRG ROM size  CHR ROM size   Control Byte1  Control Byte2    PRG RAM size        Reserved
// 4E 45 53 1A /      01      /      01      /      00      /      00      /      00 00      / 00 00 00 00 00 00 /
//
// Control Byte1 (flags 6)
// 7654 3210
// ---- ----
// NNNN FTBM
// |||| |||+- Mirroring (0: horizontal, 1: vertical)
// |||| ||+-- Battery-backed PRG RAM at $6000-$7FFF
// |||| |+--- 512-byte trainer before PRG ROM
// |||| +---- Ignore mirroring control (four-screen VRAM)
// ++++------ Mapper number, low nibble
//
// Control Byte2 (flags 7): bits 4-7 are the mapper number high nibble.

use std::fs;
use std::path::Path;

use crate::error::CartridgeError;

pub const NES_TAG: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];
pub const HEADER_SIZE: usize = 16;
pub const TRAINER_SIZE: usize = 512;
pub const PRG_ROM_PAGE_SIZE: usize = 16 * 1024;
pub const CHR_ROM_PAGE_SIZE: usize = 8 * 1024;
pub const MAPPER_NROM: u32 = 0;

const FLAGS6_MIRRORING: u8 = 0b0000_0001;
const FLAGS6_PRG_RAM: u8 = 0b0000_0010;
const FLAGS6_TRAINER: u8 = 0b0000_0100;
const FLAGS6_IGNORE_MIRRORING: u8 = 0b0000_1000;
const FLAGS6_MAPPER_LOW: u8 = 0b1111_0000;
const FLAGS7_MAPPER_HIGH: u8 = 0b1111_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Vertical,
    Horizontal,
}

/// A parsed NROM cartridge. PRG and CHR are views into the loaded image,
/// which has to outlive the cartridge.
#[derive(Debug, Clone, Copy)]
pub struct Rom<'a> {
    pub prg_bank_count: u8,
    pub chr_bank_count: u8,
    pub mapper_id: u32,
    pub screen_mirroring: Mirroring,
    pub ignore_mirroring: bool,
    pub has_prg_ram: bool,
    pub has_trainer: bool,
    pub prg_rom: &'a [u8],
    pub chr_rom: &'a [u8],
}

impl<'a> Rom<'a> {
    pub fn new(raw: &'a [u8]) -> Result<Rom<'a>, CartridgeError> {
        if raw.len() < HEADER_SIZE {
            return Err(CartridgeError::Truncated {
                section: "header",
                needed: HEADER_SIZE,
                actual: raw.len(),
            });
        }
        if raw[0..4] != NES_TAG {
            return Err(CartridgeError::InvalidSignature {
                found: [raw[0], raw[1], raw[2], raw[3]],
            });
        }

        let prg_bank_count = raw[4];
        let chr_bank_count = raw[5];
        let flags6 = raw[6];
        let flags7 = raw[7];

        let mapper_id = ((flags7 & FLAGS7_MAPPER_HIGH) | ((flags6 & FLAGS6_MAPPER_LOW) >> 4)) as u32;
        let screen_mirroring = if flags6 & FLAGS6_MIRRORING != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };
        let ignore_mirroring = flags6 & FLAGS6_IGNORE_MIRRORING != 0;
        let has_prg_ram = flags6 & FLAGS6_PRG_RAM != 0;
        let has_trainer = flags6 & FLAGS6_TRAINER != 0;

        if mapper_id != MAPPER_NROM {
            return Err(CartridgeError::UnsupportedMapper { mapper_id });
        }
        if has_prg_ram {
            return Err(CartridgeError::UnsupportedFeature {
                feature: "battery-backed PRG RAM",
            });
        }
        if prg_bank_count != 1 && prg_bank_count != 2 {
            return Err(CartridgeError::UnsupportedPrgBankCount {
                count: prg_bank_count,
            });
        }
        let prg_rom_start = HEADER_SIZE + if has_trainer { TRAINER_SIZE } else { 0 };
        let chr_rom_start = prg_rom_start + prg_bank_count as usize * PRG_ROM_PAGE_SIZE;
        let chr_rom_end = chr_rom_start + chr_bank_count as usize * CHR_ROM_PAGE_SIZE;

        if raw.len() < chr_rom_start {
            return Err(CartridgeError::Truncated {
                section: "PRG ROM",
                needed: chr_rom_start,
                actual: raw.len(),
            });
        }
        if raw.len() < chr_rom_end {
            return Err(CartridgeError::Truncated {
                section: "CHR ROM",
                needed: chr_rom_end,
                actual: raw.len(),
            });
        }

        if chr_bank_count == 0 {
            log::warn!("no CHR ROM on the cartridge, pattern table reads will trap");
        }
        if ignore_mirroring {
            log::warn!("four-screen VRAM is not supported, using {:?} mirroring", screen_mirroring);
        }
        log::info!(
            "Loaded NROM cartridge: {} PRG bank(s), {} CHR bank(s), {:?} mirroring, trainer: {}",
            prg_bank_count,
            chr_bank_count,
            screen_mirroring,
            has_trainer
        );

        Ok(Rom {
            prg_bank_count,
            chr_bank_count,
            mapper_id,
            screen_mirroring,
            ignore_mirroring,
            has_prg_ram,
            has_trainer,
            prg_rom: &raw[prg_rom_start..chr_rom_start],
            chr_rom: &raw[chr_rom_start..chr_rom_end],
        })
    }

    /// Reads PRG space, `offset` being relative to $8000.
    /// A single 16KB bank shows up twice in the 32KB window.
    pub fn read_prg(&self, offset: u16) -> u8 {
        let mut offset = offset as usize;
        if self.prg_bank_count == 1 {
            offset %= PRG_ROM_PAGE_SIZE;
        }
        self.prg_rom[offset]
    }

    /// Reads the pattern tables ($0000-$1FFF of the PPU address space).
    pub fn read_chr(&self, addr: u16) -> Option<u8> {
        self.chr_rom.get(addr as usize).copied()
    }
}

/// Reads a whole ROM image into memory; parse it with [`Rom::new`].
pub fn read_rom_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, CartridgeError> {
    let raw = fs::read(path.as_ref()).map_err(|err| CartridgeError::FileRead {
        path: path.as_ref().display().to_string(),
        source: err,
    })?;
    log::info!("Read {} bytes from {}", raw.len(), path.as_ref().display());
    Ok(raw)
}
