use std::io;
use thiserror::Error;

// Fatal: the cartridge cannot be used, the session never starts.
#[derive(Error, Debug)]
pub enum CartridgeError {
    #[error("not an iNES image: expected signature 4E 45 53 1A, found {found:02X?}")]
    InvalidSignature { found: [u8; 4] },
    #[error("ROM image truncated: {section} needs {needed} bytes, only {actual} available")]
    Truncated {
	section: &'static str,
	needed: usize,
	actual: usize,
    },
    #[error("unsupported mapper {mapper_id}, only NROM (mapper 0) is implemented")]
    UnsupportedMapper { mapper_id: u32 },
    #[error("NROM boards carry 1 or 2 PRG banks, header declares {count}")]
    UnsupportedPrgBankCount { count: u8 },
    #[error("cartridge requires {feature}, which is not implemented")]
    UnsupportedFeature { feature: &'static str },
    #[error("error reading ROM file {path}: {source}")]
    FileRead {
	path: String,
	#[source]
	source: io::Error,
    },
}

// Recoverable: logged, and the access is answered with the open bus value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    #[error("unmapped CPU access at {address:#06X}")]
    Unmapped { address: u16 },
    #[error("read from write-only register {register} at {address:#06X}")]
    WriteOnlyRegister { register: &'static str, address: u16 },
    #[error("write of {value:#04X} to read-only register {register} at {address:#06X}")]
    ReadOnlyRegister {
	register: &'static str,
	address: u16,
	value: u8,
    },
    #[error("unimplemented PPU address space access at {address:#06X}")]
    UnmappedVram { address: u16 },
    #[error("write of {value:#04X} to pattern table ROM at {address:#06X}")]
    ReadOnlyVram { address: u16, value: u8 },
}
