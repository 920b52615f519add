//! Memory and video side of an NES: the CPU address decoder, NROM
//! cartridges and the PPU's register window, timing and tile decoding.
//!
//! The 6502 core is not included. Anything implementing [`cpu::Cpu`] can be
//! plugged into [`clock::ClockDriver`], which feeds it the bus one cycle at a
//! time.

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate bitflags;

pub mod bus;
pub mod cartridge;
pub mod clock;
pub mod config;
pub mod cpu;
pub mod error;
pub mod ppu;
pub mod render;

pub use bus::Bus;
pub use cartridge::{read_rom_file, Mirroring, Rom};
pub use clock::{ClockDriver, StepMode};
pub use config::{Config, PixelSource, Timing};
pub use cpu::{Cpu, Mem, Pins};
pub use error::{AccessError, CartridgeError};
pub use ppu::{NesPPU, PatternTableHalf, PpuPixel};
pub use render::frame::{Frame, FrameSink};
