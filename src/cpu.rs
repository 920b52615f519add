// The CPU core is not part of this crate. Whatever drives the bus talks to
// it through a pin word, once per CPU cycle:
//
//  63          25  24  23      16  15             0
// +--------------+----+----------+----------------+
// |    unused    | RW |   data   |    address     |
// +--------------+----+----------+----------------+
//
// RW set means the CPU wants to read `address`; the driver answers by
// putting the byte on the data bits before the next tick.

const ADDRESS_MASK: u64 = 0x0000_FFFF;
const DATA_SHIFT: u64 = 16;
const DATA_MASK: u64 = 0x00FF_0000;
pub const RW: u64 = 1 << 24;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pins(pub u64);

impl Pins {
    pub fn read(addr: u16) -> Self {
	Pins(addr as u64 | RW)
    }

    pub fn write(addr: u16, data: u8) -> Self {
	Pins(addr as u64 | (data as u64) << DATA_SHIFT)
    }

    pub fn address(&self) -> u16 {
	(self.0 & ADDRESS_MASK) as u16
    }

    pub fn data(&self) -> u8 {
	((self.0 & DATA_MASK) >> DATA_SHIFT) as u8
    }

    pub fn is_read(&self) -> bool {
	self.0 & RW != 0
    }

    pub fn with_data(self, data: u8) -> Self {
	Pins((self.0 & !DATA_MASK) | (data as u64) << DATA_SHIFT)
    }
}

/// A CPU core advanced one cycle at a time.
pub trait Cpu {
    /// Consumes the pins left by the driver (carrying the data of the last
    /// read) and returns the next bus request.
    fn tick(&mut self, pins: Pins) -> Pins;

    fn program_counter(&self) -> u16;
}

pub trait Mem {
    fn mem_read(&mut self, addr: u16) -> u8;

    fn mem_write(&mut self, addr: u16, data: u8);

    /// Side effects that belong after the read value reached the CPU.
    fn post_read(&mut self, _addr: u16) {}

    fn mem_read_u16(&mut self, pos: u16) -> u16 {
	let lo = self.mem_read(pos) as u16;
	let hi = self.mem_read(pos.wrapping_add(1)) as u16;
	(hi << 8) | lo
    }
}
