// The CPU cannot reach PPU memory directly. It writes the wanted PPU address
// to $2006 in two halves (high byte first) and then moves data through $2007.
// OAMADDR is latched the same way against the OAM address space.
//
// Which half comes next is decided by a latch owned by the caller, so that
// PPUADDR and PPUSCROLL can share one toggle the way the hardware does.

#[derive(Debug, Default, Clone, Copy)]
pub struct AddrRegister {
    temp: u16,
    value: u16,
}

impl AddrRegister {
    pub fn new() -> Self {
	AddrRegister { temp: 0, value: 0 }
    }

    /// First write (latch clear) fills the high byte of the temporary address.
    /// Second write (latch set) fills the low byte and publishes it.
    pub fn update(&mut self, data: u8, latch: &mut bool) {
	if !*latch {
	    self.temp = (self.temp & 0x00FF) | ((data as u16) << 8);
	} else {
	    self.temp = (self.temp & 0xFF00) | data as u16;
	    self.value = self.temp;
	}
	*latch = !*latch;
    }

    pub fn increment(&mut self, inc: u8) {
	self.value = self.value.wrapping_add(inc as u16);
    }

    pub fn get(&self) -> u16 {
	self.value
    }

    pub fn temp(&self) -> u16 {
	self.temp
    }
}
