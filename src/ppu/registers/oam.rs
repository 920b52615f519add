use super::addr::AddrRegister;

pub const OAM_SIZE: usize = 256;

/// Sprite attribute memory. The address is written in two halves like
/// PPUADDR, with a latch of its own; only its low byte indexes OAM.
pub struct OamRegisters {
    addr: AddrRegister,
    latch: bool,
    oam_data: [u8; OAM_SIZE],
}

impl OamRegisters {
    pub fn new() -> Self {
	OamRegisters {
	    addr: AddrRegister::new(),
	    latch: false,
	    oam_data: [0; OAM_SIZE],
	}
    }

    pub fn write_addr(&mut self, data: u8) {
	self.addr.update(data, &mut self.latch);
    }

    pub fn write_data(&mut self, data: u8) {
	self.oam_data[self.index()] = data;
	self.addr.increment(1);
    }

    pub fn read_data(&self) -> u8 {
	self.oam_data[self.index()]
    }

    pub fn address(&self) -> u16 {
	self.addr.get()
    }

    pub fn temp_address(&self) -> u16 {
	self.addr.temp()
    }

    pub fn address_latch(&self) -> bool {
	self.latch
    }

    pub fn data(&self) -> &[u8; OAM_SIZE] {
	&self.oam_data
    }

    fn index(&self) -> usize {
	(self.addr.get() as usize) % OAM_SIZE
    }
}
