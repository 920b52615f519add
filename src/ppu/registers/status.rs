bitflags! {
    // 7  bit  0
    // ---- ----
    // VSO. ....
    // |||
    // ||+------- Sprite overflow.
    // |+-------- Sprite 0 Hit.
    // +--------- Vertical blank has started (0: not in vblank; 1: in vblank).
    //            Set when line 241 begins; cleared when the pre-render
    //            line begins and after every read of $2002.
    //
    // The low five bits are open bus and read back as zero here.
    pub struct StatusRegister: u8 {
	const SPRITE_OVERFLOW  = 0b0010_0000;
	const SPRITE_ZERO_HIT  = 0b0100_0000;
	const VBLANK_STARTED   = 0b1000_0000;
    }
}

impl StatusRegister {
    pub fn new() -> Self {
	StatusRegister::from_bits_truncate(0b0000_0000)
    }

    pub fn set_sprite_overflow(&mut self, flag: bool) {
	self.set(StatusRegister::SPRITE_OVERFLOW, flag);
    }

    pub fn set_sprite_zero_hit(&mut self, flag: bool) {
	self.set(StatusRegister::SPRITE_ZERO_HIT, flag);
    }

    pub fn set_vblank_started(&mut self, flag: bool) {
	self.set(StatusRegister::VBLANK_STARTED, flag);
    }

    pub fn is_in_vblank(&self) -> bool {
	self.contains(StatusRegister::VBLANK_STARTED)
    }

    pub fn reset_vblank_started(&mut self) {
	self.remove(StatusRegister::VBLANK_STARTED);
    }

    pub fn snapshot(&self) -> u8 {
	self.bits()
    }
}
