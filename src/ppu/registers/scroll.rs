// $2005 takes X then Y, sharing the write toggle with $2006.
// Scrolling itself is not applied when rendering.

#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollRegister {
    pub scroll_x: u8,
    pub scroll_y: u8,
}

impl ScrollRegister {
    pub fn new() -> Self {
        ScrollRegister {
            scroll_x: 0,
            scroll_y: 0,
        }
    }

    pub fn write(&mut self, data: u8, latch: &mut bool) {
        if !*latch {
            self.scroll_x = data;
        } else {
            self.scroll_y = data;
        }
        *latch = !*latch;
    }
}
