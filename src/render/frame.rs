/// Receives one pixel per visible dot.
pub trait FrameSink {
    fn set_pixel(&mut self, x: usize, y: usize, rgba: u32);
}

pub struct Frame {
    pub data: Vec<u32>,
}

impl Frame {
    pub const WIDTH: usize = 256;
    pub const HEIGHT: usize = 240;

    pub fn new() -> Self {
	Frame {
	    data: vec![0; Frame::WIDTH * Frame::HEIGHT],
	}
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
	if x < Frame::WIDTH && y < Frame::HEIGHT {
	    Some(self.data[y * Frame::WIDTH + x])
	} else {
	    None
	}
    }
}

impl Default for Frame {
    fn default() -> Self {
	Frame::new()
    }
}

impl FrameSink for Frame {
    fn set_pixel(&mut self, x: usize, y: usize, rgba: u32) {
	if x < Frame::WIDTH && y < Frame::HEIGHT {
	    self.data[y * Frame::WIDTH + x] = rgba;
	}
    }
}
