// Master clock. The PPU moves one dot on every tick and the CPU gets one
// cycle on every third tick, the 3:1 ratio of the NTSC console.

use crate::bus::Bus;
use crate::config::Config;
use crate::cpu::{Cpu, Mem, Pins};
use crate::render::frame::FrameSink;

// Longest 6502 instruction plus one cycle of slack.
const MAX_CPU_CYCLES_PER_INSTRUCTION: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    Cycle,
    Instruction,
    Frame,
}

pub struct ClockDriver {
    config: Config,
    pins: Pins,
}

impl ClockDriver {
    pub fn new(config: Config) -> Self {
	ClockDriver {
	    config,
	    pins: Pins::default(),
	}
    }

    pub fn config(&self) -> &Config {
	&self.config
    }

    /// Pins that the CPU will see on its next tick.
    pub fn pins(&self) -> Pins {
	self.pins
    }

    fn cpu_divider(&self) -> u32 {
	self.config.cpu_divider.max(1)
    }

    /// One master clock tick. Returns whether the CPU was advanced.
    pub fn global_tick<C: Cpu, S: FrameSink>(
	&mut self,
	cpu: &mut C,
	bus: &mut Bus,
	sink: &mut S,
    ) -> bool {
	let pixel = bus.ppu().current_pixel(self.config.pixel_source);
	if pixel.is_visible() {
	    sink.set_pixel(pixel.x as usize, pixel.y as usize, pixel.color);
	}

	bus.ppu_mut().tick();

	let cpu_cycle = bus.tick_count() % self.cpu_divider() == 0;
	if cpu_cycle {
	    self.cpu_cycle(cpu, bus);
	}
	bus.increment_tick_count();
	cpu_cycle
    }

    // The bus answers within the same cycle: read data is latched on the
    // pins the CPU gets on its next tick.
    fn cpu_cycle<C: Cpu>(&mut self, cpu: &mut C, bus: &mut Bus) {
	let pins = cpu.tick(self.pins);
	let addr = pins.address();
	self.pins = if pins.is_read() {
	    let data = bus.mem_read(addr);
	    bus.post_read(addr);
	    pins.with_data(data)
	} else {
	    bus.mem_write(addr, pins.data());
	    pins
	};
    }

    /// Runs global ticks according to `mode` and returns how many ran.
    ///
    /// `Instruction` stops at the first tick after which the CPU reports a
    /// different program counter; a CPU that never moves it is given up on
    /// after a few cycles. `Frame` stops when the PPU completes a frame and
    /// acknowledges it.
    pub fn step<C: Cpu, S: FrameSink>(
	&mut self,
	cpu: &mut C,
	bus: &mut Bus,
	sink: &mut S,
	mode: StepMode,
    ) -> u32 {
	match mode {
	    StepMode::Cycle => {
		self.global_tick(cpu, bus, sink);
		1
	    }
	    StepMode::Instruction => {
		let pc = cpu.program_counter();
		let limit = MAX_CPU_CYCLES_PER_INSTRUCTION * self.cpu_divider();
		let mut ticks = 0;
		while ticks < limit {
		    self.global_tick(cpu, bus, sink);
		    ticks += 1;
		    if cpu.program_counter() != pc {
			return ticks;
		    }
		}
		log::warn!("program counter stuck at {:#06X} for {} ticks", pc, ticks);
		ticks
	    }
	    StepMode::Frame => {
		let mut ticks = 0;
		loop {
		    self.global_tick(cpu, bus, sink);
		    ticks += 1;
		    if bus.ppu().frame_complete() {
			bus.ppu_mut().clear_frame_complete();
			return ticks;
		    }
		}
	    }
	}
    }
}
