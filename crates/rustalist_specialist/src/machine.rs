use anyhow::Result;
use log::info;
use rustalist_cpu::{Cpu, Mode};

use crate::bus::SpecialistBus;
use crate::{loader, TICKS_PER_FRAME, VIDEO_RAM_BASE, VIDEO_RAM_SIZE};

/// The Specialist machine: an 8080-mode CPU core wired to the machine
/// bus.
///
/// The machine is single-threaded and fully synchronous; nothing here is
/// safe for concurrent use, and a multi-threaded host must serialize
/// around whole steps.
pub struct Specialist {
    cpu: Cpu,
    bus: SpecialistBus,
}

impl Specialist {
    pub fn new() -> Self {
        Specialist {
            cpu: Cpu::new(Mode::I8080),
            bus: SpecialistBus::new(),
        }
    }

    /// Load a program image and point the CPU at its entry address.
    pub fn load_game(&mut self, image: &[u8]) -> Result<u16> {
        let start = loader::load_game(&mut self.bus, image)?;
        info!("game image loaded, entry {start:#06x}");
        self.cpu.regs.pc = start;
        Ok(start)
    }

    /// Load a ROM image at `base` and point the CPU at it.
    pub fn load_rom(&mut self, image: &[u8], base: u16) {
        loader::load_rom(&mut self.bus, image, base);
        info!("ROM image loaded at {base:#06x}, {} bytes", image.len());
        self.cpu.regs.pc = base;
    }

    /// Execute one instruction; returns the ticks it consumed.
    pub fn step(&mut self) -> u64 {
        self.cpu.step(&mut self.bus)
    }

    /// Run instructions until a frame's worth of ticks has elapsed, then
    /// reset the tick counter. Returns the ticks actually consumed.
    ///
    /// This is the machine's only synchronization point: frontends render
    /// the video window and feed input between frames.
    pub fn step_frame(&mut self) -> u64 {
        while self.cpu.ticks() <= TICKS_PER_FRAME {
            self.cpu.step(&mut self.bus);
        }
        let consumed = self.cpu.ticks();
        self.cpu.reset_ticks();
        consumed
    }

    /// The 1-bpp video window the renderer scans.
    pub fn video_ram(&self) -> &[u8] {
        &self.bus.memory()[usize::from(VIDEO_RAM_BASE)..][..VIDEO_RAM_SIZE]
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &SpecialistBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut SpecialistBus {
        &mut self.bus
    }
}

impl Default for Specialist {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_window_sits_right_below_the_rom() {
        let machine = Specialist::new();
        assert_eq!(machine.video_ram().len(), 0x3000);
        assert_eq!(
            usize::from(VIDEO_RAM_BASE) + machine.video_ram().len(),
            usize::from(crate::ROM_BASE)
        );
    }

    #[test]
    fn step_executes_one_instruction() {
        let mut machine = Specialist::new();
        machine.bus_mut().fill(0x0000, &[0x3e, 0x42]); // MVI A,0x42
        let ticks = machine.step();
        assert_eq!(ticks, 7);
        assert_eq!(machine.cpu().regs.a, 0x42);
    }
}
