use log::debug;
use rustalist_cpu::Bus;

/// Total addressable memory (64 KiB).
const MEMORY_SIZE: usize = 0x10000;

/// The VV55A keyboard PPI is mirrored across this window in 4-byte
/// strides; offset 3 of each stride is the control register.
const PPI_WINDOW_BASE: u16 = 0xf800;
const PPI_WINDOW_SIZE: usize = 0x800;

/// Port bytes exposed for the two control words the machine uses.
const PPI_PATTERN_91: [u8; 4] = [0xff, 0x00, 0x0f, 0x00];
const PPI_PATTERN_82: [u8; 4] = [0x00, 0xff, 0x00, 0xff];

/// The Specialist memory bus.
///
/// Reads are plain array accesses over the whole 64 KiB. Writes below the
/// ROM boundary are applied; above it they are discarded, except that a
/// recognized PPI control word written inside the peripheral window
/// reprograms the mirrored port bytes.
pub struct SpecialistBus {
    memory: [u8; MEMORY_SIZE],
    rom_boundary: u16,
    ppi_mode: u8,
}

impl Default for SpecialistBus {
    fn default() -> Self {
        SpecialistBus {
            memory: [0; MEMORY_SIZE],
            rom_boundary: crate::ROM_BASE,
            ppi_mode: 0x82,
        }
    }
}

impl SpecialistBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bus whose write guard starts at a different boundary.
    pub fn with_rom_boundary(rom_boundary: u16) -> Self {
        SpecialistBus {
            rom_boundary,
            ..Self::default()
        }
    }

    pub fn rom_boundary(&self) -> u16 {
        self.rom_boundary
    }

    /// The currently latched PPI control word.
    pub fn ppi_mode(&self) -> u8 {
        self.ppi_mode
    }

    /// Raw write that bypasses the ROM guard; image loaders use this.
    /// Wraps around the top of the address space.
    pub fn fill(&mut self, addr: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().enumerate() {
            let addr = addr.wrapping_add(offset as u16);
            self.memory[usize::from(addr)] = byte;
        }
    }

    /// The whole 64 KiB address space, for collaborators that scan fixed
    /// windows (the renderer in particular).
    pub fn memory(&self) -> &[u8] {
        &self.memory
    }

    fn latch_ppi_mode(&mut self, value: u8) {
        let pattern = match value {
            0x91 => PPI_PATTERN_91,
            0x82 => PPI_PATTERN_82,
            _ => return,
        };
        debug!("PPI control word {value:#04x} latched");
        self.ppi_mode = value;
        let window = &mut self.memory[usize::from(PPI_WINDOW_BASE)..][..PPI_WINDOW_SIZE];
        for chunk in window.chunks_exact_mut(4) {
            chunk.copy_from_slice(&pattern);
        }
    }
}

impl Bus for SpecialistBus {
    fn mem_read(&mut self, addr: u16) -> u8 {
        self.memory[usize::from(addr)]
    }

    fn mem_write(&mut self, addr: u16, value: u8) {
        if addr < self.rom_boundary {
            self.memory[usize::from(addr)] = value;
        }
        if addr >= PPI_WINDOW_BASE && addr & 0x3 == 3 {
            self.latch_ppi_mode(value);
        }
    }

    // Port I/O keeps the core's logging stubs; the Specialist maps its
    // peripherals into memory instead.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_below_the_rom_boundary_stick() {
        let mut bus = SpecialistBus::new();
        bus.mem_write(0x8000, 0xaa);
        bus.mem_write(0xbfff, 0xbb);
        assert_eq!(bus.mem_read(0x8000), 0xaa);
        assert_eq!(bus.mem_read(0xbfff), 0xbb);
    }

    #[test]
    fn writes_into_rom_are_discarded() {
        let mut bus = SpecialistBus::new();
        bus.fill(0xc000, &[0x55]);
        bus.mem_write(0xc000, 0xaa);
        bus.mem_write(0xf000, 0xbb);
        assert_eq!(bus.mem_read(0xc000), 0x55);
        assert_eq!(bus.mem_read(0xf000), 0x00);
    }

    #[test]
    fn fill_bypasses_the_guard() {
        let mut bus = SpecialistBus::new();
        bus.fill(0xc000, &[1, 2, 3]);
        assert_eq!(bus.mem_read(0xc001), 2);
    }

    #[test]
    fn control_word_mirrors_the_port_pattern_across_the_window() {
        let mut bus = SpecialistBus::new();
        assert_eq!(bus.ppi_mode(), 0x82);

        bus.mem_write(0xf803, 0x91);
        assert_eq!(bus.ppi_mode(), 0x91);
        for stride in (0xf800..=0xffff).step_by(4) {
            assert_eq!(bus.mem_read(stride), 0xff);
            assert_eq!(bus.mem_read(stride + 1), 0x00);
            assert_eq!(bus.mem_read(stride + 2), 0x0f);
            assert_eq!(bus.mem_read(stride + 3), 0x00);
        }

        // The control register is mirrored too: any stride's offset 3
        // accepts the mode byte.
        bus.mem_write(0xffff, 0x82);
        assert_eq!(bus.ppi_mode(), 0x82);
        assert_eq!(bus.mem_read(0xf801), 0xff);
    }

    #[test]
    fn unrecognized_window_writes_are_discarded() {
        let mut bus = SpecialistBus::new();
        bus.mem_write(0xf803, 0x42); // not a control word
        bus.mem_write(0xf800, 0x91); // not the control offset
        for addr in 0xf800..=0xf807u16 {
            assert_eq!(bus.mem_read(addr), 0x00);
        }
        assert_eq!(bus.ppi_mode(), 0x82);
    }

    #[test]
    fn configurable_boundary_moves_the_guard() {
        let mut bus = SpecialistBus::with_rom_boundary(0x4000);
        bus.mem_write(0x3fff, 0x11);
        bus.mem_write(0x4000, 0x22);
        assert_eq!(bus.mem_read(0x3fff), 0x11);
        assert_eq!(bus.mem_read(0x4000), 0x00);
    }
}
