//! In-memory image placement. Reading image files from disk is the
//! frontend's job; these functions consume byte slices that already hold
//! the image.

use anyhow::{bail, Result};

use crate::bus::SpecialistBus;

/// Place a program ("game") image and return its entry address.
///
/// The first four bytes are the little-endian start and end addresses of
/// the payload, which follows immediately and lands at `start..`. The
/// placed span is `end - start + 2` bytes.
pub fn load_game(bus: &mut SpecialistBus, image: &[u8]) -> Result<u16> {
    if image.len() < 4 {
        bail!("game image too short: {} bytes", image.len());
    }
    let start = u16::from_le_bytes([image[0], image[1]]);
    let end = u16::from_le_bytes([image[2], image[3]]);
    if end < start {
        bail!("game image end {end:#06x} precedes start {start:#06x}");
    }
    let span = usize::from(end - start) + 2;
    if image.len() < 4 + span {
        bail!(
            "game image truncated: payload spans {span} bytes, image carries {}",
            image.len() - 4
        );
    }
    bus.fill(start, &image[4..4 + span]);
    Ok(start)
}

/// Place a ROM image verbatim at `base`.
pub fn load_rom(bus: &mut SpecialistBus, image: &[u8], base: u16) {
    bus.fill(base, image);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustalist_cpu::Bus;

    #[test]
    fn game_header_places_the_payload_at_its_start_address() {
        let mut bus = SpecialistBus::new();
        // start = 0x8000, end = 0x8001: a 3-byte span.
        let image = [0x00, 0x80, 0x01, 0x80, 0xaa, 0xbb, 0xcc];
        let start = load_game(&mut bus, &image).unwrap();
        assert_eq!(start, 0x8000);
        assert_eq!(bus.mem_read(0x8000), 0xaa);
        assert_eq!(bus.mem_read(0x8001), 0xbb);
        assert_eq!(bus.mem_read(0x8002), 0xcc);
        assert_eq!(bus.mem_read(0x8003), 0x00);
    }

    #[test]
    fn game_images_may_target_rom_addresses() {
        let mut bus = SpecialistBus::new();
        let image = [0x00, 0xc0, 0x00, 0xc0, 0x12, 0x34];
        load_game(&mut bus, &image).unwrap();
        assert_eq!(bus.mem_read(0xc000), 0x12);
    }

    #[test]
    fn short_and_truncated_images_are_rejected() {
        let mut bus = SpecialistBus::new();
        assert!(load_game(&mut bus, &[0x00, 0x80]).is_err());
        // Header promises 3 bytes but only 1 follows.
        let image = [0x00, 0x80, 0x01, 0x80, 0xaa];
        assert!(load_game(&mut bus, &image).is_err());
        // Inverted address range.
        let image = [0x01, 0x80, 0x00, 0x70, 0xaa, 0xbb];
        assert!(load_game(&mut bus, &image).is_err());
    }

    #[test]
    fn rom_images_land_verbatim() {
        let mut bus = SpecialistBus::new();
        load_rom(&mut bus, &[0xde, 0xad], 0xc000);
        assert_eq!(bus.mem_read(0xc000), 0xde);
        assert_eq!(bus.mem_read(0xc001), 0xad);
    }
}
