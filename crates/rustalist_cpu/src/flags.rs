use bitflags::bitflags;
use lazy_static::lazy_static;

use crate::cpu::Mode;

bitflags! {
    /// Bit layout of the packed F register.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct FlagBits: u8 {
        const C  = 0b0000_0001;
        const N  = 0b0000_0010;
        const P  = 0b0000_0100;
        const F3 = 0b0000_1000;
        const H  = 0b0001_0000;
        const F5 = 0b0010_0000;
        const Z  = 0b0100_0000;
        const S  = 0b1000_0000;
    }
}

lazy_static! {
    /// `PARITY[b]` is true when `b` has an even number of set bits.
    pub static ref PARITY: [bool; 256] = {
        let mut table = [false; 256];
        for (byte, entry) in table.iter_mut().enumerate() {
            *entry = byte.count_ones() % 2 == 0;
        }
        table
    };
}

/// Half-carry truth table for add-class operations, indexed by the 3-bit
/// combination of bit 3 of operand A, operand B and the result.
const ADD_HALF_CARRY: [bool; 8] = [false, false, true, false, true, false, true, true];
/// Companion table for subtract-class operations; entries are consumed
/// negated.
const SUB_HALF_CARRY: [bool; 8] = [false, true, true, true, false, false, false, true];

fn half_carry_index(a: u8, b: u8, result: u8) -> usize {
    usize::from(((a & 0x88) >> 1 | (b & 0x88) >> 2 | (result & 0x88) >> 3) & 0x7)
}

pub(crate) fn half_carry_add(a: u8, b: u8, result: u8) -> bool {
    ADD_HALF_CARRY[half_carry_index(a, b, result)]
}

pub(crate) fn half_carry_sub(a: u8, b: u8, result: u8) -> bool {
    !SUB_HALF_CARRY[half_carry_index(a, b, result)]
}

/// The condition flags, kept unpacked. The F byte exists only when pushed,
/// popped or swapped with the alternate bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flags {
    pub c: bool,
    /// Subtract flag. Never written in 8080 mode, where it packs as a
    /// constant 1.
    pub n: bool,
    /// Parity in 8080 mode, the overflow-style flag in Z80 mode.
    pub p: bool,
    /// Undocumented bit 3; Z80 mode only.
    pub f3: bool,
    pub h: bool,
    /// Undocumented bit 5; Z80 mode only.
    pub f5: bool,
    pub z: bool,
    pub s: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Flags {
            c: false,
            n: true,
            p: false,
            f3: false,
            h: false,
            f5: false,
            z: false,
            s: false,
        }
    }
}

impl Flags {
    /// Pack into the F byte layout.
    pub fn pack(&self) -> u8 {
        let mut bits = FlagBits::empty();
        bits.set(FlagBits::C, self.c);
        bits.set(FlagBits::N, self.n);
        bits.set(FlagBits::P, self.p);
        bits.set(FlagBits::F3, self.f3);
        bits.set(FlagBits::H, self.h);
        bits.set(FlagBits::F5, self.f5);
        bits.set(FlagBits::Z, self.z);
        bits.set(FlagBits::S, self.s);
        bits.bits()
    }

    /// Unpack an F byte. N and the undocumented bits only exist on the
    /// Z80; in 8080 mode they keep their fixed values.
    pub fn unpack(&mut self, value: u8, mode: Mode) {
        let bits = FlagBits::from_bits_retain(value);
        self.c = bits.contains(FlagBits::C);
        self.p = bits.contains(FlagBits::P);
        self.h = bits.contains(FlagBits::H);
        self.z = bits.contains(FlagBits::Z);
        self.s = bits.contains(FlagBits::S);
        if mode == Mode::Z80 {
            self.n = bits.contains(FlagBits::N);
            self.f3 = bits.contains(FlagBits::F3);
            self.f5 = bits.contains(FlagBits::F5);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_table_values() {
        assert!(PARITY[0x00]);
        assert!(PARITY[0xff]);
        assert!(!PARITY[0x01]);
        assert!(!PARITY[0x02]);
        assert!(!PARITY[0x04]);
        assert!(!PARITY[0x80]);
    }

    #[test]
    fn half_carry_from_low_nibble_overflow() {
        // 0x0F + 0x0F = 0x1E carries out of bit 3.
        assert!(half_carry_add(0x0f, 0x0f, 0x1e));
        assert!(!half_carry_add(0x00, 0x00, 0x00));
        assert!(!half_carry_add(0x12, 0x34, 0x46));
        // 0x0F - 0x01 stays within the low nibble.
        assert!(half_carry_sub(0x0f, 0x01, 0x0e));
        assert!(!half_carry_sub(0x10, 0x01, 0x0f));
    }

    #[test]
    fn pack_unpack_round_trips_8080() {
        for byte in 0..=0xffu8 {
            let mut flags = Flags::default();
            flags.unpack(byte, Mode::I8080);
            let packed = flags.pack();
            // The five live flags survive; bits 3 and 5 read back as 0 and
            // bit 1 as 1.
            assert_eq!(packed, byte & 0b1101_0101 | 0b0000_0010);
        }
    }

    #[test]
    fn pack_unpack_round_trips_z80() {
        for byte in 0..=0xffu8 {
            let mut flags = Flags::default();
            flags.unpack(byte, Mode::Z80);
            assert_eq!(flags.pack(), byte);
        }
    }

    #[test]
    fn default_flags_pack_to_constant_bits_only() {
        assert_eq!(Flags::default().pack(), 0b0000_0010);
    }
}
