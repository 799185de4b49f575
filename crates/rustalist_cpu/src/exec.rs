//! Instruction handlers and the two 256-entry dispatch tables.
//!
//! Handlers re-derive register, pair and condition indices from the opcode
//! byte they receive, so duplicate encodings share one function. Each
//! handler consumes its operand bytes, moves PC by the full instruction
//! length (control transfers set it outright) and accounts its tick cost.

use crate::alu;
use crate::bus::Bus;
use crate::cpu::{Cpu, Mode};

pub(crate) type Handler = fn(&mut Cpu, &mut dyn Bus, u8);

// 00 xxx xxx group

fn nop(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn ld_rp_nn(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) {
    let value = cpu.imm16(bus);
    cpu.regs.write_pair((opcode >> 4) & 0x3, value);
    cpu.advance(3);
    cpu.add_ticks(10);
}

fn ld_sp_nn(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.sp = cpu.imm16(bus);
    cpu.advance(3);
    cpu.add_ticks(10);
}

fn add_hl_rp(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.regs.read_pair((opcode >> 4) & 0x3);
    let hl = alu::add16(&mut cpu.flags, cpu.regs.hl(), value, mode);
    cpu.regs.set_hl(hl);
    cpu.advance(1);
    cpu.add_ticks(11);
}

fn add_hl_sp(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let sp = cpu.regs.sp;
    let hl = alu::add16(&mut cpu.flags, cpu.regs.hl(), sp, mode);
    cpu.regs.set_hl(hl);
    cpu.advance(1);
    cpu.add_ticks(11);
}

fn ld_bc_a(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    bus.mem_write(cpu.regs.bc(), cpu.regs.a);
    cpu.advance(1);
    cpu.add_ticks(7);
}

fn ld_de_a(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    bus.mem_write(cpu.regs.de(), cpu.regs.a);
    cpu.advance(1);
    cpu.add_ticks(7);
}

fn ld_a_bc(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.a = bus.mem_read(cpu.regs.bc());
    cpu.advance(1);
    cpu.add_ticks(7);
}

fn ld_a_de(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.a = bus.mem_read(cpu.regs.de());
    cpu.advance(1);
    cpu.add_ticks(7);
}

fn ld_nn_hl(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let addr = cpu.imm16(bus);
    bus.mem_write(addr, cpu.regs.l);
    bus.mem_write(addr.wrapping_add(1), cpu.regs.h);
    cpu.advance(3);
    cpu.add_ticks(16);
}

fn ld_hl_nn(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let addr = cpu.imm16(bus);
    cpu.regs.l = bus.mem_read(addr);
    cpu.regs.h = bus.mem_read(addr.wrapping_add(1));
    cpu.advance(3);
    cpu.add_ticks(16);
}

fn ld_nn_a(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let addr = cpu.imm16(bus);
    bus.mem_write(addr, cpu.regs.a);
    cpu.advance(3);
    cpu.add_ticks(13);
}

fn ld_a_nn(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let addr = cpu.imm16(bus);
    cpu.regs.a = bus.mem_read(addr);
    cpu.advance(3);
    cpu.add_ticks(13);
}

fn inc_rp(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let index = (opcode >> 4) & 0x3;
    let value = cpu.regs.read_pair(index).wrapping_add(1);
    cpu.regs.write_pair(index, value);
    cpu.advance(1);
    cpu.add_ticks(6);
}

fn inc_sp(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.sp = cpu.regs.sp.wrapping_add(1);
    cpu.advance(1);
    cpu.add_ticks(6);
}

fn dec_rp(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let index = (opcode >> 4) & 0x3;
    let value = cpu.regs.read_pair(index).wrapping_sub(1);
    cpu.regs.write_pair(index, value);
    cpu.advance(1);
    cpu.add_ticks(6);
}

fn dec_sp(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.sp = cpu.regs.sp.wrapping_sub(1);
    cpu.advance(1);
    cpu.add_ticks(6);
}

fn inc_m(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let addr = cpu.regs.hl();
    let value = alu::inc(&mut cpu.flags, bus.mem_read(addr), mode);
    bus.mem_write(addr, value);
    cpu.advance(1);
    cpu.add_ticks(11);
}

fn inc_r(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let mode = cpu.mode;
    let index = (opcode >> 3) & 0x7;
    let value = alu::inc(&mut cpu.flags, cpu.regs.read8(index), mode);
    cpu.regs.write8(index, value);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn dec_m(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let addr = cpu.regs.hl();
    let value = alu::dec(&mut cpu.flags, bus.mem_read(addr), mode);
    bus.mem_write(addr, value);
    cpu.advance(1);
    cpu.add_ticks(11);
}

fn dec_r(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let mode = cpu.mode;
    let index = (opcode >> 3) & 0x7;
    let value = alu::dec(&mut cpu.flags, cpu.regs.read8(index), mode);
    cpu.regs.write8(index, value);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn ld_m_n(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let value = cpu.imm8(bus);
    bus.mem_write(cpu.regs.hl(), value);
    cpu.advance(2);
    cpu.add_ticks(10);
}

fn ld_r_n(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) {
    let value = cpu.imm8(bus);
    cpu.regs.write8((opcode >> 3) & 0x7, value);
    cpu.advance(2);
    cpu.add_ticks(7);
}

fn rlca(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    cpu.regs.a = alu::rlca(&mut cpu.flags, cpu.regs.a, mode);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn rrca(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    cpu.regs.a = alu::rrca(&mut cpu.flags, cpu.regs.a, mode);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn rla(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    cpu.regs.a = alu::rla(&mut cpu.flags, cpu.regs.a, mode);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn rra(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    cpu.regs.a = alu::rra(&mut cpu.flags, cpu.regs.a, mode);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn daa(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    cpu.regs.a = alu::daa(&mut cpu.flags, cpu.regs.a, mode);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn cpl(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.a ^= 0xff;
    if cpu.mode == Mode::Z80 {
        cpu.flags.h = true;
        cpu.flags.n = true;
        cpu.flags.f3 = cpu.regs.a & 0x08 != 0;
        cpu.flags.f5 = cpu.regs.a & 0x20 != 0;
    }
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn scf(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    cpu.flags.c = true;
    if cpu.mode == Mode::Z80 {
        cpu.flags.h = false;
        cpu.flags.n = false;
        cpu.flags.f3 = cpu.regs.a & 0x08 != 0;
        cpu.flags.f5 = cpu.regs.a & 0x20 != 0;
    }
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn ccf(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    if cpu.mode == Mode::Z80 {
        cpu.flags.h = cpu.flags.c;
    }
    cpu.flags.c = !cpu.flags.c;
    if cpu.mode == Mode::Z80 {
        cpu.flags.n = false;
        cpu.flags.f3 = cpu.regs.a & 0x08 != 0;
        cpu.flags.f5 = cpu.regs.a & 0x20 != 0;
    }
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn ex_af_af(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    cpu.swap_af();
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn djnz(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.b = cpu.regs.b.wrapping_sub(1);
    if cpu.regs.b == 0 {
        cpu.advance(2);
        cpu.add_ticks(8);
    } else {
        let disp = cpu.imm8(bus) as i8;
        cpu.regs.pc = cpu.regs.pc.wrapping_add(2).wrapping_add(disp as u16);
        cpu.add_ticks(13);
    }
}

fn jr_n(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let disp = cpu.imm8(bus) as i8;
    cpu.regs.pc = cpu.regs.pc.wrapping_add(2).wrapping_add(disp as u16);
    cpu.add_ticks(12);
}

fn jr_cc_n(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) {
    // JR only encodes the Z and C conditions (one-bit selector).
    if cpu.condition((opcode >> 4) & 0x1) == (opcode & 0x08 != 0) {
        let disp = cpu.imm8(bus) as i8;
        cpu.regs.pc = cpu.regs.pc.wrapping_add(2).wrapping_add(disp as u16);
        cpu.add_ticks(12);
    } else {
        cpu.advance(2);
        cpu.add_ticks(7);
    }
}

// 01 xxx xxx group

fn halt(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    // The wait state is not modeled; only time passes.
    cpu.add_ticks(4);
}

fn ld_r_m(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) {
    let value = bus.mem_read(cpu.regs.hl());
    cpu.regs.write8((opcode >> 3) & 0x7, value);
    cpu.advance(1);
    cpu.add_ticks(7);
}

fn ld_m_r(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) {
    bus.mem_write(cpu.regs.hl(), cpu.regs.read8(opcode & 0x7));
    cpu.advance(1);
    cpu.add_ticks(7);
}

fn ld_r_r(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let value = cpu.regs.read8(opcode & 0x7);
    cpu.regs.write8((opcode >> 3) & 0x7, value);
    cpu.advance(1);
    cpu.add_ticks(4);
}

// 10 xxx xxx group

fn add_a_r(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.regs.read8(opcode & 0x7);
    cpu.regs.a = alu::add(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn add_a_m(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = bus.mem_read(cpu.regs.hl());
    cpu.regs.a = alu::add(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(7);
}

fn adc_a_r(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.regs.read8(opcode & 0x7);
    cpu.regs.a = alu::adc(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn adc_a_m(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = bus.mem_read(cpu.regs.hl());
    cpu.regs.a = alu::adc(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(7);
}

fn sub_r(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.regs.read8(opcode & 0x7);
    cpu.regs.a = alu::sub(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn sub_m(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = bus.mem_read(cpu.regs.hl());
    cpu.regs.a = alu::sub(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(7);
}

fn sbc_r(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.regs.read8(opcode & 0x7);
    cpu.regs.a = alu::sbc(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn sbc_m(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = bus.mem_read(cpu.regs.hl());
    cpu.regs.a = alu::sbc(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(7);
}

fn and_r(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.regs.read8(opcode & 0x7);
    cpu.regs.a = alu::and(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn and_m(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = bus.mem_read(cpu.regs.hl());
    cpu.regs.a = alu::and(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(7);
}

fn xor_r(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.regs.read8(opcode & 0x7);
    cpu.regs.a = alu::xor(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn xor_m(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = bus.mem_read(cpu.regs.hl());
    cpu.regs.a = alu::xor(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(7);
}

fn or_r(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.regs.read8(opcode & 0x7);
    cpu.regs.a = alu::or(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn or_m(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = bus.mem_read(cpu.regs.hl());
    cpu.regs.a = alu::or(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(7);
}

fn cp_r(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.regs.read8(opcode & 0x7);
    alu::cp(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn cp_m(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = bus.mem_read(cpu.regs.hl());
    alu::cp(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(1);
    cpu.add_ticks(7);
}

// 11 xxx xxx group

fn ret_cc(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) {
    if cpu.condition((opcode >> 4) & 0x3) == (opcode & 0x08 != 0) {
        cpu.regs.pc = cpu.pop16(bus);
        cpu.add_ticks(11);
    } else {
        cpu.advance(1);
        cpu.add_ticks(5);
    }
}

fn pop_rp(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) {
    let value = cpu.pop16(bus);
    cpu.regs.write_pair((opcode >> 4) & 0x3, value);
    cpu.advance(1);
    cpu.add_ticks(10);
}

fn pop_af(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.pop16(bus);
    let mut f = value as u8;
    if mode == Mode::I8080 {
        // Only the five 8080 flags survive; bit 1 reads back as 1.
        f = f & 0b1101_0101 | 0b0000_0010;
    }
    cpu.flags.unpack(f, mode);
    cpu.regs.a = (value >> 8) as u8;
    cpu.advance(1);
    cpu.add_ticks(10);
}

fn ret(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.pc = cpu.pop16(bus);
    cpu.add_ticks(10);
}

fn exx(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.exx();
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn jp_hl(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.pc = cpu.regs.hl();
    cpu.add_ticks(4);
}

fn ld_sp_hl(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.sp = cpu.regs.hl();
    cpu.advance(1);
    cpu.add_ticks(6);
}

fn jp_cc_nn(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) {
    if cpu.condition((opcode >> 4) & 0x3) == (opcode & 0x08 != 0) {
        cpu.regs.pc = cpu.imm16(bus);
    } else {
        cpu.advance(3);
    }
    cpu.add_ticks(10);
}

fn jp_nn(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.pc = cpu.imm16(bus);
    cpu.add_ticks(6);
}

/// Prefix bytes 0xCB/0xDD/0xED/0xFD: the extended instruction set is not
/// implemented. The byte is skipped and no time passes.
fn prefix(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    cpu.advance(1);
}

fn out_n_a(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let port = u16::from(cpu.regs.a) << 8 | u16::from(cpu.imm8(bus));
    bus.port_write(port, cpu.regs.a);
    cpu.advance(2);
    cpu.add_ticks(11);
}

fn in_a_n(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let port = u16::from(cpu.regs.a) << 8 | u16::from(cpu.imm8(bus));
    cpu.regs.a = bus.port_read(port);
    cpu.advance(2);
    cpu.add_ticks(11);
}

fn ex_sp_hl(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let sp = cpu.regs.sp;
    let low = bus.mem_read(sp);
    let high = bus.mem_read(sp.wrapping_add(1));
    bus.mem_write(sp, cpu.regs.l);
    bus.mem_write(sp.wrapping_add(1), cpu.regs.h);
    cpu.regs.l = low;
    cpu.regs.h = high;
    cpu.advance(1);
    cpu.add_ticks(19);
}

fn ex_de_hl(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    core::mem::swap(&mut cpu.regs.d, &mut cpu.regs.h);
    core::mem::swap(&mut cpu.regs.e, &mut cpu.regs.l);
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn di(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.iff1 = false;
    cpu.regs.iff2 = false;
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn ei(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) {
    cpu.regs.iff1 = true;
    cpu.regs.iff2 = true;
    cpu.advance(1);
    cpu.add_ticks(4);
}

fn call_cc_nn(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) {
    let ret_addr = cpu.regs.pc.wrapping_add(3);
    if cpu.condition((opcode >> 4) & 0x3) == (opcode & 0x08 != 0) {
        // Push before reading the target; the stack may overlap the
        // operand bytes.
        cpu.push16(bus, ret_addr);
        cpu.regs.pc = cpu.imm16(bus);
        cpu.add_ticks(17);
    } else {
        cpu.regs.pc = ret_addr;
        cpu.add_ticks(10);
    }
}

fn push_rp(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) {
    let value = cpu.regs.read_pair((opcode >> 4) & 0x3);
    cpu.push16(bus, value);
    cpu.advance(1);
    cpu.add_ticks(11);
}

fn push_af(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let value = u16::from(cpu.regs.a) << 8 | u16::from(cpu.flags.pack());
    cpu.push16(bus, value);
    cpu.advance(1);
    cpu.add_ticks(11);
}

fn call_nn(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let ret_addr = cpu.regs.pc.wrapping_add(3);
    cpu.push16(bus, ret_addr);
    cpu.regs.pc = cpu.imm16(bus);
    cpu.add_ticks(17);
}

fn add_a_n(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.imm8(bus);
    cpu.regs.a = alu::add(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(2);
    cpu.add_ticks(7);
}

fn adc_a_n(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.imm8(bus);
    cpu.regs.a = alu::adc(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(2);
    cpu.add_ticks(7);
}

fn sub_n(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.imm8(bus);
    cpu.regs.a = alu::sub(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(2);
    cpu.add_ticks(7);
}

fn sbc_n(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.imm8(bus);
    cpu.regs.a = alu::sbc(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(2);
    cpu.add_ticks(7);
}

fn and_n(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.imm8(bus);
    cpu.regs.a = alu::and(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(2);
    cpu.add_ticks(7);
}

fn xor_n(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.imm8(bus);
    cpu.regs.a = alu::xor(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(2);
    cpu.add_ticks(7);
}

fn or_n(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.imm8(bus);
    cpu.regs.a = alu::or(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(2);
    cpu.add_ticks(7);
}

fn cp_n(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) {
    let mode = cpu.mode;
    let value = cpu.imm8(bus);
    alu::cp(&mut cpu.flags, cpu.regs.a, value, mode);
    cpu.advance(2);
    cpu.add_ticks(7);
}

fn rst(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) {
    let ret_addr = cpu.regs.pc.wrapping_add(1);
    cpu.push16(bus, ret_addr);
    cpu.regs.pc = u16::from((opcode >> 3) & 0x7) * 8;
    cpu.add_ticks(11);
}

/// The Intel 8080 dispatch table. The 8080 decodes the Z80 extension
/// slots as aliases: the 0x08-column as NOP, 0xCB as JP, 0xD9 as RET and
/// 0xDD/0xED/0xFD as CALL.
#[rustfmt::skip]
pub(crate) static I8080_OPCODES: [Handler; 256] = [
    // 0x00
    nop,      ld_rp_nn, ld_bc_a,  inc_rp,   inc_r,    dec_r,    ld_r_n,   rlca,
    nop,      add_hl_rp, ld_a_bc, dec_rp,   inc_r,    dec_r,    ld_r_n,   rrca,
    // 0x10
    nop,      ld_rp_nn, ld_de_a,  inc_rp,   inc_r,    dec_r,    ld_r_n,   rla,
    nop,      add_hl_rp, ld_a_de, dec_rp,   inc_r,    dec_r,    ld_r_n,   rra,
    // 0x20
    nop,      ld_rp_nn, ld_nn_hl, inc_rp,   inc_r,    dec_r,    ld_r_n,   daa,
    nop,      add_hl_rp, ld_hl_nn, dec_rp,  inc_r,    dec_r,    ld_r_n,   cpl,
    // 0x30
    nop,      ld_sp_nn, ld_nn_a,  inc_sp,   inc_m,    dec_m,    ld_m_n,   scf,
    nop,      add_hl_sp, ld_a_nn, dec_sp,   inc_r,    dec_r,    ld_r_n,   ccf,
    // 0x40
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    // 0x50
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    // 0x60
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    // 0x70
    ld_m_r,   ld_m_r,   ld_m_r,   ld_m_r,   ld_m_r,   ld_m_r,   halt,     ld_m_r,
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    // 0x80
    add_a_r,  add_a_r,  add_a_r,  add_a_r,  add_a_r,  add_a_r,  add_a_m,  add_a_r,
    adc_a_r,  adc_a_r,  adc_a_r,  adc_a_r,  adc_a_r,  adc_a_r,  adc_a_m,  adc_a_r,
    // 0x90
    sub_r,    sub_r,    sub_r,    sub_r,    sub_r,    sub_r,    sub_m,    sub_r,
    sbc_r,    sbc_r,    sbc_r,    sbc_r,    sbc_r,    sbc_r,    sbc_m,    sbc_r,
    // 0xA0
    and_r,    and_r,    and_r,    and_r,    and_r,    and_r,    and_m,    and_r,
    xor_r,    xor_r,    xor_r,    xor_r,    xor_r,    xor_r,    xor_m,    xor_r,
    // 0xB0
    or_r,     or_r,     or_r,     or_r,     or_r,     or_r,     or_m,     or_r,
    cp_r,     cp_r,     cp_r,     cp_r,     cp_r,     cp_r,     cp_m,     cp_r,
    // 0xC0
    ret_cc,   pop_rp,   jp_cc_nn, jp_nn,    call_cc_nn, push_rp, add_a_n, rst,
    ret_cc,   ret,      jp_cc_nn, jp_nn,    call_cc_nn, call_nn, adc_a_n, rst,
    // 0xD0
    ret_cc,   pop_rp,   jp_cc_nn, out_n_a,  call_cc_nn, push_rp, sub_n,   rst,
    ret_cc,   ret,      jp_cc_nn, in_a_n,   call_cc_nn, call_nn, sbc_n,   rst,
    // 0xE0
    ret_cc,   pop_rp,   jp_cc_nn, ex_sp_hl, call_cc_nn, push_rp, and_n,   rst,
    ret_cc,   jp_hl,    jp_cc_nn, ex_de_hl, call_cc_nn, call_nn, xor_n,   rst,
    // 0xF0
    ret_cc,   pop_af,   jp_cc_nn, di,       call_cc_nn, push_af, or_n,    rst,
    ret_cc,   ld_sp_hl, jp_cc_nn, ei,       call_cc_nn, call_nn, cp_n,    rst,
];

/// The Z80 dispatch table. Identical to the 8080 table except for the
/// extension slots; the four prefix bytes fall through to `prefix`.
#[rustfmt::skip]
pub(crate) static Z80_OPCODES: [Handler; 256] = [
    // 0x00
    nop,      ld_rp_nn, ld_bc_a,  inc_rp,   inc_r,    dec_r,    ld_r_n,   rlca,
    ex_af_af, add_hl_rp, ld_a_bc, dec_rp,   inc_r,    dec_r,    ld_r_n,   rrca,
    // 0x10
    djnz,     ld_rp_nn, ld_de_a,  inc_rp,   inc_r,    dec_r,    ld_r_n,   rla,
    jr_n,     add_hl_rp, ld_a_de, dec_rp,   inc_r,    dec_r,    ld_r_n,   rra,
    // 0x20
    jr_cc_n,  ld_rp_nn, ld_nn_hl, inc_rp,   inc_r,    dec_r,    ld_r_n,   daa,
    jr_cc_n,  add_hl_rp, ld_hl_nn, dec_rp,  inc_r,    dec_r,    ld_r_n,   cpl,
    // 0x30
    jr_cc_n,  ld_sp_nn, ld_nn_a,  inc_sp,   inc_m,    dec_m,    ld_m_n,   scf,
    jr_cc_n,  add_hl_sp, ld_a_nn, dec_sp,   inc_r,    dec_r,    ld_r_n,   ccf,
    // 0x40
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    // 0x50
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    // 0x60
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    // 0x70
    ld_m_r,   ld_m_r,   ld_m_r,   ld_m_r,   ld_m_r,   ld_m_r,   halt,     ld_m_r,
    ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_r,   ld_r_m,   ld_r_r,
    // 0x80
    add_a_r,  add_a_r,  add_a_r,  add_a_r,  add_a_r,  add_a_r,  add_a_m,  add_a_r,
    adc_a_r,  adc_a_r,  adc_a_r,  adc_a_r,  adc_a_r,  adc_a_r,  adc_a_m,  adc_a_r,
    // 0x90
    sub_r,    sub_r,    sub_r,    sub_r,    sub_r,    sub_r,    sub_m,    sub_r,
    sbc_r,    sbc_r,    sbc_r,    sbc_r,    sbc_r,    sbc_r,    sbc_m,    sbc_r,
    // 0xA0
    and_r,    and_r,    and_r,    and_r,    and_r,    and_r,    and_m,    and_r,
    xor_r,    xor_r,    xor_r,    xor_r,    xor_r,    xor_r,    xor_m,    xor_r,
    // 0xB0
    or_r,     or_r,     or_r,     or_r,     or_r,     or_r,     or_m,     or_r,
    cp_r,     cp_r,     cp_r,     cp_r,     cp_r,     cp_r,     cp_m,     cp_r,
    // 0xC0
    ret_cc,   pop_rp,   jp_cc_nn, jp_nn,    call_cc_nn, push_rp, add_a_n, rst,
    ret_cc,   ret,      jp_cc_nn, prefix,   call_cc_nn, call_nn, adc_a_n, rst,
    // 0xD0
    ret_cc,   pop_rp,   jp_cc_nn, out_n_a,  call_cc_nn, push_rp, sub_n,   rst,
    ret_cc,   exx,      jp_cc_nn, in_a_n,   call_cc_nn, prefix,  sbc_n,   rst,
    // 0xE0
    ret_cc,   pop_rp,   jp_cc_nn, ex_sp_hl, call_cc_nn, push_rp, and_n,   rst,
    ret_cc,   jp_hl,    jp_cc_nn, ex_de_hl, call_cc_nn, prefix,  xor_n,   rst,
    // 0xF0
    ret_cc,   pop_af,   jp_cc_nn, di,       call_cc_nn, push_af, or_n,    rst,
    ret_cc,   ld_sp_hl, jp_cc_nn, ei,       call_cc_nn, prefix,  cp_n,    rst,
];
