use rustalist_specialist::{Specialist, TICKS_PER_FRAME};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn game_image(start: u16, payload: &[u8]) -> Vec<u8> {
    // Pick the header's end address so the placed span equals the payload.
    let end = start + payload.len() as u16 - 2;
    let mut image = start.to_le_bytes().to_vec();
    image.extend_from_slice(&end.to_le_bytes());
    image.extend_from_slice(payload);
    image
}

#[test]
fn frame_stepping_runs_a_program_into_the_video_window() {
    init_logging();
    let mut machine = Specialist::new();
    let program = [
        0x3e, 0x55, // MVI A,0x55
        0x32, 0x00, 0x90, // STA 0x9000
        0x32, 0x00, 0xc0, // STA 0xc000 (discarded by the ROM guard)
        0x76, // HLT
    ];
    let entry = machine.load_game(&game_image(0x8000, &program)).unwrap();
    assert_eq!(entry, 0x8000);

    let consumed = machine.step_frame();
    assert!(consumed > TICKS_PER_FRAME);
    assert_eq!(machine.cpu().ticks(), 0);
    assert_eq!(machine.video_ram()[0], 0x55);
    assert_eq!(machine.bus().memory()[0xc000], 0x00);
    // The program parked on HLT without advancing.
    assert_eq!(machine.cpu().regs.pc, 0x8008);
}

#[test]
fn rom_loading_points_the_cpu_at_the_base() {
    init_logging();
    let mut machine = Specialist::new();
    let rom = [
        0x3e, 0x99, // MVI A,0x99
        0x32, 0x34, 0x12, // STA 0x1234
        0xc3, 0x05, 0xc0, // JMP self
    ];
    machine.load_rom(&rom, 0xc000);
    assert_eq!(machine.cpu().regs.pc, 0xc000);
    machine.step();
    machine.step();
    assert_eq!(machine.bus().memory()[0x1234], 0x99);
}

#[test]
fn keyboard_window_reprogramming_is_reachable_from_code() {
    init_logging();
    let mut machine = Specialist::new();
    let program = [
        0x3e, 0x91, // MVI A,0x91
        0x32, 0x03, 0xf8, // STA 0xf803 (PPI control register)
        0x3a, 0x00, 0xf8, // LDA 0xf800
        0x76, // HLT
    ];
    machine
        .load_game(&game_image(0x8000, &program))
        .unwrap();
    machine.step();
    machine.step();
    assert_eq!(machine.bus().ppi_mode(), 0x91);
    machine.step();
    assert_eq!(machine.cpu().regs.a, 0xff);
}
