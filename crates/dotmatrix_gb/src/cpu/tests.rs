use super::*;

struct TestBus {
    memory: [u8; 0x10000],
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }
}

impl TestBus {
    /// Bus with `program` loaded at 0x0000.
    fn with_program(program: &[u8]) -> Self {
        let mut bus = Self::default();
        bus.memory[..program.len()].copy_from_slice(program);
        bus
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

fn step(cpu: &mut Cpu, bus: &mut TestBus) -> u32 {
    cpu.step(bus).expect("instruction should decode")
}

#[test]
fn power_on_state_is_zeroed() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs, Registers::default());
    assert_eq!(cpu.regs.pc, 0x0000);
    assert!(!cpu.regs.ime);
    assert!(!cpu.halted);
    assert_eq!(cpu.fault(), None);
}

#[test]
fn nop_advances_pc() {
    let mut cpu = Cpu::new();
    // 0x00: NOP
    let mut bus = TestBus::with_program(&[0x00]);

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(cycles, 4);
}

#[test]
fn ld_16bit_and_basic_ld_indirect_work() {
    let mut cpu = Cpu::new();

    // Program:
    // 0x0000: LD BC, 0x1234
    // 0x0003: LD (BC), A
    // 0x0004: LD A, (BC)
    let mut bus = TestBus::with_program(&[0x01, 0x34, 0x12, 0x02, 0x0A]);
    cpu.regs.a = 0xAB;

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.bc(), 0x1234);
    assert_eq!(cpu.regs.pc, 0x0003);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(bus.memory[0x1234], 0xAB);

    // Clear A then reload from (BC).
    cpu.regs.a = 0x00;
    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0xAB);
}

#[test]
fn ld_r_r_and_hl_inc_dec_forms_work() {
    let mut cpu = Cpu::new();

    // Program:
    // 0x0000: LD HL, 0xC000
    // 0x0003: LD B, 0x12
    // 0x0005: LD (HL), B
    // 0x0006: LD A, (HL+)
    // 0x0007: LD (HL-), A
    // 0x0008: LD C, A
    let mut bus =
        TestBus::with_program(&[0x21, 0x00, 0xC0, 0x06, 0x12, 0x70, 0x2A, 0x32, 0x4F]);

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.hl(), 0xC000);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x12);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(bus.memory[0xC000], 0x12);

    // LD A, (HL+) => loads from 0xC000, then HL becomes 0xC001
    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.hl(), 0xC001);

    // LD (HL-), A => writes to 0xC001, then HL becomes 0xC000
    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(bus.memory[0xC001], 0x12);
    assert_eq!(cpu.regs.hl(), 0xC000);

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.c, 0x12);
}

#[test]
fn ld_hl_plus_minus_store_changes_hl_by_one() {
    let mut cpu = Cpu::new();
    // LD (HL+),A ; LD (HL-),A ; LD (HL-),A
    let mut bus = TestBus::with_program(&[0x22, 0x32, 0x32]);
    cpu.regs.set_hl(0xC100);
    cpu.regs.a = 0x5A;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.hl(), 0xC101);
    assert_eq!(bus.memory[0xC100], 0x5A);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.hl(), 0xC100);
    assert_eq!(bus.memory[0xC101], 0x5A);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.hl(), 0xC0FF);
}

#[test]
fn add_sets_half_carry_and_carry() {
    let mut cpu = Cpu::new();
    // ADD A,0x01 ; ADD A,0x01
    let mut bus = TestBus::with_program(&[0xC6, 0x01, 0xC6, 0x01]);

    cpu.regs.a = 0x0F;
    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.get_flag(Flags::H));
    assert!(!cpu.get_flag(Flags::Z));
    assert!(!cpu.get_flag(Flags::C));
    assert!(!cpu.get_flag(Flags::N));

    cpu.regs.a = 0xFF;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.get_flag(Flags::C));
    assert!(cpu.get_flag(Flags::Z));
}

#[test]
fn sub_and_cp_share_flag_semantics() {
    let mut cpu = Cpu::new();
    // SUB B ; CP 0x10
    let mut bus = TestBus::with_program(&[0x90, 0xFE, 0x10]);

    cpu.regs.a = 0x10;
    cpu.regs.b = 0x01;
    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.a, 0x0F);
    assert!(cpu.get_flag(Flags::N));
    assert!(cpu.get_flag(Flags::H));
    assert!(!cpu.get_flag(Flags::C));

    // CP leaves A alone.
    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0x0F);
    assert!(cpu.get_flag(Flags::C));
    assert!(!cpu.get_flag(Flags::Z));
}

#[test]
fn inc_dec_8bit_update_flags_and_preserve_c() {
    let mut cpu = Cpu::new();
    // DEC B ; INC C
    let mut bus = TestBus::with_program(&[0x05, 0x0C]);

    cpu.regs.b = 0x00;
    cpu.regs.c = 0xFF;
    cpu.set_flag(Flags::C, true);

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.b, 0xFF);
    assert!(cpu.get_flag(Flags::H));
    assert!(cpu.get_flag(Flags::N));
    assert!(!cpu.get_flag(Flags::Z));
    assert!(cpu.get_flag(Flags::C));

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.c, 0x00);
    assert!(cpu.get_flag(Flags::Z));
    assert!(cpu.get_flag(Flags::H));
    assert!(!cpu.get_flag(Flags::N));
    assert!(cpu.get_flag(Flags::C));
}

#[test]
fn inc_dec_on_hl_memory() {
    let mut cpu = Cpu::new();
    // INC (HL) ; DEC (HL) ; DEC (HL)
    let mut bus = TestBus::with_program(&[0x34, 0x35, 0x35]);
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x0F;

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0x10);
    assert!(cpu.get_flag(Flags::H));

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0x0F);

    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0xC000], 0x0E);
}

#[test]
fn inc_dec_16bit_and_add_hl_rr_behaviour() {
    let mut cpu = Cpu::new();
    // INC DE ; DEC SP ; ADD HL,DE
    let mut bus = TestBus::with_program(&[0x13, 0x3B, 0x19]);
    cpu.regs.set_de(0x0FFF);
    cpu.regs.sp = 0x0000;
    cpu.regs.set_hl(0xF000);
    cpu.set_flag(Flags::Z, true);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.de(), 0x1000);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.sp, 0xFFFF);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.hl(), 0x0000);
    assert!(cpu.get_flag(Flags::C));
    // Z is untouched by 16-bit adds.
    assert!(cpu.get_flag(Flags::Z));
}

#[test]
fn add_sp_r8_and_ld_hl_sp_r8_use_signed_offset() {
    let mut cpu = Cpu::new();
    // ADD SP,-2 ; LD HL,SP+1 ; LD SP,HL
    let mut bus = TestBus::with_program(&[0xE8, 0xFE, 0xF8, 0x01, 0xF9]);
    cpu.regs.sp = 0xFFF8;

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.sp, 0xFFF6);
    assert!(!cpu.get_flag(Flags::Z));
    assert!(!cpu.get_flag(Flags::N));

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.hl(), 0xFFF7);

    cpu.regs.set_hl(0xD000);
    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.sp, 0xD000);
}

#[test]
fn push_and_pop_roundtrip_and_pop_af_masks_low_flags() {
    let mut cpu = Cpu::new();

    // Program:
    // 0x0000: PUSH BC
    // 0x0001: POP DE
    // 0x0002: POP AF   (after manually preparing stack contents)
    let mut bus = TestBus::with_program(&[0xC5, 0xD1, 0xF1]);
    cpu.regs.sp = 0xFFFE;
    cpu.regs.set_bc(0x1234);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    // High byte at SP+1, low byte at SP.
    assert_eq!(bus.memory[0xFFFD], 0x12);
    assert_eq!(bus.memory[0xFFFC], 0x34);

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.de(), 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFE);

    // Prepare stack so that AF would be 0x12 0x3F (low nibble non-zero).
    cpu.regs.sp = 0xFFFC;
    bus.memory[0xFFFC] = 0x3F;
    bus.memory[0xFFFD] = 0x12;

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f, 0x30);
}

#[test]
fn call_then_ret_restores_pc_and_sp() {
    let mut cpu = Cpu::new();
    // 0x0000: CALL 0x0010
    // 0x0010: RET
    let mut bus = TestBus::with_program(&[0xCD, 0x10, 0x00]);
    bus.memory[0x0010] = 0xC9;
    cpu.regs.sp = 0xFFFE;

    assert_eq!(step(&mut cpu, &mut bus), 24);
    assert_eq!(cpu.regs.pc, 0x0010);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFD], 0x00);
    assert_eq!(bus.memory[0xFFFC], 0x03);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn conditional_branches_report_taken_and_not_taken_cycles() {
    let mut cpu = Cpu::new();
    // 0x0000: JR NZ,+2
    // 0x0002: JP Z,0x1234
    // 0x0005: CALL C,0x1234
    // 0x0008: RET NC
    let mut bus =
        TestBus::with_program(&[0x20, 0x02, 0xCA, 0x34, 0x12, 0xDC, 0x34, 0x12, 0xD0]);
    cpu.regs.sp = 0xFFFE;
    cpu.set_flag(Flags::Z, true);

    // Z=1: JR NZ not taken.
    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0002);

    cpu.set_flag(Flags::Z, false);
    // Z=0: JP Z not taken.
    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0005);

    // C=0: CALL C not taken.
    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0008);
    assert_eq!(cpu.regs.sp, 0xFFFE);

    // C=0: RET NC taken.
    bus.memory[0xFFFC] = 0x00;
    bus.memory[0xFFFD] = 0x20;
    cpu.regs.sp = 0xFFFC;
    assert_eq!(step(&mut cpu, &mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x2000);
}

#[test]
fn jr_backwards_wraps_relative_to_next_instruction() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    // 0x0100: JR -2 (jumps back onto itself)
    bus.memory[0x0100] = 0x18;
    bus.memory[0x0101] = 0xFE;
    cpu.regs.pc = 0x0100;

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0100);
}

#[test]
fn rst_pushes_return_address_and_jumps_to_vector() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    bus.memory[0x0200] = 0xEF; // RST 28h
    cpu.regs.pc = 0x0200;
    cpu.regs.sp = 0xD000;

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(bus.memory[0xCFFF], 0x02);
    assert_eq!(bus.memory[0xCFFE], 0x01);
}

#[test]
fn daa_cpl_scf_ccf_behaviour() {
    let mut cpu = Cpu::new();

    // Program:
    // 0x0000: ADD A, 0x15  (A starts at 0x27 -> 0x3C)
    // 0x0002: DAA
    // 0x0003: CPL
    // 0x0004: SCF
    // 0x0005: CCF
    let mut bus = TestBus::with_program(&[0xC6, 0x15, 0x27, 0x2F, 0x37, 0x3F]);
    cpu.regs.a = 0x27;

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0x3C);

    // DAA: 0x3C adjusted to 0x42, C=0.
    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.a, 0x42);
    assert!(!cpu.get_flag(Flags::Z));
    assert!(!cpu.get_flag(Flags::C));

    // CPL: bitwise invert A, set H=1,N=1.
    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.a, !0x42);
    assert!(cpu.get_flag(Flags::H));
    assert!(cpu.get_flag(Flags::N));

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert!(cpu.get_flag(Flags::C));
    assert!(!cpu.get_flag(Flags::H));
    assert!(!cpu.get_flag(Flags::N));

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert!(!cpu.get_flag(Flags::C));
}

#[test]
fn rlca_and_rra_behaviour() {
    let mut cpu = Cpu::new();
    // RLCA ; RRA
    let mut bus = TestBus::with_program(&[0x07, 0x1F]);
    cpu.regs.a = 0x80;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    assert!(cpu.get_flag(Flags::C));
    assert!(!cpu.get_flag(Flags::Z));

    // RRA: carry in becomes bit 7, bit 0 goes to carry.
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x80);
    assert!(cpu.get_flag(Flags::C));
}

#[test]
fn cb_swap_bit_res_set() {
    let mut cpu = Cpu::new();
    // SWAP A ; BIT 7,A ; RES 0,(HL) ; SET 7,(HL) ; BIT 0,(HL)
    let mut bus =
        TestBus::with_program(&[0xCB, 0x37, 0xCB, 0x7F, 0xCB, 0x86, 0xCB, 0xFE, 0xCB, 0x46]);
    cpu.regs.a = 0xF1;
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x01;
    cpu.set_flag(Flags::C, true);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0x1F);
    assert!(!cpu.get_flag(Flags::C));

    // BIT 7 of 0x1F is clear.
    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert!(cpu.get_flag(Flags::Z));
    assert!(cpu.get_flag(Flags::H));

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(bus.memory[0xC000], 0x00);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(bus.memory[0xC000], 0x80);

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert!(cpu.get_flag(Flags::Z));
    assert_eq!(cpu.regs.pc, 0x000A);
}

#[test]
fn cb_shifts_through_carry() {
    let mut cpu = Cpu::new();
    // RL B ; SRA C ; SRL D
    let mut bus = TestBus::with_program(&[0xCB, 0x10, 0xCB, 0x29, 0xCB, 0x3A]);
    cpu.regs.b = 0x80;
    cpu.regs.c = 0x81;
    cpu.regs.d = 0x01;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x00);
    assert!(cpu.get_flag(Flags::Z));
    assert!(cpu.get_flag(Flags::C));

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.c, 0xC0);
    assert!(cpu.get_flag(Flags::C));

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.d, 0x00);
    assert!(cpu.get_flag(Flags::Z));
    assert!(cpu.get_flag(Flags::C));
}

#[test]
fn unknown_opcode_is_reported_and_latched() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    // 0x0000: NOP ; 0x0001: 0xD3 (no such instruction)
    bus.memory[0x0001] = 0xD3;

    step(&mut cpu, &mut bus);
    let err = cpu.step(&mut bus).unwrap_err();
    assert_eq!(
        err,
        CpuError::UnknownOpcode {
            opcode: 0xD3,
            pc: 0x0001
        }
    );
    assert_eq!(err.to_string(), "unknown opcode 0xD3 at PC=0x0001");

    // The CPU stays faulted and does not fetch again.
    let pc = cpu.regs.pc;
    assert_eq!(cpu.step(&mut bus), Err(err));
    assert_eq!(cpu.regs.pc, pc);
    assert_eq!(cpu.fault(), Some(err));

    cpu.reset();
    assert_eq!(cpu.fault(), None);
    assert_eq!(step(&mut cpu, &mut bus), 4);
}

#[test]
fn every_primary_hole_faults() {
    for opcode in [
        0xD3u8, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ] {
        let mut cpu = Cpu::new();
        let mut bus = TestBus::with_program(&[opcode]);
        assert_eq!(cpu.step(&mut bus).map_err(|e| e.opcode()), Err(opcode));
    }
}

#[test]
fn halt_idles_until_an_interrupt_is_pending() {
    let mut cpu = Cpu::new();
    // HALT ; NOP
    let mut bus = TestBus::with_program(&[0x76, 0x00]);

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert!(cpu.halted);

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0001);

    // Pending VBlank with IME clear wakes the CPU without dispatching.
    bus.memory[0xFF0F] = 0x01;
    bus.memory[0xFFFF] = 0x01;
    assert_eq!(cpu.handle_interrupts(&mut bus), 0);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(bus.memory[0xFF0F], 0x01);
}

#[test]
fn stop_consumes_padding_byte() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[0x10, 0x00]);

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0002);
    assert!(cpu.halted);
}

#[test]
fn ei_and_di_take_effect_immediately() {
    let mut cpu = Cpu::new();
    // EI ; DI ; RETI
    let mut bus = TestBus::with_program(&[0xFB, 0xF3, 0xD9]);
    cpu.regs.sp = 0xFFF0;
    bus.memory[0xFFF0] = 0x34;
    bus.memory[0xFFF1] = 0x12;

    step(&mut cpu, &mut bus);
    assert!(cpu.regs.ime);

    step(&mut cpu, &mut bus);
    assert!(!cpu.regs.ime);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert!(cpu.regs.ime);
    assert_eq!(cpu.regs.pc, 0x1234);
}

#[test]
fn vblank_interrupt_dispatch() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    cpu.regs.pc = 0x1234;
    cpu.regs.sp = 0xFFFE;
    cpu.regs.ime = true;
    bus.memory[0xFF0F] = 0x05;
    bus.memory[0xFFFF] = 0x01;

    assert_eq!(cpu.handle_interrupts(&mut bus), 20);
    assert!(!cpu.regs.ime);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFD], 0x12);
    assert_eq!(bus.memory[0xFFFC], 0x34);
    // Only the VBlank bit is acknowledged.
    assert_eq!(bus.memory[0xFF0F], 0x04);

    // Nothing pending any more.
    assert_eq!(cpu.handle_interrupts(&mut bus), 0);
}

#[test]
fn masked_or_non_vblank_interrupts_are_not_dispatched() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    cpu.regs.ime = true;
    cpu.regs.sp = 0xFFFE;

    // VBlank requested but disabled in IE.
    bus.memory[0xFF0F] = 0x01;
    bus.memory[0xFFFF] = 0x00;
    assert_eq!(cpu.handle_interrupts(&mut bus), 0);
    assert!(cpu.regs.ime);

    // Timer enabled and requested: never dispatched.
    bus.memory[0xFF0F] = 0x04;
    bus.memory[0xFFFF] = 0x04;
    assert_eq!(cpu.handle_interrupts(&mut bus), 0);
    assert_eq!(cpu.regs.pc, 0x0000);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn stop_with_no_interrupts_enabled_never_wakes() {
    let mut cpu = Cpu::new();
    // STOP ; NOP
    let mut bus = TestBus::with_program(&[0x10, 0x00, 0x00]);
    cpu.regs.ime = true;
    bus.memory[0xFF0F] = 0x01;

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert!(cpu.halted);

    // IF alone does not wake the CPU while IE is clear.
    for _ in 0..16 {
        assert_eq!(cpu.handle_interrupts(&mut bus), 0);
        assert_eq!(step(&mut cpu, &mut bus), 4);
    }
    assert!(cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn extended_fault_reports_prefixed_opcode() {
    let err = CpuError::UnknownExtendedOpcode {
        opcode: 0x37,
        pc: 0x0151,
    };
    assert_eq!(err.opcode(), 0x37);
    assert_eq!(err.pc(), 0x0151);
    assert_eq!(err.to_string(), "unknown opcode 0xCB37 at PC=0x0151");
}
