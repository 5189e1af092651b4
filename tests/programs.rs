//! Whole-program tests: machine code in a flat 64KB image, driven only
//! through the public API.

use mos6502::{
    CPU, CpuConfig, CpuError, FlatMemory, MemoryBus, Mnemonic, TraceEvent, Variant, new_cpu,
    new_cpu_with_config,
};

/// Loads a program, points the reset vector at it and resets the CPU.
fn machine_with_program(origin: u16, program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load_at(origin, program);
    memory.write_u8(0xFFFC, origin as u8);
    memory.write_u8(0xFFFD, (origin >> 8) as u8);

    let mut cpu = new_cpu(memory);
    cpu.reset();
    cpu
}

#[test]
fn reset_loads_vector_and_initial_state() {
    let mut memory = FlatMemory::new();
    memory.write_u8(0xFFFC, 0xFE);
    memory.write_u8(0xFFFD, 0xCA);

    let mut cpu = new_cpu(memory);
    cpu.reset();

    assert_eq!(cpu.program_counter(), 0xCAFE);
    assert_eq!(cpu.accumulator(), 0x00);
    assert_eq!(cpu.x_register(), 0x00);
    assert_eq!(cpu.y_register(), 0x00);
    assert_eq!(cpu.stack_pointer(), 0xFD);
    assert_eq!(cpu.status() & 0x04, 0x04, "I is set after reset");
}

#[test]
fn brk_pushes_frame_and_vectors_through_fffe() {
    // Build up P = unused | V | Z first: BIT on a byte with bit 6 set and
    // no overlap with A copies V in and sets Z, CLI drops the reset-time I.
    let mut memory = FlatMemory::new();
    memory.write_u8(0x0010, 0x40);
    memory.load_at(
        0x0300,
        &[
            0x24, 0x10, // BIT $10
            0x58, // CLI
            0x4C, 0x34, 0x12, // JMP $1234
        ],
    );
    memory.write_u8(0x1234, 0x00); // BRK
    memory.write_u8(0xFFFC, 0x00);
    memory.write_u8(0xFFFD, 0x03);
    memory.write_u8(0xFFFE, 0xCA);
    memory.write_u8(0xFFFF, 0xC0);

    let mut cpu = new_cpu(memory);
    cpu.reset();
    for _ in 0..3 {
        cpu.step().unwrap();
    }
    assert_eq!(cpu.program_counter(), 0x1234);
    assert_eq!(cpu.status(), 0x62, "unused | V | Z before the break");

    let consumed = cpu.step().unwrap(); // BRK
    assert_eq!(consumed, 7);
    assert_eq!(cpu.program_counter(), 0xC0CA);
    assert_eq!(cpu.stack_pointer(), 0xFA, "three bytes pushed");
    // Top of stack is P with B and unused set, then the return address
    // 0x1236 (opcode + the signature byte).
    assert_eq!(cpu.bus_mut().read_u8(0x01FB), 0x72);
    assert_eq!(cpu.bus_mut().read_u8(0x01FC), 0x36);
    assert_eq!(cpu.bus_mut().read_u8(0x01FD), 0x12);
    assert_eq!(cpu.status() & 0x04, 0x04, "BRK masks IRQs");
}

#[test]
fn adc_immediate_signed_overflow() {
    let mut cpu = machine_with_program(
        0x0300,
        &[
            0xA9, 0x50, // LDA #$50
            0x69, 0x50, // ADC #$50
        ],
    );
    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.accumulator(), 0xA0);
    let status = cpu.status();
    assert_eq!(status & 0x80, 0x80, "N set");
    assert_eq!(status & 0x40, 0x40, "V set");
    assert_eq!(status & 0x01, 0x00, "C clear");
    assert_eq!(status & 0x02, 0x00, "Z clear");
}

#[test]
fn jmp_indirect_honors_page_wrap_bug() {
    let mut memory = FlatMemory::new();
    memory.load_at(0x0300, &[0x6C, 0xFF, 0x30]); // JMP ($30FF)
    memory.write_u8(0x30FF, 0x80);
    memory.write_u8(0x3000, 0x50);
    memory.write_u8(0x3100, 0x40);
    memory.write_u8(0xFFFC, 0x00);
    memory.write_u8(0xFFFD, 0x03);

    let mut cpu = new_cpu(memory);
    cpu.reset();
    let consumed = cpu.step().unwrap();

    assert_eq!(cpu.program_counter(), 0x5080, "high byte came from 0x3000");
    assert_eq!(consumed, 5);
}

#[test]
fn branch_taken_across_page_costs_four_cycles() {
    // BNE at 0x00EE: PC after the operand is 0x00F0, offset +0x20 lands on
    // 0x0110 in the next page. Z is clear out of reset.
    let mut cpu = machine_with_program(0x00EE, &[0xD0, 0x20]);
    let consumed = cpu.step().unwrap();

    assert_eq!(cpu.program_counter(), 0x0110);
    assert_eq!(consumed, 4, "2 base + 1 taken + 1 page cross");
}

#[test]
fn lda_indirect_y_page_cross_costs_five_cycles() {
    let mut memory = FlatMemory::new();
    memory.write_u8(0x0086, 0x28);
    memory.write_u8(0x0087, 0x40);
    memory.write_u8(0x4100, 0x77);
    memory.load_at(
        0x0300,
        &[
            0xA0, 0xD8, // LDY #$D8
            0xB1, 0x86, // LDA ($86),Y
        ],
    );
    memory.write_u8(0xFFFC, 0x00);
    memory.write_u8(0xFFFD, 0x03);

    let mut cpu = new_cpu(memory);
    cpu.reset();
    cpu.step().unwrap();
    let consumed = cpu.step().unwrap();

    assert_eq!(cpu.accumulator(), 0x77, "loaded from 0x4028 + 0xD8 = 0x4100");
    assert_eq!(consumed, 5, "4 base + 1 page cross");
}

#[test]
fn absolute_x_without_crossing_stays_at_base_cost() {
    let mut memory = FlatMemory::new();
    memory.write_u8(0x4005, 0x33);
    memory.load_at(
        0x0300,
        &[
            0xA2, 0x05, // LDX #$05
            0xBD, 0x00, 0x40, // LDA $4000,X
        ],
    );
    memory.write_u8(0xFFFC, 0x00);
    memory.write_u8(0xFFFD, 0x03);

    let mut cpu = new_cpu(memory);
    cpu.reset();
    cpu.step().unwrap();
    let consumed = cpu.step().unwrap();

    assert_eq!(cpu.accumulator(), 0x33);
    assert_eq!(consumed, 4);
}

#[test]
fn jsr_rts_round_trip() {
    let mut memory = FlatMemory::new();
    memory.load_at(
        0x0300,
        &[
            0x20, 0x00, 0x04, // JSR $0400
            0xA2, 0x01, // LDX #$01  (after return)
        ],
    );
    memory.load_at(
        0x0400,
        &[
            0xA9, 0x42, // LDA #$42
            0x60, // RTS
        ],
    );
    memory.write_u8(0xFFFC, 0x00);
    memory.write_u8(0xFFFD, 0x03);

    let mut cpu = new_cpu(memory);
    cpu.reset();

    assert_eq!(cpu.step().unwrap(), 6); // JSR
    assert_eq!(cpu.program_counter(), 0x0400);
    cpu.step().unwrap(); // LDA
    assert_eq!(cpu.step().unwrap(), 6); // RTS
    assert_eq!(cpu.program_counter(), 0x0303, "back to the byte after the JSR");
    cpu.step().unwrap(); // LDX
    assert_eq!(cpu.x_register(), 0x01);
    assert_eq!(cpu.stack_pointer(), 0xFD, "stack balanced");
}

#[test]
fn countdown_loop_accumulates_and_accounts_cycles() {
    // A += X for X = 5 down to 1; 15 when the loop falls through.
    let mut cpu = machine_with_program(
        0x8000,
        &[
            0xA9, 0x00, // LDA #$00
            0xA2, 0x05, // LDX #$05
            0x86, 0x10, // loop: STX $10
            0x18, // CLC
            0x65, 0x10, // ADC $10
            0xCA, // DEX
            0xD0, 0xF9, // BNE loop
        ],
    );

    // 2 setup instructions, then 5 iterations of 5 instructions.
    for _ in 0..27 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.accumulator(), 0x0F);
    assert_eq!(cpu.x_register(), 0x00);
    assert_eq!(cpu.program_counter(), 0x800C);
    // 7 (reset) + 4 (setup) + 4 taken passes of 13 + a final pass of 12.
    assert_eq!(cpu.cycles_total(), 75);
}

#[test]
fn nmi_service_and_rti_resume() {
    let mut memory = FlatMemory::new();
    for addr in 0x0300..0x0310u16 {
        memory.write_u8(addr, 0xEA); // NOP filler
    }
    memory.load_at(
        0x0400,
        &[
            0xA9, 0x99, // LDA #$99
            0x40, // RTI
        ],
    );
    memory.write_u8(0xFFFA, 0x00);
    memory.write_u8(0xFFFB, 0x04);
    memory.write_u8(0xFFFC, 0x00);
    memory.write_u8(0xFFFD, 0x03);

    let mut cpu = new_cpu(memory);
    cpu.reset();
    cpu.step().unwrap(); // one NOP
    let status_before = cpu.status();

    cpu.raise_nmi();
    assert_eq!(cpu.step().unwrap(), 7, "NMI entry");
    assert_eq!(cpu.program_counter(), 0x0400);

    cpu.step().unwrap(); // LDA #$99 inside the handler
    cpu.step().unwrap(); // RTI

    assert_eq!(cpu.program_counter(), 0x0301, "resumed where it left off");
    assert_eq!(cpu.accumulator(), 0x99);
    assert_eq!(cpu.status(), status_before, "flags restored by RTI");

    // Edge-triggered: no second service without a new edge.
    cpu.step().unwrap();
    assert_eq!(cpu.program_counter(), 0x0302);
}

#[test]
fn irq_respects_mask_and_level() {
    let mut memory = FlatMemory::new();
    for addr in 0x0300..0x0310u16 {
        memory.write_u8(addr, 0xEA);
    }
    memory.write_u8(0x0300, 0x58); // CLI first
    memory.write_u8(0xFFFC, 0x00);
    memory.write_u8(0xFFFD, 0x03);
    memory.write_u8(0xFFFE, 0x00);
    memory.write_u8(0xFFFF, 0x05);

    let mut cpu = new_cpu(memory);
    cpu.reset();
    cpu.set_irq(true);

    // I is set out of reset: the line is ignored and CLI runs.
    cpu.step().unwrap();
    assert_eq!(cpu.program_counter(), 0x0301);

    // Now unmasked: the next boundary services the IRQ.
    assert_eq!(cpu.step().unwrap(), 7);
    assert_eq!(cpu.program_counter(), 0x0500);
    assert_eq!(cpu.status() & 0x04, 0x04, "I set on entry");

    // Dropping the line stops further services once I clears again.
    cpu.set_irq(false);
}

#[test]
fn step_before_reset_reports_error() {
    let mut cpu = new_cpu(FlatMemory::new());
    assert_eq!(cpu.step(), Err(CpuError::ResetNotPerformed));
    assert_eq!(cpu.step_for(100), Err(CpuError::ResetNotPerformed));
}

#[test]
fn strict_mode_surfaces_illegal_opcodes() {
    let mut memory = FlatMemory::new();
    memory.load_at(0x0300, &[0xEA, 0x02]); // NOP, then a KIL byte
    memory.write_u8(0xFFFC, 0x00);
    memory.write_u8(0xFFFD, 0x03);

    let mut cpu = new_cpu_with_config(
        memory,
        CpuConfig {
            variant: Variant::Nmos6502,
            strict_decode: true,
        },
    );
    cpu.reset();

    cpu.step().unwrap();
    assert_eq!(
        cpu.step(),
        Err(CpuError::IllegalOpcode {
            opcode: 0x02,
            pc: 0x0301
        })
    );
}

#[test]
fn decimal_mode_differs_between_variants() {
    let program = [
        0xF8, // SED
        0xA9, 0x19, // LDA #$19
        0x69, 0x01, // ADC #$01
    ];

    let mut nmos = machine_with_program(0x0300, &program);
    for _ in 0..3 {
        nmos.step().unwrap();
    }
    assert_eq!(nmos.accumulator(), 0x20, "NMOS honours BCD");

    let mut memory = FlatMemory::new();
    memory.load_at(0x0300, &program);
    memory.write_u8(0xFFFC, 0x00);
    memory.write_u8(0xFFFD, 0x03);
    let mut ricoh = new_cpu_with_config(
        memory,
        CpuConfig {
            variant: Variant::Ricoh2A03,
            strict_decode: false,
        },
    );
    ricoh.reset();
    for _ in 0..3 {
        ricoh.step().unwrap();
    }
    assert_eq!(ricoh.accumulator(), 0x1A, "2A03 adds in binary regardless");
}

#[test]
fn trace_hook_sees_every_instruction_without_perturbing_it() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let program = [
        0xA9, 0x01, // LDA #$01
        0x69, 0x01, // ADC #$01
        0x85, 0x10, // STA $10
    ];

    let mut plain = machine_with_program(0x0300, &program);
    let mut traced = machine_with_program(0x0300, &program);

    let events: Rc<RefCell<Vec<TraceEvent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    traced.register_trace_hook(move |event| sink.borrow_mut().push(*event));

    for _ in 0..3 {
        let a = plain.step().unwrap();
        let b = traced.step().unwrap();
        assert_eq!(a, b, "hook must not change cycle accounting");
    }
    assert_eq!(plain.program_counter(), traced.program_counter());
    assert_eq!(plain.status(), traced.status());

    let events = events.borrow();
    let mnemonics: Vec<Mnemonic> = events.iter().map(|e| e.mnemonic).collect();
    assert_eq!(mnemonics, [Mnemonic::LDA, Mnemonic::ADC, Mnemonic::STA]);
    assert_eq!(events[0].pc, 0x0300);
    assert_eq!(events[1].pc, 0x0302);
    assert_eq!(events[2].pc, 0x0304);
    assert_eq!(events[2].accumulator, 0x02, "state as of the STA fetch");
}

#[test]
fn snapshot_restores_a_running_machine() {
    let mut cpu = machine_with_program(
        0x0300,
        &[
            0xA9, 0x11, // LDA #$11
            0x85, 0x10, // STA $10
            0xE6, 0x10, // INC $10
            0xE6, 0x10, // INC $10
        ],
    );
    cpu.step().unwrap();
    cpu.step().unwrap();

    let snapshot = cpu.snapshot();

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.bus_mut().read_u8(0x0010), 0x13);

    cpu.restore(&snapshot);
    assert_eq!(cpu.bus_mut().read_u8(0x0010), 0x11);
    assert_eq!(cpu.program_counter(), 0x0304);

    // The restored machine replays identically.
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.bus_mut().read_u8(0x0010), 0x13);
}

#[test]
fn interrupt_lines_handle_works_across_threads() {
    let mut memory = FlatMemory::new();
    for addr in 0x0300..0x0320u16 {
        memory.write_u8(addr, 0xEA);
    }
    memory.write_u8(0xFFFA, 0x00);
    memory.write_u8(0xFFFB, 0x04);
    memory.write_u8(0x0400, 0xEA);
    memory.write_u8(0xFFFC, 0x00);
    memory.write_u8(0xFFFD, 0x03);

    let mut cpu = new_cpu(memory);
    cpu.reset();

    let lines = cpu.interrupt_lines();
    let signaller = std::thread::spawn(move || {
        lines.raise_nmi();
    });
    signaller.join().unwrap();

    // Raised strictly before this step: it must be serviced now.
    assert_eq!(cpu.step().unwrap(), 7);
    assert_eq!(cpu.program_counter(), 0x0400);
}
