//! # Dispatch Table Tests
//!
//! Verifies the opcode-indexed handler table: which opcodes are present, and
//! that new opcodes can be registered without touching the execution loop.

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;
use ls8_core::core::cpu::dispatch::{self, DispatchTable};
use ls8_core::core::cpu::{Cpu, Effect, RunState};
use ls8_core::isa::instruction::Instruction;
use ls8_core::isa::opcodes;
use ls8_core::stats::InstClass;
use ls8_core::Trap;
use pretty_assertions::assert_eq;

#[test]
fn default_table_holds_the_instruction_set() {
    let table = DispatchTable::new();
    let registered: Vec<u8> = table.opcodes().collect();
    assert_eq!(
        registered,
        vec![
            opcodes::HLT,
            opcodes::PUSH,
            opcodes::POP,
            opcodes::PRN,
            opcodes::LDI,
            opcodes::ADD,
            opcodes::MUL,
        ]
    );
}

#[test]
fn empty_table_has_no_entries() {
    let table = DispatchTable::empty();
    assert_eq!(table.opcodes().count(), 0);
    assert!(table.lookup(opcodes::HLT).is_none());
}

#[test]
fn entries_carry_instruction_class() {
    let table = DispatchTable::new();
    let class = |op| table.lookup(op).map(|e| e.class);
    assert_eq!(class(opcodes::HLT), Some(InstClass::Control));
    assert_eq!(class(opcodes::LDI), Some(InstClass::Load));
    assert_eq!(class(opcodes::PRN), Some(InstClass::Io));
    assert_eq!(class(opcodes::PUSH), Some(InstClass::Stack));
    assert_eq!(class(opcodes::MUL), Some(InstClass::Alu));
}

/// `NOP`-style opcode used to check extension.
const NOP: u8 = 0b0000_0000;

fn nop(_cpu: &mut Cpu, _inst: Instruction) -> Result<Effect, Trap> {
    Ok(Effect::Continue)
}

#[test]
fn registered_opcode_is_dispatched() {
    let mut ctx = TestContext::new().load_program(
        &ProgramBuilder::new()
            .raw(&[NOP, NOP])
            .ldi(0, 3)
            .prn(0)
            .hlt()
            .build(),
    );
    ctx.cpu.dispatch_mut().register(NOP, nop, InstClass::Control);
    assert_eq!(ctx.run(), Ok(vec![3]));
}

#[test]
fn new_alu_opcode_without_implementation_is_unsupported() {
    // 0b1010_0111: two operands, ALU flag, identifier 7.
    const ALU_UNIMPLEMENTED: u8 = 0xA7;
    let mut ctx = TestContext::new().load_program(
        &ProgramBuilder::new()
            .raw(&[ALU_UNIMPLEMENTED, 0, 1])
            .hlt()
            .build(),
    );
    ctx.cpu
        .dispatch_mut()
        .register(ALU_UNIMPLEMENTED, dispatch::alu, InstClass::Alu);
    assert_eq!(
        ctx.run(),
        Err(Trap::UnsupportedOperation {
            opcode: ALU_UNIMPLEMENTED
        })
    );
    assert_eq!(ctx.cpu.pc, 0, "PC must stay on the failing instruction");
}

#[test]
fn replacing_an_entry_overrides_behavior() {
    fn double_print(cpu: &mut Cpu, inst: Instruction) -> Result<Effect, Trap> {
        let v = cpu.regs.read(inst.operand_a)?;
        Ok(Effect::Output(v.wrapping_mul(2)))
    }
    let mut ctx = TestContext::new()
        .load_program(&ProgramBuilder::new().ldi(1, 21).prn(1).hlt().build());
    ctx.cpu
        .dispatch_mut()
        .register(opcodes::PRN, double_print, InstClass::Io);
    assert_eq!(ctx.run(), Ok(vec![42]));
}

#[test]
fn custom_handler_returning_halt_halts_the_cpu() {
    const STOP: u8 = 0x02;
    fn stop(_cpu: &mut Cpu, _inst: Instruction) -> Result<Effect, Trap> {
        Ok(Effect::Halt)
    }

    let mut ctx = TestContext::new()
        .load_program(&ProgramBuilder::new().ldi(0, 4).prn(0).raw(&[STOP]).build());
    ctx.cpu.dispatch_mut().register(STOP, stop, InstClass::Control);
    assert_eq!(ctx.run(), Ok(vec![4]));
    assert!(ctx.cpu.is_halted());
    assert_eq!(ctx.cpu.state, RunState::Halted);
    assert_eq!(ctx.cpu.pc, 5, "PC stays on the halting instruction");
    assert_eq!(ctx.cpu.step(), Ok(Effect::Halt));
}
