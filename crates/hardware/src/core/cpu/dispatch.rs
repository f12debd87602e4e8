//! Instruction Dispatch.
//!
//! A single flat table maps every opcode value to the handler that implements it.
//! Adding an instruction means registering one more entry; the execution loop
//! never changes. Handlers take the whole CPU mutably and receive the fetched
//! instruction, opcode included, so ALU-style handlers need no separate lookup.

use super::{Cpu, Effect};
use crate::common::Trap;
use crate::core::units::alu::Alu;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes;
use crate::stats::InstClass;

/// Signature shared by every instruction handler.
pub type Handler = fn(&mut Cpu, Instruction) -> Result<Effect, Trap>;

/// One slot of the dispatch table.
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    /// Implementation of the instruction.
    pub handler: Handler,
    /// Class used for the instruction mix statistics.
    pub class: InstClass,
}

/// Opcode-indexed handler table.
#[derive(Clone, Debug)]
pub struct DispatchTable {
    entries: [Option<Entry>; 256],
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchTable {
    /// Creates a table with no opcodes registered.
    pub const fn empty() -> Self {
        Self {
            entries: [None; 256],
        }
    }

    /// Creates a table holding the full LS-8 instruction set.
    pub fn new() -> Self {
        let mut table = Self::empty();
        table.register(opcodes::HLT, hlt, InstClass::Control);
        table.register(opcodes::LDI, ldi, InstClass::Load);
        table.register(opcodes::PRN, prn, InstClass::Io);
        table.register(opcodes::PUSH, push, InstClass::Stack);
        table.register(opcodes::POP, pop, InstClass::Stack);
        table.register(opcodes::ADD, alu, InstClass::Alu);
        table.register(opcodes::MUL, alu, InstClass::Alu);
        table
    }

    /// Installs `handler` for `opcode`, replacing any previous entry.
    pub fn register(&mut self, opcode: u8, handler: Handler, class: InstClass) {
        self.entries[opcode as usize] = Some(Entry { handler, class });
    }

    /// Looks up the entry for `opcode`.
    pub const fn lookup(&self, opcode: u8) -> Option<Entry> {
        self.entries[opcode as usize]
    }

    /// Iterates over the registered opcodes in ascending order.
    pub fn opcodes(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&op| self.entries[op as usize].is_some())
    }
}

/// `HLT`: stop the machine. The execution loop moves the CPU to `Halted`.
#[allow(clippy::unnecessary_wraps)]
const fn hlt(_cpu: &mut Cpu, _inst: Instruction) -> Result<Effect, Trap> {
    Ok(Effect::Halt)
}

/// `LDI reg, value`: load an immediate.
fn ldi(cpu: &mut Cpu, inst: Instruction) -> Result<Effect, Trap> {
    cpu.regs.write(inst.operand_a, inst.operand_b)?;
    Ok(Effect::Continue)
}

/// `PRN reg`: emit a register as a decimal line.
fn prn(cpu: &mut Cpu, inst: Instruction) -> Result<Effect, Trap> {
    Ok(Effect::Output(cpu.regs.read(inst.operand_a)?))
}

/// `PUSH reg`: decrement SP, store the register at the new top.
fn push(cpu: &mut Cpu, inst: Instruction) -> Result<Effect, Trap> {
    let val = cpu.regs.read(inst.operand_a)?;
    cpu.push_byte(val)?;
    Ok(Effect::Continue)
}

/// `POP reg`: load the top of stack into the register, increment SP.
fn pop(cpu: &mut Cpu, inst: Instruction) -> Result<Effect, Trap> {
    // Validate the destination before SP moves.
    let _ = cpu.regs.read(inst.operand_a)?;
    let val = cpu.pop_byte()?;
    cpu.regs.write(inst.operand_a, val)?;
    Ok(Effect::Continue)
}

/// ALU instructions: `r[a] = r[a] op r[b]`, keyed by opcode.
///
/// Shared by every ALU opcode. Opcodes the ALU does not implement report
/// [`Trap::UnsupportedOperation`].
///
/// # Errors
///
/// Traps on a bad register index or an unsupported opcode.
pub fn alu(cpu: &mut Cpu, inst: Instruction) -> Result<Effect, Trap> {
    let a = cpu.regs.read(inst.operand_a)?;
    let b = cpu.regs.read(inst.operand_b)?;
    let result = Alu::execute(inst.opcode, a, b)?;
    cpu.regs.write(inst.operand_a, result)?;
    Ok(Effect::Continue)
}
