//! Main Execution Loop.
//!
//! This module implements the fetch, decode, dispatch cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the opcode at PC.
//! 2. **Dispatch:** Looks the opcode up in the flat handler table; misses are fatal.
//!    Only then are the two bytes after it prefetched as operands.
//! 3. **Advance:** Moves PC past the instruction using the operand count in bits 7-6.
//! 4. **Observability:** Emits trace lines and keeps execution statistics.

use std::io::Write;

use tracing::{debug, trace};

use super::{Cpu, Effect, RunState};
use crate::common::constants::OPERAND_PREFETCH;
use crate::common::{AccessType, SimError, Trap};
use crate::isa::disasm::disassemble;
use crate::isa::instruction::{Instruction, InstructionBits};

impl Cpu {
    /// Fetches the instruction at PC.
    ///
    /// Both trailing bytes are always read. A trailing byte past the end of
    /// memory traps only if the opcode's operand count says it is used;
    /// otherwise it reads as 0.
    ///
    /// # Errors
    ///
    /// Returns [`Trap::AddressOutOfRange`] if PC, or a used operand, is outside memory.
    pub fn fetch(&mut self) -> Result<Instruction, Trap> {
        let opcode = self.ram.read(self.pc, AccessType::Fetch)?;
        self.fetch_operands(opcode)
    }

    fn fetch_operands(&mut self, opcode: u8) -> Result<Instruction, Trap> {
        let pc = self.pc;
        let used = opcode.operand_count() as usize;

        let mut operands = [0u8; OPERAND_PREFETCH];
        for (k, slot) in operands.iter_mut().enumerate() {
            let address = pc + 1 + k;
            *slot = if k < used {
                self.ram.read(address, AccessType::Fetch)?
            } else {
                self.ram.peek(address).unwrap_or(0)
            };
        }

        Ok(Instruction {
            pc,
            opcode,
            operand_a: operands[0],
            operand_b: operands[1],
        })
    }

    /// Executes one instruction.
    ///
    /// On a halted CPU this does nothing and returns [`Effect::Halt`]. On a trap,
    /// PC and all other state are left as they were at the faulting instruction.
    ///
    /// # Errors
    ///
    /// Returns the [`Trap`] raised by the fetch or the handler.
    pub fn step(&mut self) -> Result<Effect, Trap> {
        if self.is_halted() {
            return Ok(Effect::Halt);
        }
        if self.trace {
            trace!(target: "ls8::trace", "{}", self.trace_line());
        }

        let result = self.execute_one();
        if let Err(ref trap) = result {
            self.stats.traps_taken += 1;
            debug!(pc = self.pc, %trap, "trap");
        }
        result
    }

    fn execute_one(&mut self) -> Result<Effect, Trap> {
        // Unknown opcodes trap before any operand is prefetched.
        let opcode = self.ram.read(self.pc, AccessType::Fetch)?;
        let entry = self.dispatch().lookup(opcode).ok_or(Trap::UnknownOpcode {
            opcode,
            pc: self.pc,
        })?;
        let inst = self.fetch_operands(opcode)?;

        if self.trace {
            trace!(
                target: "ls8::trace",
                "{:02X}: {}",
                inst.pc,
                disassemble(inst.opcode, inst.operand_a, inst.operand_b)
            );
        }

        let effect = (entry.handler)(self, inst)?;
        self.stats.retire(entry.class);

        match effect {
            Effect::Halt => {
                self.state = RunState::Halted;
                debug!(pc = inst.pc, "halted");
            }
            Effect::Continue | Effect::Output(_) => self.pc = inst.next_pc(),
        }
        Ok(effect)
    }

    /// Runs until a halt instruction retires, writing each printed value to
    /// `out` as a decimal line.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Trap`] if execution traps (state is preserved for
    /// inspection) and [`SimError::Output`] if writing to `out` fails.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), SimError> {
        loop {
            match self.step()? {
                Effect::Continue => {}
                Effect::Output(val) => writeln!(out, "{val}")?,
                Effect::Halt => break,
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Runs to halt and collects the printed values instead of writing them.
    ///
    /// # Errors
    ///
    /// Returns the [`Trap`] that stopped execution.
    pub fn run_collect(&mut self) -> Result<Vec<u8>, Trap> {
        let mut printed = Vec::new();
        loop {
            match self.step()? {
                Effect::Continue => {}
                Effect::Output(val) => printed.push(val),
                Effect::Halt => return Ok(printed),
            }
        }
    }
}
