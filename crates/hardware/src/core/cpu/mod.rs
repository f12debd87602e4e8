//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, stack pointer, flags, run state.
//! 2. **Memory:** The 256-byte main memory and its shadow registers.
//! 3. **Dispatch:** The opcode-indexed handler table consulted on every step.
//! 4. **Observability:** Trace lines, state dumps, and execution statistics.

/// Opcode-indexed handler table and the built-in instruction handlers.
pub mod dispatch;

/// Fetch, decode, and dispatch loop.
pub mod execution;

/// Main memory and stack access.
pub mod memory;

use std::fmt::Write as _;

use tracing::error;

use self::dispatch::DispatchTable;
use self::memory::Memory;
use crate::common::RegisterFile;
use crate::config::Config;
use crate::stats::ExecStats;

/// Whether the CPU will fetch another instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Fetching and executing instructions.
    #[default]
    Running,
    /// A handler returned [`Effect::Halt`]; no further fetch occurs.
    Halted,
}

/// What a handler asks the execution loop to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Advance PC past the instruction and keep going.
    Continue,
    /// Emit a value on the output stream, then advance PC.
    Output(u8),
    /// Stop the run and enter [`RunState::Halted`]; PC stays on the instruction.
    Halt,
}

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers `R0`-`R7`.
    pub regs: RegisterFile,
    /// Main memory.
    pub ram: Memory,
    /// Program Counter.
    pub pc: usize,
    /// Stack Pointer.
    pub sp: u8,
    /// Flags register, reserved for comparison results.
    pub fl: u8,
    /// Running or halted.
    pub state: RunState,
    /// Log a trace line before every step.
    pub trace: bool,
    /// Execution statistics.
    pub stats: ExecStats,
    stack_top: u8,
    dispatch: DispatchTable,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Cpu {
    /// Creates a new CPU with zeroed memory and registers.
    ///
    /// # Arguments
    ///
    /// * `config` - Run configuration (stack reset value, tracing).
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            ram: Memory::new(),
            pc: 0,
            sp: config.system.stack_top,
            fl: 0,
            state: RunState::Running,
            trace: config.general.trace_instructions,
            stats: ExecStats::default(),
            stack_top: config.system.stack_top,
            dispatch: DispatchTable::new(),
        }
    }

    /// Returns `true` once a halt instruction has retired.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Stack pointer value at reset.
    pub const fn stack_top(&self) -> u8 {
        self.stack_top
    }

    /// The opcode-indexed handler table.
    pub const fn dispatch(&self) -> &DispatchTable {
        &self.dispatch
    }

    /// Mutable access to the handler table, for registering new opcodes.
    pub const fn dispatch_mut(&mut self) -> &mut DispatchTable {
        &mut self.dispatch
    }

    /// Renders one trace line: `TRACE: PC | IR A B | R0 .. R7`.
    ///
    /// Reads memory without touching `MAR`/`MDR`; bytes past the end of memory
    /// show as `00`.
    pub fn trace_line(&self) -> String {
        let byte = |offset: usize| self.ram.peek(self.pc + offset).unwrap_or(0);
        format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} | {}",
            self.pc,
            byte(0),
            byte(1),
            byte(2),
            self.regs.dump()
        )
    }

    /// Formats the architectural state for a post-mortem report.
    pub fn state_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "pc={:#04x} sp={:#04x} fl={:#04x} mar={:#04x} mdr={:#04x} state={:?}",
            self.pc,
            self.sp,
            self.fl,
            self.ram.mar(),
            self.ram.mdr(),
            self.state
        );
        for (i, val) in self.regs.as_slice().iter().enumerate() {
            let _ = write!(out, "R{i}={val:#04x} ");
        }
        out.trim_end().to_string()
    }

    /// Logs the current CPU state at error level.
    pub fn dump_state(&self) {
        for line in self.state_summary().lines() {
            error!(target: "ls8::cpu", "{line}");
        }
    }
}
