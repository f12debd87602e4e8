//! Execution statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Throughput:** Retired instructions and host wall-clock time.
//! 2. **Instruction mix:** Counts by class (load, I/O, stack, ALU, control).
//! 3. **Stack usage:** Deepest stack reached during the run.

use std::fmt;
use std::time::Instant;

/// Instruction classes used for the instruction mix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstClass {
    /// Immediate loads into registers.
    Load,
    /// Output instructions.
    Io,
    /// Push and pop.
    Stack,
    /// Register-to-register arithmetic.
    Alu,
    /// Halt.
    Control,
}

/// Execution statistics for one run.
#[derive(Clone, Debug)]
pub struct ExecStats {
    start_time: Instant,
    /// Number of instructions that completed without trapping.
    pub instructions_retired: u64,
    /// Count of immediate loads retired.
    pub inst_load: u64,
    /// Count of output instructions retired.
    pub inst_io: u64,
    /// Count of push/pop instructions retired.
    pub inst_stack: u64,
    /// Count of ALU instructions retired.
    pub inst_alu: u64,
    /// Count of control instructions retired.
    pub inst_control: u64,
    /// Deepest stack depth reached, in bytes.
    pub peak_stack_depth: usize,
    /// Number of traps taken (0 or 1: a trap ends the run).
    pub traps_taken: u64,
}

impl Default for ExecStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_load: 0,
            inst_io: 0,
            inst_stack: 0,
            inst_alu: 0,
            inst_control: 0,
            peak_stack_depth: 0,
            traps_taken: 0,
        }
    }
}

impl ExecStats {
    /// Records one retired instruction of the given class.
    pub const fn retire(&mut self, class: InstClass) {
        self.instructions_retired += 1;
        match class {
            InstClass::Load => self.inst_load += 1,
            InstClass::Io => self.inst_io += 1,
            InstClass::Stack => self.inst_stack += 1,
            InstClass::Alu => self.inst_alu += 1,
            InstClass::Control => self.inst_control += 1,
        }
    }

    /// Updates the peak stack depth.
    pub fn observe_stack_depth(&mut self, depth: usize) {
        self.peak_stack_depth = self.peak_stack_depth.max(depth);
    }
}

impl fmt::Display for ExecStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        writeln!(f, "==========================================================")?;
        writeln!(f, "LS-8 EXECUTION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "traps                    {}", self.traps_taken)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        writeln!(f, "  load                   {}", self.inst_load)?;
        writeln!(f, "  io                     {}", self.inst_io)?;
        writeln!(f, "  stack                  {}", self.inst_stack)?;
        writeln!(f, "  alu                    {}", self.inst_alu)?;
        writeln!(f, "  control                {}", self.inst_control)?;
        writeln!(f, "----------------------------------------------------------")?;
        write!(f, "stack.peak_depth         {} bytes", self.peak_stack_depth)
    }
}
