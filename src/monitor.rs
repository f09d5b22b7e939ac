//! Observation hook invoked before each instruction executes.

use crate::cpu::{Cpu, Registers};
use crate::opcode::{AddressMode, Mnemonic};

/// Snapshot of the instruction about to execute, handed to the attached
/// [`Monitor`].
#[derive(Clone, Copy, Debug)]
pub struct Instruction {
    /// Cycles elapsed on the CPU before this instruction.
    pub cycles: u64,
    pub mnemonic: Mnemonic,
    /// Register state at fetch time.
    pub registers: Registers,
    pub mode: AddressMode,

    raw: [u8; 3],
    size: u8,
}

impl Instruction {
    pub(crate) fn new(
        cycles: u64,
        mnemonic: Mnemonic,
        registers: Registers,
        mode: AddressMode,
        raw: [u8; 3],
        size: u8,
    ) -> Self {
        Self {
            cycles,
            mnemonic,
            registers,
            mode,
            raw,
            size,
        }
    }

    /// The instruction bytes as fetched from PC: opcode plus operand.
    pub fn raw(&self) -> &[u8] {
        &self.raw[..self.size as usize]
    }

    /// The opcode byte.
    pub fn opcode(&self) -> u8 {
        self.raw[0]
    }
}

/// Observer attached to a CPU with [`Cpu::attach`].
///
/// `before_execute` runs once per step, before address resolution.
/// Returning `false` vetoes the instruction: the step spends no cycles
/// and leaves the CPU untouched.
pub trait Monitor {
    fn before_execute(&mut self, cpu: &mut Cpu<'_>, instruction: &Instruction) -> bool;
}

/// Adapter turning a closure into a [`Monitor`]; handy for tracing and
/// for test harness stop conditions.
pub struct MonitorFn<F>(pub F);

impl<F> Monitor for MonitorFn<F>
where
    F: FnMut(&mut Cpu<'_>, &Instruction) -> bool,
{
    fn before_execute(&mut self, cpu: &mut Cpu<'_>, instruction: &Instruction) -> bool {
        (self.0)(cpu, instruction)
    }
}
