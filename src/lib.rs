//! Emulator core for the MOS Technology 65xx family of 8-bit CPUs.
//!
//! The crate models the documented 6502 instruction set plus the commonly
//! relied-upon NMOS illegal opcodes, binary and decimal arithmetic,
//! page-cross and branch cycle penalties, interrupt sequencing, and a
//! pluggable 16-bit memory bus with bank-switching support.
//!
//! ```
//! use mos65xx::memory::{Memory, Ram};
//! use mos65xx::model::MOS6502;
//! use mos65xx::Cpu;
//!
//! let mut ram = Ram::new(0x10000);
//! ram.load(0x8000, &[0xA9, 0x42]); // LDA #$42
//! ram.store(0xFFFC, 0x00);
//! ram.store(0xFFFD, 0x80);
//!
//! let mut cpu = Cpu::new(MOS6502, &mut ram);
//! let cycles = cpu.step();
//! assert_eq!(cycles, 2);
//! ```

pub mod cpu;
pub mod memory;
pub mod model;
pub mod monitor;
pub mod opcode;

pub use cpu::{Cpu, Interrupt, Registers};
pub use cpu::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use model::Model;
pub use monitor::{Instruction, Monitor, MonitorFn};
pub use opcode::{AddressMode, Mnemonic, Opcode, OPCODES};
