//! The 65xx interpreter core: registers, interrupt sequencing, and the
//! fetch–decode–execute loop.

use std::fmt;

use crate::memory::{fetch_word, fetch_word_bug, Memory, Ram, ADDRESS_SPACE};
use crate::model::Model;
use crate::monitor::{Instruction, Monitor};
use crate::opcode::{AddressMode, Mnemonic, OPCODES};

mod alu;


pub const FLAG_CARRY: u8 = 0b0000_0001;
pub const FLAG_ZERO: u8 = 0b0000_0010;
pub const FLAG_INTERRUPT_DISABLE: u8 = 0b0000_0100;
pub const FLAG_DECIMAL: u8 = 0b0000_1000;
/// Set only in copies of the status register pushed by BRK and PHP.
pub const FLAG_BREAK: u8 = 0b0001_0000;
/// Hardwired high; always set in pushed and restored status bytes.
pub const FLAG_UNUSED: u8 = 0b0010_0000;
pub const FLAG_OVERFLOW: u8 = 0b0100_0000;
pub const FLAG_NEGATIVE: u8 = 0b1000_0000;

pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

const STACK_BASE: u16 = 0x0100;

/// The architectural register file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct Registers {
    /// Program counter.
    pub pc: u16,
    /// Stack pointer; the stack lives at `0x0100 | sp` and grows down.
    pub sp: u8,
    /// Processor status, `NV-BDIZC` from bit 7 down.
    pub status: u8,
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
}

impl Registers {
    pub fn flag(&self, mask: u8) -> bool {
        self.status & mask != 0
    }

    pub fn set_flag(&mut self, mask: u8, on: bool) {
        if on {
            self.status |= mask;
        } else {
            self.status &= !mask;
        }
    }

    pub fn update_zero_and_negative(&mut self, value: u8) {
        self.set_flag(FLAG_ZERO, value == 0);
        self.set_flag(FLAG_NEGATIVE, value & 0x80 != 0);
    }

    /// CMP/CPX/CPY flag outcome for `a` against `b`.
    fn compare(&mut self, a: u8, b: u8) {
        self.set_flag(FLAG_CARRY, a >= b);
        self.set_flag(FLAG_ZERO, a == b);
        self.set_flag(FLAG_NEGATIVE, a.wrapping_sub(b) & 0x80 != 0);
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = ['·'; 8];
        for (i, c) in "NVUBDIZC".chars().enumerate() {
            if self.status & 1 << (7 - i) != 0 {
                flags[i] = c;
            }
        }
        let flags: String = flags.iter().collect();
        write!(
            f,
            "PC:{:04X} A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} P:{:02X}({})",
            self.pc, self.a, self.x, self.y, self.sp, self.status, flags
        )
    }
}

/// Interrupt latched for service at the next step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interrupt {
    #[default]
    None,
    Irq,
    Nmi,
}

/// A 65xx processor wired to a host-provided bus.
///
/// The CPU owns its register file and, when the model calls for it, an
/// internal low-memory RAM block; everything else is reached through the
/// borrowed [`Memory`] bus. Construction performs the reset sequence, so
/// the reset vector must already be populated.
pub struct Cpu<'m> {
    reg: Registers,
    model: Model,
    bus: &'m mut (dyn Memory + 'm),
    ram: Option<Ram>,
    monitor: Option<&'m mut (dyn Monitor + 'm)>,

    interrupt: Interrupt,
    mode: AddressMode,
    cycles: u64,
    halted: bool,
    not_ready: bool,
}

impl<'m> Cpu<'m> {
    /// Create a CPU for `model` on `bus` and reset it.
    pub fn new(model: Model, bus: &'m mut (dyn Memory + 'm)) -> Self {
        let ram = (model.internal_memory > 0).then(|| {
            let mut ram = Ram::new(model.internal_memory);
            ram.reset(0xFF);
            ram
        });
        let mut cpu = Self {
            reg: Registers::default(),
            model,
            bus,
            ram,
            monitor: None,
            interrupt: Interrupt::None,
            mode: AddressMode::Implied,
            cycles: 0,
            halted: false,
            not_ready: false,
        };
        cpu.reset();
        cpu
    }

    /// Mutable handle to the register file.
    pub fn registers(&mut self) -> &mut Registers {
        &mut self.reg
    }

    pub fn model(&self) -> Model {
        self.model
    }

    /// True once a HLT opcode has been executed.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Cold reset: load PC from the reset vector and restore the power-on
    /// stack pointer and status byte.
    pub fn reset(&mut self) {
        self.reg.pc = fetch_word(self, RESET_VECTOR);
        self.reg.sp = 0xFD;
        self.reg.status = 0x34;
        self.interrupt = Interrupt::None;
        self.halted = false;
        self.not_ready = false;
    }

    /// Request a maskable interrupt. Ignored on models without the IRQ
    /// pin; does not displace a pending NMI.
    pub fn irq(&mut self) {
        if !self.model.has_irq {
            return;
        }
        if self.interrupt == Interrupt::None {
            self.interrupt = Interrupt::Irq;
        }
    }

    /// Request a non-maskable interrupt. Ignored on models without the
    /// NMI pin.
    pub fn nmi(&mut self) {
        if !self.model.has_nmi {
            return;
        }
        self.interrupt = Interrupt::Nmi;
    }

    /// Drive the RDY line; while low the CPU stalls and `step` spends no
    /// cycles. Ignored on models without the pin.
    pub fn ready(&mut self, on: bool) {
        if !self.model.has_ready {
            return;
        }
        self.not_ready = !on;
    }

    /// Attach `monitor`, replacing any previous one.
    pub fn attach(&mut self, monitor: &'m mut (dyn Monitor + 'm)) {
        self.monitor = Some(monitor);
    }

    pub fn detach(&mut self) {
        self.monitor = None;
    }

    /// Fetch a byte from internal RAM or the external bus.
    pub fn fetch(&mut self, addr: u16) -> u8 {
        match &mut self.ram {
            Some(ram) if (addr as usize) < ram.len() => ram.fetch(addr),
            _ => self.bus.fetch(addr),
        }
    }

    /// Store a byte to internal RAM or the external bus.
    pub fn store(&mut self, addr: u16, value: u8) {
        match &mut self.ram {
            Some(ram) if (addr as usize) < ram.len() => ram.store(addr, value),
            _ => self.bus.store(addr, value),
        }
    }

    /// Bulk read of addressable memory, truncating at the end of the
    /// 16-bit space. Returns the byte count and the end-of-space flag.
    pub fn read_at(&mut self, buf: &mut [u8], offset: u32) -> (usize, bool) {
        if offset >= ADDRESS_SPACE {
            return (0, true);
        }
        let n = buf.len().min((ADDRESS_SPACE - offset) as usize);
        let mut copied = 0;
        if let Some(ram) = &mut self.ram {
            if (offset as usize) < ram.len() {
                let take = n.min(ram.len() - offset as usize);
                let (m, _) = ram.read_at(&mut buf[..take], offset);
                copied = m;
            }
        }
        if copied < n {
            let (m, _) = self.bus.read_at(&mut buf[copied..n], offset + copied as u32);
            copied += m;
        }
        (copied, copied < buf.len())
    }

    /// Execute one instruction and return the cycles it consumed,
    /// including any interrupt entry serviced first.
    pub fn step(&mut self) -> u32 {
        if self.not_ready {
            return 0;
        }

        let start = self.cycles;
        self.service_interrupt();

        let opcode = OPCODES[self.fetch(self.reg.pc) as usize];

        if let Some(monitor) = self.monitor.take() {
            let mut raw = [0u8; 3];
            self.read_at(&mut raw[..opcode.size as usize], self.reg.pc as u32);
            let instruction = Instruction::new(
                self.cycles,
                opcode.mnemonic,
                self.reg,
                opcode.mode,
                raw,
                opcode.size,
            );
            let proceed = monitor.before_execute(self, &instruction);
            self.monitor = Some(monitor);
            if !proceed {
                // The vetoed instruction spends nothing, but an interrupt
                // entry serviced above already did.
                return (self.cycles - start) as u32;
            }
        }

        self.mode = opcode.mode;
        let (page_crossed, addr) = self.resolve_addr();
        if page_crossed {
            self.cycles += opcode.page_cross_cycles as u64;
        }

        self.reg.pc = self.reg.pc.wrapping_add(opcode.size as u16);
        self.execute(opcode.mnemonic, addr);
        self.cycles += opcode.cycles as u64;

        (self.cycles - start) as u32
    }

    /// Step until a HLT opcode traps the processor; returns the cycles
    /// spent.
    pub fn run(&mut self) -> u64 {
        self.cycles = 0;
        self.halted = false;
        while !self.halted {
            self.step();
        }
        self.cycles
    }

    fn service_interrupt(&mut self) {
        match self.interrupt {
            Interrupt::None => {}
            Interrupt::Nmi => {
                self.interrupt = Interrupt::None;
                self.enter_interrupt(NMI_VECTOR);
            }
            Interrupt::Irq => {
                // Gated on I: the latch holds until interrupts are
                // enabled, like a level-triggered request line.
                if !self.reg.flag(FLAG_INTERRUPT_DISABLE) {
                    self.interrupt = Interrupt::None;
                    self.enter_interrupt(IRQ_VECTOR);
                }
            }
        }
    }

    fn enter_interrupt(&mut self, vector: u16) {
        self.push_word(self.reg.pc);
        self.push(self.reg.status & !FLAG_BREAK | FLAG_UNUSED);
        self.reg.status |= FLAG_INTERRUPT_DISABLE;
        self.reg.pc = fetch_word(self, vector);
        self.cycles += 7;
    }

    /// Effective address and page-cross flag for the current mode.
    fn resolve_addr(&mut self) -> (bool, u16) {
        let pc = self.reg.pc;
        match self.mode {
            AddressMode::Implied | AddressMode::Accumulator => (false, 0),
            AddressMode::Immediate => (false, pc.wrapping_add(1)),
            AddressMode::ZeroPage => (false, self.fetch(pc.wrapping_add(1)) as u16),
            AddressMode::ZeroPageX => {
                let x = self.reg.x;
                (false, self.fetch(pc.wrapping_add(1)).wrapping_add(x) as u16)
            }
            AddressMode::ZeroPageY => {
                let y = self.reg.y;
                (false, self.fetch(pc.wrapping_add(1)).wrapping_add(y) as u16)
            }
            AddressMode::Relative => {
                let off = self.fetch(pc.wrapping_add(1)) as i8;
                (false, pc.wrapping_add(2).wrapping_add(off as u16))
            }
            AddressMode::Absolute => (false, fetch_word(self, pc.wrapping_add(1))),
            AddressMode::AbsoluteX => {
                let base = fetch_word(self, pc.wrapping_add(1));
                let addr = base.wrapping_add(self.reg.x as u16);
                (different_page(base, addr), addr)
            }
            AddressMode::AbsoluteY => {
                let base = fetch_word(self, pc.wrapping_add(1));
                let addr = base.wrapping_add(self.reg.y as u16);
                (different_page(base, addr), addr)
            }
            AddressMode::Indirect => {
                // The pointer word reads normally; the word read through
                // it reproduces the $xxFF page-boundary bug.
                let ptr = fetch_word(self, pc.wrapping_add(1));
                (false, fetch_word_bug(self, ptr))
            }
            AddressMode::IndexedIndirect => {
                let ptr = self.fetch(pc.wrapping_add(1)).wrapping_add(self.reg.x);
                let lo = self.fetch(ptr as u16) as u16;
                let hi = self.fetch(ptr.wrapping_add(1) as u16) as u16;
                (false, hi << 8 | lo)
            }
            AddressMode::IndirectIndexed => {
                let ptr = self.fetch(pc.wrapping_add(1));
                let lo = self.fetch(ptr as u16) as u16;
                let hi = self.fetch(ptr.wrapping_add(1) as u16) as u16;
                let base = hi << 8 | lo;
                let addr = base.wrapping_add(self.reg.y as u16);
                (different_page(base, addr), addr)
            }
        }
    }

    fn execute(&mut self, mnemonic: Mnemonic, addr: u16) {
        use Mnemonic::*;
        match mnemonic {
            ADC => self.adc(addr),
            AND => self.and(addr),
            ASL => self.asl(addr),
            BCC => self.branch_if(!self.reg.flag(FLAG_CARRY), addr),
            BCS => self.branch_if(self.reg.flag(FLAG_CARRY), addr),
            BEQ => self.branch_if(self.reg.flag(FLAG_ZERO), addr),
            BIT => self.bit(addr),
            BMI => self.branch_if(self.reg.flag(FLAG_NEGATIVE), addr),
            BNE => self.branch_if(!self.reg.flag(FLAG_ZERO), addr),
            BPL => self.branch_if(!self.reg.flag(FLAG_NEGATIVE), addr),
            BRK => self.brk(),
            BVC => self.branch_if(!self.reg.flag(FLAG_OVERFLOW), addr),
            BVS => self.branch_if(self.reg.flag(FLAG_OVERFLOW), addr),
            CLC => self.reg.set_flag(FLAG_CARRY, false),
            CLD => self.reg.set_flag(FLAG_DECIMAL, false),
            CLI => self.reg.set_flag(FLAG_INTERRUPT_DISABLE, false),
            CLV => self.reg.set_flag(FLAG_OVERFLOW, false),
            CMP => {
                let value = self.fetch(addr);
                self.reg.compare(self.reg.a, value);
            }
            CPX => {
                let value = self.fetch(addr);
                self.reg.compare(self.reg.x, value);
            }
            CPY => {
                let value = self.fetch(addr);
                self.reg.compare(self.reg.y, value);
            }
            DEC => self.dec(addr),
            DEX => {
                self.reg.x = self.reg.x.wrapping_sub(1);
                self.reg.update_zero_and_negative(self.reg.x);
            }
            DEY => {
                self.reg.y = self.reg.y.wrapping_sub(1);
                self.reg.update_zero_and_negative(self.reg.y);
            }
            EOR => {
                self.reg.a ^= self.fetch(addr);
                self.reg.update_zero_and_negative(self.reg.a);
            }
            INC => self.inc(addr),
            INX => {
                self.reg.x = self.reg.x.wrapping_add(1);
                self.reg.update_zero_and_negative(self.reg.x);
            }
            INY => {
                self.reg.y = self.reg.y.wrapping_add(1);
                self.reg.update_zero_and_negative(self.reg.y);
            }
            JMP => self.reg.pc = addr,
            JSR => {
                self.push_word(self.reg.pc.wrapping_sub(1));
                self.reg.pc = addr;
            }
            LDA => {
                self.reg.a = self.fetch(addr);
                self.reg.update_zero_and_negative(self.reg.a);
            }
            LDX => {
                self.reg.x = self.fetch(addr);
                self.reg.update_zero_and_negative(self.reg.x);
            }
            LDY => {
                self.reg.y = self.fetch(addr);
                self.reg.update_zero_and_negative(self.reg.y);
            }
            LSR => self.lsr(addr),
            NOP => {}
            ORA => {
                self.reg.a |= self.fetch(addr);
                self.reg.update_zero_and_negative(self.reg.a);
            }
            PHA => self.push(self.reg.a),
            PHP => self.push(self.reg.status | FLAG_BREAK | FLAG_UNUSED),
            PLA => {
                self.reg.a = self.pull();
                self.reg.update_zero_and_negative(self.reg.a);
            }
            PLP => {
                let status = self.pull();
                self.reg.status = status & !FLAG_BREAK | FLAG_UNUSED;
            }
            ROL => self.rol(addr),
            ROR => self.ror(addr),
            RTI => {
                let status = self.pull();
                self.reg.status = status & !FLAG_BREAK | FLAG_UNUSED;
                self.reg.pc = self.pull_word();
            }
            RTS => self.reg.pc = self.pull_word().wrapping_add(1),
            SBC => self.sbc(addr),
            SEC => self.reg.set_flag(FLAG_CARRY, true),
            SED => self.reg.set_flag(FLAG_DECIMAL, true),
            SEI => self.reg.set_flag(FLAG_INTERRUPT_DISABLE, true),
            STA => self.store(addr, self.reg.a),
            STX => self.store(addr, self.reg.x),
            STY => self.store(addr, self.reg.y),
            TAX => {
                self.reg.x = self.reg.a;
                self.reg.update_zero_and_negative(self.reg.x);
            }
            TAY => {
                self.reg.y = self.reg.a;
                self.reg.update_zero_and_negative(self.reg.y);
            }
            TSX => {
                self.reg.x = self.reg.sp;
                self.reg.update_zero_and_negative(self.reg.x);
            }
            TXA => {
                self.reg.a = self.reg.x;
                self.reg.update_zero_and_negative(self.reg.a);
            }
            TXS => self.reg.sp = self.reg.x,
            TYA => {
                self.reg.a = self.reg.y;
                self.reg.update_zero_and_negative(self.reg.a);
            }
            HLT => {
                // Roll PC back onto the HLT byte so re-execution traps
                // again.
                self.reg.pc = self.reg.pc.wrapping_sub(1);
                self.halted = true;
            }
            LAX => {
                self.reg.a = self.fetch(addr);
                self.reg.x = self.reg.a;
                self.reg.update_zero_and_negative(self.reg.a);
            }
            SAX => self.store(addr, self.reg.a & self.reg.x),
            DCP => {
                let value = self.fetch(addr).wrapping_sub(1);
                self.store(addr, value);
                self.reg.compare(self.reg.a, value);
            }
            ISC => {
                let value = self.fetch(addr).wrapping_add(1);
                self.store(addr, value);
                self.subtract_from_accumulator(value);
            }
            RLA => {
                let value = self.fetch(addr);
                let result = value << 1 | self.reg.flag(FLAG_CARRY) as u8;
                self.store(addr, result);
                self.reg.set_flag(FLAG_CARRY, value & 0x80 != 0);
                self.reg.a &= result;
                self.reg.update_zero_and_negative(self.reg.a);
            }
            RRA => {
                let value = self.fetch(addr);
                let result = value >> 1 | (self.reg.flag(FLAG_CARRY) as u8) << 7;
                self.store(addr, result);
                self.reg.set_flag(FLAG_CARRY, value & 0x01 != 0);
                self.add_to_accumulator(result);
            }
            SLO => {
                let value = self.fetch(addr);
                let result = value << 1;
                self.store(addr, result);
                self.reg.set_flag(FLAG_CARRY, value & 0x80 != 0);
                self.reg.a |= result;
                self.reg.update_zero_and_negative(self.reg.a);
            }
            SRE => {
                let value = self.fetch(addr);
                let result = value >> 1;
                self.store(addr, result);
                self.reg.set_flag(FLAG_CARRY, value & 0x01 != 0);
                self.reg.a ^= result;
                self.reg.update_zero_and_negative(self.reg.a);
            }
            ANC => {
                self.reg.a &= self.fetch(addr);
                self.reg.update_zero_and_negative(self.reg.a);
                let negative = self.reg.flag(FLAG_NEGATIVE);
                self.reg.set_flag(FLAG_CARRY, negative);
            }
            ALR => {
                let a = self.reg.a & self.fetch(addr);
                self.reg.set_flag(FLAG_CARRY, a & 0x01 != 0);
                self.reg.a = a >> 1;
                self.reg.update_zero_and_negative(self.reg.a);
            }
            ARR => {
                let a = self.reg.a & self.fetch(addr);
                let carry_in = self.reg.flag(FLAG_CARRY) as u8;
                self.reg.a = a >> 1 | carry_in << 7;
                self.reg.update_zero_and_negative(self.reg.a);
                let b5 = self.reg.a & 0x20 != 0;
                let b6 = self.reg.a & 0x40 != 0;
                self.reg.set_flag(FLAG_CARRY, b6);
                self.reg.set_flag(FLAG_OVERFLOW, b5 != b6);
            }
            XAA => {
                // Unstable on silicon; emulated deterministically.
                self.reg.a = self.reg.x & self.fetch(addr);
                self.reg.update_zero_and_negative(self.reg.a);
            }
            AHX => {
                let value = ((addr >> 8) as u8).wrapping_add(1) & self.reg.a & self.reg.x;
                self.store(addr, value);
            }
            TAS => self.tas(addr),
            SHX => {
                let value = ((addr >> 8) as u8).wrapping_add(1) & self.reg.x;
                self.store(addr, value);
            }
            SHY => {
                let value = ((addr >> 8) as u8).wrapping_add(1) & self.reg.y;
                self.store(addr, value);
            }
            LAS => {
                let value = self.fetch(addr) & self.reg.sp;
                self.reg.sp = value;
                self.reg.x = value;
                self.reg.a = value;
                self.reg.update_zero_and_negative(self.reg.a);
            }
            AXS => {
                let a = self.reg.a & self.reg.x;
                let value = self.fetch(addr);
                self.reg.x = a.wrapping_sub(value);
                self.reg.set_flag(FLAG_CARRY, a >= value);
                self.reg.update_zero_and_negative(self.reg.x);
            }
        }
    }

    // Stack

    fn push(&mut self, value: u8) {
        self.store(STACK_BASE | self.reg.sp as u16, value);
        self.reg.sp = self.reg.sp.wrapping_sub(1);
    }

    fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    fn pull(&mut self) -> u8 {
        self.reg.sp = self.reg.sp.wrapping_add(1);
        self.fetch(STACK_BASE | self.reg.sp as u16)
    }

    fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        hi << 8 | lo
    }

    // Arithmetic

    fn adc(&mut self, addr: u16) {
        let value = self.fetch(addr);
        self.add_to_accumulator(value);
    }

    fn sbc(&mut self, addr: u16) {
        let value = self.fetch(addr);
        self.subtract_from_accumulator(value);
    }

    fn add_to_accumulator(&mut self, value: u8) {
        let out = alu::adc(
            self.reg.a,
            value,
            self.reg.flag(FLAG_CARRY),
            self.reg.flag(FLAG_DECIMAL) && self.model.has_bcd,
        );
        self.reg.a = out.value;
        self.apply_alu_flags(&out);
    }

    fn subtract_from_accumulator(&mut self, value: u8) {
        let out = alu::sbc(
            self.reg.a,
            value,
            self.reg.flag(FLAG_CARRY),
            self.reg.flag(FLAG_DECIMAL) && self.model.has_bcd,
        );
        self.reg.a = out.value;
        self.apply_alu_flags(&out);
    }

    fn apply_alu_flags(&mut self, out: &alu::Output) {
        self.reg.set_flag(FLAG_NEGATIVE, out.n);
        self.reg.set_flag(FLAG_OVERFLOW, out.v);
        self.reg.set_flag(FLAG_ZERO, out.z);
        self.reg.set_flag(FLAG_CARRY, out.c);
    }

    // Logic and shifts

    fn and(&mut self, addr: u16) {
        self.reg.a &= self.fetch(addr);
        self.reg.update_zero_and_negative(self.reg.a);
    }

    fn bit(&mut self, addr: u16) {
        let value = self.fetch(addr);
        self.reg.set_flag(FLAG_OVERFLOW, value & 0x40 != 0);
        self.reg.set_flag(FLAG_NEGATIVE, value & 0x80 != 0);
        self.reg.set_flag(FLAG_ZERO, value & self.reg.a == 0);
    }

    fn asl(&mut self, addr: u16) {
        let value = self.read_operand(addr);
        let result = value << 1;
        self.reg.set_flag(FLAG_CARRY, value & 0x80 != 0);
        self.write_operand(addr, result);
        self.reg.update_zero_and_negative(result);
    }

    fn lsr(&mut self, addr: u16) {
        let value = self.read_operand(addr);
        let result = value >> 1;
        self.reg.set_flag(FLAG_CARRY, value & 0x01 != 0);
        self.write_operand(addr, result);
        self.reg.update_zero_and_negative(result);
    }

    fn rol(&mut self, addr: u16) {
        let value = self.read_operand(addr);
        let result = value << 1 | self.reg.flag(FLAG_CARRY) as u8;
        self.reg.set_flag(FLAG_CARRY, value & 0x80 != 0);
        self.write_operand(addr, result);
        self.reg.update_zero_and_negative(result);
    }

    fn ror(&mut self, addr: u16) {
        let value = self.read_operand(addr);
        let result = value >> 1 | (self.reg.flag(FLAG_CARRY) as u8) << 7;
        self.reg.set_flag(FLAG_CARRY, value & 0x01 != 0);
        self.write_operand(addr, result);
        self.reg.update_zero_and_negative(result);
    }

    /// Shift/rotate source: the accumulator in Accumulator mode, memory
    /// otherwise.
    fn read_operand(&mut self, addr: u16) -> u8 {
        if self.mode == AddressMode::Accumulator {
            self.reg.a
        } else {
            self.fetch(addr)
        }
    }

    fn write_operand(&mut self, addr: u16, value: u8) {
        if self.mode == AddressMode::Accumulator {
            self.reg.a = value;
        } else {
            self.store(addr, value);
        }
    }

    // Memory increment/decrement

    fn inc(&mut self, addr: u16) {
        let value = self.fetch(addr).wrapping_add(1);
        self.store(addr, value);
        self.reg.update_zero_and_negative(value);
    }

    fn dec(&mut self, addr: u16) {
        let value = self.fetch(addr).wrapping_sub(1);
        self.store(addr, value);
        self.reg.update_zero_and_negative(value);
    }

    // Control flow

    fn branch_if(&mut self, condition: bool, addr: u16) {
        if !condition {
            return;
        }
        // Taken branch costs a cycle, one more when it leaves the page of
        // the already-advanced PC.
        self.cycles += 1;
        if different_page(self.reg.pc, addr) {
            self.cycles += 1;
        }
        self.reg.pc = addr;
    }

    fn brk(&mut self) {
        self.push_word(self.reg.pc.wrapping_add(1));
        self.push(self.reg.status | FLAG_BREAK | FLAG_UNUSED);
        self.reg.status |= FLAG_INTERRUPT_DISABLE;
        self.reg.pc = fetch_word(self, IRQ_VECTOR);
    }

    fn tas(&mut self, addr: u16) {
        self.reg.sp = self.reg.a & self.reg.x;
        let value = (self.reg.sp as u16 & (addr >> 8).wrapping_add(1)) as u8;
        let column = addr.wrapping_sub(self.reg.y as u16) & 0x00FF;
        if self.reg.y as u16 + column <= 0xFF {
            self.store(addr, value);
        } else {
            // Index carry corrupted the store on silicon; rewrite the
            // byte already there.
            let current = self.fetch(addr);
            self.store(addr, current);
        }
    }
}

impl Memory for Cpu<'_> {
    fn fetch(&mut self, addr: u16) -> u8 {
        Cpu::fetch(self, addr)
    }

    fn store(&mut self, addr: u16, value: u8) {
        Cpu::store(self, addr, value)
    }

    fn read_at(&mut self, buf: &mut [u8], offset: u32) -> (usize, bool) {
        Cpu::read_at(self, buf, offset)
    }
}

fn different_page(a: u16, b: u16) -> bool {
    a & 0xFF00 != b & 0xFF00
}
