//! Catalog of 65xx processor models and their capabilities.
//!
//! A [`Model`] tells the CPU core which optional features exist on the
//! part being emulated. Requests for a missing capability are silently
//! ignored: raising NMI on a 6504 does nothing, and the Ricoh parts run
//! pure binary arithmetic no matter what the D flag says.

/// Frequency scale, in hertz.
pub const HZ: f64 = 1.0;
pub const KHZ: f64 = 1_000.0 * HZ;
pub const MHZ: f64 = 1_000.0 * KHZ;

/// Immutable description of one 65xx family member.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Model {
    pub name: &'static str,
    /// Typical clock frequency in Hz.
    pub frequency: f64,
    /// External addressable memory size in bytes.
    pub external_memory: usize,
    /// Internal RAM size in bytes, mapped at the bottom of the address
    /// space ahead of the external bus.
    pub internal_memory: usize,
    /// Decimal (BCD) arithmetic support.
    pub has_bcd: bool,
    /// Maskable interrupt pin.
    pub has_irq: bool,
    /// Non-maskable interrupt pin.
    pub has_nmi: bool,
    /// RDY input for stalling the processor.
    pub has_ready: bool,
}

const NONE: Model = Model {
    name: "",
    frequency: 0.0,
    external_memory: 0,
    internal_memory: 0,
    has_bcd: false,
    has_irq: false,
    has_nmi: false,
    has_ready: false,
};

pub const MOS6502: Model = Model {
    name: "MOS Technology 6502",
    frequency: 1.0 * MHZ,
    external_memory: 0x10000,
    has_bcd: true,
    has_irq: true,
    has_nmi: true,
    ..NONE
};

pub const MOS6503: Model = Model {
    name: "MOS Technology 6503",
    frequency: 1.0 * MHZ,
    external_memory: 0x1000, // 4 kB
    has_bcd: true,
    has_irq: true,
    has_nmi: true,
    ..NONE
};

pub const MOS6504: Model = Model {
    name: "MOS Technology 6504",
    frequency: 1.0 * MHZ,
    external_memory: 0x2000, // 8 kB
    has_bcd: true,
    has_irq: true,
    ..NONE
};

pub const MOS6505: Model = Model {
    name: "MOS Technology 6505",
    frequency: 1.0 * MHZ,
    external_memory: 0x1000, // 4 kB
    has_bcd: true,
    has_irq: true,
    has_ready: true,
    ..NONE
};

pub const MOS6506: Model = Model {
    name: "MOS Technology 6506",
    frequency: 1.0 * MHZ,
    external_memory: 0x1000, // 4 kB
    has_bcd: true,
    has_irq: true,
    ..NONE
};

pub const MOS6507: Model = Model {
    name: "MOS Technology 6507",
    frequency: 1.0 * MHZ,
    external_memory: 0x2000, // 8 kB
    has_bcd: true,
    ..NONE
};

pub const MOS6510: Model = Model {
    name: "MOS Technology 6510",
    frequency: 1.023 * MHZ, // NTSC; PAL parts run at 0.985 MHz
    external_memory: 0x10000,
    has_bcd: true,
    has_nmi: true,
    has_ready: true,
    ..NONE
};

pub const MOS6510T: Model = Model {
    name: "MOS Technology 6510T",
    frequency: 1.023 * MHZ,
    external_memory: 0x10000,
    has_bcd: true,
    ..NONE
};

pub const MOS7501: Model = Model {
    name: "MOS Technology 7501",
    frequency: 1.023 * MHZ,
    external_memory: 0x10000,
    has_bcd: true,
    has_ready: true,
    ..NONE
};

pub const MOS8501: Model = Model {
    name: "MOS Technology 8501",
    frequency: 1.023 * MHZ,
    external_memory: 0x10000,
    has_bcd: true,
    has_ready: true,
    ..NONE
};

pub const MOS8502: Model = Model {
    name: "MOS Technology 8502",
    frequency: 2.0 * MHZ,
    external_memory: 0x10000,
    has_bcd: true,
    has_nmi: true,
    has_ready: true,
    ..NONE
};

/// The NTSC Nintendo Entertainment System CPU. Decimal mode is wired off.
pub const RICOH2A03: Model = Model {
    name: "Ricoh 2A03",
    frequency: 1.0 * MHZ,
    external_memory: 0x10000,
    has_irq: true,
    has_nmi: true,
    ..NONE
};

/// The PAL Nintendo Entertainment System CPU.
pub const RICOH2A07: Model = Model {
    name: "Ricoh 2A07",
    frequency: 1.0 * MHZ,
    external_memory: 0x10000,
    has_irq: true,
    has_nmi: true,
    ..NONE
};
