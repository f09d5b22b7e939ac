//! Instruction mnemonics, addressing modes, and the fixed 256-entry
//! opcode decode table.

use std::fmt;

/// Instruction mnemonic: the 56 documented operations plus the NMOS
/// illegal opcodes with reproducible behavior. `HLT` covers the KIL/JAM
/// slots that freeze the processor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum Mnemonic {
    ADC,
    AND,
    ASL,
    BCC,
    BCS,
    BEQ,
    BIT,
    BMI,
    BNE,
    BPL,
    BRK,
    BVC,
    BVS,
    CLC,
    CLD,
    CLI,
    CLV,
    CMP,
    CPX,
    CPY,
    DEC,
    DEX,
    DEY,
    EOR,
    INC,
    INX,
    INY,
    JMP,
    JSR,
    LDA,
    LDX,
    LDY,
    LSR,
    NOP,
    ORA,
    PHA,
    PHP,
    PLA,
    PLP,
    ROL,
    ROR,
    RTI,
    RTS,
    SBC,
    SEC,
    SED,
    SEI,
    STA,
    STX,
    STY,
    TAX,
    TAY,
    TSX,
    TXA,
    TXS,
    TYA,
    HLT,
    LAX,
    SAX,
    DCP,
    ISC,
    RLA,
    RRA,
    SLO,
    SRE,
    ANC,
    ALR,
    ARR,
    XAA,
    AHX,
    TAS,
    SHX,
    SHY,
    LAS,
    AXS,
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// How the CPU derives the operand address for an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum AddressMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    /// `(zp,X)`
    IndexedIndirect,
    /// `(zp),Y`
    IndirectIndexed,
}

impl fmt::Display for AddressMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressMode::Implied => "implied",
            AddressMode::Accumulator => "accumulator",
            AddressMode::Immediate => "immediate",
            AddressMode::ZeroPage => "zero-page",
            AddressMode::ZeroPageX => "zero-page indexed X",
            AddressMode::ZeroPageY => "zero-page indexed Y",
            AddressMode::Relative => "relative",
            AddressMode::Absolute => "absolute",
            AddressMode::AbsoluteX => "absolute indexed X",
            AddressMode::AbsoluteY => "absolute indexed Y",
            AddressMode::Indirect => "indirect",
            AddressMode::IndexedIndirect => "indexed indirect",
            AddressMode::IndirectIndexed => "indirect indexed",
        };
        f.write_str(name)
    }
}

/// Decode-table entry for one opcode byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    pub mnemonic: Mnemonic,
    /// Instruction size in bytes, operand included (1–3).
    pub size: u8,
    /// Base cycle cost before penalties.
    pub cycles: u8,
    /// Extra cycles when the operand fetch crosses a page (0 or 1).
    pub page_cross_cycles: u8,
    pub mode: AddressMode,
}

const fn op(
    mnemonic: Mnemonic,
    size: u8,
    cycles: u8,
    page_cross_cycles: u8,
    mode: AddressMode,
) -> Opcode {
    Opcode {
        mnemonic,
        size,
        cycles,
        page_cross_cycles,
        mode,
    }
}

use AddressMode::*;
use Mnemonic::*;

/// The NMOS 6502 opcode matrix, indexed by opcode byte.
#[rustfmt::skip]
pub const OPCODES: [Opcode; 256] = [
    op(BRK, 1, 7, 0, Implied),         // 0x00
    op(ORA, 2, 6, 0, IndexedIndirect), // 0x01
    op(HLT, 1, 0, 0, Implied),         // 0x02
    op(SLO, 2, 8, 0, IndexedIndirect), // 0x03
    op(NOP, 2, 3, 0, ZeroPage),        // 0x04
    op(ORA, 2, 3, 0, ZeroPage),        // 0x05
    op(ASL, 2, 5, 0, ZeroPage),        // 0x06
    op(SLO, 2, 5, 0, ZeroPage),        // 0x07
    op(PHP, 1, 3, 0, Implied),         // 0x08
    op(ORA, 2, 2, 0, Immediate),       // 0x09
    op(ASL, 1, 2, 0, Accumulator),     // 0x0a
    op(ANC, 2, 2, 0, Immediate),       // 0x0b
    op(NOP, 3, 4, 0, Absolute),        // 0x0c
    op(ORA, 3, 4, 0, Absolute),        // 0x0d
    op(ASL, 3, 6, 0, Absolute),        // 0x0e
    op(SLO, 3, 6, 0, Absolute),        // 0x0f
    op(BPL, 2, 2, 0, Relative),        // 0x10
    op(ORA, 2, 5, 1, IndirectIndexed), // 0x11
    op(HLT, 1, 0, 0, Implied),         // 0x12
    op(SLO, 2, 8, 0, IndirectIndexed), // 0x13
    op(NOP, 2, 4, 0, ZeroPageX),       // 0x14
    op(ORA, 2, 4, 0, ZeroPageX),       // 0x15
    op(ASL, 2, 6, 0, ZeroPageX),       // 0x16
    op(SLO, 2, 6, 0, ZeroPageX),       // 0x17
    op(CLC, 1, 2, 0, Implied),         // 0x18
    op(ORA, 3, 4, 1, AbsoluteY),       // 0x19
    op(NOP, 1, 2, 0, Implied),         // 0x1a
    op(SLO, 3, 7, 0, AbsoluteY),       // 0x1b
    op(NOP, 3, 4, 1, AbsoluteX),       // 0x1c
    op(ORA, 3, 4, 1, AbsoluteX),       // 0x1d
    op(ASL, 3, 7, 0, AbsoluteX),       // 0x1e
    op(SLO, 3, 7, 0, AbsoluteX),       // 0x1f
    op(JSR, 3, 6, 0, Absolute),        // 0x20
    op(AND, 2, 6, 0, IndexedIndirect), // 0x21
    op(HLT, 1, 0, 0, Implied),         // 0x22
    op(RLA, 2, 8, 0, IndexedIndirect), // 0x23
    op(BIT, 2, 3, 0, ZeroPage),        // 0x24
    op(AND, 2, 3, 0, ZeroPage),        // 0x25
    op(ROL, 2, 5, 0, ZeroPage),        // 0x26
    op(RLA, 2, 5, 0, ZeroPage),        // 0x27
    op(PLP, 1, 4, 0, Implied),         // 0x28
    op(AND, 2, 2, 0, Immediate),       // 0x29
    op(ROL, 1, 2, 0, Accumulator),     // 0x2a
    op(ANC, 2, 2, 0, Immediate),       // 0x2b
    op(BIT, 3, 4, 0, Absolute),        // 0x2c
    op(AND, 3, 4, 0, Absolute),        // 0x2d
    op(ROL, 3, 6, 0, Absolute),        // 0x2e
    op(RLA, 3, 6, 0, Absolute),        // 0x2f
    op(BMI, 2, 2, 0, Relative),        // 0x30
    op(AND, 2, 5, 1, IndirectIndexed), // 0x31
    op(HLT, 1, 0, 0, Implied),         // 0x32
    op(RLA, 2, 8, 0, IndirectIndexed), // 0x33
    op(NOP, 2, 4, 0, ZeroPageX),       // 0x34
    op(AND, 2, 4, 0, ZeroPageX),       // 0x35
    op(ROL, 2, 6, 0, ZeroPageX),       // 0x36
    op(RLA, 2, 6, 0, ZeroPageX),       // 0x37
    op(SEC, 1, 2, 0, Implied),         // 0x38
    op(AND, 3, 4, 1, AbsoluteY),       // 0x39
    op(NOP, 1, 2, 0, Implied),         // 0x3a
    op(RLA, 3, 7, 0, AbsoluteY),       // 0x3b
    op(NOP, 3, 4, 1, AbsoluteX),       // 0x3c
    op(AND, 3, 4, 1, AbsoluteX),       // 0x3d
    op(ROL, 3, 7, 0, AbsoluteX),       // 0x3e
    op(RLA, 3, 7, 0, AbsoluteX),       // 0x3f
    op(RTI, 1, 6, 0, Implied),         // 0x40
    op(EOR, 2, 6, 0, IndexedIndirect), // 0x41
    op(HLT, 1, 0, 0, Implied),         // 0x42
    op(SRE, 2, 8, 0, IndexedIndirect), // 0x43
    op(NOP, 2, 3, 0, ZeroPage),        // 0x44
    op(EOR, 2, 3, 0, ZeroPage),        // 0x45
    op(LSR, 2, 5, 0, ZeroPage),        // 0x46
    op(SRE, 2, 5, 0, ZeroPage),        // 0x47
    op(PHA, 1, 3, 0, Implied),         // 0x48
    op(EOR, 2, 2, 0, Immediate),       // 0x49
    op(LSR, 1, 2, 0, Accumulator),     // 0x4a
    op(ALR, 2, 2, 0, Immediate),       // 0x4b
    op(JMP, 3, 3, 0, Absolute),        // 0x4c
    op(EOR, 3, 4, 0, Absolute),        // 0x4d
    op(LSR, 3, 6, 0, Absolute),        // 0x4e
    op(SRE, 3, 6, 0, Absolute),        // 0x4f
    op(BVC, 2, 2, 0, Relative),        // 0x50
    op(EOR, 2, 5, 1, IndirectIndexed), // 0x51
    op(HLT, 1, 0, 0, Implied),         // 0x52
    op(SRE, 2, 8, 0, IndirectIndexed), // 0x53
    op(NOP, 2, 4, 0, ZeroPageX),       // 0x54
    op(EOR, 2, 4, 0, ZeroPageX),       // 0x55
    op(LSR, 2, 6, 0, ZeroPageX),       // 0x56
    op(SRE, 2, 6, 0, ZeroPageX),       // 0x57
    op(CLI, 1, 2, 0, Implied),         // 0x58
    op(EOR, 3, 4, 1, AbsoluteY),       // 0x59
    op(NOP, 1, 2, 0, Implied),         // 0x5a
    op(SRE, 3, 7, 0, AbsoluteY),       // 0x5b
    op(NOP, 3, 4, 1, AbsoluteX),       // 0x5c
    op(EOR, 3, 4, 1, AbsoluteX),       // 0x5d
    op(LSR, 3, 7, 0, AbsoluteX),       // 0x5e
    op(SRE, 3, 7, 0, AbsoluteX),       // 0x5f
    op(RTS, 1, 6, 0, Implied),         // 0x60
    op(ADC, 2, 6, 0, IndexedIndirect), // 0x61
    op(HLT, 1, 0, 0, Implied),         // 0x62
    op(RRA, 2, 8, 0, IndexedIndirect), // 0x63
    op(NOP, 2, 3, 0, ZeroPage),        // 0x64
    op(ADC, 2, 3, 0, ZeroPage),        // 0x65
    op(ROR, 2, 5, 0, ZeroPage),        // 0x66
    op(RRA, 2, 5, 0, ZeroPage),        // 0x67
    op(PLA, 1, 4, 0, Implied),         // 0x68
    op(ADC, 2, 2, 0, Immediate),       // 0x69
    op(ROR, 1, 2, 0, Accumulator),     // 0x6a
    op(ARR, 2, 2, 0, Immediate),       // 0x6b
    op(JMP, 3, 5, 0, Indirect),        // 0x6c
    op(ADC, 3, 4, 0, Absolute),        // 0x6d
    op(ROR, 3, 6, 0, Absolute),        // 0x6e
    op(RRA, 3, 6, 0, Absolute),        // 0x6f
    op(BVS, 2, 2, 0, Relative),        // 0x70
    op(ADC, 2, 5, 1, IndirectIndexed), // 0x71
    op(HLT, 1, 0, 0, Implied),         // 0x72
    op(RRA, 2, 8, 0, IndirectIndexed), // 0x73
    op(NOP, 2, 4, 0, ZeroPageX),       // 0x74
    op(ADC, 2, 4, 0, ZeroPageX),       // 0x75
    op(ROR, 2, 6, 0, ZeroPageX),       // 0x76
    op(RRA, 2, 6, 0, ZeroPageX),       // 0x77
    op(SEI, 1, 2, 0, Implied),         // 0x78
    op(ADC, 3, 4, 1, AbsoluteY),       // 0x79
    op(NOP, 1, 2, 0, Implied),         // 0x7a
    op(RRA, 3, 7, 0, AbsoluteY),       // 0x7b
    op(NOP, 3, 4, 1, AbsoluteX),       // 0x7c
    op(ADC, 3, 4, 1, AbsoluteX),       // 0x7d
    op(ROR, 3, 7, 0, AbsoluteX),       // 0x7e
    op(RRA, 3, 7, 0, AbsoluteX),       // 0x7f
    op(NOP, 2, 2, 0, Immediate),       // 0x80
    op(STA, 2, 6, 0, IndexedIndirect), // 0x81
    op(NOP, 2, 2, 0, Immediate),       // 0x82
    op(SAX, 2, 6, 0, IndexedIndirect), // 0x83
    op(STY, 2, 3, 0, ZeroPage),        // 0x84
    op(STA, 2, 3, 0, ZeroPage),        // 0x85
    op(STX, 2, 3, 0, ZeroPage),        // 0x86
    op(SAX, 2, 3, 0, ZeroPage),        // 0x87
    op(DEY, 1, 2, 0, Implied),         // 0x88
    op(NOP, 2, 2, 0, Immediate),       // 0x89
    op(TXA, 1, 2, 0, Implied),         // 0x8a
    op(XAA, 2, 2, 0, Immediate),       // 0x8b
    op(STY, 3, 4, 0, Absolute),        // 0x8c
    op(STA, 3, 4, 0, Absolute),        // 0x8d
    op(STX, 3, 4, 0, Absolute),        // 0x8e
    op(SAX, 3, 4, 0, Absolute),        // 0x8f
    op(BCC, 2, 2, 0, Relative),        // 0x90
    op(STA, 2, 6, 0, IndirectIndexed), // 0x91
    op(HLT, 1, 0, 0, Implied),         // 0x92
    op(AHX, 2, 6, 0, IndirectIndexed), // 0x93
    op(STY, 2, 4, 0, ZeroPageX),       // 0x94
    op(STA, 2, 4, 0, ZeroPageX),       // 0x95
    op(STX, 2, 4, 0, ZeroPageY),       // 0x96
    op(SAX, 2, 4, 0, ZeroPageY),       // 0x97
    op(TYA, 1, 2, 0, Implied),         // 0x98
    op(STA, 3, 5, 0, AbsoluteY),       // 0x99
    op(TXS, 1, 2, 0, Implied),         // 0x9a
    op(TAS, 3, 5, 0, AbsoluteY),       // 0x9b
    op(SHY, 3, 5, 0, AbsoluteX),       // 0x9c
    op(STA, 3, 5, 0, AbsoluteX),       // 0x9d
    op(SHX, 3, 5, 0, AbsoluteY),       // 0x9e
    op(AHX, 3, 5, 0, AbsoluteY),       // 0x9f
    op(LDY, 2, 2, 0, Immediate),       // 0xa0
    op(LDA, 2, 6, 0, IndexedIndirect), // 0xa1
    op(LDX, 2, 2, 0, Immediate),       // 0xa2
    op(LAX, 2, 6, 0, IndexedIndirect), // 0xa3
    op(LDY, 2, 3, 0, ZeroPage),        // 0xa4
    op(LDA, 2, 3, 0, ZeroPage),        // 0xa5
    op(LDX, 2, 3, 0, ZeroPage),        // 0xa6
    op(LAX, 2, 3, 0, ZeroPage),        // 0xa7
    op(TAY, 1, 2, 0, Implied),         // 0xa8
    op(LDA, 2, 2, 0, Immediate),       // 0xa9
    op(TAX, 1, 2, 0, Implied),         // 0xaa
    op(LAX, 2, 2, 0, Immediate),       // 0xab
    op(LDY, 3, 4, 0, Absolute),        // 0xac
    op(LDA, 3, 4, 0, Absolute),        // 0xad
    op(LDX, 3, 4, 0, Absolute),        // 0xae
    op(LAX, 3, 4, 0, Absolute),        // 0xaf
    op(BCS, 2, 2, 0, Relative),        // 0xb0
    op(LDA, 2, 5, 1, IndirectIndexed), // 0xb1
    op(HLT, 1, 0, 0, Implied),         // 0xb2
    op(LAX, 2, 5, 1, IndirectIndexed), // 0xb3
    op(LDY, 2, 4, 0, ZeroPageX),       // 0xb4
    op(LDA, 2, 4, 0, ZeroPageX),       // 0xb5
    op(LDX, 2, 4, 0, ZeroPageY),       // 0xb6
    op(LAX, 2, 4, 0, ZeroPageY),       // 0xb7
    op(CLV, 1, 2, 0, Implied),         // 0xb8
    op(LDA, 3, 4, 1, AbsoluteY),       // 0xb9
    op(TSX, 1, 2, 0, Implied),         // 0xba
    op(LAS, 3, 4, 1, AbsoluteY),       // 0xbb
    op(LDY, 3, 4, 1, AbsoluteX),       // 0xbc
    op(LDA, 3, 4, 1, AbsoluteX),       // 0xbd
    op(LDX, 3, 4, 1, AbsoluteY),       // 0xbe
    op(LAX, 3, 4, 1, AbsoluteY),       // 0xbf
    op(CPY, 2, 2, 0, Immediate),       // 0xc0
    op(CMP, 2, 6, 0, IndexedIndirect), // 0xc1
    op(NOP, 2, 2, 0, Immediate),       // 0xc2
    op(DCP, 2, 8, 0, IndexedIndirect), // 0xc3
    op(CPY, 2, 3, 0, ZeroPage),        // 0xc4
    op(CMP, 2, 3, 0, ZeroPage),        // 0xc5
    op(DEC, 2, 5, 0, ZeroPage),        // 0xc6
    op(DCP, 2, 5, 0, ZeroPage),        // 0xc7
    op(INY, 1, 2, 0, Implied),         // 0xc8
    op(CMP, 2, 2, 0, Immediate),       // 0xc9
    op(DEX, 1, 2, 0, Implied),         // 0xca
    op(AXS, 2, 2, 0, Immediate),       // 0xcb
    op(CPY, 3, 4, 0, Absolute),        // 0xcc
    op(CMP, 3, 4, 0, Absolute),        // 0xcd
    op(DEC, 3, 6, 0, Absolute),        // 0xce
    op(DCP, 3, 6, 0, Absolute),        // 0xcf
    op(BNE, 2, 2, 0, Relative),        // 0xd0
    op(CMP, 2, 5, 1, IndirectIndexed), // 0xd1
    op(HLT, 1, 0, 0, Implied),         // 0xd2
    op(DCP, 2, 8, 0, IndirectIndexed), // 0xd3
    op(NOP, 2, 4, 0, ZeroPageX),       // 0xd4
    op(CMP, 2, 4, 0, ZeroPageX),       // 0xd5
    op(DEC, 2, 6, 0, ZeroPageX),       // 0xd6
    op(DCP, 2, 6, 0, ZeroPageX),       // 0xd7
    op(CLD, 1, 2, 0, Implied),         // 0xd8
    op(CMP, 3, 4, 1, AbsoluteY),       // 0xd9
    op(NOP, 1, 2, 0, Implied),         // 0xda
    op(DCP, 3, 7, 0, AbsoluteY),       // 0xdb
    op(NOP, 3, 4, 1, AbsoluteX),       // 0xdc
    op(CMP, 3, 4, 1, AbsoluteX),       // 0xdd
    op(DEC, 3, 7, 0, AbsoluteX),       // 0xde
    op(DCP, 3, 7, 0, AbsoluteX),       // 0xdf
    op(CPX, 2, 2, 0, Immediate),       // 0xe0
    op(SBC, 2, 6, 0, IndexedIndirect), // 0xe1
    op(NOP, 2, 2, 0, Immediate),       // 0xe2
    op(ISC, 2, 8, 0, IndexedIndirect), // 0xe3
    op(CPX, 2, 3, 0, ZeroPage),        // 0xe4
    op(SBC, 2, 3, 0, ZeroPage),        // 0xe5
    op(INC, 2, 5, 0, ZeroPage),        // 0xe6
    op(ISC, 2, 5, 0, ZeroPage),        // 0xe7
    op(INX, 1, 2, 0, Implied),         // 0xe8
    op(SBC, 2, 2, 0, Immediate),       // 0xe9
    op(NOP, 1, 2, 0, Implied),         // 0xea
    op(SBC, 2, 2, 0, Immediate),       // 0xeb
    op(CPX, 3, 4, 0, Absolute),        // 0xec
    op(SBC, 3, 4, 0, Absolute),        // 0xed
    op(INC, 3, 6, 0, Absolute),        // 0xee
    op(ISC, 3, 6, 0, Absolute),        // 0xef
    op(BEQ, 2, 2, 1, Relative),        // 0xf0
    op(SBC, 2, 5, 1, IndirectIndexed), // 0xf1
    op(HLT, 1, 0, 0, Implied),         // 0xf2
    op(ISC, 2, 8, 0, IndirectIndexed), // 0xf3
    op(NOP, 2, 4, 0, ZeroPageX),       // 0xf4
    op(SBC, 2, 4, 0, ZeroPageX),       // 0xf5
    op(INC, 2, 6, 0, ZeroPageX),       // 0xf6
    op(ISC, 2, 6, 0, ZeroPageX),       // 0xf7
    op(SED, 1, 2, 0, Implied),         // 0xf8
    op(SBC, 3, 4, 1, AbsoluteY),       // 0xf9
    op(NOP, 1, 2, 0, Implied),         // 0xfa
    op(ISC, 3, 7, 0, AbsoluteY),       // 0xfb
    op(NOP, 3, 4, 1, AbsoluteX),       // 0xfc
    op(SBC, 3, 4, 1, AbsoluteX),       // 0xfd
    op(INC, 3, 7, 0, AbsoluteX),       // 0xfe
    op(ISC, 3, 7, 0, AbsoluteX),       // 0xff
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_spot_checks_match_the_matrix() {
        let lda_imm = OPCODES[0xA9];
        assert_eq!(lda_imm.mnemonic, LDA);
        assert_eq!((lda_imm.size, lda_imm.cycles, lda_imm.page_cross_cycles), (2, 2, 0));
        assert_eq!(lda_imm.mode, Immediate);

        let jmp_ind = OPCODES[0x6C];
        assert_eq!(jmp_ind.mnemonic, JMP);
        assert_eq!((jmp_ind.size, jmp_ind.cycles), (3, 5));
        assert_eq!(jmp_ind.mode, Indirect);

        let lda_ind_y = OPCODES[0xB1];
        assert_eq!(lda_ind_y.mnemonic, LDA);
        assert_eq!((lda_ind_y.cycles, lda_ind_y.page_cross_cycles), (5, 1));
        assert_eq!(lda_ind_y.mode, IndirectIndexed);

        let sta_abs_x = OPCODES[0x9D];
        assert_eq!(sta_abs_x.mnemonic, STA);
        // Stores pay the indexing cycle unconditionally.
        assert_eq!((sta_abs_x.cycles, sta_abs_x.page_cross_cycles), (5, 0));

        let brk = OPCODES[0x00];
        assert_eq!((brk.mnemonic, brk.size, brk.cycles), (BRK, 1, 7));
    }

    #[test]
    fn kil_slots_decode_as_hlt() {
        for opcode in [
            0x02u8, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2,
        ] {
            let entry = OPCODES[opcode as usize];
            assert_eq!(entry.mnemonic, HLT, "opcode {opcode:#04x}");
            assert_eq!((entry.size, entry.cycles), (1, 0));
        }
    }

    #[test]
    fn every_entry_is_well_formed() {
        for (byte, entry) in OPCODES.iter().enumerate() {
            assert!(
                (1..=3).contains(&entry.size),
                "opcode {byte:#04x} has size {}",
                entry.size
            );
            assert!(entry.page_cross_cycles <= 1, "opcode {byte:#04x}");
            match entry.mode {
                Implied | Accumulator => assert_eq!(entry.size, 1, "opcode {byte:#04x}"),
                Absolute | AbsoluteX | AbsoluteY | Indirect => {
                    assert_eq!(entry.size, 3, "opcode {byte:#04x}")
                }
                _ => assert_eq!(entry.size, 2, "opcode {byte:#04x}"),
            }
            if entry.mnemonic == HLT {
                assert_eq!(entry.cycles, 0, "opcode {byte:#04x}");
            } else {
                assert!(entry.cycles >= 2, "opcode {byte:#04x}");
            }
        }
    }

    #[test]
    fn mnemonics_render_as_assembly_names() {
        assert_eq!(LDA.to_string(), "LDA");
        assert_eq!(HLT.to_string(), "HLT");
        assert_eq!(ZeroPageX.to_string(), "zero-page indexed X");
    }
}
