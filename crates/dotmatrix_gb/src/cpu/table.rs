//! Opcode dispatch tables.
//!
//! Every byte of the primary and the 0xCB-prefixed opcode space maps to an
//! optional instruction kind. The tables are built at compile time so the
//! full 2 x 256 coverage can be audited in one place; a `None` entry is a
//! fatal decode fault.

/// Execution unit for a primary opcode. Units that cover a register or
/// condition group decode the operand from the opcode bits themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InstrKind {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    /// Jump to the extended table.
    Prefix,

    /// LD rr,d16
    LdRrD16,
    /// LD r,d8 and LD (HL),d8
    LdRD8,
    /// LD r,r' (0x40-0x7F except HALT)
    LdRR,
    /// LD (BC)/(DE)/(HL+)/(HL-),A
    LdIndirectA,
    /// LD A,(BC)/(DE)/(HL+)/(HL-)
    LdAIndirect,
    /// LDH (a8),A / LDH A,(a8)
    LdhA8,
    /// LD (C),A / LD A,(C)
    LdhC,
    /// LD (a16),A / LD A,(a16)
    LdA16A,
    LdA16Sp,
    LdSpHl,
    LdHlSpR8,

    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP against r or (HL)
    AluR,
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP against d8
    AluImm,
    IncR,
    DecR,
    IncRr,
    DecRr,
    AddHlRr,
    AddSpR8,
    /// RLCA / RRCA / RLA / RRA
    RotateA,
    Daa,
    Cpl,
    Scf,
    Ccf,

    Jr,
    JrCc,
    JpA16,
    JpCc,
    JpHl,
    CallA16,
    CallCc,
    Ret,
    RetCc,
    Reti,
    Rst,
    PushRr,
    PopRr,
}

/// Execution unit for a 0xCB-prefixed opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CbKind {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
    Bit,
    Res,
    Set,
}

pub(crate) static PRIMARY: [Option<InstrKind>; 256] = build_primary();
pub(crate) static EXTENDED: [Option<CbKind>; 256] = build_extended();

const fn build_primary() -> [Option<InstrKind>; 256] {
    let mut table = [None; 256];
    let mut opcode = 0;
    while opcode < 256 {
        table[opcode] = primary_kind(opcode as u8);
        opcode += 1;
    }
    table
}

const fn build_extended() -> [Option<CbKind>; 256] {
    let mut table = [None; 256];
    let mut opcode = 0;
    while opcode < 256 {
        table[opcode] = extended_kind(opcode as u8);
        opcode += 1;
    }
    table
}

const fn primary_kind(opcode: u8) -> Option<InstrKind> {
    use InstrKind::*;

    let kind = match opcode {
        0x00 => Nop,
        0x10 => Stop,
        0x76 => Halt,
        0xF3 => Di,
        0xFB => Ei,
        0xCB => Prefix,

        0x01 | 0x11 | 0x21 | 0x31 => LdRrD16,
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => LdRD8,
        0x40..=0x7F => LdRR,
        0x02 | 0x12 | 0x22 | 0x32 => LdIndirectA,
        0x0A | 0x1A | 0x2A | 0x3A => LdAIndirect,
        0xE0 | 0xF0 => LdhA8,
        0xE2 | 0xF2 => LdhC,
        0xEA | 0xFA => LdA16A,
        0x08 => LdA16Sp,
        0xF9 => LdSpHl,
        0xF8 => LdHlSpR8,

        0x80..=0xBF => AluR,
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => AluImm,
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => IncR,
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => DecR,
        0x03 | 0x13 | 0x23 | 0x33 => IncRr,
        0x0B | 0x1B | 0x2B | 0x3B => DecRr,
        0x09 | 0x19 | 0x29 | 0x39 => AddHlRr,
        0xE8 => AddSpR8,
        0x07 | 0x0F | 0x17 | 0x1F => RotateA,
        0x27 => Daa,
        0x2F => Cpl,
        0x37 => Scf,
        0x3F => Ccf,

        0x18 => Jr,
        0x20 | 0x28 | 0x30 | 0x38 => JrCc,
        0xC3 => JpA16,
        0xC2 | 0xCA | 0xD2 | 0xDA => JpCc,
        0xE9 => JpHl,
        0xCD => CallA16,
        0xC4 | 0xCC | 0xD4 | 0xDC => CallCc,
        0xC9 => Ret,
        0xC0 | 0xC8 | 0xD0 | 0xD8 => RetCc,
        0xD9 => Reti,
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Rst,
        0xC5 | 0xD5 | 0xE5 | 0xF5 => PushRr,
        0xC1 | 0xD1 | 0xE1 | 0xF1 => PopRr,

        // Opcode holes: D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD.
        _ => return None,
    };
    Some(kind)
}

const fn extended_kind(opcode: u8) -> Option<CbKind> {
    use CbKind::*;

    let kind = match opcode >> 6 {
        0 => match (opcode >> 3) & 0x07 {
            0 => Rlc,
            1 => Rrc,
            2 => Rl,
            3 => Rr,
            4 => Sla,
            5 => Sra,
            6 => Swap,
            _ => Srl,
        },
        1 => Bit,
        2 => Res,
        _ => Set,
    };
    Some(kind)
}
