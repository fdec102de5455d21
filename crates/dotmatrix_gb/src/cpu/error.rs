use std::fmt;

/// Fatal decode faults raised by the CPU.
///
/// `pc` is the address of the offending byte: the opcode itself for the
/// primary table, the byte following the 0xCB prefix for the extended one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuError {
    UnknownOpcode { opcode: u8, pc: u16 },
    /// A hole in the 0xCB-prefixed table. The LR35902 defines all 256
    /// extended opcodes, so the current table never produces this.
    UnknownExtendedOpcode { opcode: u8, pc: u16 },
}

impl CpuError {
    pub fn opcode(&self) -> u8 {
        match *self {
            CpuError::UnknownOpcode { opcode, .. }
            | CpuError::UnknownExtendedOpcode { opcode, .. } => opcode,
        }
    }

    pub fn pc(&self) -> u16 {
        match *self {
            CpuError::UnknownOpcode { pc, .. }
            | CpuError::UnknownExtendedOpcode { pc, .. } => pc,
        }
    }
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::UnknownOpcode { opcode, pc } => {
                write!(f, "unknown opcode 0x{opcode:02X} at PC=0x{pc:04X}")
            }
            CpuError::UnknownExtendedOpcode { opcode, pc } => {
                write!(f, "unknown opcode 0xCB{opcode:02X} at PC=0x{pc:04X}")
            }
        }
    }
}

impl std::error::Error for CpuError {}
