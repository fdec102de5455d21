mod alu;
mod bus;
mod cb;
mod error;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;
mod table;

pub use bus::Bus;
pub use error::CpuError;
pub use regs::{Flags, Registers};

/// Game Boy CPU core.
///
/// Models the register file plus the two pieces of control state the
/// driving loop can observe: the HALT latch and a latched decode fault.
/// Decoding goes through the dispatch tables in `table`; the execution
/// units live in `exec` and `cb`.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub halted: bool,
    /// Set once an unknown opcode has been fetched. A faulted CPU never
    /// fetches again; `step` keeps reporting the same error until reset.
    fault: Option<CpuError>,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    /// Decode fault latched by the last `step`, if any.
    pub fn fault(&self) -> Option<CpuError> {
        self.fault
    }
}

#[cfg(test)]
mod tests;
