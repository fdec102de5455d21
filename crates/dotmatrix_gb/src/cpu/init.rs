use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Power-on CPU: all registers zero, execution starts at 0x0000.
    pub fn new() -> Self {
        Self::with_registers(Registers::default())
    }

    /// CPU that starts from the given register snapshot, e.g.
    /// `Registers::post_boot()` to skip the boot ROM.
    pub fn with_registers(regs: Registers) -> Self {
        Self {
            regs,
            halted: false,
            fault: None,
        }
    }

    /// Reset the CPU to the power-on state, clearing HALT and any latched
    /// decode fault.
    pub fn reset(&mut self) {
        self.reset_to(Registers::default());
    }

    pub fn reset_to(&mut self, regs: Registers) {
        self.regs = regs;
        self.halted = false;
        self.fault = None;
    }
}
