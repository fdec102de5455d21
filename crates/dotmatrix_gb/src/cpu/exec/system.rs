use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_halt(&mut self) -> u32 {
        self.halted = true;
        4
    }

    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        // STOP is officially a 2-byte instruction; the second byte is
        // often 0 and ignored. We always fetch and discard the padding
        // byte so that PC matches hardware.
        let _padding = self.fetch8(bus);

        // Without a joypad the only wake-up path is a pending interrupt,
        // which is exactly how HALT is left.
        if bus.read8(0xFFFF) == 0 {
            log::warn!(
                "GB CPU: STOP at PC=0x{:04X} with IE=0x00; nothing can wake the CPU",
                self.regs.pc.wrapping_sub(2)
            );
        }
        self.halted = true;
        4
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.regs.ime = false;
        4
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        // Takes effect immediately; this core has no EI delay slot.
        self.regs.ime = true;
        4
    }
}
