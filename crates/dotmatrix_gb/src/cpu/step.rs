use super::{Bus, Cpu, CpuError};

impl Cpu {
    /// Execute a single instruction and return the number of T-cycles taken.
    ///
    /// A halted CPU idles for 4 cycles without fetching. Once a decode fault
    /// has been latched the same error is returned on every call.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        if let Some(err) = self.fault {
            return Err(err);
        }

        if self.halted {
            return Ok(4);
        }

        let pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        self.exec_opcode(bus, opcode, pc)
    }
}
