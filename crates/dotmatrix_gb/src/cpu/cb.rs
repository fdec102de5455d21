use super::table::{CbKind, EXTENDED};
use super::{Bus, Cpu, CpuError, Flags};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    ///
    /// Cycles include the prefix byte: 8 for a register operand, 16 for a
    /// read-modify-write of (HL) and 12 for `BIT b,(HL)`.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        let pc = self.regs.pc;
        let cb = self.fetch8(bus);

        let Some(kind) = EXTENDED[cb as usize] else {
            let err = CpuError::UnknownExtendedOpcode { opcode: cb, pc };
            return Err(self.decode_fault(err));
        };

        let bit = (cb >> 3) & 0x07;
        let z = cb & 0x07;
        let value = self.read_reg8(bus, z);

        let result = match kind {
            CbKind::Bit => {
                // Preserve C, set H=1, N=0.
                let carry = self.get_flag(Flags::C);
                self.clear_flags();
                self.set_flag(Flags::Z, value & (1 << bit) == 0);
                self.set_flag(Flags::H, true);
                self.set_flag(Flags::C, carry);
                return Ok(if z == 6 { 12 } else { 8 });
            }
            CbKind::Res => value & !(1 << bit),
            CbKind::Set => value | (1 << bit),
            shift => self.cb_shift(shift, value),
        };

        self.write_reg8(bus, z, result);
        Ok(if z == 6 { 16 } else { 8 })
    }

    /// Rotates, shifts and SWAP. All of them clear N and H and set Z from
    /// the result.
    fn cb_shift(&mut self, kind: CbKind, value: u8) -> u8 {
        let carry_in = self.get_flag(Flags::C);
        let (result, carry_out) = match kind {
            CbKind::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            CbKind::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            CbKind::Rl => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            CbKind::Rr => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            CbKind::Sla => (value << 1, value & 0x80 != 0),
            CbKind::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            CbKind::Swap => (value.rotate_left(4), false),
            CbKind::Srl => (value >> 1, value & 0x01 != 0),
            CbKind::Bit | CbKind::Res | CbKind::Set => {
                unreachable!("bit operations are handled by step_cb")
            }
        };

        self.clear_flags();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::C, carry_out);
        result
    }
}
