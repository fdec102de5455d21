mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::table::{InstrKind, PRIMARY};
use super::{Bus, Cpu, CpuError};

impl Cpu {
    /// Decode and execute a single opcode and return the number of cycles.
    ///
    /// `pc` is the address the opcode was fetched from; it is only used to
    /// report decode faults.
    pub(super) fn exec_opcode<B: Bus>(
        &mut self,
        bus: &mut B,
        opcode: u8,
        pc: u16,
    ) -> Result<u32, CpuError> {
        let Some(kind) = PRIMARY[opcode as usize] else {
            return Err(self.decode_fault(CpuError::UnknownOpcode { opcode, pc }));
        };

        let cycles = match kind {
            InstrKind::Nop => 4,
            InstrKind::Stop => self.exec_stop(bus),
            InstrKind::Halt => self.exec_halt(),
            InstrKind::Di => self.exec_di(),
            InstrKind::Ei => self.exec_ei(),
            InstrKind::Prefix => return self.step_cb(bus),

            InstrKind::LdRrD16 => self.exec_ld_rr_d16(bus, opcode),
            InstrKind::LdRD8 => self.exec_ld_r_d8(bus, opcode),
            InstrKind::LdRR => self.exec_ld_r_r(bus, opcode),
            InstrKind::LdIndirectA => self.exec_ld_indirect_a(bus, opcode),
            InstrKind::LdAIndirect => self.exec_ld_a_indirect(bus, opcode),
            InstrKind::LdhA8 => self.exec_ldh_a8(bus, opcode),
            InstrKind::LdhC => self.exec_ldh_c(bus, opcode),
            InstrKind::LdA16A => self.exec_ld_a16_a(bus, opcode),
            InstrKind::LdA16Sp => self.exec_ld_a16_sp(bus),
            InstrKind::LdSpHl => self.exec_ld_sp_hl(),
            InstrKind::LdHlSpR8 => self.exec_ld_hl_sp_r8(bus),

            InstrKind::AluR => self.exec_alu_reg_group(bus, opcode),
            InstrKind::AluImm => self.exec_alu_imm(bus, opcode),
            InstrKind::IncR => self.exec_inc8_reg(bus, opcode),
            InstrKind::DecR => self.exec_dec8_reg(bus, opcode),
            InstrKind::IncRr => self.exec_inc16_rr(opcode),
            InstrKind::DecRr => self.exec_dec16_rr(opcode),
            InstrKind::AddHlRr => self.exec_add_hl_rr(opcode),
            InstrKind::AddSpR8 => self.exec_add_sp_r8(bus),
            InstrKind::RotateA => self.exec_rotate_a(opcode),
            InstrKind::Daa => self.exec_daa(),
            InstrKind::Cpl => self.exec_cpl(),
            InstrKind::Scf => self.exec_scf(),
            InstrKind::Ccf => self.exec_ccf(),

            InstrKind::Jr => self.jr(bus, true),
            InstrKind::JrCc => self.jr(bus, self.cc_condition(opcode)),
            InstrKind::JpA16 => self.jp_cond(bus, true),
            InstrKind::JpCc => self.jp_cond(bus, self.cc_condition(opcode)),
            InstrKind::JpHl => self.exec_jp_hl(),
            InstrKind::CallA16 => self.call_cond(bus, true),
            InstrKind::CallCc => self.call_cond(bus, self.cc_condition(opcode)),
            InstrKind::Ret => self.exec_ret(bus),
            InstrKind::RetCc => self.ret_cond(bus, self.cc_condition(opcode)),
            InstrKind::Reti => self.exec_reti(bus),
            InstrKind::Rst => self.exec_rst(bus, opcode),
            InstrKind::PushRr => self.exec_push_rr(bus, opcode),
            InstrKind::PopRr => self.exec_pop_rr(bus, opcode),
        };

        Ok(cycles)
    }

    /// Latch a decode fault and log it once with a register dump.
    pub(super) fn decode_fault(&mut self, err: CpuError) -> CpuError {
        log::error!(
            "GB CPU: {err} SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X}",
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        self.fault = Some(err);
        err
    }
}
