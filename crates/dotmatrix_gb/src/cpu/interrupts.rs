use super::{Bus, Cpu};

const IF_ADDR: u16 = 0xFF0F;
const IE_ADDR: u16 = 0xFFFF;

const VBLANK_BIT: u8 = 0x01;
const VBLANK_VECTOR: u16 = 0x0040;

impl Cpu {
    /// Service a pending VBlank interrupt.
    ///
    /// Any pending interrupt wakes a halted CPU, even with IME clear. Only
    /// VBlank is dispatched; other sources stay latched in IF. Returns the
    /// cycles spent on dispatch (20) or 0 when nothing was serviced.
    pub fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let iflags = bus.read8(IF_ADDR);
        let ie = bus.read8(IE_ADDR);
        let pending = iflags & ie;

        if pending != 0 && self.halted {
            self.halted = false;
        }

        if !self.regs.ime || pending == 0 {
            return 0;
        }

        if pending & VBLANK_BIT == 0 {
            return 0;
        }

        self.regs.ime = false;
        bus.write8(IF_ADDR, iflags & !VBLANK_BIT);

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = VBLANK_VECTOR;

        log::debug!(
            "GB CPU interrupt: vblank pc=0x{:04X} sp=0x{:04X} IF=0x{:02X} IE=0x{:02X}",
            pc,
            self.regs.sp,
            iflags,
            ie,
        );

        20
    }
}
