use super::super::CYCLES_PER_SCANLINE;
use super::{InterruptFlags, Mmu, ScanlineRenderer, IO_LY};

/// First line of the vertical blanking period.
const VBLANK_LINE: u8 = 144;
/// Last line before LY wraps to 0.
const LAST_LINE: u8 = 153;

impl Mmu {
    /// Advance the scanline timer by `cycles`.
    ///
    /// At most one scanline boundary is processed per call. On a boundary the
    /// current visible line is rendered, LY advances, and entering line 144
    /// swaps the renderer's buffers and requests the VBlank interrupt.
    pub fn update_scanline<R: ScanlineRenderer>(&mut self, cycles: u32, renderer: &mut R) {
        self.scanline_cycles += cycles;
        if self.scanline_cycles < CYCLES_PER_SCANLINE {
            return;
        }
        self.scanline_cycles -= CYCLES_PER_SCANLINE;

        let ly = self.io[IO_LY];
        if ly < VBLANK_LINE {
            renderer.render_scanline(self, ly);
        }

        let mut next = ly + 1;
        if next == VBLANK_LINE {
            renderer.swap_buffers();
            self.request_interrupt(InterruptFlags::VBLANK);
            log::debug!(
                "GB PPU: VBlank edge (LY {}->{}), IF=0x{:02X}",
                ly,
                next,
                self.interrupt_flags().bits(),
            );
        }
        if next > LAST_LINE {
            next = 0;
        }
        self.io[IO_LY] = next;
    }

    /// Cycles accumulated towards the next scanline boundary.
    pub fn scanline_cycles(&self) -> u32 {
        self.scanline_cycles
    }
}
