use super::{LcdControl, Mmu, IO_LCDC};

impl Mmu {
    pub(super) fn write8_impl(&mut self, addr: u16, value: u8) {
        match addr {
            // ROM is read-only and there is no mapper to receive the write.
            0x0000..=0x7FFF => {}

            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize] = value,

            0xA000..=0xBFFF => {}

            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize] = value,

            0xE000..=0xFDFF => {}

            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize] = value,

            0xFEA0..=0xFEFF => {}

            // LY is driven by the scanline timer only.
            0xFF44 => {}

            0xFF40 => {
                let old = LcdControl::from_bits_retain(self.io[IO_LCDC]);
                let new = LcdControl::from_bits_retain(value);
                if old.contains(LcdControl::LCD_ENABLE) != new.contains(LcdControl::LCD_ENABLE) {
                    log::debug!(
                        "GB LCDC: display {} (LCDC=0x{:02X}, LY={})",
                        if new.contains(LcdControl::LCD_ENABLE) { "on" } else { "off" },
                        value,
                        self.ly(),
                    );
                }
                self.io[IO_LCDC] = value;
            }

            0xFF00..=0xFF7F => self.io[(addr - 0xFF00) as usize] = value,

            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = value,

            0xFFFF => self.ie = value,
        }
    }
}
