use crate::cpu::Bus;

use super::{Mmu, IO_LY};

impl Mmu {
    fn read8_impl(&self, addr: u16) -> u8 {
        match addr {
            // Cartridge ROM, fixed 32 KiB image.
            0x0000..=0x7FFF => self.cartridge.read(addr),

            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize],

            // External RAM is not backed.
            0xA000..=0xBFFF => 0,

            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize],

            // Echo RAM is not mirrored.
            0xE000..=0xFDFF => 0,

            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize],

            // Unusable.
            0xFEA0..=0xFEFF => 0,

            0xFF44 => self.io[IO_LY],
            0xFF00..=0xFF7F => self.io[(addr - 0xFF00) as usize],

            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],

            0xFFFF => self.ie,
        }
    }
}

impl Bus for Mmu {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.read8_impl(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.write8_impl(addr, value)
    }
}

impl Mmu {
    /// Side-effect free read, for renderers and debugging tools that only
    /// hold a shared reference.
    pub fn peek8(&self, addr: u16) -> u8 {
        self.read8_impl(addr)
    }
}
