use bitflags::bitflags;

use super::Cartridge;

mod read;
mod timing;
mod write;

const VRAM_SIZE: usize = 0x2000;
const WRAM_SIZE: usize = 0x2000;
const OAM_SIZE: usize = 0xA0;
const IO_SIZE: usize = 0x80;
const HRAM_SIZE: usize = 0x7F;

/// Offsets into the I/O register page (0xFF00..0xFF7F).
const IO_IF: usize = 0x0F;
const IO_LCDC: usize = 0x40;
const IO_LY: usize = 0x44;

bitflags! {
    /// LCDC (0xFF40). Only the bits the background renderer consults are
    /// named; the rest are stored untouched.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct LcdControl: u8 {
        const LCD_ENABLE = 0b1000_0000;
        const TILE_DATA_UNSIGNED = 0b0001_0000;
        const BG_TILE_MAP_HIGH = 0b0000_1000;
    }
}

bitflags! {
    /// IF (0xFF0F) and IE (0xFFFF) bit layout.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0b0000_0001;
        const LCD_STAT = 0b0000_0010;
        const TIMER = 0b0000_0100;
        const SERIAL = 0b0000_1000;
        const JOYPAD = 0b0001_0000;
    }
}

/// Receiver for the MMU's scanline and VBlank events.
///
/// The MMU does not own the PPU; the driving loop lends it for each call to
/// [`Mmu::update_scanline`].
pub trait ScanlineRenderer {
    /// Draw visible line `ly` into the back buffer.
    fn render_scanline(&mut self, mmu: &Mmu, ly: u8);

    /// Publish the back buffer. Called once on entry to VBlank.
    fn swap_buffers(&mut self);
}

/// DMG address space.
///
/// Each region has its own backing array. External RAM, echo RAM and the
/// unusable block at 0xFEA0 are not backed: they read as 0 and drop writes.
pub struct Mmu {
    cartridge: Cartridge,
    vram: [u8; VRAM_SIZE],
    wram: [u8; WRAM_SIZE],
    oam: [u8; OAM_SIZE],
    io: [u8; IO_SIZE],
    hram: [u8; HRAM_SIZE],
    ie: u8,
    /// Cycles accumulated towards the next scanline boundary.
    scanline_cycles: u32,
}

impl Mmu {
    pub fn new(cartridge: Cartridge) -> Self {
        Self {
            cartridge,
            vram: [0; VRAM_SIZE],
            wram: [0; WRAM_SIZE],
            oam: [0; OAM_SIZE],
            io: [0; IO_SIZE],
            hram: [0; HRAM_SIZE],
            ie: 0,
            scanline_cycles: 0,
        }
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    #[inline]
    pub fn vram(&self) -> &[u8] {
        &self.vram
    }

    #[inline]
    pub fn lcdc(&self) -> LcdControl {
        LcdControl::from_bits_retain(self.io[IO_LCDC])
    }

    /// Current scanline (LY), 0..=153.
    #[inline]
    pub fn ly(&self) -> u8 {
        self.io[IO_LY]
    }

    #[inline]
    pub fn interrupt_flags(&self) -> InterruptFlags {
        InterruptFlags::from_bits_retain(self.io[IO_IF])
    }

    #[inline]
    pub fn interrupt_enable(&self) -> InterruptFlags {
        InterruptFlags::from_bits_retain(self.ie)
    }

    pub(crate) fn request_interrupt(&mut self, flags: InterruptFlags) {
        self.io[IO_IF] |= flags.bits();
    }
}
