mod cartridge;
mod config;
mod gameboy;
mod mmu;
mod ppu;

pub use cartridge::{Cartridge, ROM_SIZE};
pub use config::Config;
pub use gameboy::GameBoy;
pub use mmu::{InterruptFlags, LcdControl, Mmu, ScanlineRenderer};
pub use ppu::{Frame, Ppu, Tile};

/// CPU cycles per scanline (visible or VBlank).
pub const CYCLES_PER_SCANLINE: u32 = 456;

/// CPU cycles per frame: 154 lines of 456 cycles.
pub const CYCLES_PER_FRAME: u32 = CYCLES_PER_SCANLINE * 154;
