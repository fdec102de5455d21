pub mod cpu;
pub mod machine;

pub use cpu::{Bus, Cpu, CpuError, Flags, Registers};
pub use machine::{
    Cartridge, Config, Frame, GameBoy, Mmu, Ppu, ScanlineRenderer, Tile, CYCLES_PER_FRAME,
    CYCLES_PER_SCANLINE,
};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
