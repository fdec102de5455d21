use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

use super::mmu::{LcdControl, Mmu, ScanlineRenderer};

/// One screen of 2-bit colour indices, row-major (`frame[y][x]`).
pub type Frame = [[u8; SCREEN_WIDTH]; SCREEN_HEIGHT];

/// Decoded 8x8 tile of colour indices (`tile[row][col]`).
pub type Tile = [[u8; 8]; 8];

const TILE_BYTES: usize = 16;
const TILES_PER_ROW: usize = SCREEN_WIDTH / 8;
const TILE_MAP_WIDTH: usize = 32;
const BG_MAP_LOW: usize = 0x1800;
const BG_MAP_HIGH: usize = 0x1C00;
/// VRAM offset of tile 0 in signed (0x8800) addressing.
const SIGNED_TILE_BASE: isize = 0x1000;

/// Background-only scanline renderer with a double-buffered framebuffer.
///
/// Lines are drawn into the back buffer as the MMU reaches them and the whole
/// frame is published to the front buffer on entry to VBlank, so the front
/// buffer always holds a finished frame.
#[derive(Clone)]
pub struct Ppu {
    front: Box<Frame>,
    back: Box<Frame>,
    frames_completed: u64,
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

impl Ppu {
    pub fn new() -> Self {
        Self {
            front: Box::new([[0; SCREEN_WIDTH]; SCREEN_HEIGHT]),
            back: Box::new([[0; SCREEN_WIDTH]; SCREEN_HEIGHT]),
            frames_completed: 0,
        }
    }

    /// Last complete frame.
    pub fn front_buffer(&self) -> &Frame {
        &self.front
    }

    /// Frame currently being drawn.
    pub fn back_buffer(&self) -> &Frame {
        &self.back
    }

    /// Number of buffer swaps so far.
    pub fn frames_completed(&self) -> u64 {
        self.frames_completed
    }

    /// Decode background tile `index` from VRAM.
    ///
    /// LCDC bit 4 selects unsigned addressing from 0x8000; otherwise the
    /// index is signed relative to 0x9000. An LCDC of 0 is treated as
    /// unsigned so that ROMs which never program LCDC still show tiles.
    pub fn tile(&self, mmu: &Mmu, index: u8) -> Tile {
        let lcdc = mmu.lcdc();
        let offset = if lcdc.contains(LcdControl::TILE_DATA_UNSIGNED) || lcdc.is_empty() {
            index as isize * TILE_BYTES as isize
        } else {
            SIGNED_TILE_BASE + (index as i8) as isize * TILE_BYTES as isize
        };

        let Some(bytes) = usize::try_from(offset)
            .ok()
            .and_then(|start| mmu.vram().get(start..start + TILE_BYTES))
        else {
            log::trace!("GB PPU: tile {index} outside VRAM (offset {offset}), using blank tile");
            return [[0; 8]; 8];
        };

        let mut tile = [[0; 8]; 8];
        for (row, pixels) in tile.iter_mut().enumerate() {
            let lo = bytes[2 * row];
            let hi = bytes[2 * row + 1];
            for (col, pixel) in pixels.iter_mut().enumerate() {
                let bit = 7 - col;
                *pixel = (((hi >> bit) & 0x01) << 1) | ((lo >> bit) & 0x01);
            }
        }
        tile
    }

    /// Draw background line `ly` into the back buffer.
    ///
    /// Does nothing while the LCD is off or for VBlank lines; the back buffer
    /// keeps whatever it held.
    pub fn render_scanline(&mut self, mmu: &Mmu, ly: u8) {
        let lcdc = mmu.lcdc();
        if !lcdc.contains(LcdControl::LCD_ENABLE) || ly as usize >= SCREEN_HEIGHT {
            return;
        }

        let map_base = if lcdc.contains(LcdControl::BG_TILE_MAP_HIGH) {
            BG_MAP_HIGH
        } else {
            BG_MAP_LOW
        };
        let tile_row = ly as usize / 8;
        let row_in_tile = ly as usize % 8;
        let map_row = map_base + tile_row * TILE_MAP_WIDTH;

        let vram = mmu.vram();
        for tile_col in 0..TILES_PER_ROW {
            let tile = self.tile(mmu, vram[map_row + tile_col]);
            let x = tile_col * 8;
            self.back[ly as usize][x..x + 8].copy_from_slice(&tile[row_in_tile]);
        }
    }

    /// Publish the back buffer.
    pub fn swap_buffers(&mut self) {
        *self.front = *self.back;
        self.frames_completed += 1;
    }
}

impl ScanlineRenderer for Ppu {
    fn render_scanline(&mut self, mmu: &Mmu, ly: u8) {
        Ppu::render_scanline(self, mmu, ly);
    }

    fn swap_buffers(&mut self) {
        Ppu::swap_buffers(self);
    }
}
