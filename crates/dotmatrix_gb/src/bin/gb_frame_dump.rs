use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use dotmatrix_gb::{Config, Frame, GameBoy, SCREEN_HEIGHT, SCREEN_WIDTH};

const USAGE: &str = "Usage: gb_frame_dump [--post-boot] <rom_path> <out_pgm_path> [frames]";
const DEFAULT_FRAMES: u32 = 60;

/// Grey level for each colour index, lightest first.
const SHADES: [u8; 4] = [0xFF, 0xAA, 0x55, 0x00];

fn main() -> Result<()> {
    env_logger::init();

    let mut post_boot = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--post-boot" {
            post_boot = true;
        } else {
            positional.push(arg);
        }
    }

    let (rom_path, out_path, frames) = match positional.as_slice() {
        [rom, out] => (PathBuf::from(rom), PathBuf::from(out), DEFAULT_FRAMES),
        [rom, out, frames] => {
            let frames = frames
                .parse::<u32>()
                .with_context(|| format!("invalid frame count '{frames}'"))?;
            (PathBuf::from(rom), PathBuf::from(out), frames)
        }
        _ => bail!(USAGE),
    };

    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;

    let config = Config::builder().post_boot_registers(post_boot).build();
    let mut gb = GameBoy::with_config(&rom, config);
    log::info!(
        "Loaded '{}' ({}), running {} frames",
        rom_path.display(),
        gb.mmu.cartridge().title(),
        frames
    );

    for frame in 0..frames {
        gb.step_frame()
            .with_context(|| format!("emulation stopped in frame {frame}"))?;
    }

    write_pgm(&out_path, gb.frame())
        .with_context(|| format!("failed to write '{}'", out_path.display()))?;

    println!(
        "Wrote {}x{} PGM after {} frames to '{}'",
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        frames,
        out_path.display()
    );
    Ok(())
}

/// Write `frame` as a binary greyscale PGM (P5).
fn write_pgm(path: &Path, frame: &Frame) -> Result<()> {
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
    write!(out, "P5\n{SCREEN_WIDTH} {SCREEN_HEIGHT}\n255\n")?;

    let pixels: Vec<u8> = frame
        .iter()
        .flatten()
        .map(|&index| SHADES[(index & 0x03) as usize])
        .collect();
    out.write_all(&pixels)?;
    out.flush()?;
    Ok(())
}
