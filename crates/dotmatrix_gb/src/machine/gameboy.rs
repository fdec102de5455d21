use crate::cpu::{Cpu, CpuError, Registers};

use super::{Cartridge, Config, Frame, Mmu, Ppu};

/// High-level Game Boy machine.
///
/// Owns the CPU core, the address space and the background renderer, and
/// runs the driving loop: execute one instruction, advance the scanline
/// timer by its cycles, then service interrupts.
pub struct GameBoy {
    pub cpu: Cpu,
    pub mmu: Mmu,
    pub ppu: Ppu,
    config: Config,
    /// Cycles run towards the current frame.
    frame_cycles: u32,
}

impl GameBoy {
    pub fn new(rom: &[u8]) -> Self {
        Self::with_config(rom, Config::default())
    }

    pub fn with_config(rom: &[u8], config: Config) -> Self {
        Self {
            cpu: Cpu::with_registers(Self::initial_registers(&config)),
            mmu: Mmu::new(Cartridge::new(rom)),
            ppu: Ppu::new(),
            config,
            frame_cycles: 0,
        }
    }

    fn initial_registers(config: &Config) -> Registers {
        if config.post_boot_registers {
            Registers::post_boot()
        } else {
            Registers::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reset CPU, memory and video while keeping the loaded cartridge.
    pub fn reset(&mut self) {
        let cartridge = self.mmu.cartridge().clone();
        self.cpu.reset_to(Self::initial_registers(&self.config));
        self.mmu = Mmu::new(cartridge);
        self.ppu = Ppu::new();
        self.frame_cycles = 0;
    }

    /// One driving-loop iteration. Returns the instruction's cycles plus any
    /// interrupt dispatch cost.
    pub fn step(&mut self) -> Result<u32, CpuError> {
        let cycles = self.cpu.step(&mut self.mmu)?;
        self.mmu.update_scanline(cycles, &mut self.ppu);
        let extra = self.cpu.handle_interrupts(&mut self.mmu);
        Ok(cycles + extra)
    }

    /// Run until a frame's worth of cycles has elapsed.
    ///
    /// Overshoot carries into the next frame. On a decode fault the partial
    /// frame is kept and the error is returned.
    pub fn step_frame(&mut self) -> Result<(), CpuError> {
        while self.frame_cycles < self.config.frame_cycles {
            self.frame_cycles += self.step()?;
        }
        self.frame_cycles -= self.config.frame_cycles;
        Ok(())
    }

    /// Overshoot carried into the next `step_frame`. Plain `step` calls do
    /// not count towards it.
    pub fn frame_cycles(&self) -> u32 {
        self.frame_cycles
    }

    /// Last complete frame.
    pub fn frame(&self) -> &Frame {
        self.ppu.front_buffer()
    }
}
