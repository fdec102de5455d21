use typed_builder::TypedBuilder;

use super::CYCLES_PER_FRAME;

/// Construction-time options for [`GameBoy`](super::GameBoy).
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct Config {
    /// Start from the register state the DMG boot ROM hands over (PC=0x0100)
    /// instead of the all-zero power-on state.
    #[builder(default = false)]
    pub post_boot_registers: bool,
    /// Cycles per presented frame in `GameBoy::step_frame`.
    #[builder(default = CYCLES_PER_FRAME)]
    pub frame_cycles: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}
