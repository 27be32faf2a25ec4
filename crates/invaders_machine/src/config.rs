use typed_builder::TypedBuilder;

use crate::input::DipSwitches;

/// The arcade board runs its 8080 at 2 MHz.
pub const DEFAULT_CLOCK_SPEED: u32 = 2_000_000;
/// Video refresh rate of the cabinet monitor.
pub const DEFAULT_REFRESH_RATE: u32 = 60;

#[derive(Clone, Debug, TypedBuilder)]
pub struct MachineConfig {
    /// CPU clock in Hz.
    #[builder(default = DEFAULT_CLOCK_SPEED)]
    pub clock_speed: u32,
    /// Frames per second; two interrupts are raised per frame.
    #[builder(default = DEFAULT_REFRESH_RATE)]
    pub refresh_rate: u32,
    #[builder(default)]
    pub dip_switches: DipSwitches,
    /// Trace every instruction and port access at debug level.
    #[builder(default = false)]
    pub debug: bool,
    /// Fail on undocumented opcodes instead of running their aliases.
    #[builder(default = true)]
    pub strict_opcodes: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MachineConfig {
    /// CPU cycles in one video frame.
    pub fn cycles_per_frame(&self) -> u32 {
        self.clock_speed / self.refresh_rate.max(1)
    }
}
