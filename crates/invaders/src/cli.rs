use std::path::PathBuf;

use clap::Parser;

use invaders_machine::{DipSwitches, MachineConfig};

/// Space Invaders arcade emulator.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Directory holding the ROM parts invaders.h, .g, .f and .e
    #[arg(short, long, default_value = "roms")]
    pub dir: PathBuf,

    /// Trace every instruction and port access
    #[arg(long)]
    pub debug: bool,

    /// Window scale factor
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale_factor: u32,

    /// Run without a window or sound
    #[arg(long)]
    pub headless: bool,

    /// Stop after this many frames (headless only)
    #[arg(long, requires = "headless")]
    pub frames: Option<u64>,

    /// Ships per game set on the DIP switches
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(3..=6))]
    pub ships: u8,

    /// Extra ship at 1000 points instead of 1500
    #[arg(long)]
    pub bonus_at_1000: bool,

    /// Execute undocumented opcodes as their documented aliases
    #[arg(long)]
    pub allow_undocumented: bool,

    /// Directory holding the WAV sound effects
    #[arg(long, default_value = invaders_sdl2::audio::DEFAULT_SOUND_DIR)]
    pub sounds: PathBuf,
}

impl Cli {
    pub fn machine_config(&self) -> MachineConfig {
        let dip_switches = DipSwitches {
            ships: self.ships,
            bonus_life_at_1000: self.bonus_at_1000,
            ..DipSwitches::default()
        };
        MachineConfig::builder()
            .dip_switches(dip_switches)
            .debug(self.debug)
            .strict_opcodes(!self.allow_undocumented)
            .build()
    }
}
