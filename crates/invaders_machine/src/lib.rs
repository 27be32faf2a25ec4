//! Space Invaders arcade hardware around the Intel 8080 core.
//!
//! [`Machine`] owns the CPU, 64 KiB of memory and the board devices behind
//! the I/O ports. Presentation concerns (drawing video RAM, playing sound,
//! reading the keyboard) stay with the caller and reach the board through
//! [`Machine::video_ram`], [`SoundSink`] and [`Machine::set_button`].

pub mod config;
pub mod error;
pub mod input;
pub mod machine;
pub mod pacer;
pub mod ports;
pub mod rom;
pub mod shifter;
pub mod sound;

pub use config::MachineConfig;
pub use error::{MachineError, RomError};
pub use input::{Buttons, DipSwitches};
pub use machine::{Machine, VRAM_SIZE, VRAM_START};
pub use pacer::FramePacer;
pub use shifter::ShiftRegister;
pub use sound::{Silent, SoundBank, SoundEffect, SoundSink};

pub use invaders_cpu;

/// Logical screen width in pixels once the monitor rotation is applied.
pub const SCREEN_WIDTH: usize = 224;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 256;
