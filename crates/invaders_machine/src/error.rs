use std::io;
use std::path::PathBuf;

use invaders_cpu::{CpuError, MemoryError};
use thiserror::Error;

/// Failure to place the game ROM in memory. Always raised before the first
/// instruction runs.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("ROM directory cannot be empty")]
    EmptyDirectory,
    #[error("ROM directory {dir:?} is not accessible")]
    MissingDirectory {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not open ROM part {part:?}")]
    Load {
        part: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Memory(#[from] MemoryError),
}

#[derive(Debug, Error)]
pub enum MachineError {
    #[error(transparent)]
    Cpu(#[from] CpuError),
    #[error(transparent)]
    Rom(#[from] RomError),
}
