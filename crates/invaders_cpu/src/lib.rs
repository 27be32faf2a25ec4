//! Intel 8080 interpreter.
//!
//! The core knows nothing about the machine it runs in: memory comes in
//! through [`Memory`] and port I/O through [`IoPorts`], both supplied by the
//! caller on every [`Intel8080::step`].

pub mod cpu;
pub mod disasm;
pub mod error;
pub mod flags;
pub mod memory;
pub mod opcodes;

pub use cpu::{Intel8080, IoPorts, NullPorts, Registers};
pub use disasm::disassemble;
pub use error::CpuError;
pub use flags::ConditionFlags;
pub use memory::{BasicMemory, Memory, MemoryError};
