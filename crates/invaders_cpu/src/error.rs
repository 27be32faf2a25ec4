use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// The byte at `pc` is not an instruction this core will execute.
    ///
    /// Fatal for the instruction stream: the length of an unknown
    /// instruction cannot be guessed, so nothing is skipped.
    #[error("unsupported opcode {opcode:#04x} at {pc:#06x}")]
    UnsupportedOpcode { opcode: u8, pc: u16 },
}
