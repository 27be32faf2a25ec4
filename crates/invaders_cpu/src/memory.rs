use thiserror::Error;

/// Full 8080 address space (64 KiB).
pub const ADDRESS_SPACE: usize = 0x10000;
/// Smallest memory accepted by [`BasicMemory::with_size`].
///
/// 16 KiB is enough for the CP/M diagnostic programs, which live at 0x0100.
pub const MIN_MEMORY_SIZE: usize = 0x4000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    #[error("memory size {size:#x} must be a power of two between 0x4000 and 0x10000")]
    InvalidSize { size: usize },
    #[error("{len:#x} bytes at offset {offset:#06x} do not fit in {size:#x} bytes of memory")]
    OutOfBounds {
        offset: usize,
        len: usize,
        size: usize,
    },
}

/// Byte-addressable storage seen by the CPU.
///
/// The CPU treats every address the same; region conventions (ROM, work RAM,
/// video RAM) belong to the machine that owns the memory.
pub trait Memory {
    fn read(&self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8);

    /// The whole backing store, for ROM placement checks and debug dumps.
    fn read_all(&self) -> &[u8];

    /// Copy `bytes` into memory starting at `offset`.
    fn load(&mut self, offset: usize, bytes: &[u8]) -> Result<(), MemoryError>;

    /// Little-endian word at `addr` (low byte first).
    fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read(addr), self.read(addr.wrapping_add(1))])
    }

    fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }
}

/// Flat, owned memory.
///
/// Sizes below 64 KiB mirror: the address is masked down to the physical
/// size, so no 16-bit address can ever land outside the buffer.
#[derive(Clone)]
pub struct BasicMemory {
    bytes: Vec<u8>,
    mask: u16,
}

impl BasicMemory {
    /// 64 KiB of zeroed memory.
    pub fn new() -> Self {
        Self {
            bytes: vec![0; ADDRESS_SPACE],
            mask: 0xffff,
        }
    }

    pub fn with_size(size: usize) -> Result<Self, MemoryError> {
        if !size.is_power_of_two() || !(MIN_MEMORY_SIZE..=ADDRESS_SPACE).contains(&size) {
            return Err(MemoryError::InvalidSize { size });
        }
        Ok(Self {
            bytes: vec![0; size],
            mask: (size - 1) as u16,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Zero every byte.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Borrow a window of memory, e.g. the video RAM region.
    ///
    /// The range is clamped to the physical size.
    pub fn slice(&self, start: usize, len: usize) -> &[u8] {
        let start = start.min(self.bytes.len());
        let end = start.saturating_add(len).min(self.bytes.len());
        &self.bytes[start..end]
    }
}

impl Default for BasicMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory for BasicMemory {
    #[inline]
    fn read(&self, addr: u16) -> u8 {
        self.bytes[(addr & self.mask) as usize]
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        self.bytes[(addr & self.mask) as usize] = value;
    }

    fn read_all(&self) -> &[u8] {
        &self.bytes
    }

    fn load(&mut self, offset: usize, bytes: &[u8]) -> Result<(), MemoryError> {
        let size = self.bytes.len();
        let end = offset
            .checked_add(bytes.len())
            .filter(|&end| end <= size)
            .ok_or(MemoryError::OutOfBounds {
                offset,
                len: bytes.len(),
                size,
            })?;
        self.bytes[offset..end].copy_from_slice(bytes);
        Ok(())
    }
}
