use std::fs;
use std::path::Path;

use invaders_cpu::Memory;

use crate::error::RomError;

/// Size of each ROM chip on the board.
pub const ROM_PART_SIZE: usize = 0x800;

/// ROM chips and the address each one is mapped at.
pub const ROM_PARTS: [(&str, usize); 4] = [
    ("invaders.h", 0x0000),
    ("invaders.g", 0x0800),
    ("invaders.f", 0x1000),
    ("invaders.e", 0x1800),
];

/// Load the four ROM parts found in `dir` into `mem`.
///
/// Any missing part aborts the load; parts loaded before the failure stay in
/// memory.
pub fn load_rom_dir<M: Memory + ?Sized>(dir: &Path, mem: &mut M) -> Result<(), RomError> {
    if dir.as_os_str().is_empty() {
        return Err(RomError::EmptyDirectory);
    }
    fs::metadata(dir).map_err(|source| RomError::MissingDirectory {
        dir: dir.to_path_buf(),
        source,
    })?;

    for (name, offset) in ROM_PARTS {
        let part = dir.join(name);
        let bytes = fs::read(&part).map_err(|source| RomError::Load {
            part: part.clone(),
            source,
        })?;
        if bytes.len() != ROM_PART_SIZE {
            log::warn!(
                "ROM part {} is {:#x} bytes, expected {:#x}",
                part.display(),
                bytes.len(),
                ROM_PART_SIZE
            );
        }
        mem.load(offset, &bytes)?;
        log::info!("Loaded {} at {offset:#06x}", part.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use invaders_cpu::BasicMemory;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "invaders-rom-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn loads_parts_at_their_offsets() {
        let dir = scratch_dir("offsets");
        for (i, (name, _)) in ROM_PARTS.iter().enumerate() {
            fs::write(dir.join(name), vec![0x10 + i as u8; ROM_PART_SIZE]).unwrap();
        }

        let mut mem = BasicMemory::new();
        load_rom_dir(&dir, &mut mem).unwrap();
        assert_eq!(mem.read(0x0000), 0x10);
        assert_eq!(mem.read(0x07ff), 0x10);
        assert_eq!(mem.read(0x0800), 0x11);
        assert_eq!(mem.read(0x1000), 0x12);
        assert_eq!(mem.read(0x1fff), 0x13);
        assert_eq!(mem.read(0x2000), 0x00);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn empty_directory_name_is_rejected() {
        let mut mem = BasicMemory::new();
        let err = load_rom_dir(Path::new(""), &mut mem).unwrap_err();
        assert!(matches!(err, RomError::EmptyDirectory));
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = std::env::temp_dir().join("invaders-rom-does-not-exist");
        let mut mem = BasicMemory::new();
        let err = load_rom_dir(&dir, &mut mem).unwrap_err();
        assert!(matches!(err, RomError::MissingDirectory { .. }));
    }

    #[test]
    fn missing_part_names_the_file() {
        let dir = scratch_dir("missing-part");
        fs::write(dir.join("invaders.h"), [0u8; ROM_PART_SIZE]).unwrap();
        fs::write(dir.join("invaders.g"), [0u8; ROM_PART_SIZE]).unwrap();

        let mut mem = BasicMemory::new();
        match load_rom_dir(&dir, &mut mem) {
            Err(RomError::Load { part, .. }) => assert_eq!(part, dir.join("invaders.f")),
            other => panic!("unexpected result: {other:?}"),
        }

        fs::remove_dir_all(&dir).unwrap();
    }
}
