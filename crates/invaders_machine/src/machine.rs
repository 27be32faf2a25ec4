use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use invaders_cpu::{BasicMemory, CpuError, Intel8080, Memory};

use crate::config::MachineConfig;
use crate::error::{MachineError, RomError};
use crate::input::Buttons;
use crate::pacer::FramePacer;
use crate::ports::Board;
use crate::rom;
use crate::shifter::ShiftRegister;
use crate::sound::SoundSink;

/// Start of the 1bpp frame buffer.
///
/// The board maps ROM at 0x0000-0x1fff, work RAM at 0x2000-0x23ff and video
/// RAM at 0x2400-0x3fff.
pub const VRAM_START: usize = 0x2400;
/// 224 columns of 32 bytes.
pub const VRAM_SIZE: usize = 0x1c00;

/// RST 1 fires mid-frame and RST 2 at vertical blank.
const MID_FRAME_VECTOR: u16 = 0x0008;
const VBLANK_VECTOR: u16 = 0x0010;

/// The Space Invaders board: CPU, memory and port devices.
pub struct Machine {
    cpu: Intel8080,
    memory: BasicMemory,
    board: Board,
    config: MachineConfig,
    next_interrupt: u16,
    frames: u64,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(MachineConfig::default())
    }
}

impl Machine {
    /// A powered-up board with 64 KiB of zeroed memory and no ROM.
    pub fn new(config: MachineConfig) -> Self {
        let mut cpu = Intel8080::new();
        cpu.strict_opcodes = config.strict_opcodes;
        cpu.trace = config.debug;

        let mut board = Board::new(config.dip_switches);
        board.trace = config.debug;

        Self {
            cpu,
            memory: BasicMemory::new(),
            board,
            config,
            next_interrupt: MID_FRAME_VECTOR,
            frames: 0,
        }
    }

    pub fn with_sound_sink(mut self, sink: impl SoundSink + 'static) -> Self {
        self.set_sound_sink(Box::new(sink));
        self
    }

    pub fn set_sound_sink(&mut self, sink: Box<dyn SoundSink>) {
        self.board.sink = sink;
    }

    /// Load a single combined ROM image at 0x0000.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), RomError> {
        self.memory.load(0, rom)?;
        self.cpu.regs.pc = 0x0000;
        Ok(())
    }

    /// Load `invaders.h`, `.g`, `.f` and `.e` from `dir`.
    pub fn load_rom_dir(&mut self, dir: impl AsRef<Path>) -> Result<(), RomError> {
        rom::load_rom_dir(dir.as_ref(), &mut self.memory)?;
        self.cpu.regs.pc = 0x0000;
        Ok(())
    }

    /// Reset the CPU and port devices. Memory, including ROM, is kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.board.reset();
        self.next_interrupt = MID_FRAME_VECTOR;
        self.frames = 0;
    }

    /// Run one video frame: half a frame of cycles, the mid-frame interrupt,
    /// the rest of the frame, then the vertical blank interrupt.
    ///
    /// A halted CPU ends its half early; the following interrupt is still
    /// offered.
    pub fn step_frame(&mut self) -> Result<(), MachineError> {
        let frame = self.config.cycles_per_frame();
        let mut ran = 0;

        self.run_cycles(frame / 2, &mut ran)?;
        self.raise_interrupt();
        self.run_cycles(frame, &mut ran)?;
        self.raise_interrupt();

        self.frames += 1;
        Ok(())
    }

    fn run_cycles(&mut self, target: u32, ran: &mut u32) -> Result<(), CpuError> {
        while *ran < target && self.cpu.is_running() {
            *ran += self.cpu.step(&mut self.memory, &mut self.board)?;
        }
        Ok(())
    }

    fn raise_interrupt(&mut self) {
        let vector = self.next_interrupt;
        if !self.cpu.interrupt(&mut self.memory, vector) {
            log::trace!("interrupt {vector:#04x} dropped, interrupts disabled");
        }
        self.next_interrupt = match vector {
            MID_FRAME_VECTOR => VBLANK_VECTOR,
            _ => MID_FRAME_VECTOR,
        };
    }

    /// Run paced frames until `stop` is set. Returns the frames executed.
    pub fn run(&mut self, stop: &AtomicBool) -> Result<u64, MachineError> {
        self.run_frames(None, stop)
    }

    /// Run paced frames until `stop` is set or `limit` frames have run.
    pub fn run_frames(&mut self, limit: Option<u64>, stop: &AtomicBool) -> Result<u64, MachineError> {
        let mut pacer = FramePacer::new(self.config.refresh_rate);
        let mut ran = 0;
        while !stop.load(Ordering::Relaxed) && limit.map_or(true, |limit| ran < limit) {
            let now = Instant::now();
            if pacer.frame_due(now) {
                self.step_frame()?;
                ran += 1;
            } else {
                pacer.idle(now);
            }
        }
        Ok(ran)
    }

    /// The frame buffer, 0x1c00 bytes from 0x2400.
    pub fn video_ram(&self) -> &[u8] {
        &self.memory.read_all()[VRAM_START..VRAM_START + VRAM_SIZE]
    }

    pub fn set_button(&mut self, button: Buttons, pressed: bool) {
        self.board.buttons.set(button, pressed);
    }

    pub fn buttons(&self) -> Buttons {
        self.board.buttons
    }

    pub fn cpu(&self) -> &Intel8080 {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Intel8080 {
        &mut self.cpu
    }

    pub fn memory(&self) -> &BasicMemory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut BasicMemory {
        &mut self.memory
    }

    pub fn shifter(&self) -> &ShiftRegister {
        &self.board.shifter
    }

    /// Last value written to the watchdog port.
    pub fn watchdog(&self) -> u8 {
        self.board.watchdog
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Frames run since power-on or the last reset.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Vector the next interrupt will be raised with.
    pub fn next_interrupt(&self) -> u16 {
        self.next_interrupt
    }
}
