mod alu;
mod exec;
mod regs;

pub use regs::Registers;

use crate::disasm::disassemble;
use crate::error::CpuError;
use crate::flags::ConditionFlags;
use crate::memory::Memory;
use crate::opcodes::{
    undocumented_alias, CYCLES, INSTRUCTION_LENGTHS, INTERRUPT_CYCLES, TAKEN_BRANCH_CYCLES,
};

/// Port-mapped I/O seen by the IN and OUT instructions.
///
/// The CPU has no idea what sits behind a port; the machine decides.
pub trait IoPorts {
    fn input(&mut self, port: u8) -> u8;
    fn output(&mut self, port: u8, value: u8);
}

/// Ports that read as zero and swallow writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPorts;

impl IoPorts for NullPorts {
    fn input(&mut self, _port: u8) -> u8 {
        0
    }

    fn output(&mut self, _port: u8, _value: u8) {}
}

/// How an executed instruction left the program counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    /// Sequential: advance PC by the opcode's length.
    Next,
    /// The handler set PC itself.
    Jump,
    /// A conditional CALL or RET whose condition held.
    Taken,
}

/// Intel 8080 CPU.
#[derive(Clone, Debug)]
pub struct Intel8080 {
    pub regs: Registers,
    pub flags: ConditionFlags,
    pub interrupts_enabled: bool,
    pub halted: bool,
    /// Reject the twelve undocumented opcodes instead of aliasing them.
    pub strict_opcodes: bool,
    /// Log every executed instruction at debug level.
    pub trace: bool,
    cycles: u64,
}

impl Default for Intel8080 {
    fn default() -> Self {
        Self::new()
    }
}

impl Intel8080 {
    /// Create a new CPU instance in reset state.
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            flags: ConditionFlags::default(),
            interrupts_enabled: false,
            halted: false,
            strict_opcodes: true,
            trace: false,
            cycles: 0,
        }
    }

    /// Reset registers and state, keeping the opcode policy and trace setting.
    pub fn reset(&mut self) {
        *self = Self {
            strict_opcodes: self.strict_opcodes,
            trace: self.trace,
            ..Self::new()
        };
    }

    /// Total cycles executed since reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn is_running(&self) -> bool {
        !self.halted
    }

    /// Execute one instruction and return the cycles it took.
    ///
    /// A halted CPU does not fetch and reports zero cycles until an interrupt
    /// revives it.
    pub fn step<M, P>(&mut self, mem: &mut M, io: &mut P) -> Result<u32, CpuError>
    where
        M: Memory + ?Sized,
        P: IoPorts + ?Sized,
    {
        if self.halted {
            return Ok(0);
        }

        let pc = self.regs.pc;
        let opcode = self.decode(mem.read(pc));

        if self.trace && log::log_enabled!(log::Level::Debug) {
            let (text, _) = disassemble(mem.read_all(), pc);
            log::debug!(
                "{text:<20} A={:02x} BC={:04x} DE={:04x} HL={:04x} SP={:04x} F={:02x}",
                self.regs.a,
                self.regs.bc(),
                self.regs.de(),
                self.regs.hl(),
                self.regs.sp,
                self.flags.to_status_byte()
            );
        }

        let mut cycles = u32::from(CYCLES[opcode as usize]);
        match self.execute(mem, io, opcode)? {
            Flow::Next => {
                let len = u16::from(INSTRUCTION_LENGTHS[opcode as usize]);
                self.regs.pc = pc.wrapping_add(len);
            }
            Flow::Jump => {}
            Flow::Taken => cycles += TAKEN_BRANCH_CYCLES,
        }

        self.cycles += u64::from(cycles);
        Ok(cycles)
    }

    /// Deliver a maskable interrupt that jumps to `vector`.
    ///
    /// Behaves like a CALL to the vector: the current PC is pushed, a halted
    /// CPU resumes, and further interrupts stay disabled until EI. With
    /// interrupts disabled nothing happens and the request is dropped.
    /// Returns whether the interrupt was accepted.
    pub fn interrupt<M: Memory + ?Sized>(&mut self, mem: &mut M, vector: u16) -> bool {
        if !self.interrupts_enabled {
            return false;
        }
        self.interrupts_enabled = false;
        self.halted = false;
        self.push(mem, self.regs.pc);
        self.regs.pc = vector;
        self.cycles += u64::from(INTERRUPT_CYCLES);
        true
    }

    /// Map undocumented opcodes onto their aliases unless running strict.
    ///
    /// In strict mode the raw byte is kept and dispatch rejects it.
    fn decode(&self, raw: u8) -> u8 {
        match undocumented_alias(raw) {
            Some(alias) if !self.strict_opcodes => alias,
            _ => raw,
        }
    }

    #[inline]
    fn imm8<M: Memory + ?Sized>(&self, mem: &M) -> u8 {
        mem.read(self.regs.pc.wrapping_add(1))
    }

    #[inline]
    fn imm16<M: Memory + ?Sized>(&self, mem: &M) -> u16 {
        mem.read_word(self.regs.pc.wrapping_add(1))
    }

    /// Read register `index` in opcode encoding order
    /// (0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=M, 7=A).
    ///
    /// M is the memory byte addressed by HL.
    #[inline]
    fn read_reg<M: Memory + ?Sized>(&self, mem: &M, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => mem.read(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    #[inline]
    fn write_reg<M: Memory + ?Sized>(&mut self, mem: &mut M, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => mem.write(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// SP drops by two, then the low byte lands at SP and the high byte at SP+1.
    pub fn push<M: Memory + ?Sized>(&mut self, mem: &mut M, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        mem.write_word(self.regs.sp, value);
    }

    pub fn pop<M: Memory + ?Sized>(&mut self, mem: &mut M) -> u16 {
        let value = mem.read_word(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }

    /// Condition encoded in bits 3–5 of Jcc/Ccc/Rcc:
    /// NZ, Z, NC, C, PO, PE, P, M.
    fn condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x07 {
            0 => !self.flags.z,
            1 => self.flags.z,
            2 => !self.flags.cy,
            3 => self.flags.cy,
            4 => !self.flags.p,
            5 => self.flags.p,
            6 => !self.flags.s,
            _ => self.flags.s,
        }
    }
}
