use super::super::{Flow, Intel8080};
use crate::flags::ConditionFlags;
use crate::memory::Memory;

impl Intel8080 {
    /// PUSH B/D/H/PSW. PSW puts A in the high byte and the status byte low.
    pub(super) fn exec_push<M: Memory + ?Sized>(&mut self, mem: &mut M, opcode: u8) -> Flow {
        let value = match (opcode >> 4) & 0x03 {
            3 => u16::from_be_bytes([self.regs.a, self.flags.to_status_byte()]),
            index => self.regs.pair_or_sp(index),
        };
        self.push(mem, value);
        Flow::Next
    }

    pub(super) fn exec_pop<M: Memory + ?Sized>(&mut self, mem: &mut M, opcode: u8) -> Flow {
        let value = self.pop(mem);
        match (opcode >> 4) & 0x03 {
            3 => {
                let [a, status] = value.to_be_bytes();
                self.regs.a = a;
                self.flags = ConditionFlags::from_status_byte(status);
            }
            index => self.regs.set_pair_or_sp(index, value),
        }
        Flow::Next
    }

    /// XTHL: swap HL with the word on top of the stack; SP is unchanged.
    pub(super) fn exec_xthl<M: Memory + ?Sized>(&mut self, mem: &mut M) -> Flow {
        let sp = self.regs.sp;
        let top = mem.read_word(sp);
        mem.write_word(sp, self.regs.hl());
        self.regs.set_hl(top);
        Flow::Next
    }

    pub(super) fn exec_sphl(&mut self) -> Flow {
        self.regs.sp = self.regs.hl();
        Flow::Next
    }
}
