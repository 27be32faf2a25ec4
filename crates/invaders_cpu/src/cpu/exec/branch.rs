use super::super::{Flow, Intel8080};
use crate::memory::Memory;

impl Intel8080 {
    pub(super) fn exec_jmp<M: Memory + ?Sized>(&mut self, mem: &M) -> Flow {
        self.regs.pc = self.imm16(mem);
        Flow::Jump
    }

    /// A failed condition falls through past the 3-byte instruction.
    pub(super) fn exec_jmp_cond<M: Memory + ?Sized>(&mut self, mem: &M, opcode: u8) -> Flow {
        if self.condition(opcode) {
            self.exec_jmp(mem)
        } else {
            Flow::Next
        }
    }

    pub(super) fn exec_pchl(&mut self) -> Flow {
        self.regs.pc = self.regs.hl();
        Flow::Jump
    }

    /// Push the address after the CALL, then jump.
    pub(super) fn exec_call<M: Memory + ?Sized>(&mut self, mem: &mut M) -> Flow {
        let target = self.imm16(mem);
        let ret = self.regs.pc.wrapping_add(3);
        self.push(mem, ret);
        self.regs.pc = target;
        Flow::Jump
    }

    pub(super) fn exec_call_cond<M: Memory + ?Sized>(&mut self, mem: &mut M, opcode: u8) -> Flow {
        if self.condition(opcode) {
            self.exec_call(mem);
            Flow::Taken
        } else {
            Flow::Next
        }
    }

    pub(super) fn exec_ret<M: Memory + ?Sized>(&mut self, mem: &mut M) -> Flow {
        self.regs.pc = self.pop(mem);
        Flow::Jump
    }

    pub(super) fn exec_ret_cond<M: Memory + ?Sized>(&mut self, mem: &mut M, opcode: u8) -> Flow {
        if self.condition(opcode) {
            self.exec_ret(mem);
            Flow::Taken
        } else {
            Flow::Next
        }
    }

    /// RST n: call to `8 * n`, returning to the next instruction.
    pub(super) fn exec_rst<M: Memory + ?Sized>(&mut self, mem: &mut M, opcode: u8) -> Flow {
        let ret = self.regs.pc.wrapping_add(1);
        self.push(mem, ret);
        self.regs.pc = u16::from(opcode & 0x38);
        Flow::Jump
    }
}
