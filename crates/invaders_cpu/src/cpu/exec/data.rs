use super::super::{Flow, Intel8080};
use crate::memory::Memory;

impl Intel8080 {
    pub(super) fn exec_lxi<M: Memory + ?Sized>(&mut self, mem: &M, opcode: u8) -> Flow {
        let value = self.imm16(mem);
        self.regs.set_pair_or_sp(opcode >> 4, value);
        Flow::Next
    }

    pub(super) fn exec_stax<M: Memory + ?Sized>(&mut self, mem: &mut M, opcode: u8) -> Flow {
        let addr = if opcode == 0x02 {
            self.regs.bc()
        } else {
            self.regs.de()
        };
        mem.write(addr, self.regs.a);
        Flow::Next
    }

    pub(super) fn exec_ldax<M: Memory + ?Sized>(&mut self, mem: &M, opcode: u8) -> Flow {
        let addr = if opcode == 0x0a {
            self.regs.bc()
        } else {
            self.regs.de()
        };
        self.regs.a = mem.read(addr);
        Flow::Next
    }

    /// SHLD: L to (a16), H to (a16+1).
    pub(super) fn exec_shld<M: Memory + ?Sized>(&mut self, mem: &mut M) -> Flow {
        let addr = self.imm16(mem);
        mem.write_word(addr, self.regs.hl());
        Flow::Next
    }

    pub(super) fn exec_lhld<M: Memory + ?Sized>(&mut self, mem: &M) -> Flow {
        let addr = self.imm16(mem);
        let value = mem.read_word(addr);
        self.regs.set_hl(value);
        Flow::Next
    }

    pub(super) fn exec_sta<M: Memory + ?Sized>(&mut self, mem: &mut M) -> Flow {
        let addr = self.imm16(mem);
        mem.write(addr, self.regs.a);
        Flow::Next
    }

    pub(super) fn exec_lda<M: Memory + ?Sized>(&mut self, mem: &M) -> Flow {
        let addr = self.imm16(mem);
        self.regs.a = mem.read(addr);
        Flow::Next
    }

    pub(super) fn exec_mvi<M: Memory + ?Sized>(&mut self, mem: &mut M, opcode: u8) -> Flow {
        let value = self.imm8(mem);
        self.write_reg(mem, opcode >> 3, value);
        Flow::Next
    }

    /// MOV dst,src with dst in bits 3–5 and src in bits 0–2.
    pub(super) fn exec_mov<M: Memory + ?Sized>(&mut self, mem: &mut M, opcode: u8) -> Flow {
        let value = self.read_reg(mem, opcode);
        self.write_reg(mem, opcode >> 3, value);
        Flow::Next
    }

    pub(super) fn exec_xchg(&mut self) -> Flow {
        let de = self.regs.de();
        self.regs.set_de(self.regs.hl());
        self.regs.set_hl(de);
        Flow::Next
    }
}
