use super::super::{Flow, Intel8080};
use crate::memory::Memory;

impl Intel8080 {
    pub(super) fn exec_alu_reg<M: Memory + ?Sized>(&mut self, mem: &M, opcode: u8) -> Flow {
        let value = self.read_reg(mem, opcode);
        self.alu_op(opcode >> 3, value);
        Flow::Next
    }

    pub(super) fn exec_alu_imm<M: Memory + ?Sized>(&mut self, mem: &M, opcode: u8) -> Flow {
        let value = self.imm8(mem);
        self.alu_op(opcode >> 3, value);
        Flow::Next
    }

    pub(super) fn exec_inr<M: Memory + ?Sized>(&mut self, mem: &mut M, opcode: u8) -> Flow {
        let index = opcode >> 3;
        let value = self.read_reg(mem, index);
        let result = self.increment(value);
        self.write_reg(mem, index, result);
        Flow::Next
    }

    pub(super) fn exec_dcr<M: Memory + ?Sized>(&mut self, mem: &mut M, opcode: u8) -> Flow {
        let index = opcode >> 3;
        let value = self.read_reg(mem, index);
        let result = self.decrement(value);
        self.write_reg(mem, index, result);
        Flow::Next
    }

    /// INX and DCX touch no flags.
    pub(super) fn exec_inx(&mut self, opcode: u8) -> Flow {
        let index = opcode >> 4;
        let value = self.regs.pair_or_sp(index).wrapping_add(1);
        self.regs.set_pair_or_sp(index, value);
        Flow::Next
    }

    pub(super) fn exec_dcx(&mut self, opcode: u8) -> Flow {
        let index = opcode >> 4;
        let value = self.regs.pair_or_sp(index).wrapping_sub(1);
        self.regs.set_pair_or_sp(index, value);
        Flow::Next
    }

    pub(super) fn exec_dad(&mut self, opcode: u8) -> Flow {
        let value = self.regs.pair_or_sp(opcode >> 4);
        self.dad(value);
        Flow::Next
    }

    pub(super) fn exec_rotate(&mut self, opcode: u8) -> Flow {
        match opcode {
            0x07 => self.rotate_left(),
            0x0f => self.rotate_right(),
            0x17 => self.rotate_left_through_carry(),
            _ => self.rotate_right_through_carry(),
        }
        Flow::Next
    }

    pub(super) fn exec_daa(&mut self) -> Flow {
        self.decimal_adjust();
        Flow::Next
    }

    /// CMA: no flags.
    pub(super) fn exec_cma(&mut self) -> Flow {
        self.regs.a = !self.regs.a;
        Flow::Next
    }

    pub(super) fn exec_stc(&mut self) -> Flow {
        self.flags.cy = true;
        Flow::Next
    }

    pub(super) fn exec_cmc(&mut self) -> Flow {
        self.flags.cy = !self.flags.cy;
        Flow::Next
    }
}
