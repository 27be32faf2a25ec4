use super::super::{Flow, Intel8080, IoPorts};
use crate::memory::Memory;

impl Intel8080 {
    pub(super) fn exec_in<M, P>(&mut self, mem: &M, io: &mut P) -> Flow
    where
        M: Memory + ?Sized,
        P: IoPorts + ?Sized,
    {
        let port = self.imm8(mem);
        self.regs.a = io.input(port);
        Flow::Next
    }

    pub(super) fn exec_out<M, P>(&mut self, mem: &M, io: &mut P) -> Flow
    where
        M: Memory + ?Sized,
        P: IoPorts + ?Sized,
    {
        let port = self.imm8(mem);
        io.output(port, self.regs.a);
        Flow::Next
    }

    pub(super) fn exec_ei(&mut self) -> Flow {
        self.interrupts_enabled = true;
        Flow::Next
    }

    pub(super) fn exec_di(&mut self) -> Flow {
        self.interrupts_enabled = false;
        Flow::Next
    }

    /// HLT: PC moves past the HLT so an interrupt returns to the next
    /// instruction.
    pub(super) fn exec_hlt(&mut self) -> Flow {
        self.halted = true;
        Flow::Next
    }
}
