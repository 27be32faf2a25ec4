mod arith;
mod branch;
mod data;
mod stack;
mod system;

use super::{Flow, Intel8080, IoPorts};
use crate::error::CpuError;
use crate::memory::Memory;

impl Intel8080 {
    /// Decode and execute a single opcode.
    ///
    /// PC still points at the opcode while a handler runs; immediate operands
    /// are read at PC+1 and PC+2 without moving it. `step` advances PC for
    /// every handler that returns [`Flow::Next`].
    pub(super) fn execute<M, P>(&mut self, mem: &mut M, io: &mut P, opcode: u8) -> Result<Flow, CpuError>
    where
        M: Memory + ?Sized,
        P: IoPorts + ?Sized,
    {
        let flow = match opcode {
            // NOP
            0x00 => Flow::Next,

            // LXI rp,d16
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_lxi(mem, opcode),

            // STAX B/D, LDAX B/D
            0x02 | 0x12 => self.exec_stax(mem, opcode),
            0x0a | 0x1a => self.exec_ldax(mem, opcode),

            // SHLD/LHLD/STA/LDA a16
            0x22 => self.exec_shld(mem),
            0x2a => self.exec_lhld(mem),
            0x32 => self.exec_sta(mem),
            0x3a => self.exec_lda(mem),

            // INX/DCX rp
            0x03 | 0x13 | 0x23 | 0x33 => self.exec_inx(opcode),
            0x0b | 0x1b | 0x2b | 0x3b => self.exec_dcx(opcode),

            // INR/DCR r (and M)
            0x04 | 0x0c | 0x14 | 0x1c | 0x24 | 0x2c | 0x34 | 0x3c => self.exec_inr(mem, opcode),
            0x05 | 0x0d | 0x15 | 0x1d | 0x25 | 0x2d | 0x35 | 0x3d => self.exec_dcr(mem, opcode),

            // MVI r,d8 (and M)
            0x06 | 0x0e | 0x16 | 0x1e | 0x26 | 0x2e | 0x36 | 0x3e => self.exec_mvi(mem, opcode),

            // Accumulator rotates
            0x07 | 0x0f | 0x17 | 0x1f => self.exec_rotate(opcode),

            // DAD rp
            0x09 | 0x19 | 0x29 | 0x39 => self.exec_dad(opcode),

            0x27 => self.exec_daa(),
            0x2f => self.exec_cma(),
            0x37 => self.exec_stc(),
            0x3f => self.exec_cmc(),

            // HLT sits in the middle of the MOV block.
            0x76 => self.exec_hlt(),
            0x40..=0x7f => self.exec_mov(mem, opcode),

            // ADD/ADC/SUB/SBB/ANA/XRA/ORA/CMP r
            0x80..=0xbf => self.exec_alu_reg(mem, opcode),

            // ADI/ACI/SUI/SBI/ANI/XRI/ORI/CPI d8
            0xc6 | 0xce | 0xd6 | 0xde | 0xe6 | 0xee | 0xf6 | 0xfe => self.exec_alu_imm(mem, opcode),

            // Returns
            0xc9 => self.exec_ret(mem),
            0xc0 | 0xc8 | 0xd0 | 0xd8 | 0xe0 | 0xe8 | 0xf0 | 0xf8 => self.exec_ret_cond(mem, opcode),

            // Jumps
            0xc3 => self.exec_jmp(mem),
            0xc2 | 0xca | 0xd2 | 0xda | 0xe2 | 0xea | 0xf2 | 0xfa => self.exec_jmp_cond(mem, opcode),
            0xe9 => self.exec_pchl(),

            // Calls
            0xcd => self.exec_call(mem),
            0xc4 | 0xcc | 0xd4 | 0xdc | 0xe4 | 0xec | 0xf4 | 0xfc => self.exec_call_cond(mem, opcode),

            // RST n
            0xc7 | 0xcf | 0xd7 | 0xdf | 0xe7 | 0xef | 0xf7 | 0xff => self.exec_rst(mem, opcode),

            // Stack
            0xc1 | 0xd1 | 0xe1 | 0xf1 => self.exec_pop(mem, opcode),
            0xc5 | 0xd5 | 0xe5 | 0xf5 => self.exec_push(mem, opcode),
            0xe3 => self.exec_xthl(mem),
            0xf9 => self.exec_sphl(),
            0xeb => self.exec_xchg(),

            // I/O and interrupt control
            0xd3 => self.exec_out(mem, io),
            0xdb => self.exec_in(mem, io),
            0xf3 => self.exec_di(),
            0xfb => self.exec_ei(),

            // 0x08/0x10/.../0x38, 0xcb, 0xd9, 0xdd, 0xed, 0xfd
            _ => {
                return Err(CpuError::UnsupportedOpcode {
                    opcode,
                    pc: self.regs.pc,
                })
            }
        };
        Ok(flow)
    }
}
