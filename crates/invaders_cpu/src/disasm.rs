//! Human-readable rendering of 8080 instructions for debug logging.

use crate::opcodes::{undocumented_alias, INSTRUCTION_LENGTHS};

const REGS: [&str; 8] = ["B", "C", "D", "E", "H", "L", "M", "A"];
const PAIRS: [&str; 4] = ["B", "D", "H", "SP"];
const STACK_PAIRS: [&str; 4] = ["B", "D", "H", "PSW"];
const CONDITIONS: [&str; 8] = ["NZ", "Z", "NC", "C", "PO", "PE", "P", "M"];
const ALU: [&str; 8] = ["ADD", "ADC", "SUB", "SBB", "ANA", "XRA", "ORA", "CMP"];
const ALU_IMM: [&str; 8] = ["ADI", "ACI", "SUI", "SBI", "ANI", "XRI", "ORI", "CPI"];

/// Disassemble the instruction at `pc`.
///
/// Returns the rendered line (`"0100 MVI B,#$12"`) and the instruction
/// length. Operand bytes past the end of `bytes` read as zero. Undocumented
/// opcodes render as their alias prefixed with `*`.
pub fn disassemble(bytes: &[u8], pc: u16) -> (String, u16) {
    let byte_at = |offset: u16| {
        bytes
            .get(usize::from(pc.wrapping_add(offset)))
            .copied()
            .unwrap_or(0)
    };
    let opcode = byte_at(0);
    let length = u16::from(INSTRUCTION_LENGTHS[opcode as usize]);
    let d8 = byte_at(1);
    let d16 = u16::from_le_bytes([byte_at(1), byte_at(2)]);

    let text = match undocumented_alias(opcode) {
        Some(alias) => format!("*{}", mnemonic(alias, d8, d16)),
        None => mnemonic(opcode, d8, d16),
    };
    (format!("{pc:04x} {text}"), length)
}

fn mnemonic(opcode: u8, d8: u8, d16: u16) -> String {
    let dst = REGS[((opcode >> 3) & 0x07) as usize];
    let src = REGS[(opcode & 0x07) as usize];
    let pair = PAIRS[((opcode >> 4) & 0x03) as usize];
    let cond = CONDITIONS[((opcode >> 3) & 0x07) as usize];

    match opcode {
        0x00 => "NOP".to_string(),
        0x01 | 0x11 | 0x21 | 0x31 => format!("LXI {pair},#${d16:04x}"),
        0x02 | 0x12 => format!("STAX {pair}"),
        0x0a | 0x1a => format!("LDAX {pair}"),
        0x22 => format!("SHLD ${d16:04x}"),
        0x2a => format!("LHLD ${d16:04x}"),
        0x32 => format!("STA ${d16:04x}"),
        0x3a => format!("LDA ${d16:04x}"),
        0x03 | 0x13 | 0x23 | 0x33 => format!("INX {pair}"),
        0x0b | 0x1b | 0x2b | 0x3b => format!("DCX {pair}"),
        0x09 | 0x19 | 0x29 | 0x39 => format!("DAD {pair}"),
        0x04 | 0x0c | 0x14 | 0x1c | 0x24 | 0x2c | 0x34 | 0x3c => format!("INR {dst}"),
        0x05 | 0x0d | 0x15 | 0x1d | 0x25 | 0x2d | 0x35 | 0x3d => format!("DCR {dst}"),
        0x06 | 0x0e | 0x16 | 0x1e | 0x26 | 0x2e | 0x36 | 0x3e => format!("MVI {dst},#${d8:02x}"),
        0x07 => "RLC".to_string(),
        0x0f => "RRC".to_string(),
        0x17 => "RAL".to_string(),
        0x1f => "RAR".to_string(),
        0x27 => "DAA".to_string(),
        0x2f => "CMA".to_string(),
        0x37 => "STC".to_string(),
        0x3f => "CMC".to_string(),
        0x76 => "HLT".to_string(),
        0x40..=0x7f => format!("MOV {dst},{src}"),
        0x80..=0xbf => format!("{} {src}", ALU[((opcode >> 3) & 0x07) as usize]),
        0xc6 | 0xce | 0xd6 | 0xde | 0xe6 | 0xee | 0xf6 | 0xfe => {
            format!("{} #${d8:02x}", ALU_IMM[((opcode >> 3) & 0x07) as usize])
        }
        0xc9 => "RET".to_string(),
        0xc0 | 0xc8 | 0xd0 | 0xd8 | 0xe0 | 0xe8 | 0xf0 | 0xf8 => format!("R{cond}"),
        0xc3 => format!("JMP ${d16:04x}"),
        0xc2 | 0xca | 0xd2 | 0xda | 0xe2 | 0xea | 0xf2 | 0xfa => format!("J{cond} ${d16:04x}"),
        0xcd => format!("CALL ${d16:04x}"),
        0xc4 | 0xcc | 0xd4 | 0xdc | 0xe4 | 0xec | 0xf4 | 0xfc => format!("C{cond} ${d16:04x}"),
        0xc7 | 0xcf | 0xd7 | 0xdf | 0xe7 | 0xef | 0xf7 | 0xff => {
            format!("RST {}", (opcode >> 3) & 0x07)
        }
        0xc1 | 0xd1 | 0xe1 | 0xf1 => format!("POP {}", STACK_PAIRS[((opcode >> 4) & 0x03) as usize]),
        0xc5 | 0xd5 | 0xe5 | 0xf5 => format!("PUSH {}", STACK_PAIRS[((opcode >> 4) & 0x03) as usize]),
        0xd3 => format!("OUT #${d8:02x}"),
        0xdb => format!("IN #${d8:02x}"),
        0xe3 => "XTHL".to_string(),
        0xe9 => "PCHL".to_string(),
        0xeb => "XCHG".to_string(),
        0xf3 => "DI".to_string(),
        0xf9 => "SPHL".to_string(),
        0xfb => "EI".to_string(),
        _ => format!("UNKNOWN {opcode:02x}"),
    }
}

#[cfg(test)]
mod tests {
    use super::disassemble;

    #[test]
    fn renders_operands() {
        let rom = [0x06, 0x12, 0x21, 0x00, 0x24, 0xcd, 0xe6, 0x01, 0xb8];
        assert_eq!(disassemble(&rom, 0), ("0000 MVI B,#$12".to_string(), 2));
        assert_eq!(disassemble(&rom, 2), ("0002 LXI H,#$2400".to_string(), 3));
        assert_eq!(disassemble(&rom, 5), ("0005 CALL $01e6".to_string(), 3));
        assert_eq!(disassemble(&rom, 8), ("0008 CMP B".to_string(), 1));
    }

    #[test]
    fn register_groups() {
        assert_eq!(disassemble(&[0x77], 0).0, "0000 MOV M,A");
        assert_eq!(disassemble(&[0x76], 0).0, "0000 HLT");
        assert_eq!(disassemble(&[0xf5], 0).0, "0000 PUSH PSW");
        assert_eq!(disassemble(&[0x39], 0).0, "0000 DAD SP");
        assert_eq!(disassemble(&[0xe8], 0).0, "0000 RPE");
        assert_eq!(disassemble(&[0xd7], 0).0, "0000 RST 2");
    }

    #[test]
    fn truncated_operands_read_as_zero() {
        assert_eq!(disassemble(&[0xc3], 0), ("0000 JMP $0000".to_string(), 3));
        assert_eq!(disassemble(&[], 0x10).0, "0010 NOP");
    }

    #[test]
    fn undocumented_opcodes_are_marked() {
        assert_eq!(disassemble(&[0x08], 0), ("0000 *NOP".to_string(), 1));
        assert_eq!(disassemble(&[0xfd, 0x34, 0x12], 0), ("0000 *CALL $1234".to_string(), 3));
    }
}
