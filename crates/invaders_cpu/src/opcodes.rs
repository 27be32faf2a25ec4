//! Static per-opcode metadata shared by the dispatcher and the disassembler.

/// Instruction length in bytes, including the opcode itself.
///
/// Undocumented opcodes carry the length of the instruction they alias.
#[rustfmt::skip]
pub const INSTRUCTION_LENGTHS: [u8; 256] = [
//  0  1  2  3  4  5  6  7  8  9  A  B  C  D  E  F
    1, 3, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 0
    1, 3, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, // 1
    1, 3, 3, 1, 1, 1, 2, 1, 1, 1, 3, 1, 1, 1, 2, 1, // 2
    1, 3, 3, 1, 1, 1, 2, 1, 1, 1, 3, 1, 1, 1, 2, 1, // 3
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 4
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 5
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 6
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 7
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 8
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 9
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // A
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // B
    1, 1, 3, 3, 3, 1, 2, 1, 1, 1, 3, 3, 3, 3, 2, 1, // C
    1, 1, 3, 2, 3, 1, 2, 1, 1, 1, 3, 2, 3, 3, 2, 1, // D
    1, 1, 3, 1, 3, 1, 2, 1, 1, 1, 3, 1, 3, 3, 2, 1, // E
    1, 1, 3, 1, 3, 1, 2, 1, 1, 1, 3, 1, 3, 3, 2, 1, // F
];

/// Base cycle cost per opcode.
///
/// Conditional CALL and RET list their not-taken cost; a taken branch adds
/// [`TAKEN_BRANCH_CYCLES`].
#[rustfmt::skip]
pub const CYCLES: [u8; 256] = [
//  0   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
    4,  10, 7,  5,  5,  5,  7,  4,  4,  10, 7,  5,  5,  5,  7,  4,  // 0
    4,  10, 7,  5,  5,  5,  7,  4,  4,  10, 7,  5,  5,  5,  7,  4,  // 1
    4,  10, 16, 5,  5,  5,  7,  4,  4,  10, 16, 5,  5,  5,  7,  4,  // 2
    4,  10, 13, 5,  10, 10, 10, 4,  4,  10, 13, 5,  5,  5,  7,  4,  // 3
    5,  5,  5,  5,  5,  5,  7,  5,  5,  5,  5,  5,  5,  5,  7,  5,  // 4
    5,  5,  5,  5,  5,  5,  7,  5,  5,  5,  5,  5,  5,  5,  7,  5,  // 5
    5,  5,  5,  5,  5,  5,  7,  5,  5,  5,  5,  5,  5,  5,  7,  5,  // 6
    7,  7,  7,  7,  7,  7,  7,  7,  5,  5,  5,  5,  5,  5,  7,  5,  // 7
    4,  4,  4,  4,  4,  4,  7,  4,  4,  4,  4,  4,  4,  4,  7,  4,  // 8
    4,  4,  4,  4,  4,  4,  7,  4,  4,  4,  4,  4,  4,  4,  7,  4,  // 9
    4,  4,  4,  4,  4,  4,  7,  4,  4,  4,  4,  4,  4,  4,  7,  4,  // A
    4,  4,  4,  4,  4,  4,  7,  4,  4,  4,  4,  4,  4,  4,  7,  4,  // B
    5,  10, 10, 10, 11, 11, 7,  11, 5,  10, 10, 10, 11, 17, 7,  11, // C
    5,  10, 10, 10, 11, 11, 7,  11, 5,  10, 10, 10, 11, 17, 7,  11, // D
    5,  10, 10, 18, 11, 11, 7,  11, 5,  5,  10, 4,  11, 17, 7,  11, // E
    5,  10, 10, 4,  11, 11, 7,  11, 5,  5,  10, 4,  11, 17, 7,  11, // F
];

/// Extra cycles spent by a conditional CALL or RET whose condition holds.
pub const TAKEN_BRANCH_CYCLES: u32 = 6;

/// Cycles spent acknowledging an interrupt (an injected RST).
pub const INTERRUPT_CYCLES: u32 = 11;

/// Documented opcode executed in place of an undocumented one.
///
/// Returns `None` for every documented opcode.
pub fn undocumented_alias(opcode: u8) -> Option<u8> {
    match opcode {
        0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => Some(0x00),
        0xcb => Some(0xc3),
        0xd9 => Some(0xc9),
        0xdd | 0xed | 0xfd => Some(0xcd),
        _ => None,
    }
}

/// Whether the opcode sets PC itself rather than falling through.
///
/// Conditional forms count as branching even though a failed condition falls
/// through to the next instruction.
pub fn is_branch(opcode: u8) -> bool {
    matches!(
        opcode,
        0xc3 | 0xcd | 0xc9 | 0xe9
            // Jcc
            | 0xc2 | 0xca | 0xd2 | 0xda | 0xe2 | 0xea | 0xf2 | 0xfa
            // Ccc
            | 0xc4 | 0xcc | 0xd4 | 0xdc | 0xe4 | 0xec | 0xf4 | 0xfc
            // Rcc
            | 0xc0 | 0xc8 | 0xd0 | 0xd8 | 0xe0 | 0xe8 | 0xf0 | 0xf8
            // RST n
            | 0xc7 | 0xcf | 0xd7 | 0xdf | 0xe7 | 0xef | 0xf7 | 0xff
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_operand_lengths() {
        // MVI r
        for op in [0x06, 0x0e, 0x16, 0x1e, 0x26, 0x2e, 0x36, 0x3e] {
            assert_eq!(INSTRUCTION_LENGTHS[op], 2);
        }
        // Arithmetic immediates, IN and OUT
        for op in [0xc6, 0xce, 0xd6, 0xde, 0xe6, 0xee, 0xf6, 0xfe, 0xd3, 0xdb] {
            assert_eq!(INSTRUCTION_LENGTHS[op], 2);
        }
        // LXI, SHLD, LHLD, STA, LDA
        for op in [0x01, 0x11, 0x21, 0x31, 0x22, 0x2a, 0x32, 0x3a] {
            assert_eq!(INSTRUCTION_LENGTHS[op], 3);
        }
    }

    #[test]
    fn aliases_share_lengths_and_cycles() {
        for op in 0..=255u8 {
            if let Some(alias) = undocumented_alias(op) {
                assert_eq!(
                    INSTRUCTION_LENGTHS[op as usize],
                    INSTRUCTION_LENGTHS[alias as usize],
                    "opcode {op:#04x}"
                );
                assert_eq!(CYCLES[op as usize], CYCLES[alias as usize], "opcode {op:#04x}");
            }
        }
    }

    #[test]
    fn twelve_undocumented_opcodes() {
        let count = (0..=255u8).filter(|&op| undocumented_alias(op).is_some()).count();
        assert_eq!(count, 12);
    }
}
