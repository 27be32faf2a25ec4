/// Condition flags of the Intel 8080.
///
/// Packed into the status byte of the Program Status Word as
/// `S Z 0 AC 0 P 1 CY` (bit 7 down to bit 0). Bit 1 always reads 1 and
/// bits 3 and 5 always read 0.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConditionFlags {
    pub z: bool,  // zero
    pub s: bool,  // sign
    pub p: bool,  // parity (even)
    pub cy: bool, // carry
    pub ac: bool, // auxiliary carry
}

const SIGN: u8 = 0x80;
const ZERO: u8 = 0x40;
const AUX_CARRY: u8 = 0x10;
const PARITY: u8 = 0x04;
const ALWAYS_ONE: u8 = 0x02;
const CARRY: u8 = 0x01;

impl ConditionFlags {
    pub fn to_status_byte(self) -> u8 {
        let mut f = ALWAYS_ONE;
        if self.s {
            f |= SIGN;
        }
        if self.z {
            f |= ZERO;
        }
        if self.ac {
            f |= AUX_CARRY;
        }
        if self.p {
            f |= PARITY;
        }
        if self.cy {
            f |= CARRY;
        }
        f
    }

    pub fn from_status_byte(v: u8) -> Self {
        Self {
            s: v & SIGN != 0,
            z: v & ZERO != 0,
            ac: v & AUX_CARRY != 0,
            p: v & PARITY != 0,
            cy: v & CARRY != 0,
        }
    }

    /// Parity is set when the byte has an even number of set bits.
    #[inline]
    pub fn set_parity(&mut self, value: u8) {
        self.p = value.count_ones() % 2 == 0;
    }

    /// Zero, sign and parity from an 8-bit result.
    #[inline]
    pub fn set_zsp(&mut self, value: u8) {
        self.z = value == 0;
        self.s = value & 0x80 != 0;
        self.set_parity(value);
    }

    #[inline]
    pub fn carry_as_byte(self) -> u8 {
        u8::from(self.cy)
    }
}
