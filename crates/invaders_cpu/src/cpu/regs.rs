/// Register file of the Intel 8080.
///
/// B/C, D/E and H/L pair up as 16-bit values with the first register as the
/// high byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    /// Register pair selected by bits 4–5 of an opcode: 0=BC, 1=DE, 2=HL, 3=SP.
    #[inline]
    pub(crate) fn pair_or_sp(&self, index: u8) -> u16 {
        match index & 0x03 {
            0 => self.bc(),
            1 => self.de(),
            2 => self.hl(),
            _ => self.sp,
        }
    }

    #[inline]
    pub(crate) fn set_pair_or_sp(&mut self, index: u8, value: u16) {
        match index & 0x03 {
            0 => self.set_bc(value),
            1 => self.set_de(value),
            2 => self.set_hl(value),
            _ => self.sp = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Registers;

    #[test]
    fn pairs_are_high_byte_first() {
        let mut regs = Registers::default();
        regs.set_bc(0x1234);
        regs.set_de(0x5678);
        regs.set_hl(0x9abc);
        assert_eq!((regs.b, regs.c), (0x12, 0x34));
        assert_eq!((regs.d, regs.e), (0x56, 0x78));
        assert_eq!((regs.h, regs.l), (0x9a, 0xbc));
        assert_eq!(regs.bc(), 0x1234);
        assert_eq!(regs.de(), 0x5678);
        assert_eq!(regs.hl(), 0x9abc);
    }

    #[test]
    fn pair_index_three_is_the_stack_pointer() {
        let mut regs = Registers::default();
        regs.set_pair_or_sp(3, 0x2400);
        assert_eq!(regs.sp, 0x2400);
        assert_eq!(regs.pair_or_sp(3), 0x2400);
        assert_eq!(regs.pair_or_sp(0), 0);
    }
}
