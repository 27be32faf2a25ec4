use super::Intel8080;

impl Intel8080 {
    /// `a + n + carry_in` with full flag update; returns the 8-bit result.
    ///
    /// The sum is formed at 16-bit width so bit 8 is the carry out. Bit 4 of
    /// `a ^ n ^ result` is the carry out of bit 3.
    fn add_with_flags(&mut self, n: u8, carry_in: u8) -> u8 {
        let a = self.regs.a;
        let wide = u16::from(a) + u16::from(n) + u16::from(carry_in & 1);
        let result = wide as u8;
        self.flags.cy = wide > 0xff;
        self.flags.ac = (a ^ n ^ result) & 0x10 != 0;
        self.flags.set_zsp(result);
        result
    }

    /// `a - n - borrow_in` with full flag update; returns the 8-bit result.
    ///
    /// The 8080 subtracts by adding the one's complement of `n` with the
    /// inverted borrow as carry in. Carry then holds the inverted carry out,
    /// i.e. set when a borrow occurred, and auxiliary carry is the plain
    /// carry out of bit 3 of that addition.
    fn sub_with_flags(&mut self, n: u8, borrow_in: u8) -> u8 {
        let a = self.regs.a;
        let complement = !n;
        let wide = u16::from(a) + u16::from(complement) + u16::from((borrow_in & 1) ^ 1);
        let result = wide as u8;
        self.flags.cy = wide <= 0xff;
        self.flags.ac = (a ^ complement ^ result) & 0x10 != 0;
        self.flags.set_zsp(result);
        result
    }

    /// ADD/ADC/ADI/ACI.
    pub(crate) fn accumulator_add(&mut self, n: u8, carry_in: u8) {
        self.regs.a = self.add_with_flags(n, carry_in);
    }

    /// SUB/SBB/SUI/SBI.
    pub(crate) fn accumulator_sub(&mut self, n: u8, borrow_in: u8) {
        self.regs.a = self.sub_with_flags(n, borrow_in);
    }

    /// CMP/CPI: flags of `a - n`, accumulator untouched.
    pub(crate) fn compare(&mut self, n: u8) {
        self.sub_with_flags(n, 0);
    }

    pub(crate) fn and(&mut self, n: u8) {
        self.logical_result(self.regs.a & n);
    }

    pub(crate) fn xor(&mut self, n: u8) {
        self.logical_result(self.regs.a ^ n);
    }

    pub(crate) fn or(&mut self, n: u8) {
        self.logical_result(self.regs.a | n);
    }

    /// Logical ops always clear carry and auxiliary carry.
    fn logical_result(&mut self, result: u8) {
        self.flags.cy = false;
        self.flags.ac = false;
        self.flags.set_zsp(result);
        self.regs.a = result;
    }

    /// ALU operation selected by bits 3–5 of the 0x80–0xBF / 0xC6–0xFE groups.
    pub(crate) fn alu_op(&mut self, op: u8, n: u8) {
        let carry = self.flags.carry_as_byte();
        match op & 0x07 {
            0 => self.accumulator_add(n, 0),
            1 => self.accumulator_add(n, carry),
            2 => self.accumulator_sub(n, 0),
            3 => self.accumulator_sub(n, carry),
            4 => self.and(n),
            5 => self.xor(n),
            6 => self.or(n),
            _ => self.compare(n),
        }
    }

    /// INR: carry is left alone.
    pub(crate) fn increment(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.flags.ac = (value ^ 0x01 ^ result) & 0x10 != 0;
        self.flags.set_zsp(result);
        result
    }

    /// DCR: computed as `value + 0xff`, carry is left alone.
    pub(crate) fn decrement(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.flags.ac = (value ^ 0xff ^ result) & 0x10 != 0;
        self.flags.set_zsp(result);
        result
    }

    /// DAD: HL += value, only carry changes.
    pub(crate) fn dad(&mut self, value: u16) {
        let (result, carry) = self.regs.hl().overflowing_add(value);
        self.flags.cy = carry;
        self.regs.set_hl(result);
    }

    /// DAA.
    ///
    /// Both nibble tests look at the accumulator as it was before any
    /// correction is applied.
    pub(crate) fn decimal_adjust(&mut self) {
        let a = self.regs.a;
        let low = a & 0x0f;
        let high = a >> 4;
        let mut correction = 0u8;
        let mut carry = self.flags.cy;

        if low > 9 || self.flags.ac {
            correction |= 0x06;
        }
        if high > 9 || self.flags.cy || (high == 9 && low > 9) {
            correction |= 0x60;
            carry = true;
        }

        self.accumulator_add(correction, 0);
        self.flags.cy |= carry;
    }

    /// RLC: bit 7 goes to carry and to bit 0.
    pub(crate) fn rotate_left(&mut self) {
        let a = self.regs.a;
        self.flags.cy = a & 0x80 != 0;
        self.regs.a = a.rotate_left(1);
    }

    /// RRC: bit 0 goes to carry and to bit 7.
    pub(crate) fn rotate_right(&mut self) {
        let a = self.regs.a;
        self.flags.cy = a & 0x01 != 0;
        self.regs.a = a.rotate_right(1);
    }

    /// RAL: rotate through carry; the old carry enters bit 0.
    pub(crate) fn rotate_left_through_carry(&mut self) {
        let a = self.regs.a;
        let old_carry = self.flags.carry_as_byte();
        self.flags.cy = a & 0x80 != 0;
        self.regs.a = (a << 1) | old_carry;
    }

    /// RAR: rotate through carry; the old carry enters bit 7.
    pub(crate) fn rotate_right_through_carry(&mut self) {
        let a = self.regs.a;
        let old_carry = self.flags.carry_as_byte();
        self.flags.cy = a & 0x01 != 0;
        self.regs.a = (a >> 1) | (old_carry << 7);
    }
}
