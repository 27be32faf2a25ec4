/// Dedicated shift hardware sitting on ports 2 (offset), 4 (data) and 3
/// (result).
///
/// Writes push a byte in at the top of a 16-bit register, and reads return
/// the 8-bit window that starts `offset` bits below the top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShiftRegister {
    data: u16,
    offset: u8,
}

impl ShiftRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// The new byte becomes the high byte; the old high byte drops to the
    /// low byte.
    pub fn push(&mut self, value: u8) {
        self.data = (u16::from(value) << 8) | (self.data >> 8);
    }

    /// Only the low three bits are used.
    pub fn set_offset(&mut self, value: u8) {
        self.offset = value & 0x07;
    }

    pub fn result(&self) -> u8 {
        ((self.data >> (8 - self.offset)) & 0xff) as u8
    }

    pub fn data(&self) -> u16 {
        self.data
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::ShiftRegister;

    #[test]
    fn pushes_bytes_in_from_the_top() {
        let mut shifter = ShiftRegister::new();
        shifter.push(0x00);
        shifter.push(0xff);
        assert_eq!(shifter.data(), 0xff00);
        shifter.push(0x12);
        assert_eq!(shifter.data(), 0x12ff);
    }

    #[test]
    fn offset_selects_the_window() {
        let mut shifter = ShiftRegister::new();
        shifter.push(0x00);
        shifter.push(0xff);

        shifter.set_offset(0);
        assert_eq!(shifter.result(), 0xff);

        // (0xff00 >> 1) & 0xff
        shifter.set_offset(7);
        assert_eq!(shifter.result(), 0x80);

        shifter.set_offset(4);
        assert_eq!(shifter.result(), 0xf0);
    }

    #[test]
    fn offset_keeps_three_bits() {
        let mut shifter = ShiftRegister::new();
        shifter.set_offset(0xfa);
        assert_eq!(shifter.offset(), 2);
    }

    #[test]
    fn window_spans_both_bytes() {
        let mut shifter = ShiftRegister::new();
        shifter.push(0xa5); // low after the next push
        shifter.push(0x3c);
        assert_eq!(shifter.data(), 0x3ca5);
        for offset in 0..8u8 {
            shifter.set_offset(offset);
            let expected = ((0x3ca5u16 << offset) >> 8) as u8;
            assert_eq!(shifter.result(), expected, "offset {offset}");
        }
    }
}
