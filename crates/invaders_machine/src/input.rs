use bitflags::bitflags;

bitflags! {
    /// Cabinet controls currently held down.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u16 {
        const COIN = 1 << 0;
        const P1_START = 1 << 1;
        const P2_START = 1 << 2;
        const P1_FIRE = 1 << 3;
        const P1_LEFT = 1 << 4;
        const P1_RIGHT = 1 << 5;
        const P2_FIRE = 1 << 6;
        const P2_LEFT = 1 << 7;
        const P2_RIGHT = 1 << 8;
        const TILT = 1 << 9;
    }
}

/// IN 1 bit 3 is tied high on the board.
const PORT1_ALWAYS_SET: u8 = 1 << 3;

const PORT1_BITS: [(Buttons, u8); 6] = [
    (Buttons::COIN, 0),
    (Buttons::P2_START, 1),
    (Buttons::P1_START, 2),
    (Buttons::P1_FIRE, 4),
    (Buttons::P1_LEFT, 5),
    (Buttons::P1_RIGHT, 6),
];

const PORT2_BITS: [(Buttons, u8); 4] = [
    (Buttons::TILT, 2),
    (Buttons::P2_FIRE, 4),
    (Buttons::P2_LEFT, 5),
    (Buttons::P2_RIGHT, 6),
];

const PORT2_SHIPS_MASK: u8 = 0x03;
const PORT2_BONUS_AT_1000: u8 = 1 << 3;
const PORT2_HIDE_COIN_INFO: u8 = 1 << 7;

/// Operator DIP switches read through IN 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DipSwitches {
    /// Ships per game, 3 to 6. Out-of-range values are clamped.
    pub ships: u8,
    /// Extra ship at 1000 points instead of 1500.
    pub bonus_life_at_1000: bool,
    /// Show the coin/credit line in attract mode.
    pub coin_info: bool,
}

impl Default for DipSwitches {
    fn default() -> Self {
        Self {
            ships: 3,
            bonus_life_at_1000: false,
            coin_info: true,
        }
    }
}

impl DipSwitches {
    /// The DIP bits of IN 2: ships - 3 in bits 0-1, bonus in bit 3 and
    /// "hide coin info" in bit 7.
    pub fn port2_bits(&self) -> u8 {
        let mut bits = (self.ships.clamp(3, 6) - 3) & PORT2_SHIPS_MASK;
        if self.bonus_life_at_1000 {
            bits |= PORT2_BONUS_AT_1000;
        }
        if !self.coin_info {
            bits |= PORT2_HIDE_COIN_INFO;
        }
        bits
    }
}

fn pack(buttons: Buttons, table: &[(Buttons, u8)]) -> u8 {
    table
        .iter()
        .filter(|(button, _)| buttons.contains(*button))
        .fold(0, |acc, (_, bit)| acc | (1 << bit))
}

/// Value read by IN 1.
pub fn port1(buttons: Buttons) -> u8 {
    PORT1_ALWAYS_SET | pack(buttons, &PORT1_BITS)
}

/// Value read by IN 2.
pub fn port2(buttons: Buttons, dips: &DipSwitches) -> u8 {
    dips.port2_bits() | pack(buttons, &PORT2_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port1_idle_reads_bit3() {
        assert_eq!(port1(Buttons::empty()), 0x08);
    }

    #[test]
    fn port1_layout() {
        assert_eq!(port1(Buttons::COIN), 0x09);
        assert_eq!(port1(Buttons::P2_START), 0x0a);
        assert_eq!(port1(Buttons::P1_START), 0x0c);
        assert_eq!(port1(Buttons::P1_FIRE), 0x18);
        assert_eq!(port1(Buttons::P1_LEFT), 0x28);
        assert_eq!(port1(Buttons::P1_RIGHT), 0x48);
        // Player 2 and tilt never show up on port 1.
        assert_eq!(
            port1(Buttons::P2_FIRE | Buttons::P2_LEFT | Buttons::P2_RIGHT | Buttons::TILT),
            0x08
        );
    }

    #[test]
    fn port2_layout() {
        let dips = DipSwitches::default();
        assert_eq!(port2(Buttons::empty(), &dips), 0x00);
        assert_eq!(port2(Buttons::TILT, &dips), 0x04);
        assert_eq!(port2(Buttons::P2_FIRE, &dips), 0x10);
        assert_eq!(port2(Buttons::P2_LEFT, &dips), 0x20);
        assert_eq!(port2(Buttons::P2_RIGHT, &dips), 0x40);
        assert_eq!(port2(Buttons::P1_FIRE | Buttons::COIN, &dips), 0x00);
    }

    #[test]
    fn dip_switch_encoding() {
        let dips = DipSwitches {
            ships: 5,
            bonus_life_at_1000: true,
            coin_info: false,
        };
        assert_eq!(dips.port2_bits(), 0x02 | 0x08 | 0x80);
        assert_eq!(port2(Buttons::P2_FIRE, &dips), 0x9a);
    }

    #[test]
    fn ships_are_clamped() {
        let few = DipSwitches {
            ships: 0,
            ..DipSwitches::default()
        };
        let many = DipSwitches {
            ships: 9,
            ..DipSwitches::default()
        };
        assert_eq!(few.port2_bits(), 0x00);
        assert_eq!(many.port2_bits(), 0x03);
    }
}
