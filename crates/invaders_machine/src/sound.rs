/// Discrete sound effects wired to the two sound output ports.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SoundEffect {
    Ufo,
    Shot,
    PlayerDies,
    InvaderDies,
    Fleet1,
    Fleet2,
    Fleet3,
    Fleet4,
    UfoHit,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 9] = [
        SoundEffect::Ufo,
        SoundEffect::Shot,
        SoundEffect::PlayerDies,
        SoundEffect::InvaderDies,
        SoundEffect::Fleet1,
        SoundEffect::Fleet2,
        SoundEffect::Fleet3,
        SoundEffect::Fleet4,
        SoundEffect::UfoHit,
    ];
}

/// Which output port a sound byte was written to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SoundBank {
    /// OUT 3: bits 0-3.
    First,
    /// OUT 5: bits 0-4.
    Second,
}

impl SoundBank {
    /// Effect for each bit of the bank, lowest bit first.
    pub fn effects(self) -> &'static [SoundEffect] {
        match self {
            SoundBank::First => &[
                SoundEffect::Ufo,
                SoundEffect::Shot,
                SoundEffect::PlayerDies,
                SoundEffect::InvaderDies,
            ],
            SoundBank::Second => &[
                SoundEffect::Fleet1,
                SoundEffect::Fleet2,
                SoundEffect::Fleet3,
                SoundEffect::Fleet4,
                SoundEffect::UfoHit,
            ],
        }
    }
}

/// Receives sound triggers from the board.
///
/// Implementations live with the presentation layer; the board only decides
/// when an effect starts.
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink for running without audio.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Last byte written to each sound bank.
///
/// A sound starts only when its bit goes from 0 to 1; holding a bit high
/// does not retrigger it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SoundLatches {
    first: u8,
    second: u8,
}

impl SoundLatches {
    /// Latch `value` for `bank` and report every effect whose bit was newly
    /// set.
    pub fn write(&mut self, bank: SoundBank, value: u8) -> Vec<SoundEffect> {
        let latch = match bank {
            SoundBank::First => &mut self.first,
            SoundBank::Second => &mut self.second,
        };
        let rising = value & !*latch;
        *latch = value;

        bank.effects()
            .iter()
            .enumerate()
            .filter(|(bit, _)| rising & (1 << bit) != 0)
            .map(|(_, effect)| *effect)
            .collect()
    }

    pub fn value(&self, bank: SoundBank) -> u8 {
        match bank {
            SoundBank::First => self.first,
            SoundBank::Second => self.second,
        }
    }
}
