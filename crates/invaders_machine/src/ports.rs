use invaders_cpu::IoPorts;

use crate::input::{self, Buttons, DipSwitches};
use crate::shifter::ShiftRegister;
use crate::sound::{Silent, SoundBank, SoundLatches, SoundSink};

pub const IN_INPUTS0: u8 = 0;
pub const IN_INPUTS1: u8 = 1;
pub const IN_INPUTS2: u8 = 2;
pub const IN_SHIFT_RESULT: u8 = 3;

pub const OUT_SHIFT_OFFSET: u8 = 2;
pub const OUT_SOUND1: u8 = 3;
pub const OUT_SHIFT_DATA: u8 = 4;
pub const OUT_SOUND2: u8 = 5;
pub const OUT_WATCHDOG: u8 = 6;

/// Devices behind the 8080's IN and OUT instructions.
pub struct Board {
    pub(crate) buttons: Buttons,
    pub(crate) dip_switches: DipSwitches,
    pub(crate) shifter: ShiftRegister,
    pub(crate) sound: SoundLatches,
    pub(crate) watchdog: u8,
    pub(crate) sink: Box<dyn SoundSink>,
    pub(crate) trace: bool,
}

impl Board {
    pub fn new(dip_switches: DipSwitches) -> Self {
        Self {
            buttons: Buttons::empty(),
            dip_switches,
            shifter: ShiftRegister::new(),
            sound: SoundLatches::default(),
            watchdog: 0,
            sink: Box::new(Silent),
            trace: false,
        }
    }

    /// Power-on state for every device; held buttons and the sink survive.
    pub fn reset(&mut self) {
        self.shifter = ShiftRegister::new();
        self.sound = SoundLatches::default();
        self.watchdog = 0;
    }

    fn play(&mut self, bank: SoundBank, value: u8) {
        for effect in self.sound.write(bank, value) {
            log::debug!("sound {effect:?}");
            self.sink.play(effect);
        }
    }
}

impl IoPorts for Board {
    fn input(&mut self, port: u8) -> u8 {
        let value = match port {
            // Wired on the board but never read by the game.
            IN_INPUTS0 => 0,
            IN_INPUTS1 => input::port1(self.buttons),
            IN_INPUTS2 => input::port2(self.buttons, &self.dip_switches),
            IN_SHIFT_RESULT => self.shifter.result(),
            _ => {
                log::debug!("IN from unmapped port {port:#04x}");
                0
            }
        };
        if self.trace {
            log::debug!("IN {port:#04x} -> {value:#04x}");
        }
        value
    }

    fn output(&mut self, port: u8, value: u8) {
        if self.trace {
            log::debug!("OUT {port:#04x} <- {value:#04x}");
        }
        match port {
            OUT_SHIFT_OFFSET => self.shifter.set_offset(value),
            OUT_SOUND1 => self.play(SoundBank::First, value),
            OUT_SHIFT_DATA => self.shifter.push(value),
            OUT_SOUND2 => self.play(SoundBank::Second, value),
            OUT_WATCHDOG => self.watchdog = value,
            _ => log::debug!("OUT to unmapped port {port:#04x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::sound::SoundEffect;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<SoundEffect>>>);

    impl SoundSink for Recorder {
        fn play(&mut self, effect: SoundEffect) {
            self.0.borrow_mut().push(effect);
        }
    }

    #[test]
    fn shifter_through_ports() {
        let mut board = Board::new(DipSwitches::default());
        board.output(OUT_SHIFT_DATA, 0x00);
        board.output(OUT_SHIFT_DATA, 0xff);
        board.output(OUT_SHIFT_OFFSET, 0);
        assert_eq!(board.input(IN_SHIFT_RESULT), 0xff);
        board.output(OUT_SHIFT_OFFSET, 7);
        assert_eq!(board.input(IN_SHIFT_RESULT), 0x80);
    }

    #[test]
    fn sound_ports_trigger_on_rising_edges() {
        let recorder = Recorder::default();
        let mut board = Board::new(DipSwitches::default());
        board.sink = Box::new(recorder.clone());

        board.output(OUT_SOUND1, 0x02);
        board.output(OUT_SOUND1, 0x02);
        board.output(OUT_SOUND2, 0x10);
        board.output(OUT_SOUND1, 0x06);

        assert_eq!(
            *recorder.0.borrow(),
            vec![
                SoundEffect::Shot,
                SoundEffect::UfoHit,
                SoundEffect::PlayerDies
            ]
        );
    }

    #[test]
    fn watchdog_is_latched() {
        let mut board = Board::new(DipSwitches::default());
        board.output(OUT_WATCHDOG, 0x5a);
        assert_eq!(board.watchdog, 0x5a);
    }

    #[test]
    fn input_ports_follow_buttons_and_dips() {
        let mut board = Board::new(DipSwitches {
            ships: 4,
            ..DipSwitches::default()
        });
        assert_eq!(board.input(IN_INPUTS1), 0x08);
        assert_eq!(board.input(IN_INPUTS2), 0x01);

        board.buttons = Buttons::COIN | Buttons::P2_LEFT;
        assert_eq!(board.input(IN_INPUTS1), 0x09);
        assert_eq!(board.input(IN_INPUTS2), 0x21);
        assert_eq!(board.input(IN_INPUTS0), 0x00);
        assert_eq!(board.input(0x42), 0x00);
    }

    #[test]
    fn reset_clears_devices_but_keeps_buttons() {
        let mut board = Board::new(DipSwitches::default());
        board.buttons = Buttons::P1_FIRE;
        board.output(OUT_SHIFT_DATA, 0xff);
        board.output(OUT_SOUND1, 0x01);
        board.output(OUT_WATCHDOG, 1);
        board.reset();
        assert_eq!(board.shifter, ShiftRegister::new());
        assert_eq!(board.sound.value(SoundBank::First), 0);
        assert_eq!(board.watchdog, 0);
        assert_eq!(board.buttons, Buttons::P1_FIRE);
    }
}
