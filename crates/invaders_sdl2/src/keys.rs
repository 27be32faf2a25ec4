use sdl2::keyboard::Keycode;

use invaders_machine::Buttons;

/// What a key does in the emulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Button(Buttons),
    Pause,
    Quit,
}

/// Keyboard layout:
///
/// - `C` inserts a coin, `1`/`2` start a one or two player game
/// - `Left`/`Right`/`Space` (or `A`/`D`/`S`) move and fire for player 1
/// - `J`/`L`/`K` move and fire for player 2
/// - `T` tilts the cabinet, `P` pauses, `Escape` quits
pub fn map_keycode(keycode: Keycode) -> Option<Control> {
    let button = match keycode {
        Keycode::C => Buttons::COIN,
        Keycode::Num1 | Keycode::Kp1 => Buttons::P1_START,
        Keycode::Num2 | Keycode::Kp2 => Buttons::P2_START,
        Keycode::Left | Keycode::A => Buttons::P1_LEFT,
        Keycode::Right | Keycode::D => Buttons::P1_RIGHT,
        Keycode::Space | Keycode::S => Buttons::P1_FIRE,
        Keycode::J => Buttons::P2_LEFT,
        Keycode::L => Buttons::P2_RIGHT,
        Keycode::K => Buttons::P2_FIRE,
        Keycode::T => Buttons::TILT,
        Keycode::P => return Some(Control::Pause),
        Keycode::Escape => return Some(Control::Quit),
        _ => return None,
    };
    Some(Control::Button(button))
}
