use std::ops::Range;

use invaders_machine::{SCREEN_HEIGHT, SCREEN_WIDTH, VRAM_SIZE};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const RED: Color = Color::new_rgb(255, 0, 0);
    pub const GREEN: Color = Color::new_rgb(0, 255, 0);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
}

/// Rows, counted up from the bottom of the screen, covered by the green
/// cellophane strip (player, shields and the ships-left line).
const GREEN_BAND: Range<usize> = 0..80;
/// Rows covered by the red strip where the UFO flies.
const RED_BAND: Range<usize> = 208..224;

fn overlay_color(row_from_bottom: usize) -> Color {
    if GREEN_BAND.contains(&row_from_bottom) {
        Color::GREEN
    } else if RED_BAND.contains(&row_from_bottom) {
        Color::RED
    } else {
        Color::WHITE
    }
}

/// Draw video RAM into an RGB24 buffer of `SCREEN_WIDTH * SCREEN_HEIGHT`.
///
/// The monitor is mounted rotated: each of the 224 columns is 32 bytes
/// running bottom to top, least significant bit lowest.
pub fn render_video(vram: &[u8], screen_state: &mut [u8]) {
    let width = SCREEN_WIDTH;
    let height = SCREEN_HEIGHT;
    debug_assert_eq!(vram.len(), VRAM_SIZE);
    debug_assert_eq!(screen_state.len(), width * height * 3);

    for (i, byte) in vram.iter().enumerate() {
        let x = i / (height / 8);
        let base_row = (i % (height / 8)) * 8;
        for bit in 0..8 {
            let row = base_row + bit;
            let color = if *byte & (1u8 << bit) != 0 {
                overlay_color(row)
            } else {
                Color::BLACK
            };
            let y = height - row - 1;
            let idx = (y * width + x) * 3;
            screen_state[idx] = color.r;
            screen_state[idx + 1] = color.g;
            screen_state[idx + 2] = color.b;
        }
    }
}

/// Stripe the top of the screen so a paused game is obvious.
pub fn overlay_pause_banner(screen_state: &mut [u8]) {
    let width = SCREEN_WIDTH;
    let banner_height = 12usize.min(SCREEN_HEIGHT);
    debug_assert_eq!(screen_state.len(), width * SCREEN_HEIGHT * 3);

    for y in 0..banner_height {
        let color = if y % 2 == 0 {
            Color::WHITE
        } else {
            Color::BLACK
        };
        for pixel in screen_state[y * width * 3..(y + 1) * width * 3].chunks_exact_mut(3) {
            pixel.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }
}
