use anyhow::Result;

use invaders_machine::{Machine, SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::keys::Control;
use crate::render::{overlay_pause_banner, render_video};
use crate::App;

/// Window-facing wrapper that drives a [`Machine`] once per frame.
pub struct InvadersApp {
    should_exit: bool,
    paused: bool,
    scale: u32,
    pub machine: Machine,
}

impl InvadersApp {
    pub fn new(machine: Machine, scale: u32) -> Self {
        Self {
            should_exit: false,
            paused: false,
            scale: scale.max(1),
            machine,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl App for InvadersApp {
    fn init(&mut self) {
        log::info!("Space Invaders init");
    }

    fn update(&mut self, screen_state: &mut [u8]) -> Result<()> {
        if !self.paused {
            self.machine.step_frame()?;
        }

        render_video(self.machine.video_ram(), screen_state);
        if self.paused {
            overlay_pause_banner(screen_state);
        }
        Ok(())
    }

    fn handle_control(&mut self, control: Control, is_down: bool) {
        match control {
            Control::Quit if is_down => self.should_exit = true,
            Control::Pause if is_down => self.paused = !self.paused,
            Control::Button(button) => {
                // Any cabinet control also resumes a paused game.
                if is_down {
                    self.paused = false;
                }
                self.machine.set_button(button, is_down);
            }
            _ => {}
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Space Invaders exit after {} frames", self.machine.frames());
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        self.scale
    }

    fn title(&self) -> String {
        "Space Invaders".to_string()
    }
}
