use std::time::Instant;

use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::pixels::PixelFormatEnum;
use typed_builder::TypedBuilder;

use invaders_machine::FramePacer;

pub mod app;
pub mod audio;
pub mod keys;
pub mod render;

pub use app::InvadersApp;
pub use audio::RodioSink;
pub use keys::{map_keycode, Control};
pub use sdl2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]) -> Result<()>;
    fn handle_control(&mut self, control: Control, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = 60)]
    pub refresh_rate: u32,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
}

impl SdlInitInfo {
    /// Window settings taken from the app itself.
    pub fn for_app(app: &impl App) -> Self {
        Self::builder()
            .width(app.width())
            .height(app.height())
            .scale(app.scale())
            .title(app.title())
            .build()
    }
}

pub struct SdlContext;

impl SdlContext {
    /// Open the window and drive `app` until it asks to exit or the window
    /// closes. Errors from `App::update` end the loop and are returned.
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            refresh_rate,
            pixel_format,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;
        let creator = canvas.texture_creator();
        let mut texture =
            creator.create_texture_streaming(map_pixel_format(pixel_format), width, height)?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        let mut pacer = FramePacer::new(refresh_rate);

        app.init();
        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        if let Some(control) = map_keycode(keycode) {
                            app.handle_control(control, true);
                        }
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        if let Some(control) = map_keycode(keycode) {
                            app.handle_control(control, false);
                        }
                    }
                    _ => {}
                }
            }

            let now = Instant::now();
            if !pacer.frame_due(now) {
                pacer.idle(now);
                continue;
            }

            if let Err(e) = app.update(&mut screen_state) {
                app.exit();
                return Err(e);
            }

            texture.update(None, &screen_state, (width * color_size) as usize)?;
            canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
            canvas.present();
        }

        Ok(())
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}
