use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use invaders_machine::Machine;
use invaders_sdl2::{App, InvadersApp, RodioSink, SdlContext, SdlInitInfo};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let mut machine = Machine::new(cli.machine_config());
    machine
        .load_rom_dir(&cli.dir)
        .with_context(|| format!("Failed to load ROMs from '{}'", cli.dir.display()))?;

    if cli.headless {
        let stop = AtomicBool::new(false);
        let frames = machine
            .run_frames(cli.frames, &stop)
            .context("Emulation stopped")?;
        log::info!("Ran {frames} frames headless");
        return Ok(());
    }

    if let Some(sink) = RodioSink::start(&cli.sounds) {
        machine.set_sound_sink(Box::new(sink));
    }

    let app = InvadersApp::new(machine, cli.scale_factor);
    let init_info = SdlInitInfo::for_app(&app);
    log::info!("Starting '{}' at {}x scale", app.title(), app.scale());
    SdlContext::run(init_info, app)
}

fn init_logger(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
