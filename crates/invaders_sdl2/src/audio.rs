use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{error, warn};
use rodio::{Decoder, OutputStream, Source};

use invaders_machine::{SoundEffect, SoundSink};

/// Default location of the WAV samples, relative to the workspace root.
pub const DEFAULT_SOUND_DIR: &str = "assets/sounds";

/// Sample file for each effect.
pub const SOUND_FILES: [(SoundEffect, &str); 9] = [
    (SoundEffect::Ufo, "ufo_lowpitch.wav"),
    (SoundEffect::Shot, "shoot.wav"),
    (SoundEffect::PlayerDies, "explosion.wav"),
    (SoundEffect::InvaderDies, "invaderkilled.wav"),
    (SoundEffect::Fleet1, "fastinvader1.wav"),
    (SoundEffect::Fleet2, "fastinvader2.wav"),
    (SoundEffect::Fleet3, "fastinvader3.wav"),
    (SoundEffect::Fleet4, "fastinvader4.wav"),
    (SoundEffect::UfoHit, "explosion.wav"),
];

type Clips = HashMap<SoundEffect, Vec<u8>>;

fn load_clips(dir: &Path) -> Clips {
    let mut clips = HashMap::new();
    for (effect, name) in SOUND_FILES {
        let path = dir.join(name);
        match fs::read(&path) {
            Ok(bytes) => {
                clips.insert(effect, bytes);
            }
            Err(e) => warn!("Failed to load sound {effect:?} from {}: {e}", path.display()),
        }
    }
    clips
}

/// Plays sound effects on a dedicated rodio thread.
///
/// The board hands effects to this sink from the emulation thread; they are
/// forwarded over a channel so decoding never stalls a frame. Effects may
/// overlap.
pub struct RodioSink {
    sender: Sender<SoundEffect>,
}

impl RodioSink {
    /// Load the samples from `dir` and start the audio thread.
    ///
    /// Returns `None` when no sample could be loaded or the thread could not
    /// be spawned; the game then runs silently.
    pub fn start(dir: &Path) -> Option<Self> {
        let clips = load_clips(dir);
        if clips.is_empty() {
            warn!("No sound samples found in {}, disabling audio", dir.display());
            return None;
        }

        let (sender, receiver) = mpsc::channel();
        if let Err(e) = thread::Builder::new()
            .name("invaders_audio".into())
            .spawn(move || play_loop(receiver, clips))
        {
            error!("Failed to spawn audio thread: {e}");
            return None;
        }
        Some(Self { sender })
    }
}

impl SoundSink for RodioSink {
    fn play(&mut self, effect: SoundEffect) {
        // A dead audio thread only means silence.
        let _ = self.sender.send(effect);
    }
}

fn play_loop(receiver: Receiver<SoundEffect>, clips: Clips) {
    // The stream must outlive every sound played through its handle.
    let Ok((_stream, handle)) = OutputStream::try_default() else {
        error!("Failed to open default audio output stream, disabling audio");
        return;
    };

    while let Ok(effect) = receiver.recv() {
        let Some(bytes) = clips.get(&effect) else {
            continue;
        };
        match Decoder::new(Cursor::new(bytes.clone())) {
            Ok(source) => {
                if let Err(e) = handle.play_raw(source.convert_samples::<f32>()) {
                    warn!("Failed to play sound {effect:?}: {e}");
                }
            }
            Err(e) => error!("Failed to decode sound {effect:?}: {e}"),
        }
    }
    log::debug!("Audio channel closed");
}
