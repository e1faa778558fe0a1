use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;

use crate::config::SoundConfig;

/// Audio collaborator for the keyboard: plays the cursor-move cue
///
/// Implementations must not fail loudly; a missing device or file just means
/// no sound.
pub trait CursorSound {
    fn play_cursor(&self);
}

/// Sound capability that plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl CursorSound for Silent {
    fn play_cursor(&self) {}
}

/// Pick the cursor sound implementation for a configuration
///
/// Falls back to [`Silent`] when sound is disabled, the crate was built
/// without audio, or no output device is available.
pub fn sound_from_config(config: &SoundConfig) -> Box<dyn CursorSound> {
    if !config.enabled {
        debug!("Sound disabled in config");
        return Box::new(Silent);
    }

    #[cfg(feature = "sound")]
    {
        match SoundPlayer::new(config) {
            Ok(player) => return Box::new(player),
            Err(e) => tracing::warn!("Failed to initialize sound player: {}", e),
        }
    }

    Box::new(Silent)
}

/// Resolve a sound file name in the sounds directory
///
/// Tries the name as given, then with each supported audio extension.
pub fn find_sound_file(sounds_dir: &std::path::Path, filename: &str) -> Option<PathBuf> {
    let path = sounds_dir.join(filename);
    if path.exists() {
        return Some(path);
    }

    ["mp3", "wav", "ogg", "flac"]
        .iter()
        .map(|ext| sounds_dir.join(format!("{}.{}", filename, ext)))
        .find(|p| p.exists())
}

/// Create the shared sounds directory if it doesn't exist
pub fn ensure_sounds_directory() -> Result<PathBuf> {
    let sounds_dir = crate::config::Config::sounds_dir()?;

    if !sounds_dir.exists() {
        std::fs::create_dir_all(&sounds_dir)?;
        debug!("Created sounds directory: {:?}", sounds_dir);
    }

    Ok(sounds_dir)
}

#[cfg(feature = "sound")]
pub use player::SoundPlayer;

#[cfg(feature = "sound")]
mod player {
    use super::*;
    use tracing::warn;
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
    use std::cell::Cell;
    use std::fs::File;
    use std::io::BufReader;
    use std::time::{Duration, Instant};

    /// Plays the configured cursor sound file through the default output
    pub struct SoundPlayer {
        _stream: OutputStream,
        stream_handle: OutputStreamHandle,
        cursor_file: Option<PathBuf>,
        volume: f32,
        last_played: Cell<Option<Instant>>,
        cooldown: Duration,
    }

    impl SoundPlayer {
        pub fn new(config: &SoundConfig) -> Result<Self> {
            let (stream, stream_handle) = OutputStream::try_default()?;
            let sounds_dir = ensure_sounds_directory()?;

            let cursor_file = find_sound_file(&sounds_dir, &config.cursor_sound);
            if cursor_file.is_none() {
                warn!(
                    "Cursor sound not found: {:?} (tried extensions: mp3, wav, ogg, flac)",
                    sounds_dir.join(&config.cursor_sound)
                );
            }

            Ok(Self {
                _stream: stream,
                stream_handle,
                cursor_file,
                volume: config.volume.clamp(0.0, 1.0),
                last_played: Cell::new(None),
                cooldown: Duration::from_millis(config.cooldown_ms),
            })
        }

        fn is_on_cooldown(&self) -> bool {
            self.last_played
                .get()
                .is_some_and(|last| last.elapsed() < self.cooldown)
        }

        fn play(&self, path: &PathBuf) -> Result<()> {
            let file = File::open(path)?;
            let source = Decoder::new(BufReader::new(file))?;

            let sink = Sink::try_new(&self.stream_handle)?;
            sink.set_volume(self.volume);
            sink.append(source);
            sink.detach(); // Play in background

            debug!("Playing sound: {:?} at volume {}", path, self.volume);
            Ok(())
        }
    }

    impl CursorSound for SoundPlayer {
        fn play_cursor(&self) {
            let Some(path) = &self.cursor_file else {
                return;
            };
            if self.is_on_cooldown() {
                return;
            }
            match self.play(path) {
                Ok(()) => self.last_played.set(Some(Instant::now())),
                Err(e) => warn!("Failed to play cursor sound {:?}: {}", path, e),
            }
        }
    }
}
