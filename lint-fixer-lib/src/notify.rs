//! Audible notifications.
//!
//! Playback is delegated to whichever command-line audio player is installed. It is
//! fire-and-forget: [`Notifier::notify`] returns as soon as the player is spawned, and
//! any failure is only logged.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

// non-std crates
use which::which;

// project-specific modules/crates
use crate::error::{LintFixerError, Result};

/// Players tried in order of preference.
const PLAYERS: [&str; 8] = [
    "afplay", "mpg123", "mpg321", "mplayer", "play", "paplay", "aplay", "cvlc",
];

/// Something worth making a noise about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    /// The formatter rewrote a file.
    FormatApplied,
    /// The linter auto-fixed a file.
    LintFixApplied,
    /// A change or a manual fix was first noticed in this run.
    Attention,
    /// The run finished with nothing left to fix by hand.
    Success,
}

impl SoundEvent {
    /// Every event, in the order their cues are checked.
    pub const ALL: [SoundEvent; 4] = [
        SoundEvent::FormatApplied,
        SoundEvent::LintFixApplied,
        SoundEvent::Attention,
        SoundEvent::Success,
    ];

    /// The name of the cue file played for this event.
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEvent::FormatApplied => "prettier-fix.mp3",
            SoundEvent::LintFixApplied => "eslint-fix.mp3",
            SoundEvent::Attention => "attention.mp3",
            SoundEvent::Success => "fix-applied.mp3",
        }
    }
}

/// The capability to tell the user that something happened.
pub trait Notifier {
    /// Announce `event`. This must never block on, nor fail because of, playback.
    fn notify(&self, event: SoundEvent);
}

/// A [`Notifier`] that stays silent (for `--no-sound`).
pub struct Muted;

impl Notifier for Muted {
    fn notify(&self, event: SoundEvent) {
        log::debug!("Sound disabled; not playing {}", event.file_name());
    }
}

/// A [`Notifier`] that plays cue files from a directory.
pub struct SoundPlayer {
    sounds_dir: PathBuf,
    player: Option<PathBuf>,
}

impl SoundPlayer {
    /// Looks for an installed audio player.
    ///
    /// See [`SoundPlayer::with_player()`] for how a missing player or cue is handled.
    pub fn new(sounds_dir: &Path) -> Self {
        let player = PLAYERS.iter().find_map(|name| which(name).ok());
        Self::with_player(sounds_dir, player)
    }

    /// Plays the cues in `sounds_dir` with `player`.
    ///
    /// A missing player or cue file is warned about here, once. Afterwards, the events
    /// that cannot be played are skipped quietly.
    pub fn with_player(sounds_dir: &Path, player: Option<PathBuf>) -> Self {
        let sound_player = SoundPlayer {
            sounds_dir: sounds_dir.to_path_buf(),
            player,
        };
        match &sound_player.player {
            Some(exe) => {
                log::debug!("Using audio player {}", exe.to_string_lossy());
                let missing = sound_player.missing_cues();
                if !missing.is_empty() {
                    log::warn!(
                        "Sound files not found in {}: {}",
                        sounds_dir.to_string_lossy(),
                        missing.join(", ")
                    );
                }
            }
            None => log::warn!("No audio player found; audio notifications are unavailable"),
        }
        sound_player
    }

    /// The names of the cue files absent from the sounds directory.
    pub fn missing_cues(&self) -> Vec<&'static str> {
        SoundEvent::ALL
            .iter()
            .filter(|event| !self.sounds_dir.join(event.file_name()).is_file())
            .map(|event| event.file_name())
            .collect()
    }

    /// Spawns the player for `event` without waiting for it to finish.
    ///
    /// Returns whether a player was started. Only a failure to start the player is an
    /// error.
    fn play(&self, event: SoundEvent) -> Result<bool> {
        let Some(player) = &self.player else {
            log::debug!("No audio player; skipping {}", event.file_name());
            return Ok(false);
        };
        let cue = self.sounds_dir.join(event.file_name());
        if !cue.is_file() {
            log::debug!("Skipping missing sound file {}", cue.to_string_lossy());
            return Ok(false);
        }
        // the player must outlive this process if need be, so it gets no pipes to break
        let mut child = Command::new(player)
            .arg(&cue)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                LintFixerError::Notification(format!("{}: {e}", player.to_string_lossy()))
            })?;
        // reap the player in the background so the run is never held up by it
        thread::spawn(move || match child.wait() {
            Ok(status) if status.success() => log::debug!("Played {}", cue.to_string_lossy()),
            Ok(status) => log::warn!(
                "Audio playback failed: file={}, status={status}",
                cue.to_string_lossy()
            ),
            Err(e) => log::warn!("Audio playback failed: {e}"),
        });
        Ok(true)
    }
}

impl Notifier for SoundPlayer {
    fn notify(&self, event: SoundEvent) {
        if let Err(e) = self.play(event) {
            log::error!("{e}");
        }
    }
}

/// Picks the [`Notifier`] for a run.
pub fn make_notifier(sound_enabled: bool, sounds_dir: &Path) -> Box<dyn Notifier> {
    if sound_enabled {
        Box::new(SoundPlayer::new(sounds_dir))
    } else {
        Box::new(Muted)
    }
}
