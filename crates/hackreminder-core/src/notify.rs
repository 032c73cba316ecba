//! Alert delivery.
//!
//! The countdown loop hands an [`AlertNotice`] to a [`Notifier`]. The
//! terminal notifier prints the alert block and, when audio is on, plays
//! a sound. Sound problems are logged and never stop the alert itself.

use std::io::Write;
use std::path::PathBuf;

use tracing::warn;

use crate::countdown::AlertNotice;
use crate::storage::AlertsConfig;

/// Receives fired alerts.
pub trait Notifier: Send {
    fn notify(&mut self, notice: &AlertNotice);
}

/// How an alert tone is produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sound {
    /// Played through the platform's default handler.
    pub file: Option<PathBuf>,
    /// Terminal bell, used when there is no file or it fails.
    pub bell: bool,
}

/// Which tone was actually produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Played {
    File,
    Bell,
    Nothing,
}

impl From<&AlertsConfig> for Sound {
    fn from(cfg: &AlertsConfig) -> Self {
        Self {
            file: cfg.sound_file.as_ref().map(PathBuf::from),
            bell: cfg.bell,
        }
    }
}

impl Sound {
    pub fn play(&self, out: &mut dyn Write) -> Played {
        if let Some(file) = &self.file {
            if !file.exists() {
                warn!(path = %file.display(), "alert sound not found, falling back to bell");
            } else {
                match open::that_detached(file) {
                    Ok(()) => return Played::File,
                    Err(e) => {
                        warn!(path = %file.display(), error = %e, "alert sound failed, falling back to bell")
                    }
                }
            }
        }
        if !self.bell {
            return Played::Nothing;
        }
        match out.write_all(b"\x07").and_then(|()| out.flush()) {
            Ok(()) => Played::Bell,
            Err(e) => {
                warn!(error = %e, "terminal bell failed");
                Played::Nothing
            }
        }
    }
}

/// Prints alerts to a writer, normally stdout.
pub struct TerminalNotifier<W: Write + Send> {
    out: W,
    sound: Sound,
}

impl<W: Write + Send> TerminalNotifier<W> {
    pub fn new(out: W, sound: Sound) -> Self {
        Self { out, sound }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Notifier for TerminalNotifier<W> {
    fn notify(&mut self, notice: &AlertNotice) {
        if notice.audio {
            self.sound.play(&mut self.out);
        }
        let rule = "=".repeat(40);
        if let Err(e) = writeln!(self.out, "\n{rule}\n{}\n{rule}", notice.message()) {
            warn!(error = %e, "failed to print alert");
        }
    }
}

/// Plays the alert tone and prints nothing else. Used when stdout carries
/// machine-readable output.
pub struct SoundNotifier<W: Write + Send> {
    out: W,
    sound: Sound,
}

impl<W: Write + Send> SoundNotifier<W> {
    pub fn new(out: W, sound: Sound) -> Self {
        Self { out, sound }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Notifier for SoundNotifier<W> {
    fn notify(&mut self, notice: &AlertNotice) {
        if notice.audio {
            self.sound.play(&mut self.out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::Progress;

    fn notice(audio: bool) -> AlertNotice {
        AlertNotice {
            minutes_left: 30,
            target_name: "BoltHack".into(),
            progress: Progress { completed: 2, total: 4 },
            audio,
        }
    }

    #[test]
    fn prints_alert_with_bell_when_audio_on() {
        let mut n = TerminalNotifier::new(Vec::new(), Sound { file: None, bell: true });
        n.notify(&notice(true));
        let out = String::from_utf8(n.into_inner()).unwrap();
        assert!(out.starts_with('\x07'));
        assert!(out.contains("30 minutes until BoltHack deadline!"));
        assert!(out.contains("Task Progress: 2/4 (50%)"));
    }

    #[test]
    fn silent_when_audio_off() {
        let mut n = TerminalNotifier::new(Vec::new(), Sound { file: None, bell: true });
        n.notify(&notice(false));
        let out = String::from_utf8(n.into_inner()).unwrap();
        assert!(!out.contains('\x07'));
        assert!(out.contains("HackReminder Alert!"));
    }

    #[test]
    fn sound_notifier_only_rings() {
        let mut n = SoundNotifier::new(Vec::new(), Sound { file: None, bell: true });
        n.notify(&notice(true));
        assert_eq!(n.into_inner(), b"\x07");

        let mut n = SoundNotifier::new(Vec::new(), Sound { file: None, bell: true });
        n.notify(&notice(false));
        assert!(n.into_inner().is_empty());
    }

    #[test]
    fn missing_sound_file_falls_back_to_bell() {
        let sound = Sound {
            file: Some(PathBuf::from("/definitely/not/here.wav")),
            bell: true,
        };
        let mut out = Vec::new();
        assert_eq!(sound.play(&mut out), Played::Bell);
        assert_eq!(out, b"\x07");
    }

    #[test]
    fn bell_disabled_plays_nothing() {
        let mut out = Vec::new();
        assert_eq!(Sound::default().play(&mut out), Played::Nothing);
        assert!(out.is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_do_not_panic() {
        let mut n = TerminalNotifier::new(BrokenPipe, Sound { file: None, bell: true });
        n.notify(&notice(true));
    }
}
