//! Fire-and-forget playback.
//!
//! A scheduled cue runs on its own task: optional sleep, then one play
//! attempt. Failures end up in the log and nowhere else.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::cue::{Cue, Delay};
use crate::audio::{AudioOutput, ToneSpec};
use crate::error::Result;

/// Where the audio of a successful play came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackSource {
    /// The recorded bells file.
    Asset,
    /// The synthesized bell tone.
    Synthesized,
}

/// Plays cues on an audio output, now or after a delay.
#[derive(Clone)]
pub struct Dispatcher {
    output: Arc<dyn AudioOutput>,
    bells_file: PathBuf,
    tone: ToneSpec,
}

impl Dispatcher {
    /// Creates a dispatcher playing through `output`.
    ///
    /// `bells_file` is only consulted by [`Cue::Bells`]; when it does not
    /// exist the synthesized tone is played instead.
    pub fn new(output: Arc<dyn AudioOutput>, bells_file: impl Into<PathBuf>) -> Self {
        Self {
            output,
            bells_file: bells_file.into(),
            tone: ToneSpec::default(),
        }
    }

    pub fn bells_file(&self) -> &Path {
        &self.bells_file
    }

    /// Spawns a detached task that waits `delay` and then plays `cue`.
    ///
    /// Returns immediately. The handle can be dropped; the task keeps running
    /// and cannot be cancelled through the dispatcher.
    pub fn schedule(&self, cue: Cue, delay: Delay) -> JoinHandle<()> {
        let dispatcher = self.clone();
        debug!(%cue, delay_secs = delay.as_secs(), "Scheduling playback");

        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay.as_duration()).await;
            }

            // Rendering and decoding block; keep them off the request thread.
            match tokio::task::spawn_blocking(move || dispatcher.play(cue)).await {
                Ok(Ok(source)) => debug!(%cue, ?source, "Playback started"),
                Ok(Err(e)) => error!(%cue, error = %e, "Failed to play {} in background", cue),
                Err(e) => error!(%cue, error = %e, "Playback task for {} aborted", cue),
            }
        })
    }

    /// Plays `cue` right away.
    pub fn play(&self, cue: Cue) -> Result<PlaybackSource> {
        match cue {
            Cue::Bells => self.play_bells(),
            Cue::Gong => self.play_tone(),
        }
    }

    fn play_bells(&self) -> Result<PlaybackSource> {
        if self.bells_file.exists() {
            self.output.play_file(&self.bells_file)?;
            return Ok(PlaybackSource::Asset);
        }

        info!(
            path = %self.bells_file.display(),
            "Bells file missing, playing synthesized tone"
        );
        self.play_tone()
    }

    fn play_tone(&self) -> Result<PlaybackSource> {
        let buffer = self.tone.render(self.output.channels());
        self.output.play_samples(buffer)?;
        Ok(PlaybackSource::Synthesized)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tempfile::tempdir;

    use super::*;
    use crate::audio::output::testing::{Played, RecordingOutput};
    use crate::error::ErrorCode;

    fn dispatcher(output: &Arc<RecordingOutput>, bells_file: &Path) -> Dispatcher {
        Dispatcher::new(output.clone() as Arc<dyn AudioOutput>, bells_file)
    }

    #[test]
    fn bells_play_asset_when_present() {
        let dir = tempdir().unwrap();
        let asset = dir.path().join("bells.mp3");
        std::fs::write(&asset, b"not really an mp3").unwrap();

        let output = Arc::new(RecordingOutput::new(1));
        let source = dispatcher(&output, &asset).play(Cue::Bells).unwrap();

        assert_eq!(source, PlaybackSource::Asset);
        assert_eq!(output.played(), vec![Played::File(asset)]);
    }

    #[test]
    fn bells_fall_back_to_tone_when_asset_missing() {
        let dir = tempdir().unwrap();
        let output = Arc::new(RecordingOutput::new(2));
        let source = dispatcher(&output, &dir.path().join("missing.mp3"))
            .play(Cue::Bells)
            .unwrap();

        assert_eq!(source, PlaybackSource::Synthesized);
        assert_eq!(
            output.played(),
            vec![Played::Samples {
                frames: 44_100,
                channels: 2
            }]
        );
    }

    #[test]
    fn gong_ignores_asset() {
        let dir = tempdir().unwrap();
        let asset = dir.path().join("bells.mp3");
        std::fs::write(&asset, b"data").unwrap();

        let output = Arc::new(RecordingOutput::new(1));
        let source = dispatcher(&output, &asset).play(Cue::Gong).unwrap();

        assert_eq!(source, PlaybackSource::Synthesized);
        assert_eq!(
            output.played(),
            vec![Played::Samples {
                frames: 44_100,
                channels: 1
            }]
        );
    }

    #[test]
    fn play_reports_output_errors() {
        let dir = tempdir().unwrap();
        let output = Arc::new(RecordingOutput::failing());
        let err = dispatcher(&output, &dir.path().join("missing.mp3"))
            .play(Cue::Gong)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PlaybackFailed);
    }

    #[test]
    fn undecodable_asset_does_not_fall_back() {
        let dir = tempdir().unwrap();
        let asset = dir.path().join("bells.mp3");
        std::fs::write(&asset, b"garbage").unwrap();

        let output = Arc::new(RecordingOutput::undecodable_files(1));
        let err = dispatcher(&output, &asset).play(Cue::Bells).unwrap_err();

        assert_eq!(err.code, ErrorCode::DecodeFailed);
        assert_eq!(output.played(), vec![Played::File(asset)]);
    }

    #[tokio::test]
    async fn scheduled_undecodable_asset_completes() {
        let dir = tempdir().unwrap();
        let asset = dir.path().join("bells.mp3");
        std::fs::write(&asset, b"garbage").unwrap();

        let output = Arc::new(RecordingOutput::undecodable_files(1));
        let handle = dispatcher(&output, &asset).schedule(Cue::Bells, Delay::default());

        handle.await.unwrap();
        assert_eq!(output.played(), vec![Played::File(asset)]);
    }

    #[tokio::test]
    async fn scheduled_playback_runs_off_the_runtime_thread() {
        let dir = tempdir().unwrap();
        let output = Arc::new(RecordingOutput::new(2));
        let handle = dispatcher(&output, &dir.path().join("missing.mp3"))
            .schedule(Cue::Gong, Delay::default());

        handle.await.unwrap();
        // Current-thread runtime: the test body shares the request thread.
        assert_eq!(output.threads().len(), 1);
        assert_ne!(output.threads()[0], std::thread::current().id());
    }

    #[tokio::test]
    async fn scheduled_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        let output = Arc::new(RecordingOutput::failing());
        let handle = dispatcher(&output, &dir.path().join("missing.mp3"))
            .schedule(Cue::Bells, Delay::from_secs(0));

        // The task completes normally even though playback failed.
        handle.await.unwrap();
        assert_eq!(output.played().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_cue_waits_for_delay() {
        let dir = tempdir().unwrap();
        let output = Arc::new(RecordingOutput::new(1));
        let start = tokio::time::Instant::now();

        let handle = dispatcher(&output, &dir.path().join("missing.mp3"))
            .schedule(Cue::Gong, Delay::from_secs(2));

        tokio::time::sleep(Duration::from_millis(1_999)).await;
        assert!(output.played().is_empty());

        handle.await.unwrap();
        let played_at = output.timestamps()[0];
        assert!(played_at.duration_since(start) >= Duration::from_secs(2));
    }

    #[tokio::test]
    async fn zero_delay_plays_promptly() {
        let dir = tempdir().unwrap();
        let output = Arc::new(RecordingOutput::new(1));
        let handle = dispatcher(&output, &dir.path().join("missing.mp3"))
            .schedule(Cue::Bells, Delay::default());

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(output.played().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_cues_run_independently() {
        let dir = tempdir().unwrap();
        let output = Arc::new(RecordingOutput::new(1));
        let d = dispatcher(&output, &dir.path().join("missing.mp3"));

        let late = d.schedule(Cue::Gong, Delay::from_secs(5));
        let early = d.schedule(Cue::Bells, Delay::from_secs(1));

        early.await.unwrap();
        assert_eq!(output.played().len(), 1);
        late.await.unwrap();
        assert_eq!(output.played().len(), 2);
    }
}
