//! Host audio output.
//!
//! The audio device is opened once at startup. The stream itself stays with
//! `main` inside an [`OutputGuard`]; everything else only sees the narrow
//! [`AudioOutput`] capability.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::buffer::SamplesBuffer;
use rodio::cpal::traits::{DeviceTrait, HostTrait};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use super::tone::ToneBuffer;
use crate::error::{BellsError, Result};

/// Something that can put sound on the speakers.
///
/// Both play calls return as soon as playback is queued; they do not wait for
/// the sound to finish.
pub trait AudioOutput: Send + Sync {
    /// Channel count of the device. Synthesized buffers are rendered to match.
    fn channels(&self) -> u16;

    /// Decodes and plays an audio file.
    fn play_file(&self, path: &Path) -> Result<()>;

    /// Plays a rendered sample buffer.
    fn play_samples(&self, buffer: ToneBuffer) -> Result<()>;
}

/// Keeps the output stream open. Dropping it silences every sink.
pub struct OutputGuard {
    _stream: OutputStream,
}

/// Audio output backed by the default host device.
pub struct HostOutput {
    handle: OutputStreamHandle,
    channels: u16,
    device_name: String,
}

impl HostOutput {
    /// Opens the default output device.
    pub fn open_default() -> Result<(OutputGuard, HostOutput)> {
        let host = rodio::cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| BellsError::audio_device_unavailable("no default output device"))?;
        let config = device
            .default_output_config()
            .map_err(|e| BellsError::audio_device_unavailable(e.to_string()))?;
        let device_name = device.name().unwrap_or_else(|_| "unknown".to_string());

        let (stream, handle) = OutputStream::try_from_device(&device)
            .map_err(|e| BellsError::audio_device_unavailable(e.to_string()))?;

        Ok((
            OutputGuard { _stream: stream },
            HostOutput {
                handle,
                channels: config.channels(),
                device_name,
            },
        ))
    }

    /// Name reported by the device driver.
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    fn sink(&self) -> Result<Sink> {
        Sink::try_new(&self.handle).map_err(|e| BellsError::playback_failed(e.to_string()))
    }
}

impl AudioOutput for HostOutput {
    fn channels(&self) -> u16 {
        self.channels
    }

    fn play_file(&self, path: &Path) -> Result<()> {
        let file = File::open(path).map_err(|e| BellsError::asset_load_failed(path, e))?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| BellsError::decode_failed(path, e.to_string()))?;

        let sink = self.sink()?;
        sink.append(source);
        sink.detach();
        Ok(())
    }

    fn play_samples(&self, buffer: ToneBuffer) -> Result<()> {
        let source = SamplesBuffer::new(buffer.channels, buffer.sample_rate, buffer.samples);

        let sink = self.sink()?;
        sink.append(source);
        sink.detach();
        Ok(())
    }
}

/// Stand-in used when no device could be opened at startup.
///
/// Every play call fails, so each scheduled cue logs why nothing was heard.
#[derive(Debug, Clone)]
pub struct UnavailableOutput {
    reason: String,
}

impl UnavailableOutput {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl AudioOutput for UnavailableOutput {
    fn channels(&self) -> u16 {
        1
    }

    fn play_file(&self, _path: &Path) -> Result<()> {
        Err(BellsError::audio_device_unavailable(self.reason.clone()))
    }

    fn play_samples(&self, _buffer: ToneBuffer) -> Result<()> {
        Err(BellsError::audio_device_unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording output for tests.

    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use std::thread::{self, ThreadId};

    use tokio::time::Instant;

    use super::AudioOutput;
    use crate::audio::tone::ToneBuffer;
    use crate::error::{BellsError, Result};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Played {
        File(PathBuf),
        Samples { frames: usize, channels: u16 },
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum FailMode {
        Never,
        Always,
        Files,
    }

    /// Records every play call along with when it happened.
    #[derive(Debug)]
    pub struct RecordingOutput {
        channels: u16,
        fail: FailMode,
        calls: Mutex<Vec<(Played, Instant)>>,
        threads: Mutex<Vec<ThreadId>>,
    }

    impl RecordingOutput {
        pub fn new(channels: u16) -> Self {
            Self {
                channels,
                fail: FailMode::Never,
                calls: Mutex::new(Vec::new()),
                threads: Mutex::new(Vec::new()),
            }
        }

        /// Records calls but reports every one of them as failed.
        pub fn failing() -> Self {
            Self {
                fail: FailMode::Always,
                ..Self::new(1)
            }
        }

        /// Plays sample buffers but fails every file with a decode error.
        pub fn undecodable_files(channels: u16) -> Self {
            Self {
                fail: FailMode::Files,
                ..Self::new(channels)
            }
        }

        pub fn played(&self) -> Vec<Played> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|(p, _)| p.clone())
                .collect()
        }

        pub fn timestamps(&self) -> Vec<Instant> {
            self.calls.lock().unwrap().iter().map(|(_, t)| *t).collect()
        }

        /// Threads the play calls ran on.
        pub fn threads(&self) -> Vec<ThreadId> {
            self.threads.lock().unwrap().clone()
        }

        fn record(&self, played: Played) -> Result<()> {
            let error = match (&played, self.fail) {
                (_, FailMode::Always) => {
                    Some(BellsError::playback_failed("recording output set to fail"))
                }
                (Played::File(path), FailMode::Files) => {
                    Some(BellsError::decode_failed(path, "not an audio file"))
                }
                _ => None,
            };

            self.calls.lock().unwrap().push((played, Instant::now()));
            self.threads.lock().unwrap().push(thread::current().id());
            error.map_or(Ok(()), Err)
        }
    }

    impl AudioOutput for RecordingOutput {
        fn channels(&self) -> u16 {
            self.channels
        }

        fn play_file(&self, path: &Path) -> Result<()> {
            self.record(Played::File(path.to_path_buf()))
        }

        fn play_samples(&self, buffer: ToneBuffer) -> Result<()> {
            self.record(Played::Samples {
                frames: buffer.frames(),
                channels: buffer.channels,
            })
        }
    }
}
