//! Bell tone synthesis.
//!
//! Used whenever no recorded asset is available: a one-second sum of three
//! damped sine partials, normalized to full 16-bit scale.

use std::f64::consts::PI;

/// Sample rate of the synthesized tone (44.1kHz).
pub const SAMPLE_RATE: u32 = 44_100;

/// Length of the synthesized tone in seconds.
pub const DURATION_SECS: f64 = 1.0;

/// Fundamental and two overtones of the bell.
pub const PARTIALS_HZ: [f64; 3] = [880.0, 1760.0, 2640.0];

/// Exponential decay rate of the envelope `e^(-rate * t)`.
pub const DECAY_RATE: f64 = 3.0;

/// Peak sample magnitude after normalization.
pub const FULL_SCALE: f64 = i16::MAX as f64;

/// Interleaved 16-bit samples ready for the output device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneBuffer {
    /// Interleaved samples, `frames * channels` long.
    pub samples: Vec<i16>,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl ToneBuffer {
    /// Number of samples per channel.
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    /// Duration of the buffer in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// Samples of a single channel, de-interleaved.
    pub fn channel(&self, index: u16) -> impl Iterator<Item = i16> + '_ {
        self.samples
            .iter()
            .skip(index as usize)
            .step_by(self.channels.max(1) as usize)
            .copied()
    }
}

/// Parameters of a damped multi-partial tone.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneSpec {
    pub sample_rate: u32,
    pub duration_secs: f64,
    pub partials_hz: Vec<f64>,
    pub decay_rate: f64,
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            duration_secs: DURATION_SECS,
            partials_hz: PARTIALS_HZ.to_vec(),
            decay_rate: DECAY_RATE,
        }
    }
}

impl ToneSpec {
    /// Number of samples per channel.
    pub fn frame_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration_secs) as usize
    }

    /// Un-normalized mono signal.
    ///
    /// The time axis spans `[0, duration)` with the endpoint excluded, so
    /// sample `i` sits at `i * duration / frame_count`.
    pub fn signal(&self) -> Vec<f64> {
        let frames = self.frame_count();
        let step = if frames == 0 {
            0.0
        } else {
            self.duration_secs / frames as f64
        };

        (0..frames)
            .map(|i| {
                let t = i as f64 * step;
                let envelope = (-self.decay_rate * t).exp();
                self.partials_hz
                    .iter()
                    .map(|f| (2.0 * PI * f * t).sin() * envelope)
                    .sum()
            })
            .collect()
    }

    /// Renders the tone as 16-bit samples duplicated across `channels`.
    ///
    /// A signal whose peak is zero renders as silence of the normal length.
    /// Samples are truncated toward zero after scaling.
    pub fn render(&self, channels: u16) -> ToneBuffer {
        let channels = channels.max(1);
        let signal = self.signal();
        let peak = signal.iter().fold(0.0f64, |acc, s| acc.max(s.abs()));
        let gain = if peak > 0.0 { FULL_SCALE / peak } else { 0.0 };

        let mut samples = Vec::with_capacity(signal.len() * channels as usize);
        for s in signal {
            let q = (s * gain) as i16;
            samples.extend(std::iter::repeat(q).take(channels as usize));
        }

        ToneBuffer {
            samples,
            channels,
            sample_rate: self.sample_rate,
        }
    }
}

/// Renders the default bell tone for a device with `channels` channels.
pub fn bell_tone(channels: u16) -> ToneBuffer {
    ToneSpec::default().render(channels)
}
