//! WAV export of synthesized tones.
//!
//! Writes 16-bit PCM using the hound crate.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use super::tone::ToneBuffer;
use crate::error::{BellsError, Result};

fn spec_for(buffer: &ToneBuffer) -> WavSpec {
    WavSpec {
        channels: buffer.channels,
        sample_rate: buffer.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Writes a tone buffer to a WAV file.
///
/// # Example
///
/// ```ignore
/// use santa_bells::audio::{bell_tone, write_wav};
///
/// write_wav(&bell_tone(2), Path::new("/tmp/bell.wav"))?;
/// ```
pub fn write_wav(buffer: &ToneBuffer, path: &Path) -> Result<()> {
    let mut writer =
        WavWriter::create(path, spec_for(buffer)).map_err(BellsError::wav_write_failed)?;

    for sample in &buffer.samples {
        writer
            .write_sample(*sample)
            .map_err(BellsError::wav_write_failed)?;
    }

    writer.finalize().map_err(BellsError::wav_write_failed)?;

    Ok(())
}
