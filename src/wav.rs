//! WAV export of synthesized signals.
//!
//! Signals are written as mono, 32-bit float samples.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use log::debug;

fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    }
}

/// Writes `samples` as a mono float WAV stream.
///
/// # Errors
///
/// Returns the [`hound::Error`] of the underlying writer.
pub fn write_wav<W: Write + Seek>(writer: W, samples: &[f64], sample_rate: u32) -> hound::Result<()> {
    let mut wav = WavWriter::new(writer, wav_spec(sample_rate))?;
    for &sample in samples {
        wav.write_sample(sample as f32)?;
    }
    wav.finalize()
}

/// Creates (or truncates) the file at `path` and writes `samples` to it as a mono float WAV.
///
/// # Errors
///
/// Returns the [`hound::Error`] of the file creation or the writer.
pub fn create_wav<P: AsRef<Path>>(path: P, samples: &[f64], sample_rate: u32) -> hound::Result<()> {
    let path = path.as_ref();
    debug!("writing {} samples to {}", samples.len(), path.display());
    write_wav(BufWriter::new(File::create(path)?), samples, sample_rate)
}

/// Scales `buf` so that its RMS level becomes `target_rms`.
///
/// Empty, silent and non-finite buffers are left as they are.
// an exactly silent buffer is the only case we skip
#[allow(clippy::float_cmp)]
pub fn adjust_signal_gain(buf: &mut [f64], target_rms: f64) {
    if buf.is_empty() {
        return;
    }
    let rms = compute_rms(buf);
    if rms == 0.0 || !rms.is_finite() {
        return;
    }
    let r = target_rms / rms;
    for b_i in buf.iter_mut() {
        *b_i *= r;
    }
}

pub(crate) fn compute_rms(buf: &[f64]) -> f64 {
    (buf.iter().map(|f| f * f).sum::<f64>() / buf.len() as f64).sqrt()
}
