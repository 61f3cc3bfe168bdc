use anyhow::{Context, Result, bail};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;
use std::path::Path;

/// Planar audio, one `Vec` per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct WavAudio {
    pub sample_rate: u32,
    pub channels: Vec<Vec<f32>>,
}

impl WavAudio {
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    pub fn num_frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }
}

/// Decode a WAV file into planar floats in [-1, 1].
pub fn read_wav(path: &Path) -> Result<WavAudio> {
    let mut reader = WavReader::open(path)
        .with_context(|| format!("failed to open WAV file '{}'", path.display()))?;
    let spec = reader.spec();
    let num_channels = spec.channels as usize;

    if num_channels == 0 {
        bail!("WAV file '{}' has no channels", path.display());
    }

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .context("failed to decode float samples")?,
        SampleFormat::Int => {
            let scale = 1.0 / (1_i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<Result<_, _>>()
                .context("failed to decode integer samples")?
        }
    };

    let frames = interleaved.len() / num_channels;
    let mut channels = vec![Vec::with_capacity(frames); num_channels];
    for frame in interleaved.chunks_exact(num_channels) {
        for (channel, &sample) in channels.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }

    debug!(
        "Read {frames} frames, {num_channels} channels at {} Hz from {}",
        spec.sample_rate,
        path.display()
    );

    Ok(WavAudio {
        sample_rate: spec.sample_rate,
        channels,
    })
}

/// Write planar audio as an interleaved 32-bit float WAV file.
pub fn write_wav(path: &Path, audio: &WavAudio) -> Result<()> {
    let spec = WavSpec {
        channels: audio.num_channels() as u16,
        sample_rate: audio.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("failed to create WAV file '{}'", path.display()))?;

    for frame in 0..audio.num_frames() {
        for channel in &audio.channels {
            writer
                .write_sample(channel[frame])
                .context("failed to write sample")?;
        }
    }

    writer.finalize().context("failed to finalize WAV file")?;
    debug!("Wrote {} frames to {}", audio.num_frames(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_samples_are_scaled() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("int.wav");

        let spec = WavSpec {
            channels: 2,
            sample_rate: 44_100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&path, spec)?;
        for _ in 0..4 {
            writer.write_sample(i16::MAX)?;
            writer.write_sample(-16_384i16)?;
        }
        writer.finalize()?;

        let audio = read_wav(&path)?;
        assert_eq!(audio.sample_rate, 44_100);
        assert_eq!(audio.num_channels(), 2);
        assert_eq!(audio.num_frames(), 4);
        assert!(audio.channels[0].iter().all(|&s| (s - 1.0).abs() < 1e-4));
        assert!(audio.channels[1].iter().all(|&s| s == -0.5));

        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_wav(Path::new("/nonexistent/ampsim.wav"));
        assert!(result.is_err());
    }
}
