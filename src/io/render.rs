use anyhow::{Result, bail};
use log::debug;

use crate::amp::processor::Processor;
use crate::io::bus_layout::BusLayout;
use crate::io::wav::WavAudio;
use crate::params::ParameterSource;

/// Run a whole file through the processor in host-sized blocks.
///
/// Returns the number of blocks processed.
pub fn render<P>(
    processor: &mut Processor,
    params: &P,
    audio: &mut WavAudio,
    block_size: usize,
) -> Result<usize>
where
    P: ParameterSource + ?Sized,
{
    if block_size == 0 {
        bail!("block size must be greater than zero");
    }

    let num_channels = audio.num_channels();
    if !processor.set_bus_layout(BusLayout::new(num_channels, num_channels)) {
        bail!("unsupported channel count {num_channels}, expected mono or stereo");
    }

    processor.prepare_to_play(f64::from(audio.sample_rate), block_size);

    let num_frames = audio.num_frames();
    let mut blocks = 0;
    let mut start = 0;

    while start < num_frames {
        let end = (start + block_size).min(num_frames);
        let mut block: Vec<&mut [f32]> = audio
            .channels
            .iter_mut()
            .map(|channel| &mut channel[start..end])
            .collect();

        processor.process_block(&mut block, params);

        blocks += 1;
        start = end;
    }

    processor.release_resources();
    debug!("Rendered {num_frames} frames in {blocks} blocks");

    Ok(blocks)
}
