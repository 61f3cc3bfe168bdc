pub mod common;
pub mod gain;

/// Playback configuration handed to every stage before processing starts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProcessSpec {
    pub sample_rate: f64,
    pub maximum_block_size: usize,
    pub num_channels: usize,
}

// The core trait that all processing stages must implement
pub trait Stage: Send + Sync + 'static {
    // Reset internal state for a new playback configuration
    fn prepare(&mut self, spec: &ProcessSpec);

    // Process a block in place, one slice per channel, all of equal length
    fn process_block(&mut self, channels: &mut [&mut [f32]]);
}
