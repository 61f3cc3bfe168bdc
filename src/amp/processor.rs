use log::{debug, warn};

use crate::amp::stages::gain::GainStage;
use crate::amp::stages::{ProcessSpec, Stage};
use crate::io::bus_layout::BusLayout;
use crate::params::{ParamId, ParameterSource};

/// Time each trim stage takes to reach a new gain.
pub const GAIN_RAMP_SECONDS: f64 = 0.05;

/// The amp's audio path: input trim, then output trim.
///
/// Gate, drive and tone stack will sit between the two trims. Their parameters already
/// exist but nothing here reads them yet.
pub struct Processor {
    spec: ProcessSpec,
    layout: BusLayout,
    input_gain: GainStage,
    output_gain: GainStage,
    ramp_seconds: f64,
}

impl Processor {
    pub fn new(layout: BusLayout) -> Self {
        Self {
            spec: ProcessSpec::default(),
            layout,
            input_gain: GainStage::new(0.0),
            output_gain: GainStage::new(0.0),
            ramp_seconds: GAIN_RAMP_SECONDS,
        }
    }

    pub const fn with_ramp_seconds(mut self, seconds: f64) -> Self {
        self.ramp_seconds = seconds;
        self
    }

    pub const fn is_bus_layout_supported(layout: &BusLayout) -> bool {
        layout.is_supported()
    }

    /// Adopt a new channel configuration. Unsupported layouts are refused and the
    /// previous layout is kept.
    pub fn set_bus_layout(&mut self, layout: BusLayout) -> bool {
        if !Self::is_bus_layout_supported(&layout) {
            warn!("Rejecting unsupported bus layout {layout}");
            return false;
        }

        self.layout = layout;
        true
    }

    pub const fn spec(&self) -> ProcessSpec {
        self.spec
    }

    pub fn prepare_to_play(&mut self, sample_rate: f64, samples_per_block: usize) {
        self.spec = ProcessSpec {
            sample_rate,
            maximum_block_size: samples_per_block,
            num_channels: self.layout.output_channels,
        };

        for stage in [&mut self.input_gain, &mut self.output_gain] {
            stage.prepare(&self.spec);
            stage.set_ramp_duration_seconds(self.ramp_seconds);
        }

        debug!(
            "Prepared: sample rate {sample_rate}, block size {samples_per_block}, layout {}",
            self.layout
        );
    }

    pub fn release_resources(&mut self) {
        debug!("Releasing resources");
    }

    /// Drop any running ramps and sit at the current targets.
    pub fn reset(&mut self) {
        self.input_gain.reset();
        self.output_gain.reset();
    }

    /// Run one block in place. Every channel slice must have the same length.
    pub fn process_block<P>(&mut self, channels: &mut [&mut [f32]], params: &P)
    where
        P: ParameterSource + ?Sized,
    {
        for channel in channels.iter_mut().skip(self.layout.input_channels) {
            channel.fill(0.0);
        }

        self.input_gain.set_gain_db(params.raw_value(ParamId::Input));
        self.input_gain.process_block(channels);

        self.output_gain.set_gain_db(params.raw_value(ParamId::Output));
        self.output_gain.process_block(channels);
    }

    pub const fn input_gain(&self) -> &GainStage {
        &self.input_gain
    }

    pub const fn output_gain(&self) -> &GainStage {
        &self.output_gain
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(BusLayout::STEREO)
    }
}
