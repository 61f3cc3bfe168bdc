use crate::amp::stages::common::{LinearRamp, db_to_lin};
use crate::amp::stages::{ProcessSpec, Stage};

/// Decibel gain with a linear ramp on every change, so knob moves don't click.
pub struct GainStage {
    gain: LinearRamp,
    ramp_seconds: f64,
    sample_rate: f64,
}

impl GainStage {
    pub fn new(gain_db: f32) -> Self {
        Self {
            gain: LinearRamp::new(db_to_lin(gain_db)),
            ramp_seconds: 0.0,
            sample_rate: 0.0,
        }
    }

    pub fn set_gain_db(&mut self, gain_db: f32) {
        self.gain.set_target(db_to_lin(gain_db));
    }

    /// Linear multiplier the stage is heading towards.
    pub const fn target_gain(&self) -> f32 {
        self.gain.target()
    }

    pub fn set_ramp_duration_seconds(&mut self, seconds: f64) {
        if self.ramp_seconds != seconds {
            self.ramp_seconds = seconds;
            self.reset();
        }
    }

    pub const fn ramp_duration_seconds(&self) -> f64 {
        self.ramp_seconds
    }

    pub const fn is_smoothing(&self) -> bool {
        self.gain.is_smoothing()
    }

    /// Jump straight to the target gain, dropping any running ramp.
    pub fn reset(&mut self) {
        if self.sample_rate > 0.0 {
            self.gain.reset(self.sample_rate, self.ramp_seconds);
        }
    }
}

impl Stage for GainStage {
    fn prepare(&mut self, spec: &ProcessSpec) {
        self.sample_rate = spec.sample_rate;
        self.reset();
    }

    fn process_block(&mut self, channels: &mut [&mut [f32]]) {
        if !self.gain.is_smoothing() {
            let gain = self.gain.target();
            for channel in channels.iter_mut() {
                for sample in channel.iter_mut() {
                    *sample *= gain;
                }
            }
            return;
        }

        let num_samples = channels.first().map_or(0, |channel| channel.len());

        // One ramp step per frame, shared by all channels.
        for i in 0..num_samples {
            let gain = self.gain.next_value();
            for channel in channels.iter_mut() {
                channel[i] *= gain;
            }
        }
    }
}
