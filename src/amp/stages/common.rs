/// Anything at or below this level is treated as silence.
pub const MINUS_INFINITY_DB: f32 = -100.0;

/// Convert decibels to linear amplitude.
///
/// Levels at or below [`MINUS_INFINITY_DB`] map to exactly zero.
#[inline]
pub fn db_to_lin(db: f32) -> f32 {
    if db > MINUS_INFINITY_DB {
        10f32.powf(db * 0.05)
    } else {
        0.0
    }
}

/// Linear ramp toward a target value over a fixed number of samples.
///
/// Re-targeting mid-ramp starts a fresh ramp from wherever the value currently is.
/// Setting the same target again leaves a running ramp untouched.
#[derive(Debug, Clone)]
pub struct LinearRamp {
    current: f32,
    target: f32,
    step: f32,
    countdown: usize,
    steps_to_target: usize,
}

impl LinearRamp {
    pub const fn new(initial: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            step: 0.0,
            countdown: 0,
            steps_to_target: 0,
        }
    }

    /// Recompute the ramp length and snap to the current target.
    pub fn reset(&mut self, sample_rate: f64, ramp_seconds: f64) {
        if sample_rate > 0.0 && ramp_seconds >= 0.0 {
            self.steps_to_target = (ramp_seconds * sample_rate).floor() as usize;
        }
        self.set_current_and_target(self.target);
    }

    pub const fn set_current_and_target(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.step = 0.0;
        self.countdown = 0;
    }

    pub fn set_target(&mut self, value: f32) {
        if value == self.target {
            return;
        }

        if self.steps_to_target == 0 {
            self.set_current_and_target(value);
            return;
        }

        self.target = value;
        self.countdown = self.steps_to_target;
        self.step = (self.target - self.current) / self.countdown as f32;
    }

    /// Advance one sample and return the new value.
    #[inline]
    pub fn next_value(&mut self) -> f32 {
        if !self.is_smoothing() {
            return self.target;
        }

        self.countdown -= 1;

        if self.is_smoothing() {
            self.current += self.step;
        } else {
            self.current = self.target;
        }

        self.current
    }

    pub const fn is_smoothing(&self) -> bool {
        self.countdown > 0
    }

    pub const fn current(&self) -> f32 {
        self.current
    }

    pub const fn target(&self) -> f32 {
        self.target
    }

    pub const fn steps_to_target(&self) -> usize {
        self.steps_to_target
    }
}
