/// Maps a plain parameter value to and from the 0..1 range a control works in.
///
/// `normalised = ((value - min) / (max - min)) ^ skew`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalisableRange {
    pub min: f32,
    pub max: f32,
    pub skew: f32,
}

impl NormalisableRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max, skew: 1.0 }
    }

    /// Pick the skew so that `centre` lands exactly halfway along the control.
    pub fn with_centre(min: f32, max: f32, centre: f32) -> Self {
        debug_assert!(min < centre && centre < max);
        let proportion = (centre - min) / (max - min);
        Self {
            min,
            max,
            skew: 0.5f32.ln() / proportion.ln(),
        }
    }

    pub fn length(&self) -> f32 {
        self.max - self.min
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    pub fn to_normalised(&self, value: f32) -> f32 {
        let proportion = ((value - self.min) / self.length()).clamp(0.0, 1.0);
        if self.skew == 1.0 {
            proportion
        } else {
            proportion.powf(self.skew)
        }
    }

    pub fn from_normalised(&self, normalised: f32) -> f32 {
        let mut proportion = normalised.clamp(0.0, 1.0);
        if self.skew != 1.0 && proportion > 0.0 {
            proportion = (proportion.ln() / self.skew).exp();
        }
        self.min + self.length() * proportion
    }
}
