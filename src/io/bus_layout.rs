use std::fmt;

/// Channel counts of the main input and output buses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusLayout {
    pub input_channels: usize,
    pub output_channels: usize,
}

impl BusLayout {
    pub const MONO: Self = Self::new(1, 1);
    pub const STEREO: Self = Self::new(2, 2);

    pub const fn new(input_channels: usize, output_channels: usize) -> Self {
        Self {
            input_channels,
            output_channels,
        }
    }

    /// Mono or stereo output, with the input matching the output.
    pub const fn is_supported(&self) -> bool {
        matches!(self.output_channels, 1 | 2) && self.input_channels == self.output_channels
    }
}

/// Layouts offered to hosts, in order of preference.
pub const SUPPORTED_LAYOUTS: [BusLayout; 2] = [BusLayout::STEREO, BusLayout::MONO];

impl fmt::Display for BusLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in / {} out", self.input_channels, self.output_channels)
    }
}
