use anyhow::{Result, anyhow};
use std::fmt;
use std::str::FromStr;

use super::range::NormalisableRange;

/// Every host-visible parameter, in the order hosts list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    Input,
    Gate,
    Output,
    Gain,
    Bass,
    Middle,
    Treble,
    Presence,
    Level,
}

/// Static description of a parameter: what hosts and the editor need to show it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub id: ParamId,
    pub name: &'static str,
    pub range: NormalisableRange,
    pub default: f32,
    pub unit: Option<&'static str>,
}

impl ParamSpec {
    pub fn default_normalised(&self) -> f32 {
        self.range.to_normalised(self.default)
    }
}

impl ParamId {
    pub const ALL: [Self; 9] = [
        Self::Input,
        Self::Gate,
        Self::Output,
        Self::Gain,
        Self::Bass,
        Self::Middle,
        Self::Treble,
        Self::Presence,
        Self::Level,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Stable identifier, used for host automation and saved sessions.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Input => "INPUT",
            Self::Gate => "GATE",
            Self::Output => "OUTPUT",
            Self::Gain => "GAIN",
            Self::Bass => "BASS",
            Self::Middle => "MIDDLE",
            Self::Treble => "TREBLE",
            Self::Presence => "PRESENCE",
            Self::Level => "LEVEL",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Gate => "Gate",
            Self::Output => "Output",
            Self::Gain => "Gain",
            Self::Bass => "Bass",
            Self::Middle => "Middle",
            Self::Treble => "Treble",
            Self::Presence => "Presence",
            Self::Level => "Level",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether the value is a level in decibels rather than a 0..1 amp control.
    pub const fn is_decibels(self) -> bool {
        matches!(self, Self::Input | Self::Gate | Self::Output)
    }

    pub fn spec(self) -> ParamSpec {
        let (range, default) = match self {
            Self::Input => (NormalisableRange::new(-24.0, 24.0), 0.0),
            // Gate threshold, fully open at the bottom of the range
            Self::Gate => (NormalisableRange::new(-100.0, 0.0), -100.0),
            Self::Output => (NormalisableRange::with_centre(-60.0, 12.0, 0.0), 0.0),
            Self::Gain | Self::Bass | Self::Middle | Self::Treble | Self::Presence | Self::Level => {
                (NormalisableRange::new(0.0, 1.0), 0.5)
            }
        };

        ParamSpec {
            id: self,
            name: self.name(),
            range,
            default,
            unit: if self.is_decibels() { Some(" dB") } else { None },
        }
    }

    pub fn from_id(id: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| anyhow!("unknown parameter id '{id}'"))
    }
}

impl FromStr for ParamId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s)
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The full parameter layout, in host order.
pub fn parameter_layout() -> [ParamSpec; ParamId::COUNT] {
    ParamId::ALL.map(ParamId::spec)
}
