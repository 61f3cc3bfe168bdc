/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }
}

pub const BACKGROUND: Rgba = Rgba::rgb(30, 30, 30);
pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
pub const LABEL: Rgba = Rgba::rgb(245, 245, 245);
pub const BRANDING: Rgba = Rgba::rgb(255, 165, 0);
pub const KNOB_BODY: Rgba = Rgba::rgb(55, 55, 55);
pub const KNOB_TRACK: Rgba = Rgba::rgb(80, 80, 80);
pub const KNOB_VALUE: Rgba = Rgba::rgb(255, 165, 0);

/// Darker strip behind the utility row.
pub fn utility_strip() -> Rgba {
    BLACK.with_alpha(0.3)
}

pub const UTILITY_LABEL_SIZE: f32 = 14.0;
pub const AMP_LABEL_SIZE: f32 = 16.0;
pub const BRANDING_SIZE: f32 = 20.0;
pub const VALUE_TEXT_SIZE: f32 = 12.0;

pub const BRANDING_TEXT: &str = "AMP SIM";

/// Rotary travel, in radians clockwise from straight up.
pub const ROTARY_START: f32 = -0.75 * std::f32::consts::PI;
pub const ROTARY_END: f32 = 0.75 * std::f32::consts::PI;

/// Knob angle for a normalised value.
pub fn rotary_angle(normalised: f32) -> f32 {
    ROTARY_START + normalised.clamp(0.0, 1.0) * (ROTARY_END - ROTARY_START)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_alpha() {
        assert_eq!(utility_strip().a, 77);
        assert_eq!(utility_strip().r, 0);
    }

    #[test]
    fn test_rotary_angle_spans_travel() {
        assert_eq!(rotary_angle(0.0), ROTARY_START);
        assert!((rotary_angle(1.0) - ROTARY_END).abs() < 1e-6);
        assert!(rotary_angle(0.5).abs() < 1e-6);
        assert_eq!(rotary_angle(3.0), rotary_angle(1.0));
    }
}
