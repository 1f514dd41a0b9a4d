//! LED colors.

use serde::{Deserialize, Serialize};

/// Colors the LED ring renders.
///
/// Named colors cover the platform's stock light effects; `Custom`
/// carries an arbitrary RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum LedColor {
    /// LED off.
    Off,

    /// Red LED.
    Red,

    /// Green LED.
    Green,

    /// Blue LED.
    Blue,

    /// Yellow LED.
    Yellow,

    /// Orange LED.
    Orange,

    /// Cyan LED.
    Cyan,

    /// Magenta LED.
    Magenta,

    /// White LED.
    White,

    /// Custom RGB color (red, green, blue).
    Custom(u8, u8, u8),
}

impl LedColor {
    /// Create a custom RGB LED color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Custom(r, g, b)
    }

    /// Get the RGB components of the LED color.
    pub fn as_rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Off => (0, 0, 0),
            Self::Red => (255, 0, 0),
            Self::Green => (0, 255, 0),
            Self::Blue => (0, 0, 255),
            Self::Yellow => (255, 255, 0),
            Self::Orange => (255, 165, 0),
            Self::Cyan => (0, 255, 255),
            Self::Magenta => (255, 0, 255),
            Self::White => (255, 255, 255),
            Self::Custom(r, g, b) => (*r, *g, *b),
        }
    }

    /// The color scaled by `alpha`.
    ///
    /// Alpha is clamped to `[0, 1]`; a non-finite alpha renders the
    /// color unscaled. Tolerating junk here matches the native fill
    /// call, which accepts whatever the caller hands it.
    pub fn scaled(&self, alpha: f32) -> (u8, u8, u8) {
        let alpha = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            1.0
        };
        let (r, g, b) = self.as_rgb();
        let scale = |channel: u8| (f32::from(channel) * alpha).round() as u8;
        (scale(r), scale(g), scale(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_led_color_rgb() {
        assert_eq!(LedColor::Red.as_rgb(), (255, 0, 0));
        assert_eq!(LedColor::Green.as_rgb(), (0, 255, 0));
        assert_eq!(LedColor::Blue.as_rgb(), (0, 0, 255));
        assert_eq!(LedColor::Off.as_rgb(), (0, 0, 0));
    }

    #[test]
    fn test_led_color_custom() {
        let custom = LedColor::rgb(128, 64, 32);
        assert_eq!(custom.as_rgb(), (128, 64, 32));
    }

    #[rstest]
    #[case(1.0, (255, 255, 255))]
    #[case(0.5, (128, 128, 128))]
    #[case(0.0, (0, 0, 0))]
    // Out-of-range alphas are clamped, not rejected.
    #[case(10.0, (255, 255, 255))]
    #[case(-1.0, (0, 0, 0))]
    fn test_scaled_alpha(#[case] alpha: f32, #[case] expected: (u8, u8, u8)) {
        assert_eq!(LedColor::White.scaled(alpha), expected);
    }

    #[test]
    fn test_scaled_non_finite_alpha() {
        assert_eq!(LedColor::White.scaled(f32::NAN), (255, 255, 255));
        assert_eq!(LedColor::Red.scaled(f32::INFINITY), (255, 0, 0));
    }

    #[test]
    fn test_color_serialization() {
        let color = LedColor::Custom(1, 2, 3);
        let json = serde_json::to_string(&color).unwrap();
        let back: LedColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}
