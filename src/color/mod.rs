mod utils;

use smart_leds::RGB8;
use utils::hsv2rgb;
pub use utils::{mix, wrap_hue};

pub type Rgb = RGB8;

/// Fully dark pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Floating point HSV color
///
/// Hue is a fraction of the color wheel and wraps around `[0, 1)`,
/// saturation and value are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub hue: f32,
    pub sat: f32,
    pub val: f32,
}

impl Hsv {
    /// Dark color without a hue
    pub const OFF: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(hue: f32, sat: f32, val: f32) -> Self {
        Self { hue, sat, val }
    }

    /// Same hue and saturation with another value
    #[must_use]
    pub const fn with_val(self, val: f32) -> Self {
        Self { val, ..self }
    }

    /// Same saturation and value with another hue
    #[must_use]
    pub const fn with_hue(self, hue: f32) -> Self {
        Self { hue, ..self }
    }

    /// Pack into the 8-bit pixel format
    pub fn to_rgb(self) -> Rgb {
        hsv2rgb(self)
    }
}
