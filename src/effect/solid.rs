//! Solid color effect
//!
//! Fills all LEDs and the status light with a single color.

use embassy_time::Duration;

use super::{Effect, EffectStep, FrameContext};
use crate::color::{Hsv, Rgb};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidConfig {
    pub color: Hsv,
    /// Refresh interval, nothing moves in between
    pub delay: Duration,
}

impl Default for SolidConfig {
    fn default() -> Self {
        Self {
            color: Hsv::new(0.0, 0.0, 1.0),
            delay: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SolidEffect {
    config: SolidConfig,
}

impl SolidEffect {
    pub const fn new(config: SolidConfig) -> Self {
        Self { config }
    }
}

impl Effect for SolidEffect {
    fn init(&mut self, leds: &mut [Rgb]) -> Option<Rgb> {
        let color = self.config.color.to_rgb();
        leds.fill(color);
        Some(color)
    }

    fn render(&mut self, _ctx: &mut FrameContext<'_>, leds: &mut [Rgb]) -> EffectStep {
        leds.fill(self.config.color.to_rgb());
        EffectStep::hold(self.config.delay)
    }
}
