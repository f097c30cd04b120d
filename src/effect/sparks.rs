//! Sparks effect
//!
//! Every frame one random pixel flashes in a random hue and is cleared
//! again on the next frame.

use embassy_time::Duration;

use super::{Effect, EffectStep, FrameContext, uniform};
use crate::color::{BLACK, Hsv, Rgb};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparksConfig {
    pub hue_min: f32,
    pub hue_max: f32,
    /// Time each flash stays lit
    pub delay: Duration,
    pub indicator: Rgb,
}

impl Default for SparksConfig {
    fn default() -> Self {
        Self {
            hue_min: 0.42,
            hue_max: 0.73,
            delay: Duration::from_millis(25),
            indicator: Rgb { r: 1, g: 0, b: 1 },
        }
    }
}

#[derive(Debug, Clone)]
pub struct SparksEffect {
    config: SparksConfig,
    lit: Option<usize>,
}

impl SparksEffect {
    pub const fn new(config: SparksConfig) -> Self {
        Self { config, lit: None }
    }

    /// Pixel flashed by the last frame
    pub const fn lit(&self) -> Option<usize> {
        self.lit
    }
}

impl Effect for SparksEffect {
    fn init(&mut self, _leds: &mut [Rgb]) -> Option<Rgb> {
        Some(self.config.indicator)
    }

    fn render(&mut self, ctx: &mut FrameContext<'_>, leds: &mut [Rgb]) -> EffectStep {
        if let Some(previous) = self.lit.take() {
            if let Some(led) = leds.get_mut(previous) {
                *led = BLACK;
            }
        }
        if leds.is_empty() {
            return EffectStep::hold(self.config.delay);
        }

        let pixel = ctx.rng.usize(0..leds.len());
        let hue = uniform(ctx.rng, self.config.hue_min, self.config.hue_max);
        leds[pixel] = Hsv::new(hue, 1.0, ctx.brightness).to_rgb();
        self.lit = Some(pixel);

        EffectStep::hold(self.config.delay)
    }
}
