//! Drift effect
//!
//! Every pixel slowly blends toward its own target color. Periodically one
//! random pixel snaps to its target and is given a new one, mostly much
//! dimmer than the last so the rings glow unevenly.

use embassy_time::{Duration, Instant};
use fastrand::Rng;

use super::{Effect, EffectStep, FrameContext, uniform};
use crate::{
    MAX_PIXELS,
    brightness::BrightnessScaler,
    color::{Hsv, Rgb, mix},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftConfig {
    pub hue_min: f32,
    pub hue_max: f32,
    /// Time between retargeting a pixel
    pub period: Duration,
    /// Each frame a pixel covers `1 / blend_divisor` of the remaining way
    pub blend_divisor: f32,
    /// Draws at or above this threshold get the dimmed target
    pub dim_threshold: f32,
    /// Divisor applied to dimmed targets
    pub dim_divisor: f32,
    /// Time between frames
    pub delay: Duration,
    pub indicator: Rgb,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            hue_min: 0.42,
            hue_max: 0.73,
            period: Duration::from_millis(750),
            blend_divisor: 25.0,
            dim_threshold: 0.35,
            dim_divisor: 12.5,
            delay: Duration::from_millis(20),
            indicator: Rgb { r: 0, g: 0, b: 1 },
        }
    }
}

#[derive(Debug, Clone)]
pub struct DriftEffect {
    config: DriftConfig,
    current: [Hsv; MAX_PIXELS],
    target: [Hsv; MAX_PIXELS],
    next_refresh: Option<Instant>,
}

impl DriftEffect {
    pub const fn new(config: DriftConfig) -> Self {
        Self {
            config,
            current: [Hsv::OFF; MAX_PIXELS],
            target: [Hsv::OFF; MAX_PIXELS],
            next_refresh: None,
        }
    }

    /// Color currently shown on `pixel`
    pub fn current(&self, pixel: usize) -> Option<Hsv> {
        self.current.get(pixel).copied()
    }

    /// Color `pixel` is drifting toward
    pub fn target(&self, pixel: usize) -> Option<Hsv> {
        self.target.get(pixel).copied()
    }

    fn next_target(&self, rng: &mut Rng, scaler: &BrightnessScaler, brightness: f32) -> Hsv {
        let hue = uniform(rng, self.config.hue_min, self.config.hue_max);
        let mut val = rng.f32();
        if rng.f32() >= self.config.dim_threshold {
            val /= self.config.dim_divisor;
        }
        Hsv::new(hue, 1.0, scaler.limit(val * brightness))
    }
}

impl Effect for DriftEffect {
    fn init(&mut self, _leds: &mut [Rgb]) -> Option<Rgb> {
        Some(self.config.indicator)
    }

    fn render(&mut self, ctx: &mut FrameContext<'_>, leds: &mut [Rgb]) -> EffectStep {
        let len = leds.len().min(MAX_PIXELS);

        let due = self.next_refresh.is_none_or(|deadline| ctx.now >= deadline);
        if due && len > 0 {
            self.next_refresh = Some(ctx.now + self.config.period);
            let pixel = ctx.rng.usize(0..len);
            self.current[pixel] = self.target[pixel];
            self.target[pixel] = self.next_target(ctx.rng, ctx.scaler, ctx.brightness);
        }

        let amount = 1.0 / self.config.blend_divisor;
        for (pixel, led) in leds.iter_mut().take(len).enumerate() {
            self.current[pixel] = mix(self.current[pixel], self.target[pixel], amount);
            *led = self.current[pixel].to_rgb();
        }

        EffectStep::hold(self.config.delay)
    }
}
