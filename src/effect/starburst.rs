//! Starburst effect
//!
//! A random perimeter pixel ramps up and fades out. Its two ring neighbors
//! and the ring center follow a little later, dimmer and in shifted hues.
//! Bursts run one step per frame so a mode change can cut one short.
//!
//! While the mode is locked, holding the touch pad floods every pixel with
//! the primary pixel's color.

use embassy_time::Duration;

use super::{Effect, EffectStep, FrameContext, uniform, uniform_duration};
use crate::{
    brightness::BrightnessScaler,
    color::{BLACK, Hsv, Rgb},
    decay::decay,
    ring::{PixelIndex, RingTopology},
};

/// Shape of a single burst
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstEnvelope {
    /// Steps spent ramping up
    pub ramp_steps: u32,
    /// Steps spent fading out
    pub fade_steps: u32,
    /// Steps the side pixels lag behind the primary
    pub side_delay: u32,
    pub ramp_rate: f32,
    pub fade_rate: f32,
    /// Side pixel value relative to the primary
    pub side_scale: f32,
    /// Side pixel rate relative to the primary's rates
    pub side_rate_scale: f32,
}

impl Default for BurstEnvelope {
    fn default() -> Self {
        Self {
            ramp_steps: 10,
            fade_steps: 90,
            side_delay: 7,
            ramp_rate: 0.80,
            fade_rate: 0.96,
            side_scale: 0.25,
            side_rate_scale: 0.975,
        }
    }
}

impl BurstEnvelope {
    /// Steps in a whole burst
    pub const fn total_steps(&self) -> u32 {
        self.ramp_steps + self.fade_steps
    }

    const fn is_last(&self, step: u32) -> bool {
        step + 1 >= self.total_steps()
    }

    /// Primary pixel value at `step`
    pub fn primary(&self, scaler: &BrightnessScaler, base: f32, step: u32) -> f32 {
        if self.is_last(step) {
            0.0
        } else if step <= self.ramp_steps {
            decay(scaler, base, self.ramp_steps - step, self.ramp_rate)
        } else {
            decay(scaler, base, step - self.ramp_steps, self.fade_rate)
        }
    }

    /// Side and center pixel value at `step`
    pub fn side(&self, scaler: &BrightnessScaler, base: f32, step: u32) -> f32 {
        let base = base * self.side_scale;
        let peak = self.ramp_steps + self.side_delay;
        if step < self.side_delay || self.is_last(step) {
            0.0
        } else if step < peak {
            decay(
                scaler,
                base,
                peak - step,
                self.ramp_rate * self.side_rate_scale,
            )
        } else {
            decay(
                scaler,
                base,
                step - self.side_delay,
                self.fade_rate * self.side_rate_scale,
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarburstConfig {
    pub envelope: BurstEnvelope,
    pub hue_min: f32,
    pub hue_max: f32,
    /// Hue shift of the two neighbors
    pub side_hue_offset: f32,
    /// Saturation of the neighbors and center
    pub side_sat: f32,
    /// Bounds of the random time between steps
    pub step_delay: (Duration, Duration),
    /// Bounds of the random pause after each burst
    pub pause: (Duration, Duration),
    pub indicator: Rgb,
}

impl Default for StarburstConfig {
    fn default() -> Self {
        Self {
            envelope: BurstEnvelope::default(),
            hue_min: 0.42,
            hue_max: 0.73,
            side_hue_offset: 0.08,
            side_sat: 0.85,
            step_delay: (Duration::from_micros(11_250), Duration::from_micros(22_500)),
            pause: (Duration::from_millis(500), Duration::from_millis(1_000)),
            indicator: Rgb { r: 0, g: 1, b: 1 },
        }
    }
}

/// Burst in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    pub pixel: PixelIndex,
    pub left: PixelIndex,
    pub right: PixelIndex,
    pub center: PixelIndex,
    pub color: Hsv,
    pub left_color: Hsv,
    pub right_color: Hsv,
    pub center_color: Hsv,
    pub step: u32,
}

impl Burst {
    fn spawn(config: &StarburstConfig, ctx: &mut FrameContext<'_>) -> Self {
        let pixel = random_perimeter_pixel(ctx);
        let topology = ctx.topology;

        let hue = uniform(ctx.rng, config.hue_min, config.hue_max);
        let color = Hsv::new(hue, 1.0, 1.0);
        let side = Hsv::new(hue, config.side_sat, color.val);

        Self {
            pixel,
            left: topology.move_by(pixel, -1),
            right: topology.move_by(pixel, 1),
            center: topology.center(pixel),
            color,
            left_color: side.with_hue(hue - config.side_hue_offset),
            right_color: side.with_hue(hue + config.side_hue_offset),
            center_color: side,
            step: 0,
        }
    }
}

fn random_perimeter_pixel(ctx: &mut FrameContext<'_>) -> PixelIndex {
    let topology: RingTopology = ctx.topology;
    loop {
        let pixel = ctx.rng.usize(0..topology.pixel_count());
        if !topology.is_center(pixel) {
            return pixel;
        }
    }
}

#[derive(Debug, Clone)]
pub struct StarburstEffect {
    config: StarburstConfig,
    burst: Option<Burst>,
    /// Touch flood is showing
    flooded: bool,
}

impl StarburstEffect {
    pub const fn new(config: StarburstConfig) -> Self {
        Self {
            config,
            burst: None,
            flooded: false,
        }
    }

    /// Burst that the next frame continues, if one is running
    pub const fn burst(&self) -> Option<&Burst> {
        self.burst.as_ref()
    }
}

impl Effect for StarburstEffect {
    fn init(&mut self, _leds: &mut [Rgb]) -> Option<Rgb> {
        Some(self.config.indicator)
    }

    fn render(&mut self, ctx: &mut FrameContext<'_>, leds: &mut [Rgb]) -> EffectStep {
        let mut burst = match self.burst.take() {
            Some(burst) => burst,
            None => Burst::spawn(&self.config, ctx),
        };
        let envelope = &self.config.envelope;
        let step = burst.step;

        let val = envelope.primary(ctx.scaler, burst.color.val, step);
        let primary = burst.color.with_val(val).to_rgb();
        leds[burst.pixel] = primary;

        if ctx.touch && ctx.locked {
            self.flooded = true;
            leds.fill(primary);
        } else if self.flooded {
            self.flooded = false;
            leds.fill(BLACK);
        } else {
            let val = envelope.side(ctx.scaler, burst.color.val, step);
            leds[burst.left] = burst.left_color.with_val(val).to_rgb();
            leds[burst.right] = burst.right_color.with_val(val).to_rgb();
            leds[burst.center] = burst.center_color.with_val(val).to_rgb();
        }

        let (min, max) = self.config.step_delay;
        let mut hold = uniform_duration(ctx.rng, min, max);

        burst.step += 1;
        if burst.step >= envelope.total_steps() {
            let (min, max) = self.config.pause;
            hold += uniform_duration(ctx.rng, min, max);
        } else {
            self.burst = Some(burst);
        }

        EffectStep::hold(hold)
    }
}
