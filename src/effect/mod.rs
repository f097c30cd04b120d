//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod chase;
mod drift;
mod solid;
mod sparks;
mod starburst;

pub use chase::{ChaseConfig, ChaseEffect, ChaseStop};
pub use drift::{DriftConfig, DriftEffect};
pub use solid::{SolidConfig, SolidEffect};
pub use sparks::{SparksConfig, SparksEffect};
pub use starburst::{BurstEnvelope, StarburstConfig, StarburstEffect};

use embassy_time::{Duration, Instant};
use fastrand::Rng;

use crate::{brightness::BrightnessScaler, color::Rgb, ring::RingTopology};

const EFFECT_NAME_CHASE: &str = "chase";
const EFFECT_NAME_SPARKS: &str = "sparks";
const EFFECT_NAME_STARBURST: &str = "starburst";
const EFFECT_NAME_DRIFT: &str = "drift";
const EFFECT_NAME_SOLID: &str = "solid";

/// Everything an effect may read while rendering a frame
pub struct FrameContext<'a> {
    /// Time of the frame
    pub now: Instant,
    /// Touch pad state
    pub touch: bool,
    /// Whether the mode selector has locked the mode
    pub locked: bool,
    /// Ambient output scale for this frame
    pub brightness: f32,
    pub scaler: &'a BrightnessScaler,
    pub topology: RingTopology,
    pub rng: &'a mut Rng,
}

/// Result of rendering one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectStep {
    /// How long the frame stays on the LEDs
    pub hold: Duration,
    /// New status light color, if the effect wants to change it
    pub indicator: Option<Rgb>,
}

impl EffectStep {
    pub const fn hold(hold: Duration) -> Self {
        Self {
            hold,
            indicator: None,
        }
    }
}

pub trait Effect {
    /// Prepare the effect after the pixels have been cleared
    ///
    /// Returns the status light color for the mode.
    fn init(&mut self, _leds: &mut [Rgb]) -> Option<Rgb> {
        None
    }

    /// Render a single frame
    fn render(&mut self, ctx: &mut FrameContext<'_>, leds: &mut [Rgb]) -> EffectStep;
}

/// Per-effect configuration
#[derive(Debug, Clone, Default)]
pub struct EffectsConfig {
    pub chase: ChaseConfig,
    pub sparks: SparksConfig,
    pub starburst: StarburstConfig,
    pub drift: DriftConfig,
    pub solid: SolidConfig,
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Fading comet running along the whole strip
    Chase(ChaseEffect),
    /// Single pixel flashes
    Sparks(SparksEffect),
    /// Ring-aware bursts around a random pixel
    Starburst(StarburstEffect),
    /// Slow per-pixel color drift
    Drift(DriftEffect),
    /// Static fill
    Solid(SolidEffect),
}

/// Known effect ids that can be placed in the mode list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectId {
    Chase,
    Sparks,
    Starburst,
    Drift,
    Solid,
}

impl EffectId {
    /// Fresh state for this effect
    pub fn to_slot(self, config: &EffectsConfig) -> EffectSlot {
        match self {
            Self::Chase => EffectSlot::Chase(ChaseEffect::new(config.chase)),
            Self::Sparks => EffectSlot::Sparks(SparksEffect::new(config.sparks)),
            Self::Starburst => {
                EffectSlot::Starburst(StarburstEffect::new(config.starburst))
            }
            Self::Drift => EffectSlot::Drift(DriftEffect::new(config.drift)),
            Self::Solid => EffectSlot::Solid(SolidEffect::new(config.solid)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chase => EFFECT_NAME_CHASE,
            Self::Sparks => EFFECT_NAME_SPARKS,
            Self::Starburst => EFFECT_NAME_STARBURST,
            Self::Drift => EFFECT_NAME_DRIFT,
            Self::Solid => EFFECT_NAME_SOLID,
        }
    }
}

impl EffectSlot {
    /// Initialize the effect
    pub fn init(&mut self, leds: &mut [Rgb]) -> Option<Rgb> {
        match self {
            Self::Chase(effect) => effect.init(leds),
            Self::Sparks(effect) => effect.init(leds),
            Self::Starburst(effect) => effect.init(leds),
            Self::Drift(effect) => effect.init(leds),
            Self::Solid(effect) => effect.init(leds),
        }
    }

    /// Render the current effect
    pub fn render(&mut self, ctx: &mut FrameContext<'_>, leds: &mut [Rgb]) -> EffectStep {
        match self {
            Self::Chase(effect) => effect.render(ctx, leds),
            Self::Sparks(effect) => effect.render(ctx, leds),
            Self::Starburst(effect) => effect.render(ctx, leds),
            Self::Drift(effect) => effect.render(ctx, leds),
            Self::Solid(effect) => effect.render(ctx, leds),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Chase(_) => EffectId::Chase,
            Self::Sparks(_) => EffectId::Sparks,
            Self::Starburst(_) => EffectId::Starburst,
            Self::Drift(_) => EffectId::Drift,
            Self::Solid(_) => EffectId::Solid,
        }
    }
}

/// Uniformly distributed value in `[min, max]`
pub(crate) fn uniform(rng: &mut Rng, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.f32()
}

/// Uniformly distributed duration in `[min, max]`
pub(crate) fn uniform_duration(rng: &mut Rng, min: Duration, max: Duration) -> Duration {
    if max <= min {
        return min;
    }
    Duration::from_micros(rng.u64(min.as_micros()..=max.as_micros()))
}
