//! Engine configuration and device presets

use embassy_time::Duration;
use heapless::Vec;

use crate::{
    MAX_MODES, MAX_PIXELS,
    brightness::{BrightnessConfig, BrightnessScaler, FloorPolicy},
    effect::{EffectId, EffectsConfig, StarburstConfig},
    error::ConfigError,
    mode_selector::ModeSelectorConfig,
    ring::RingTopology,
};

const DEFAULT_SEED: u64 = 0x5eed_cafe_f00d_d00d;

const TWIN_RINGS: RingTopology = rings(7, 2);
const CHAIN: RingTopology = rings(22, 1);

/// Configuration for the light engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub topology: RingTopology,
    /// Number of LEDs wired to the data line
    pub pixel_count: usize,
    pub brightness: BrightnessConfig,
    pub selector: ModeSelectorConfig,
    /// Modes in touch cycling order
    pub modes: Vec<EffectId, MAX_MODES>,
    pub effects: EffectsConfig,
    /// Seed for the effects' random numbers
    pub seed: u64,
}

impl EngineConfig {
    /// Two rings of seven: drift, starburst, sparks and solid white
    ///
    /// Touch boosts brightness to full.
    pub fn nova_blue() -> Self {
        Self {
            topology: TWIN_RINGS,
            pixel_count: 14,
            brightness: BrightnessConfig::default(),
            selector: ModeSelectorConfig::default(),
            modes: modes(&[
                EffectId::Drift,
                EffectId::Starburst,
                EffectId::Sparks,
                EffectId::Solid,
            ]),
            effects: EffectsConfig::default(),
            seed: DEFAULT_SEED,
        }
    }

    /// Two rings of seven running bursts only, at a steady pace
    pub fn nova() -> Self {
        let mut effects = EffectsConfig::default();
        let step = Duration::from_millis(15);
        let pause = Duration::from_millis(1_500);
        effects.starburst = StarburstConfig {
            step_delay: (step, step),
            pause: (pause, pause),
            ..StarburstConfig::default()
        };
        effects.starburst.envelope.fade_steps = 80;
        effects.starburst.envelope.side_delay = 5;

        Self {
            brightness: BrightnessConfig {
                touch_override: false,
                ..BrightnessConfig::default()
            },
            modes: modes(&[EffectId::Starburst]),
            effects,
            ..Self::nova_blue()
        }
    }

    /// 22 LEDs driven as one chain running the chase
    ///
    /// Ambient dimming never turns the chase fully off.
    pub fn chase() -> Self {
        Self {
            topology: CHAIN,
            pixel_count: 22,
            brightness: BrightnessConfig {
                min_visible: 0.004,
                floor: FloorPolicy::KeepVisible,
                touch_override: false,
                ..BrightnessConfig::default()
            },
            modes: modes(&[EffectId::Chase]),
            ..Self::nova_blue()
        }
    }

    /// Check the configuration before the engine starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        let topology = RingTopology::new(self.topology.ring_size(), self.topology.ring_count())?;
        if self.pixel_count > MAX_PIXELS {
            return Err(ConfigError::TooManyPixels(self.pixel_count));
        }
        if self.pixel_count != topology.pixel_count() {
            return Err(ConfigError::PixelCountMismatch {
                expected: topology.pixel_count(),
                actual: self.pixel_count,
            });
        }
        BrightnessScaler::new(self.brightness)?;
        if self.modes.is_empty() {
            return Err(ConfigError::NoModes);
        }

        let envelope = &self.effects.starburst.envelope;
        let rates = [
            envelope.ramp_rate,
            envelope.fade_rate,
            envelope.ramp_rate * envelope.side_rate_scale,
            envelope.fade_rate * envelope.side_rate_scale,
        ];
        if rates.iter().any(|rate| !(*rate > 0.0 && *rate < 1.0)) {
            return Err(ConfigError::DecayRate);
        }
        if self.effects.drift.blend_divisor <= 0.0 {
            return Err(ConfigError::BlendDivisor);
        }
        if self.effects.drift.dim_divisor <= 0.0 {
            return Err(ConfigError::DimDivisor);
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::nova_blue()
    }
}

const fn rings(ring_size: usize, ring_count: usize) -> RingTopology {
    match RingTopology::new(ring_size, ring_count) {
        Ok(topology) => topology,
        Err(_) => panic!("invalid preset topology"),
    }
}

fn modes(ids: &[EffectId]) -> Vec<EffectId, MAX_MODES> {
    let mut modes = Vec::new();
    for id in ids.iter().take(MAX_MODES) {
        let _ = modes.push(*id);
    }
    modes
}
