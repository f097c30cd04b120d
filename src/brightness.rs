//! Ambient brightness scaling
//!
//! Maps raw light sensor samples to an output scale in `[0, 1]`.
//! Used for:
//! - Dimming the rings in dark rooms
//! - Full brightness while the touch pad is held (on devices that want it)
//! - Keeping faded pixels out of the range where LEDs flicker

use crate::error::ConfigError;

/// What happens to values at or below the minimum visible level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloorPolicy {
    /// Snap to zero so the pixel is cleanly off
    #[default]
    Blackout,
    /// Hold at the minimum visible level so the pixel never goes dark
    KeepVisible,
}

/// Configuration for the brightness scaler
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessConfig {
    /// Raw sample at (and below) which the scale is zero
    pub sensor_min: u16,
    /// Raw sample at (and above) which the scale is one
    pub sensor_max: u16,
    /// Lowest value a pixel still lights up at
    pub min_visible: f32,
    /// Ambient floor handling
    pub floor: FloorPolicy,
    /// Full brightness while touch is active
    pub touch_override: bool,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            sensor_min: 2_000,
            sensor_max: 60_000,
            min_visible: 0.0045,
            floor: FloorPolicy::Blackout,
            touch_override: true,
        }
    }
}

/// Brightness scaling and floor clamping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessScaler {
    config: BrightnessConfig,
}

impl BrightnessScaler {
    /// Create a new scaler
    pub fn new(config: BrightnessConfig) -> Result<Self, ConfigError> {
        if config.sensor_max <= config.sensor_min {
            return Err(ConfigError::SensorRange);
        }
        if !(0.0..1.0).contains(&config.min_visible) {
            return Err(ConfigError::MinVisible);
        }
        Ok(Self { config })
    }

    /// Clamp a value to what the LEDs can show
    ///
    /// Values above one are capped, values at or below the minimum visible
    /// level are switched off.
    pub fn limit(&self, value: f32) -> f32 {
        let value = value.min(1.0);
        if value > self.config.min_visible {
            value
        } else {
            0.0
        }
    }

    /// Output scale for a raw ambient sample
    pub fn scale(&self, raw: u16, touch: bool) -> f32 {
        if touch && self.config.touch_override {
            return 1.0;
        }

        let min = f32::from(self.config.sensor_min);
        let range = f32::from(self.config.sensor_max) - min;
        let normalized = ((f32::from(raw) - min) / range).clamp(0.0, 1.0);
        // Squaring a fraction shrinks it, small readings the most
        let curved = normalized * normalized;

        match self.config.floor {
            FloorPolicy::Blackout => self.limit(curved),
            FloorPolicy::KeepVisible => curved.clamp(self.config.min_visible, 1.0),
        }
    }
}

impl Default for BrightnessScaler {
    fn default() -> Self {
        Self {
            config: BrightnessConfig::default(),
        }
    }
}
