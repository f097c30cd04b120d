use libm::powf;

use crate::brightness::BrightnessScaler;

/// Exponential decay of `value` after `step` steps
///
/// `rate` is in `(0, 1)`, bigger rates decay slower. The result goes
/// through [`BrightnessScaler::limit`], so a long decay ends at exactly zero
/// instead of lingering below the visible level.
#[allow(clippy::cast_precision_loss)]
pub fn decay(scaler: &BrightnessScaler, value: f32, step: u32, rate: f32) -> f32 {
    scaler.limit(value * powf(rate, step as f32))
}
