//! Configuration errors
//!
//! The engine has no runtime error path. Everything that can go wrong is
//! caught once, when the configuration is validated at startup.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("ring size {0} is too small, at least 3 pixels are required")]
    RingTooSmall(usize),
    #[error("ring count {0} is not supported, expected 1 or 2")]
    RingCount(usize),
    #[error("pixel count {actual} does not match {expected} pixels of the rings")]
    PixelCountMismatch { expected: usize, actual: usize },
    #[error("pixel count {0} exceeds the frame buffer capacity")]
    TooManyPixels(usize),
    #[error("mode list is empty")]
    NoModes,
    #[error("mode list holds {0} modes, more than supported")]
    TooManyModes(usize),
    #[error("sensor range is empty or inverted")]
    SensorRange,
    #[error("minimum visible brightness must be in [0, 1)")]
    MinVisible,
    #[error("decay rate must be in (0, 1)")]
    DecayRate,
    #[error("drift blend divisor must be positive")]
    BlendDivisor,
    #[error("drift dim divisor must be positive")]
    DimDivisor,
}
