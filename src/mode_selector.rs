//! Touch driven mode selection
//!
//! The device boots without a mode, picks the first one on the first
//! frame, and then steps to the next mode on every accepted touch. Once
//! a mode has been left alone for long enough it locks and touch input is
//! handed over to the active effect.

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{MAX_MODES, effect::EffectId, error::ConfigError};

/// Timing of the mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSelectorConfig {
    /// Time after entering a mode before it locks
    pub lock_timeout: Duration,
    /// Minimum time between accepted touches
    pub touch_debounce: Duration,
}

impl Default for ModeSelectorConfig {
    fn default() -> Self {
        Self {
            lock_timeout: Duration::from_millis(2_500),
            touch_debounce: Duration::from_millis(250),
        }
    }
}

/// Mode state machine
#[derive(Debug, Clone)]
pub struct ModeSelector {
    config: ModeSelectorConfig,
    modes: Vec<EffectId, MAX_MODES>,
    /// Position in `modes`, `None` until the first frame
    active: Option<usize>,
    locked: bool,
    last_touch: Instant,
    mode_entered: Instant,
}

impl ModeSelector {
    /// Create an unselected mode selector cycling through `modes`
    pub fn new(
        config: ModeSelectorConfig,
        modes: &[EffectId],
        now: Instant,
    ) -> Result<Self, ConfigError> {
        if modes.is_empty() {
            return Err(ConfigError::NoModes);
        }
        let modes =
            Vec::from_slice(modes).map_err(|()| ConfigError::TooManyModes(modes.len()))?;

        Ok(Self {
            config,
            modes,
            active: None,
            locked: false,
            last_touch: now,
            mode_entered: now,
        })
    }

    /// Currently active mode
    pub fn active(&self) -> Option<EffectId> {
        self.active.and_then(|index| self.modes.get(index).copied())
    }

    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn modes(&self) -> &[EffectId] {
        &self.modes
    }

    /// Return to the unselected state
    pub fn reset(&mut self, now: Instant) {
        self.active = None;
        self.locked = false;
        self.last_touch = now;
        self.mode_entered = now;
    }

    /// Evaluate one frame of touch input
    ///
    /// Returns the newly selected mode if the mode changed on this frame.
    pub fn evaluate(&mut self, now: Instant, touch: bool) -> Option<EffectId> {
        if self.locked {
            return None;
        }

        let mut changed = false;
        match self.active {
            None => {
                self.active = Some(0);
                changed = true;
            }
            Some(_) if now > self.mode_entered + self.config.lock_timeout => {
                self.locked = true;
                #[cfg(feature = "esp32-log")]
                println!(
                    "[ModeSelector.evaluate] locked on {:?}",
                    self.active().map(EffectId::as_str)
                );
                return None;
            }
            Some(_) => {}
        }

        if touch {
            if now > self.last_touch + self.config.touch_debounce {
                let next = self.active.map_or(0, |index| (index + 1) % self.modes.len());
                self.active = Some(next);
                changed = true;
            }
            // Holding the pad keeps re-arming the debounce window
            self.last_touch = now;
        }

        if !changed {
            return None;
        }

        self.mode_entered = now;
        let mode = self.active();
        #[cfg(feature = "esp32-log")]
        println!(
            "[ModeSelector.evaluate] selected {:?}",
            mode.map(EffectId::as_str)
        );
        mode
    }
}
