//! Chase effect
//!
//! A lit head runs along the whole strip, ignoring the ring layout, with a
//! short trail fading behind it. Every full sweep switches to the next
//! palette color.

use embassy_time::Duration;

use super::{Effect, EffectStep, FrameContext};
use crate::color::{BLACK, Hsv, Rgb};

const DEFAULT_TRAIL: usize = 8;
const DEFAULT_DELAY_MS: u64 = 20;

/// One sweep of the chase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseStop {
    /// Head color at full ambient brightness
    pub color: Hsv,
    /// Status light while this sweep runs
    pub indicator: Hsv,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseConfig {
    /// Lit pixels including the head
    pub trail: usize,
    /// Time between head moves
    pub delay: Duration,
    pub palette: [ChaseStop; 4],
}

impl Default for ChaseConfig {
    fn default() -> Self {
        let purple = Hsv::new(0.75, 1.0, 0.01);
        let orange = Hsv::new(0.08, 1.0, 0.01);
        Self {
            trail: DEFAULT_TRAIL,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            palette: [
                ChaseStop {
                    color: Hsv::new(0.0, 1.0, 1.0),
                    indicator: purple,
                },
                ChaseStop {
                    color: Hsv::new(1.0 / 3.0, 1.0, 1.0),
                    indicator: purple,
                },
                ChaseStop {
                    color: Hsv::new(2.0 / 3.0, 1.0, 1.0),
                    indicator: orange,
                },
                ChaseStop {
                    color: Hsv::new(0.0, 0.0, 1.0),
                    indicator: Hsv::OFF,
                },
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChaseEffect {
    config: ChaseConfig,
    head: usize,
    stop: usize,
    /// Head color scaled at the start of the sweep
    color: Hsv,
}

impl ChaseEffect {
    pub fn new(config: ChaseConfig) -> Self {
        Self {
            color: config.palette[0].color,
            config,
            head: 0,
            stop: 0,
        }
    }

    /// Position of the head
    pub const fn head(&self) -> usize {
        self.head
    }

    /// Index of the active palette stop
    pub const fn stop(&self) -> usize {
        self.stop
    }
}

impl Effect for ChaseEffect {
    fn render(&mut self, ctx: &mut FrameContext<'_>, leds: &mut [Rgb]) -> EffectStep {
        let len = leds.len();
        if len == 0 {
            return EffectStep::hold(self.config.delay);
        }

        let mut step = EffectStep::hold(self.config.delay);
        if self.head == 0 {
            let stop = self.config.palette[self.stop];
            self.color = stop.color.with_val(stop.color.val * ctx.brightness);
            step.indicator = Some(stop.indicator.to_rgb());
        }

        // The trail wraps behind the start of the strip
        for distance in 0..self.config.trail {
            #[allow(clippy::cast_precision_loss)]
            let val = self.color.val / (distance + 1) as f32;
            let index = (self.head + len - distance % len) % len;
            leds[index] = self.color.with_val(val).to_rgb();
        }
        leds[(self.head + len - self.config.trail % len) % len] = BLACK;

        self.head += 1;
        if self.head == len {
            self.head = 0;
            self.stop = (self.stop + 1) % self.config.palette.len();
        }

        step
    }
}
