use embassy_time::{Duration, Instant};
use fastrand::Rng;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::MAX_PIXELS;
use crate::brightness::BrightnessScaler;
use crate::color::{BLACK, Rgb};
use crate::config::EngineConfig;
use crate::effect::{EffectId, EffectSlot, EffectsConfig, FrameContext};
use crate::error::ConfigError;
use crate::hardware::IndicatorSink;
use crate::mode_selector::ModeSelector;
use crate::ring::RingTopology;

/// Inputs sampled for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInput {
    pub now: Instant,
    pub touch: bool,
    /// Raw ambient light sample
    pub light: u16,
}

/// One rendered frame
#[derive(Debug)]
pub struct Frame<'a> {
    pub pixels: &'a [Rgb],
    /// How long the frame should stay on the LEDs
    pub hold: Duration,
    /// Mode that rendered the frame
    pub mode: Option<EffectId>,
    /// Whether the mode changed on this frame
    pub changed: bool,
}

/// Engine state - mode selection plus the active effect
///
/// Owns everything that changes from frame to frame. The previous effect's
/// state is dropped when the mode changes.
pub struct Renderer {
    // Configuration
    topology: RingTopology,
    scaler: BrightnessScaler,
    effects: EffectsConfig,
    pixel_count: usize,

    // Internal state
    selector: ModeSelector,
    effect: Option<EffectSlot>,
    frame_buffer: [Rgb; MAX_PIXELS],
    rng: Rng,
}

impl Renderer {
    /// Create a renderer that has not selected a mode yet
    pub fn new(config: &EngineConfig, now: Instant) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            topology: config.topology,
            scaler: BrightnessScaler::new(config.brightness)?,
            effects: config.effects.clone(),
            pixel_count: config.pixel_count,
            selector: ModeSelector::new(config.selector, &config.modes, now)?,
            effect: None,
            frame_buffer: [BLACK; MAX_PIXELS],
            rng: Rng::with_seed(config.seed),
        })
    }

    pub const fn selector(&self) -> &ModeSelector {
        &self.selector
    }

    pub const fn effect(&self) -> Option<&EffectSlot> {
        self.effect.as_ref()
    }

    pub const fn topology(&self) -> RingTopology {
        self.topology
    }

    pub const fn scaler(&self) -> &BrightnessScaler {
        &self.scaler
    }

    /// Current contents of the frame buffer
    pub fn pixels(&self) -> &[Rgb] {
        &self.frame_buffer[..self.pixel_count]
    }

    /// Drop the active mode and return to the unselected state
    pub fn reset(&mut self, now: Instant) {
        self.selector.reset(now);
        self.effect = None;
        self.frame_buffer.fill(BLACK);
    }

    /// Process one frame
    ///
    /// Evaluates touch input, switches effects when needed and renders
    /// the active effect into the frame buffer.
    pub fn render<I: IndicatorSink>(&mut self, input: FrameInput, indicator: &mut I) -> Frame<'_> {
        indicator.set_touch(input.touch);

        let changed = if let Some(mode) = self.selector.evaluate(input.now, input.touch) {
            self.switch_effect(mode, indicator);
            true
        } else {
            false
        };

        let frame = &mut self.frame_buffer[..self.pixel_count];
        let effect = match self.effect.as_mut() {
            Some(effect) => effect,
            // The selector picks a mode on its first frame
            None => {
                return Frame {
                    pixels: frame,
                    hold: Duration::from_millis(0),
                    mode: None,
                    changed,
                };
            }
        };

        let mut ctx = FrameContext {
            now: input.now,
            touch: input.touch,
            locked: self.selector.is_locked(),
            brightness: self.scaler.scale(input.light, input.touch),
            scaler: &self.scaler,
            topology: self.topology,
            rng: &mut self.rng,
        };
        let step = effect.render(&mut ctx, frame);
        if let Some(color) = step.indicator {
            indicator.set_color(color);
        }

        Frame {
            pixels: frame,
            hold: step.hold,
            mode: Some(effect.id()),
            changed,
        }
    }

    fn switch_effect<I: IndicatorSink>(&mut self, mode: EffectId, indicator: &mut I) {
        #[cfg(feature = "esp32-log")]
        println!("[Renderer.switch_effect] switching to {}", mode.as_str());

        self.frame_buffer.fill(BLACK);
        let mut effect = mode.to_slot(&self.effects);
        if let Some(color) = effect.init(&mut self.frame_buffer[..self.pixel_count]) {
            indicator.set_color(color);
        }
        self.effect = Some(effect);
    }
}
