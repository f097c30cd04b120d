//! Frame scheduling
//!
//! Polls the inputs, renders one frame and writes it out. The active effect
//! decides how long each frame is held; [`FrameLoop::tick`] only reports
//! that duration so the caller (or [`FrameLoop::run`]) does the waiting.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    config::EngineConfig,
    effect::EffectId,
    error::ConfigError,
    hardware::{Clock, IndicatorSink, LightSensor, PixelSink, TouchSource},
    renderer::{FrameInput, Renderer},
};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame.
    pub sleep_duration: Duration,
    /// Mode that rendered the frame.
    pub mode: Option<EffectId>,
    /// Whether the mode changed on this frame.
    pub changed: bool,
}

/// Single threaded control loop of the device
///
/// # Usage
///
/// ```ignore
/// let mut frames = FrameLoop::new(&EngineConfig::nova_blue(), leds, touch, light, dotstar, clock.now())?;
///
/// loop {
///     let result = frames.tick(clock.now());
///     clock.sleep(result.sleep_duration);
/// }
/// ```
pub struct FrameLoop<P, T, L, I> {
    pixels: P,
    touch: T,
    light: L,
    indicator: I,
    renderer: Renderer,
}

impl<P, T, L, I> FrameLoop<P, T, L, I>
where
    P: PixelSink,
    T: TouchSource,
    L: LightSensor,
    I: IndicatorSink,
{
    /// Create a new frame loop.
    ///
    /// Fails if the configuration is inconsistent; nothing is written to
    /// the hardware in that case.
    pub fn new(
        config: &EngineConfig,
        pixels: P,
        touch: T,
        light: L,
        indicator: I,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        let renderer = Renderer::new(config, now)?;
        Ok(Self {
            pixels,
            touch,
            light,
            indicator,
            renderer,
        })
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Samples touch and ambient light
    /// 2. Lets the mode selector react to touch
    /// 3. Renders the active effect
    /// 4. Writes the frame to the pixel sink
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let input = FrameInput {
            now,
            touch: self.touch.read(),
            light: self.light.read(),
        };

        let frame = self.renderer.render(input, &mut self.indicator);
        self.pixels.write(frame.pixels);

        FrameResult {
            next_deadline: now + frame.hold,
            sleep_duration: frame.hold,
            mode: frame.mode,
            changed: frame.changed,
        }
    }

    /// Run forever, sleeping on `clock` between frames
    pub fn run<C: Clock>(&mut self, clock: &mut C) -> ! {
        #[cfg(feature = "esp32-log")]
        println!("[FrameLoop.run] starting");

        loop {
            let result = self.tick(clock.now());
            clock.sleep(result.sleep_duration);
        }
    }

    /// Get a reference to the renderer.
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub const fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    pub const fn pixels(&self) -> &P {
        &self.pixels
    }

    pub const fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Release the hardware
    pub fn into_parts(self) -> (P, T, L, I) {
        (self.pixels, self.touch, self.light, self.indicator)
    }
}
