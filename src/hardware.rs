//! Hardware collaborators
//!
//! Implement these traits to support different boards. The engine is
//! generic over them and treats every call as infallible: a collaborator
//! that can fail should keep returning its last good value.

use embassy_time::{Duration, Instant};
use heapless::Vec;
use smart_leds::SmartLedsWrite;

use crate::{
    MAX_PIXELS,
    color::{BLACK, Rgb},
    ring::PixelIndex,
};

/// Capacitive touch pad, polled once per frame
pub trait TouchSource {
    fn read(&mut self) -> bool;
}

/// Ambient light sensor returning a raw, device specific sample
pub trait LightSensor {
    fn read(&mut self) -> u16;
}

/// Addressable LED output
///
/// Writes are buffered; nothing is expected to be visible before
/// [`PixelSink::flush`].
pub trait PixelSink {
    fn set(&mut self, index: PixelIndex, color: Rgb);

    fn clear(&mut self, index: PixelIndex) {
        self.set(index, BLACK);
    }

    /// Push buffered writes to the LEDs
    fn flush(&mut self);

    /// Write a whole frame and flush it
    fn write(&mut self, colors: &[Rgb]) {
        for (index, color) in colors.iter().enumerate() {
            self.set(index, *color);
        }
        self.flush();
    }
}

/// Single status light next to the rings
pub trait IndicatorSink {
    fn set_color(&mut self, color: Rgb);

    /// Mirror the touch pad state on the board's touch lamp
    fn set_touch(&mut self, _active: bool) {}
}

/// Monotonic time source
pub trait Clock {
    fn now(&self) -> Instant;

    fn sleep(&mut self, duration: Duration);
}

/// Indicator for boards without a status light
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndicator;

impl IndicatorSink for NoIndicator {
    fn set_color(&mut self, _color: Rgb) {}
}

impl<I: IndicatorSink> IndicatorSink for Option<I> {
    fn set_color(&mut self, color: Rgb) {
        if let Some(indicator) = self {
            indicator.set_color(color);
        }
    }

    fn set_touch(&mut self, active: bool) {
        if let Some(indicator) = self {
            indicator.set_touch(active);
        }
    }
}

/// Clock backed by the embassy time driver linked into the firmware
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}

/// [`PixelSink`] on top of any `smart-leds` driver
///
/// Keeps a copy of the frame and hands it to the driver on flush. A failed
/// write is dropped; the LEDs keep showing the previous frame.
pub struct SmartLedsSink<W> {
    driver: W,
    buffer: Vec<Rgb, MAX_PIXELS>,
}

impl<W> SmartLedsSink<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    /// Create a sink for `pixel_count` LEDs, capped at [`MAX_PIXELS`]
    pub fn new(driver: W, pixel_count: usize) -> Self {
        let mut buffer = Vec::new();
        for _ in 0..pixel_count.min(MAX_PIXELS) {
            let _ = buffer.push(BLACK);
        }
        Self { driver, buffer }
    }

    /// Frame as it will be written on the next flush
    pub fn pixels(&self) -> &[Rgb] {
        &self.buffer
    }

    pub fn into_inner(self) -> W {
        self.driver
    }
}

impl<W> PixelSink for SmartLedsSink<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn set(&mut self, index: PixelIndex, color: Rgb) {
        if let Some(pixel) = self.buffer.get_mut(index) {
            *pixel = color;
        }
    }

    fn flush(&mut self) {
        let _ = self.driver.write(self.buffer.iter().copied());
    }
}
