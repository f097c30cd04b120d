//! Latched input samples
//!
//! Touch and light readings often arrive from an interrupt handler or a
//! separate task. A [`SampleLatch`] holds the latest one behind a critical
//! section so the frame loop can poll it like a regular input. Until the
//! first store it returns the initial value.

use core::cell::Cell;

use critical_section::Mutex;

use crate::hardware::{LightSensor, TouchSource};

/// Last stored sample, safe to share with interrupt handlers
pub struct SampleLatch<T: Copy> {
    inner: Mutex<Cell<T>>,
}

impl<T: Copy> SampleLatch<T> {
    /// Create a latch holding `initial`
    pub const fn new(initial: T) -> Self {
        Self {
            inner: Mutex::new(Cell::new(initial)),
        }
    }

    /// Replace the stored sample
    pub fn store(&self, value: T) {
        critical_section::with(|cs| self.inner.borrow(cs).set(value));
    }

    /// Read the last stored sample
    pub fn load(&self) -> T {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }
}

impl TouchSource for &SampleLatch<bool> {
    fn read(&mut self) -> bool {
        self.load()
    }
}

impl LightSensor for &SampleLatch<u16> {
    fn read(&mut self) -> u16 {
        self.load()
    }
}
