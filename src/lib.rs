#![no_std]

pub mod brightness;
pub mod color;
pub mod config;
pub mod decay;
pub mod effect;
pub mod error;
pub mod frame_scheduler;
pub mod hardware;
pub mod latch;
pub mod mode_selector;
pub mod renderer;
pub mod ring;

pub use brightness::{BrightnessConfig, BrightnessScaler, FloorPolicy};
pub use config::EngineConfig;
pub use decay::decay;
pub use effect::{EffectId, EffectSlot, EffectsConfig};
pub use error::ConfigError;
pub use frame_scheduler::{FrameLoop, FrameResult};
pub use hardware::{
    Clock, IndicatorSink, LightSensor, NoIndicator, PixelSink, SmartLedsSink, SystemClock,
    TouchSource,
};
pub use latch::SampleLatch;
pub use mode_selector::{ModeSelector, ModeSelectorConfig};
pub use renderer::{Frame, FrameInput, Renderer};
pub use ring::{PixelIndex, RingTopology};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Capacity of the frame buffer
pub const MAX_PIXELS: usize = 64;

/// Capacity of the mode list
pub const MAX_MODES: usize = 8;
