mod tests {
    use embassy_time::{Duration, Instant};
    use pendant_light_composer::{
        ConfigError, EffectId, EngineConfig, FrameLoop, IndicatorSink, NoIndicator, PixelSink,
        SampleLatch, SmartLedsSink,
        color::{BLACK, Rgb},
    };
    use smart_leds::SmartLedsWrite;

    const FULL_LIGHT: u16 = 60_000;

    #[derive(Default)]
    struct RecordingPixels {
        pending: Vec<Rgb>,
        frames: Vec<Vec<Rgb>>,
    }

    impl RecordingPixels {
        fn last(&self) -> &[Rgb] {
            self.frames.last().map(Vec::as_slice).unwrap_or_default()
        }
    }

    impl PixelSink for RecordingPixels {
        fn set(&mut self, index: usize, color: Rgb) {
            if self.pending.len() <= index {
                self.pending.resize(index + 1, BLACK);
            }
            self.pending[index] = color;
        }

        fn flush(&mut self) {
            self.frames.push(self.pending.clone());
        }
    }

    #[derive(Default)]
    struct RecordingIndicator {
        colors: Vec<Rgb>,
        touch: bool,
    }

    impl IndicatorSink for RecordingIndicator {
        fn set_color(&mut self, color: Rgb) {
            self.colors.push(color);
        }

        fn set_touch(&mut self, active: bool) {
            self.touch = active;
        }
    }

    #[derive(Default)]
    struct MockDriver {
        writes: Vec<Vec<Rgb>>,
    }

    impl SmartLedsWrite for MockDriver {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.writes
                .push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn lit(pixels: &[Rgb]) -> usize {
        pixels.iter().filter(|pixel| **pixel != BLACK).count()
    }

    #[test]
    fn test_first_tick_selects_first_mode() {
        let touch = SampleLatch::new(false);
        let light = SampleLatch::new(FULL_LIGHT);
        let mut frames = FrameLoop::new(
            &EngineConfig::nova_blue(),
            RecordingPixels::default(),
            &touch,
            &light,
            RecordingIndicator::default(),
            at(0),
        )
        .unwrap();

        let result = frames.tick(at(0));
        assert_eq!(result.mode, Some(EffectId::Drift));
        assert!(result.changed);
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
        assert_eq!(result.next_deadline, at(20));

        assert_eq!(frames.indicator().colors, [Rgb { r: 0, g: 0, b: 1 }]);
        assert_eq!(frames.pixels().frames.len(), 1);
        assert_eq!(frames.pixels().last().len(), 14);

        let result = frames.tick(at(20));
        assert!(!result.changed);
        assert_eq!(frames.pixels().frames.len(), 2);
    }

    #[test]
    fn test_rejects_inconsistent_config() {
        let touch = SampleLatch::new(false);
        let light = SampleLatch::new(FULL_LIGHT);
        let config = EngineConfig {
            pixel_count: 15,
            ..EngineConfig::nova_blue()
        };

        let result = FrameLoop::new(
            &config,
            RecordingPixels::default(),
            &touch,
            &light,
            NoIndicator,
            at(0),
        );
        assert!(matches!(
            result,
            Err(ConfigError::PixelCountMismatch {
                expected: 14,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_touch_cycles_modes() {
        let touch = SampleLatch::new(false);
        let light = SampleLatch::new(FULL_LIGHT);
        let mut frames = FrameLoop::new(
            &EngineConfig::nova_blue(),
            RecordingPixels::default(),
            &touch,
            &light,
            RecordingIndicator::default(),
            at(0),
        )
        .unwrap();

        frames.tick(at(0));

        touch.store(true);
        let result = frames.tick(at(300));
        assert_eq!(result.mode, Some(EffectId::Starburst));
        assert!(result.changed);
        assert!(frames.indicator().touch);
        assert_eq!(
            frames.indicator().colors.last(),
            Some(&Rgb { r: 0, g: 1, b: 1 })
        );

        touch.store(false);
        let mut now = 300;
        for _ in 0..20 {
            now += 20;
            let result = frames.tick(at(now));
            assert_eq!(result.mode, Some(EffectId::Starburst));
        }
        assert!(!frames.indicator().touch);
        assert!(lit(frames.pixels().last()) >= 1);

        touch.store(true);
        let result = frames.tick(at(now + 20));
        assert_eq!(result.mode, Some(EffectId::Sparks));
        // The burst is cleared, only the new flash remains
        assert_eq!(lit(frames.pixels().last()), 1);
        assert_eq!(frames.renderer().selector().active(), Some(EffectId::Sparks));
    }

    #[test]
    fn test_mode_locks_after_timeout() {
        let touch = SampleLatch::new(false);
        let light = SampleLatch::new(FULL_LIGHT);
        let mut frames = FrameLoop::new(
            &EngineConfig::nova_blue(),
            RecordingPixels::default(),
            &touch,
            &light,
            NoIndicator,
            at(0),
        )
        .unwrap();

        frames.tick(at(0));
        frames.tick(at(2_600));
        assert!(frames.renderer().selector().is_locked());

        touch.store(true);
        let result = frames.tick(at(3_000));
        assert_eq!(result.mode, Some(EffectId::Drift));
        assert!(!result.changed);
    }

    #[test]
    fn test_reset_returns_to_first_mode() {
        let touch = SampleLatch::new(false);
        let light = SampleLatch::new(FULL_LIGHT);
        let mut frames = FrameLoop::new(
            &EngineConfig::nova_blue(),
            RecordingPixels::default(),
            &touch,
            &light,
            NoIndicator,
            at(0),
        )
        .unwrap();

        frames.tick(at(0));
        touch.store(true);
        frames.tick(at(300));
        touch.store(false);

        frames.renderer_mut().reset(at(400));
        assert_eq!(frames.renderer().selector().active(), None);
        assert_eq!(lit(frames.renderer().pixels()), 0);

        let result = frames.tick(at(400));
        assert_eq!(result.mode, Some(EffectId::Drift));
        assert!(result.changed);
    }

    #[test]
    fn test_chase_preset_without_indicator() {
        let touch = SampleLatch::new(false);
        let light = SampleLatch::new(FULL_LIGHT);
        let mut frames = FrameLoop::new(
            &EngineConfig::chase(),
            RecordingPixels::default(),
            &touch,
            &light,
            NoIndicator,
            at(0),
        )
        .unwrap();

        let result = frames.tick(at(0));
        assert_eq!(result.mode, Some(EffectId::Chase));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
        assert_eq!(frames.pixels().last().len(), 22);
        assert_eq!(frames.pixels().last()[0], Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(lit(frames.pixels().last()), 8);
    }

    #[test]
    fn test_chase_stays_visible_in_the_dark() {
        let touch = SampleLatch::new(false);
        let light = SampleLatch::new(0);
        let mut frames = FrameLoop::new(
            &EngineConfig::chase(),
            RecordingPixels::default(),
            &touch,
            &light,
            NoIndicator,
            at(0),
        )
        .unwrap();

        frames.tick(at(0));
        assert_ne!(frames.pixels().last()[0], BLACK);
    }

    #[test]
    fn test_smart_leds_sink() {
        let touch = SampleLatch::new(false);
        let light = SampleLatch::new(FULL_LIGHT);
        let mut frames = FrameLoop::new(
            &EngineConfig::chase(),
            SmartLedsSink::new(MockDriver::default(), 22),
            &touch,
            &light,
            None::<NoIndicator>,
            at(0),
        )
        .unwrap();

        frames.tick(at(0));
        frames.tick(at(20));
        assert_eq!(frames.pixels().pixels()[1], Rgb { r: 255, g: 0, b: 0 });

        let (sink, _, _, _) = frames.into_parts();
        let driver = sink.into_inner();
        assert_eq!(driver.writes.len(), 2);
        assert!(driver.writes.iter().all(|frame| frame.len() == 22));
        assert_eq!(driver.writes[0][0], Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_sample_latch() {
        let latch = SampleLatch::new(7u16);
        assert_eq!(latch.load(), 7);
        latch.store(1_234);
        assert_eq!(latch.load(), 1_234);
    }
}
