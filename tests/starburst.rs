mod tests {
    use embassy_time::{Duration, Instant};
    use fastrand::Rng;
    use pendant_light_composer::{
        BrightnessScaler, RingTopology, decay,
        color::{BLACK, Rgb},
        effect::{BurstEnvelope, Effect, FrameContext, StarburstConfig, StarburstEffect},
    };

    fn render(
        effect: &mut StarburstEffect,
        rng: &mut Rng,
        leds: &mut [Rgb],
        touch: bool,
        locked: bool,
    ) -> Duration {
        let scaler = BrightnessScaler::default();
        let mut ctx = FrameContext {
            now: Instant::from_millis(0),
            touch,
            locked,
            brightness: 1.0,
            scaler: &scaler,
            topology: RingTopology::new(7, 2).unwrap(),
            rng,
        };
        effect.render(&mut ctx, leds).hold
    }

    fn lit(leds: &[Rgb]) -> usize {
        leds.iter().filter(|led| **led != BLACK).count()
    }

    #[test]
    fn test_envelope_primary() {
        let scaler = BrightnessScaler::default();
        let envelope = BurstEnvelope::default();
        assert_eq!(envelope.total_steps(), 100);
        assert_eq!(envelope.primary(&scaler, 1.0, 0), decay(&scaler, 1.0, 10, 0.80));
        assert_eq!(envelope.primary(&scaler, 1.0, 10), 1.0);
        assert_eq!(envelope.primary(&scaler, 1.0, 11), decay(&scaler, 1.0, 1, 0.96));
        assert_eq!(envelope.primary(&scaler, 1.0, 98), decay(&scaler, 1.0, 88, 0.96));
        assert_eq!(envelope.primary(&scaler, 1.0, 99), 0.0);
    }

    #[test]
    fn test_envelope_ramps_then_fades() {
        let scaler = BrightnessScaler::default();
        let envelope = BurstEnvelope::default();
        for step in 0..10 {
            assert!(envelope.primary(&scaler, 1.0, step) < envelope.primary(&scaler, 1.0, step + 1));
        }
        for step in 10..99 {
            assert!(envelope.primary(&scaler, 1.0, step) >= envelope.primary(&scaler, 1.0, step + 1));
        }
    }

    #[test]
    fn test_burst_lights_neighbors_and_center() {
        let mut effect = StarburstEffect::new(StarburstConfig::default());
        let mut rng = Rng::with_seed(7);
        let mut leds = [BLACK; 14];
        let topology = RingTopology::new(7, 2).unwrap();

        render(&mut effect, &mut rng, &mut leds, false, false);
        let burst = *effect.burst().unwrap();
        assert!(!topology.is_center(burst.pixel));
        assert_eq!(burst.left, topology.move_by(burst.pixel, -1));
        assert_eq!(burst.right, topology.move_by(burst.pixel, 1));
        assert_eq!(burst.center, topology.center(burst.pixel));
        assert_eq!(lit(&leds), 1);

        for _ in 1..=12 {
            render(&mut effect, &mut rng, &mut leds, false, false);
        }
        for pixel in [burst.pixel, burst.left, burst.right, burst.center] {
            assert_ne!(leds[pixel], BLACK);
        }
        assert_eq!(lit(&leds), 4);
    }

    #[test]
    fn test_burst_ends_dark_and_pauses() {
        let mut effect = StarburstEffect::new(StarburstConfig::default());
        let mut rng = Rng::with_seed(11);
        let mut leds = [BLACK; 14];

        for _ in 0..99 {
            let hold = render(&mut effect, &mut rng, &mut leds, false, false);
            assert!(hold >= Duration::from_micros(11_250));
            assert!(hold <= Duration::from_micros(22_500));
        }
        let hold = render(&mut effect, &mut rng, &mut leds, false, false);
        assert!(hold >= Duration::from_micros(511_250));
        assert!(hold <= Duration::from_micros(1_022_500));
        assert_eq!(lit(&leds), 0);
        assert!(effect.burst().is_none());

        // The next frame starts a fresh burst
        render(&mut effect, &mut rng, &mut leds, false, false);
        assert_eq!(effect.burst().unwrap().step, 1);
    }

    #[test]
    fn test_touch_floods_when_locked() {
        let mut effect = StarburstEffect::new(StarburstConfig::default());
        let mut rng = Rng::with_seed(3);
        let mut leds = [BLACK; 14];

        for _ in 0..10 {
            render(&mut effect, &mut rng, &mut leds, false, true);
        }
        render(&mut effect, &mut rng, &mut leds, true, true);
        let pixel = effect.burst().unwrap().pixel;
        assert_ne!(leds[pixel], BLACK);
        assert!(leds.iter().all(|led| *led == leds[pixel]));

        // Releasing the pad clears the flood
        render(&mut effect, &mut rng, &mut leds, false, true);
        assert_eq!(lit(&leds), 0);
    }

    #[test]
    fn test_touch_ignored_while_unlocked() {
        let mut effect = StarburstEffect::new(StarburstConfig::default());
        let mut rng = Rng::with_seed(5);
        let mut leds = [BLACK; 14];

        for _ in 0..12 {
            render(&mut effect, &mut rng, &mut leds, true, false);
        }
        assert!(lit(&leds) <= 4);
    }
}
