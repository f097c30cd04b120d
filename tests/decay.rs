mod tests {
    use pendant_light_composer::{BrightnessScaler, decay};

    #[test]
    fn test_zero_steps_only_limits() {
        let scaler = BrightnessScaler::default();
        for rate in [0.5, 0.8, 0.96, 0.99] {
            assert_eq!(decay(&scaler, 1.0, 0, rate), 1.0);
            assert_eq!(decay(&scaler, 0.3, 0, rate), 0.3);
            assert_eq!(decay(&scaler, 0.001, 0, rate), scaler.limit(0.001));
            assert_eq!(decay(&scaler, 2.0, 0, rate), 1.0);
        }
    }

    #[test]
    fn test_single_step() {
        let scaler = BrightnessScaler::default();
        assert_eq!(decay(&scaler, 1.0, 1, 0.8), 0.8);
    }

    #[test]
    fn test_monotonic_in_steps() {
        let scaler = BrightnessScaler::default();
        for rate in [0.78, 0.8, 0.936, 0.96] {
            let mut previous = decay(&scaler, 1.0, 0, rate);
            for step in 1..300 {
                let value = decay(&scaler, 1.0, step, rate);
                assert!(value <= previous, "rate {rate} step {step}");
                previous = value;
            }
        }
    }

    #[test]
    fn test_long_decay_ends_dark() {
        let scaler = BrightnessScaler::default();
        assert_eq!(decay(&scaler, 1.0, 200, 0.96), 0.0);
        assert!(decay(&scaler, 1.0, 100, 0.96) > 0.0);
    }
}
