mod tests {
    use pendant_light_composer::{ConfigError, RingTopology};

    fn pendant() -> RingTopology {
        RingTopology::new(7, 2).unwrap()
    }

    #[test]
    fn test_move_neighbors() {
        let ring = pendant();
        assert_eq!(ring.move_by(3, 1), 4);
        assert_eq!(ring.move_by(3, -1), 2);
        assert_eq!(ring.move_by(6, 1), 1);
        assert_eq!(ring.move_by(1, -1), 6);
        assert_eq!(ring.move_by(13, 1), 8);
        assert_eq!(ring.move_by(8, -1), 13);
        assert_eq!(ring.move_by(10, 0), 10);
    }

    #[test]
    fn test_move_full_lap() {
        let ring = pendant();
        assert_eq!(ring.move_by(2, 6), 2);
        assert_eq!(ring.move_by(9, -12), 9);
    }

    #[test]
    fn test_move_stays_on_perimeter() {
        let ring = pendant();
        for start in 0..ring.pixel_count() {
            if ring.is_center(start) {
                continue;
            }
            for delta in -20..=20 {
                let target = ring.move_by(start, delta);
                assert!(!ring.is_center(target), "{start} {delta:+} -> {target}");
                assert_eq!(target / 7, start / 7, "{start} {delta:+} -> {target}");
                assert_eq!(ring.center(target), ring.center(start));
            }
        }
    }

    #[test]
    fn test_center() {
        let ring = pendant();
        assert_eq!(ring.center(0), 0);
        assert_eq!(ring.center(6), 0);
        assert_eq!(ring.center(7), 7);
        assert_eq!(ring.center(12), 7);
        assert_eq!(ring.ring_of(12), 1);
    }

    #[test]
    fn test_invalid_topology() {
        assert_eq!(RingTopology::new(2, 1), Err(ConfigError::RingTooSmall(2)));
        assert_eq!(RingTopology::new(7, 0), Err(ConfigError::RingCount(0)));
        assert_eq!(RingTopology::new(7, 3), Err(ConfigError::RingCount(3)));
        assert_eq!(RingTopology::new(40, 2), Err(ConfigError::TooManyPixels(80)));
    }
}
