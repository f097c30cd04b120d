//! Ring addressing
//!
//! The pixels form one or two rings laid out back to back in the strip.
//! Pixel 0 of every ring sits in the middle of it and is the ring's center,
//! the rest of the ring runs clockwise around it.

use crate::{MAX_PIXELS, error::ConfigError};

/// Index of a pixel in the strip
pub type PixelIndex = usize;

/// Layout of the rings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingTopology {
    ring_size: usize,
    ring_count: usize,
}

impl RingTopology {
    /// Create a topology of `ring_count` rings with `ring_size` pixels each
    pub const fn new(ring_size: usize, ring_count: usize) -> Result<Self, ConfigError> {
        if ring_size < 3 {
            return Err(ConfigError::RingTooSmall(ring_size));
        }
        if ring_count == 0 || ring_count > 2 {
            return Err(ConfigError::RingCount(ring_count));
        }
        if ring_size * ring_count > MAX_PIXELS {
            return Err(ConfigError::TooManyPixels(ring_size * ring_count));
        }
        Ok(Self {
            ring_size,
            ring_count,
        })
    }

    /// Pixels per ring
    pub const fn ring_size(self) -> usize {
        self.ring_size
    }

    pub const fn ring_count(self) -> usize {
        self.ring_count
    }

    /// Total number of pixels across all rings
    pub const fn pixel_count(self) -> usize {
        self.ring_size * self.ring_count
    }

    /// Ring the pixel belongs to
    pub const fn ring_of(self, pixel: PixelIndex) -> usize {
        pixel / self.ring_size
    }

    /// Center pixel of the ring containing `pixel`
    pub const fn center(self, pixel: PixelIndex) -> PixelIndex {
        (pixel / self.ring_size) * self.ring_size
    }

    pub const fn is_center(self, pixel: PixelIndex) -> bool {
        pixel % self.ring_size == 0
    }

    /// Move `delta` steps around the ring containing `start`
    ///
    /// Only the `ring_size - 1` perimeter pixels count as positions, so the
    /// center is never landed on and the result never leaves the ring.
    /// Moving from a center pixel is not meaningful; it is treated as
    /// standing just before the first perimeter pixel.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub const fn move_by(self, start: PixelIndex, delta: isize) -> PixelIndex {
        let base = self.center(start);
        let perimeter = (self.ring_size - 1) as isize;
        let position = (start - base) as isize - 1;
        let target = (position + delta).rem_euclid(perimeter);
        base + target as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_ring_wraps() {
        let ring = RingTopology::new(5, 1).unwrap();
        assert_eq!(ring.move_by(4, 1), 1);
        assert_eq!(ring.move_by(1, -1), 4);
        assert_eq!(ring.move_by(2, 4), 2);
    }

    #[test]
    fn test_move_from_center_stays_in_ring() {
        let ring = RingTopology::new(7, 2).unwrap();
        assert_eq!(ring.move_by(7, 1), 8);
        assert_eq!(ring.move_by(7, -1), 12);
    }
}
