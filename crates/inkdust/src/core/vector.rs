//! Polar helpers on top of `glam::Vec2`.
//!
//! glam covers add/sub/scale/length/distance. Repulsion needs "this length,
//! that absolute angle", which is what this trait adds.

use glam::Vec2;

pub trait PolarExt {
    /// Angle of the vector in radians, measured from +x toward +y.
    fn heading(self) -> f32;

    /// Same direction, new magnitude. A zero vector stays zero.
    fn with_magnitude(self, length: f32) -> Vec2;

    /// Same magnitude, rotated to the absolute `angle`.
    fn with_heading(self, angle: f32) -> Vec2;

    /// Vector of `length` pointing at `angle` (radians).
    fn polar(length: f32, angle: f32) -> Vec2;
}

impl PolarExt for Vec2 {
    #[inline]
    fn heading(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn with_magnitude(self, length: f32) -> Vec2 {
        let current = self.length();
        if current == 0.0 {
            return Vec2::ZERO;
        }
        self * (length / current)
    }

    #[inline]
    fn with_heading(self, angle: f32) -> Vec2 {
        Self::polar(self.length(), angle)
    }

    #[inline]
    fn polar(length: f32, angle: f32) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(cos * length, sin * length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_at_zero_is_pure_x() {
        let v = Vec2::polar(3.0, 0.0);
        assert_eq!(v, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn with_heading_preserves_length() {
        let v = Vec2::new(3.0, 4.0).with_heading(std::f32::consts::FRAC_PI_2);
        assert!((v.length() - 5.0).abs() < 1e-5);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y - 5.0).abs() < 1e-5);
    }

    #[test]
    fn with_magnitude_keeps_direction() {
        let v = Vec2::new(0.0, -2.0).with_magnitude(6.0);
        assert!((v - Vec2::new(0.0, -6.0)).length() < 1e-5);
        assert!((v.heading() + std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn zero_vector_has_no_direction() {
        assert_eq!(Vec2::ZERO.with_magnitude(5.0), Vec2::ZERO);
        assert_eq!(Vec2::ZERO.with_heading(1.0), Vec2::ZERO);
    }
}
