//! Math utilities and types
//!
//! Provides the fundamental math types for 3D scene manipulation.

pub use nalgebra::{Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Math utility functions
pub mod utils {
    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * (std::f32::consts::PI / 180.0)
    }

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(utils::clamp(-2.0, -1.0, 1.0), -1.0);
        assert_eq!(utils::clamp(0.5, -1.0, 1.0), 0.5);
        assert_eq!(utils::clamp(2.0, -1.0, 1.0), 1.0);
    }

    #[test]
    fn test_quat_identity() {
        let q = Quat::identity();
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(q * v, v);
    }
}
