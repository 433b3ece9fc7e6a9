//! Math utilities and types
//!
//! Projectiles move in a 2D playfield but keep a full 3D vector so they can
//! be handed straight to a 3D renderer.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Normalize `direction`, falling back to +Y for zero-length input
///
/// Bullets fired with a degenerate aim direction travel "up" the screen
/// rather than producing NaN velocities.
pub fn safe_direction(direction: Vec3) -> Vec3 {
    direction
        .try_normalize(f32::EPSILON)
        .unwrap_or_else(Vec3::y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_safe_direction_normalizes() {
        let dir = safe_direction(Vec3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(dir, Vec3::new(0.6, 0.8, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_safe_direction_zero_falls_back() {
        assert_eq!(safe_direction(Vec3::zeros()), Vec3::y());
    }
}
