//! Motion state for projectiles
//!
//! Bullets fly in straight lines, so this is a cut-down movement component:
//! position plus constant velocity, no acceleration or damping.

use crate::foundation::math::{safe_direction, Vec3};

/// Linear motion of a projectile
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    /// World position
    pub position: Vec3,

    /// Linear velocity in units per second
    pub velocity: Vec3,
}

impl Motion {
    /// Create motion at rest at the origin
    pub fn new() -> Self {
        Self {
            position: Vec3::zeros(),
            velocity: Vec3::zeros(),
        }
    }

    /// Place at `origin` and head along `direction` at `speed`
    pub fn launch(&mut self, origin: Vec3, direction: Vec3, speed: f32) {
        self.position = origin;
        self.velocity = safe_direction(direction) * speed;
    }

    /// Integrate position over `delta_time` seconds
    pub fn integrate(&mut self, delta_time: f32) {
        self.position += self.velocity * delta_time;
    }

    /// Whether the projectile is moving at all
    pub fn is_moving(&self) -> bool {
        self.velocity != Vec3::zeros()
    }

    /// Stop all movement immediately
    pub fn stop(&mut self) {
        self.velocity = Vec3::zeros();
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new()
    }
}
