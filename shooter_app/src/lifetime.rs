//! Lifetime tracking for bullets in flight

/// How long a bullet stays in flight before it is retired
#[derive(Debug, Clone, Copy)]
pub struct Lifetime {
    /// Time when the bullet was fired (in seconds since game start)
    pub created_at: f32,
    /// How long the bullet should live (in seconds)
    pub duration: f32,
}

impl Lifetime {
    /// Create a new lifetime
    pub fn new(created_at: f32, duration: f32) -> Self {
        Self {
            created_at,
            duration,
        }
    }

    /// Check if the lifetime has expired
    pub fn is_expired(&self, current_time: f32) -> bool {
        current_time >= self.created_at + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_not_expired() {
        let lifetime = Lifetime::new(0.0, 5.0);
        assert!(!lifetime.is_expired(2.0));
    }

    #[test]
    fn test_lifetime_expired() {
        let lifetime = Lifetime::new(1.0, 5.0);
        assert!(lifetime.is_expired(6.0));
    }
}
