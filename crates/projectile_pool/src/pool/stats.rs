//! Pool usage statistics

/// Counters describing how a pool has been used
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Entities built by the factory since creation
    pub created: u64,
    /// Acquires served from the free list
    pub reused: u64,
    /// Entities handed back through release
    pub released: u64,
    /// Entities currently waiting on the free list
    pub available: usize,
}

impl PoolStats {
    /// Total acquires served, reused or freshly built
    ///
    /// Prewarmed entities count as created, so this can overshoot the real
    /// acquire count by the prewarm size until they are reused.
    pub fn total_acquired(&self) -> u64 {
        self.created + self.reused
    }

    /// Fraction of acquires that reused an entity (0.0 - 1.0)
    pub fn hit_rate(&self) -> f32 {
        let total = self.total_acquired();
        if total == 0 {
            0.0
        } else {
            self.reused as f32 / total as f32
        }
    }

    /// Entities currently held by callers
    ///
    /// Only meaningful while every release comes from this pool.
    pub fn outstanding(&self) -> u64 {
        self.created.saturating_sub(self.available as u64)
    }
}

impl std::fmt::Display for PoolStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "created={} reused={} released={} available={} hit_rate={:.0}%",
            self.created,
            self.reused,
            self.released,
            self.available,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_empty() {
        assert_eq!(PoolStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate() {
        let stats = PoolStats {
            created: 1,
            reused: 3,
            released: 3,
            available: 0,
        };
        assert_eq!(stats.hit_rate(), 0.75);
        assert_eq!(stats.total_acquired(), 4);
        assert_eq!(stats.outstanding(), 1);
    }

    #[test]
    fn test_display() {
        let stats = PoolStats {
            created: 2,
            reused: 2,
            released: 1,
            available: 1,
        };
        let display = format!("{}", stats);
        assert!(display.contains("created=2"));
        assert!(display.contains("hit_rate=50%"));
    }
}
