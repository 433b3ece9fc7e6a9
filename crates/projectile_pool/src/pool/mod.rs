//! Recycling Object Pool
//!
//! A last-in-first-out free list of inactive entities backed by a factory that
//! builds a new entity whenever the free list runs dry.
//!
//! # Architecture
//!
//! ```text
//! caller ── acquire() ──► ObjectPool ──► free list non-empty? ── pop last
//!                              │                   │
//!                              │                   no
//!                              │                   ▼
//!                              │          EntityFactory::create()
//!                              │          Poolable::initialize()
//!                              │          set_active(false)
//!                              │
//! caller ── release(e) ──► set_active(false), stop_moving(), push
//! ```
//!
//! # Ownership
//!
//! `acquire` moves the entity out of the pool and `release` moves it back, so
//! an entity is held either by the pool or by exactly one caller. Nothing is
//! checked on release: handing in an entity from another pool simply adds it
//! to this one.
//!
//! # Threading
//!
//! The pool has no internal synchronization and is meant to be driven from
//! the game's main update loop through `&mut self`. Callers sharing a pool
//! between threads must wrap it in their own lock.
//!
//! # Usage
//!
//! ```rust
//! use projectile_pool::pool::{ObjectPool, Poolable};
//!
//! #[derive(Default)]
//! struct Spark { active: bool, speed: f32 }
//!
//! impl Poolable for Spark {
//!     fn set_active(&mut self, active: bool) { self.active = active; }
//!     fn is_active(&self) -> bool { self.active }
//!     fn stop_moving(&mut self) { self.speed = 0.0; }
//! }
//!
//! let mut pool = ObjectPool::new(Spark::default);
//! let spark = pool.acquire();
//! pool.release(spark);
//! assert_eq!(pool.available(), 1);
//! ```

mod stats;

pub use stats::PoolStats;

/// Capabilities an entity needs to live in an [`ObjectPool`]
pub trait Poolable {
    /// One-time setup run right after the factory constructs the entity
    fn initialize(&mut self) {}

    /// Toggle whether the entity takes part in the simulation
    fn set_active(&mut self, active: bool);

    /// Whether the entity currently takes part in the simulation
    fn is_active(&self) -> bool;

    /// Clear any motion state so a reused entity starts at rest
    fn stop_moving(&mut self);
}

/// Builds fresh entities for a pool on demand
pub trait EntityFactory<T> {
    /// Construct a new entity
    fn create(&mut self) -> T;
}

impl<T, F> EntityFactory<T> for F
where
    F: FnMut() -> T,
{
    fn create(&mut self) -> T {
        self()
    }
}

/// Unbounded LIFO pool of inactive entities
pub struct ObjectPool<T, F> {
    free: Vec<T>,
    factory: F,
    stats: PoolStats,
}

impl<T, F> ObjectPool<T, F>
where
    T: Poolable,
    F: EntityFactory<T>,
{
    /// Create an empty pool
    pub fn new(factory: F) -> Self {
        Self {
            free: Vec::new(),
            factory,
            stats: PoolStats::default(),
        }
    }

    /// Create a pool holding `count` freshly built inactive entities
    pub fn with_prewarm(factory: F, count: usize) -> Self {
        let mut pool = Self::new(factory);
        pool.free.reserve(count);
        for _ in 0..count {
            let entity = pool.build();
            pool.free.push(entity);
        }
        if count > 0 {
            log::debug!("Prewarmed pool with {} entities", count);
        }
        pool
    }

    /// Take an entity out of the pool, building one if none are free
    ///
    /// The returned entity is inactive; the caller activates it when it is
    /// put to use.
    pub fn acquire(&mut self) -> T {
        if let Some(entity) = self.free.pop() {
            self.stats.reused += 1;
            log::trace!("Reusing pooled entity ({} left)", self.free.len());
            entity
        } else {
            let entity = self.build();
            log::debug!("Pool empty, grew to {} entities", self.stats.created);
            entity
        }
    }

    /// Deactivate an entity, stop it, and put it back on the free list
    pub fn release(&mut self, mut entity: T) {
        entity.set_active(false);
        entity.stop_moving();
        self.free.push(entity);
        self.stats.released += 1;
    }

    /// Number of entities waiting to be reused
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Whether the next acquire has to build a new entity
    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    /// Usage counters for this pool
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            available: self.free.len(),
            ..self.stats.clone()
        }
    }

    /// Borrow the factory, e.g. to inspect the template it builds from
    pub fn factory(&self) -> &F {
        &self.factory
    }

    fn build(&mut self) -> T {
        let mut entity = self.factory.create();
        entity.initialize();
        entity.set_active(false);
        self.stats.created += 1;
        entity
    }
}

impl<T, F> std::fmt::Debug for ObjectPool<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectPool")
            .field("available", &self.free.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
