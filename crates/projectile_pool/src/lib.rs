//! # Projectile Pool
//!
//! Recycling pools for short-lived projectiles. Instead of building and
//! dropping a bullet every time one is fired, the game acquires an inactive
//! bullet from a pool and hands it back when the bullet is done.
//!
//! ## Features
//!
//! - **Generic pool**: [`pool::ObjectPool`] works for any [`pool::Poolable`]
//!   entity with an injected factory
//! - **Acquire-or-grow**: the pool never runs out; it builds a new entity
//!   when the free list is empty
//! - **LIFO reuse**: the most recently released entity is handed out first
//! - **Templates**: bullets are built from named prefab data loaded from code
//!   or TOML/RON files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use projectile_pool::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PoolConfig::load_from_file("pools.toml")?;
//!     projectile_pool::foundation::logging::init_with_level(&config.log_level);
//!
//!     let mut pools = ProjectilePools::initialize(&TemplateLibrary::with_defaults(), &config)?;
//!
//!     let mut bullet = pools.acquire_enemy_bullet();
//!     bullet.fire(Vec3::new(0.0, 10.0, 0.0), -Vec3::y());
//!     pools.release_enemy_bullet(bullet);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod error;
pub mod foundation;
pub mod manager;
pub mod pool;
pub mod projectiles;

pub use error::{PoolError, PoolResult};
pub use manager::ProjectilePools;

/// Common imports for pool users
pub mod prelude {
    pub use crate::{
        PoolError, PoolResult, ProjectilePools,
        config::{Config, ConfigError, PoolConfig, PoolSettings},
        foundation::math::Vec3,
        manager::BulletPool,
        pool::{EntityFactory, ObjectPool, PoolStats, Poolable},
        projectiles::{
            BulletTemplate, EnemyBullet, PlayerBullet, Projectile, TemplateLibrary, TemplateSource,
        },
    };
}
