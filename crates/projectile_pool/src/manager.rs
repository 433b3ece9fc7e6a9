//! Projectile Pool Manager
//!
//! Owns one [`ObjectPool`] per bullet kind. The manager is a plain value the
//! game loop holds and passes around by `&mut`; there is no global state.
//!
//! # Usage
//!
//! ```rust
//! use projectile_pool::prelude::*;
//!
//! let templates = TemplateLibrary::with_defaults();
//! let mut pools = ProjectilePools::initialize(&templates, &PoolConfig::default())?;
//!
//! let mut bullet = pools.acquire_player_bullet();
//! bullet.fire(Vec3::zeros(), Vec3::y());
//! // ... bullet flies, hits something ...
//! pools.release_player_bullet(bullet);
//! # Ok::<(), PoolError>(())
//! ```

use crate::config::{PoolConfig, PoolSettings};
use crate::error::PoolResult;
use crate::pool::{ObjectPool, PoolStats};
use crate::projectiles::{
    Bullet, BulletFactory, BulletKind, Enemy, EnemyBullet, Player, PlayerBullet, TemplateSource,
};

/// Pool of bullets of one kind
pub type BulletPool<K> = ObjectPool<Bullet<K>, BulletFactory<Bullet<K>>>;

/// Load the template named in `settings` and build a pool around it
fn initialize_pool<K: BulletKind>(
    source: &dyn TemplateSource,
    settings: &PoolSettings,
) -> PoolResult<BulletPool<K>> {
    let factory = BulletFactory::from_source(source, &settings.template)?;
    let pool = ObjectPool::with_prewarm(factory, settings.prewarm);

    log::info!(
        "Initialized {} pool from template '{}' ({} prewarmed)",
        K::LABEL,
        settings.template,
        settings.prewarm
    );
    Ok(pool)
}

/// Enemy and player bullet pools
#[derive(Debug)]
pub struct ProjectilePools {
    enemy_bullets: BulletPool<Enemy>,
    player_bullets: BulletPool<Player>,
}

impl ProjectilePools {
    /// Build both pools from `source` as described by `config`
    pub fn initialize(source: &dyn TemplateSource, config: &PoolConfig) -> PoolResult<Self> {
        config.validate()?;

        Ok(Self {
            enemy_bullets: Self::initialize_enemy_bullets(source, &config.enemy_bullet)?,
            player_bullets: Self::initialize_player_bullets(source, &config.player_bullet)?,
        })
    }

    /// Build a standalone enemy bullet pool
    pub fn initialize_enemy_bullets(
        source: &dyn TemplateSource,
        settings: &PoolSettings,
    ) -> PoolResult<BulletPool<Enemy>> {
        initialize_pool(source, settings)
    }

    /// Build a standalone player bullet pool
    pub fn initialize_player_bullets(
        source: &dyn TemplateSource,
        settings: &PoolSettings,
    ) -> PoolResult<BulletPool<Player>> {
        initialize_pool(source, settings)
    }

    /// Get an inactive enemy bullet, reusing one when possible
    pub fn acquire_enemy_bullet(&mut self) -> EnemyBullet {
        self.enemy_bullets.acquire()
    }

    /// Return an enemy bullet to its pool
    pub fn release_enemy_bullet(&mut self, bullet: EnemyBullet) {
        self.enemy_bullets.release(bullet);
    }

    /// Get an inactive player bullet, reusing one when possible
    pub fn acquire_player_bullet(&mut self) -> PlayerBullet {
        self.player_bullets.acquire()
    }

    /// Return a player bullet to its pool
    pub fn release_player_bullet(&mut self, bullet: PlayerBullet) {
        self.player_bullets.release(bullet);
    }

    /// Enemy bullet pool
    pub fn enemy_bullets(&self) -> &BulletPool<Enemy> {
        &self.enemy_bullets
    }

    /// Player bullet pool
    pub fn player_bullets(&self) -> &BulletPool<Player> {
        &self.player_bullets
    }

    /// Enemy bullet pool counters
    pub fn enemy_stats(&self) -> PoolStats {
        self.enemy_bullets.stats()
    }

    /// Player bullet pool counters
    pub fn player_stats(&self) -> PoolStats {
        self.player_bullets.stats()
    }
}
