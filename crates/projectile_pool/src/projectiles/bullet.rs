//! Enemy and player bullets
//!
//! Both kinds share one implementation, `Bullet<K>`, tagged with a marker
//! type so that enemy and player bullets stay distinct types and cannot be
//! released into each other's pool.

use std::marker::PhantomData;

use super::motion::Motion;
use super::template::{
    BulletTemplate, TemplateSource, ENEMY_BULLET_TEMPLATE, PLAYER_BULLET_TEMPLATE,
};
use crate::error::PoolResult;
use crate::foundation::math::Vec3;
use crate::pool::{EntityFactory, Poolable};

/// Marker trait distinguishing bullet kinds
pub trait BulletKind: std::fmt::Debug + 'static {
    /// Human readable name used in logs
    const LABEL: &'static str;
    /// Template a pool for this kind loads unless configured otherwise
    const DEFAULT_TEMPLATE: &'static str;
}

/// Bullets fired by enemies at the player
#[derive(Debug, Clone, Copy, Default)]
pub struct Enemy;

impl BulletKind for Enemy {
    const LABEL: &'static str = "enemy bullet";
    const DEFAULT_TEMPLATE: &'static str = ENEMY_BULLET_TEMPLATE;
}

/// Bullets fired by the player
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

impl BulletKind for Player {
    const LABEL: &'static str = "player bullet";
    const DEFAULT_TEMPLATE: &'static str = PLAYER_BULLET_TEMPLATE;
}

/// Enemy bullet entity
pub type EnemyBullet = Bullet<Enemy>;

/// Player bullet entity
pub type PlayerBullet = Bullet<Player>;

/// Entities a pool can build straight from a template
pub trait Projectile: Poolable {
    /// Construct an uninitialized entity from prefab data
    fn from_template(template: &BulletTemplate) -> Self;
}

/// A pooled projectile
#[derive(Debug)]
pub struct Bullet<K: BulletKind> {
    speed: f32,
    damage: u32,
    radius: f32,
    motion: Motion,
    active: bool,
    initialized: bool,
    _kind: PhantomData<K>,
}

impl<K: BulletKind> Bullet<K> {
    /// Activate the bullet and send it from `origin` along `direction`
    pub fn fire(&mut self, origin: Vec3, direction: Vec3) {
        self.motion.launch(origin, direction, self.speed);
        self.active = true;
    }

    /// Move the bullet forward; inactive bullets stay put
    pub fn advance(&mut self, delta_time: f32) {
        if self.active {
            self.motion.integrate(delta_time);
        }
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        self.motion.position
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec3 {
        self.motion.velocity
    }

    /// Motion state
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Travel speed taken from the template
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Damage dealt on hit
    pub fn damage(&self) -> u32 {
        self.damage
    }

    /// Collision radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether one-time setup has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl<K: BulletKind> Projectile for Bullet<K> {
    fn from_template(template: &BulletTemplate) -> Self {
        Self {
            speed: template.speed,
            damage: template.damage,
            radius: template.radius,
            motion: Motion::new(),
            active: true,
            initialized: false,
            _kind: PhantomData,
        }
    }
}

impl<K: BulletKind> Poolable for Bullet<K> {
    fn initialize(&mut self) {
        self.motion = Motion::new();
        self.initialized = true;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn stop_moving(&mut self) {
        self.motion.stop();
    }
}

/// Builds projectiles from a loaded template
#[derive(Debug)]
pub struct BulletFactory<P> {
    template: BulletTemplate,
    _projectile: PhantomData<fn() -> P>,
}

impl<P: Projectile> BulletFactory<P> {
    /// Create a factory around an already loaded template
    pub fn new(template: BulletTemplate) -> Self {
        Self {
            template,
            _projectile: PhantomData,
        }
    }

    /// Load `name` from `source` and wrap it in a factory
    pub fn from_source(source: &dyn TemplateSource, name: &str) -> PoolResult<Self> {
        Ok(Self::new(source.load(name)?))
    }

    /// Template new projectiles are copied from
    pub fn template(&self) -> &BulletTemplate {
        &self.template
    }
}

impl<P: Projectile> EntityFactory<P> for BulletFactory<P> {
    fn create(&mut self) -> P {
        P::from_template(&self.template)
    }
}
