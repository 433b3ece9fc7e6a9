//! Projectile entities
//!
//! Bullets, the templates they are built from, and the factory that turns
//! one into the other for a pool.

pub mod bullet;
pub mod motion;
pub mod template;

pub use bullet::{
    Bullet, BulletFactory, BulletKind, Enemy, EnemyBullet, Player, PlayerBullet, Projectile,
};
pub use motion::Motion;
pub use template::{
    BulletTemplate, TemplateLibrary, TemplateSource, ENEMY_BULLET_TEMPLATE, PLAYER_BULLET_TEMPLATE,
};
