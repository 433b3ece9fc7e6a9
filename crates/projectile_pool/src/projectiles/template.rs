//! Bullet templates and where they come from
//!
//! A template is the prefab a pool's factory copies into every new bullet.
//! Pools look templates up by name through a [`TemplateSource`] when they are
//! initialized; a missing or broken template is the only way pool setup can
//! fail.

use serde::{Serialize, Deserialize};

use crate::config::Config;
use crate::error::{PoolError, PoolResult};

/// Template name the enemy bullet pool loads by default
pub const ENEMY_BULLET_TEMPLATE: &str = "EnemyBullet";

/// Template name the player bullet pool loads by default
pub const PLAYER_BULLET_TEMPLATE: &str = "PlayerBullet";

/// Prefab data shared by every bullet built from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletTemplate {
    /// Lookup name
    pub name: String,
    /// Travel speed in units per second
    pub speed: f32,
    /// Damage dealt on hit
    #[serde(default = "default_damage")]
    pub damage: u32,
    /// Collision radius
    pub radius: f32,
}

fn default_damage() -> u32 {
    1
}

impl BulletTemplate {
    /// Create a template
    pub fn new(name: impl Into<String>, speed: f32, radius: f32) -> Self {
        Self {
            name: name.into(),
            speed,
            damage: default_damage(),
            radius,
        }
    }

    /// Set damage
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    /// Built-in enemy bullet: slow and slightly larger
    pub fn enemy_bullet() -> Self {
        Self::new(ENEMY_BULLET_TEMPLATE, 6.0, 0.15)
    }

    /// Built-in player bullet: fast and small
    pub fn player_bullet() -> Self {
        Self::new(PLAYER_BULLET_TEMPLATE, 12.0, 0.1)
    }

    /// Check that bullets built from this template can move and collide
    pub fn validate(&self) -> PoolResult<()> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(self.invalid(format!(
                "speed must be positive and finite, got {}",
                self.speed
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(self.invalid(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> PoolError {
        PoolError::InvalidTemplate {
            name: self.name.clone(),
            reason,
        }
    }
}

/// Resource loader the pools pull templates from
pub trait TemplateSource {
    /// Load the template registered under `name`
    fn load(&self, name: &str) -> PoolResult<BulletTemplate>;
}

/// In-memory template collection
///
/// Can be built in code or read from a `.toml` / `.ron` file:
///
/// ```toml
/// [[templates]]
/// name = "EnemyBullet"
/// speed = 6.0
/// radius = 0.15
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateLibrary {
    templates: Vec<BulletTemplate>,
}

impl TemplateLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding the built-in enemy and player bullets
    pub fn with_defaults() -> Self {
        let mut library = Self::new();
        library.insert(BulletTemplate::enemy_bullet());
        library.insert(BulletTemplate::player_bullet());
        library
    }

    /// Add a template, replacing any existing one with the same name
    pub fn insert(&mut self, template: BulletTemplate) {
        match self.templates.iter_mut().find(|t| t.name == template.name) {
            Some(existing) => *existing = template,
            None => self.templates.push(template),
        }
    }

    /// Look a template up by name
    pub fn get(&self, name: &str) -> Option<&BulletTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Number of templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the library has no templates
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateSource for TemplateLibrary {
    fn load(&self, name: &str) -> PoolResult<BulletTemplate> {
        let template = self
            .get(name)
            .cloned()
            .ok_or_else(|| PoolError::TemplateNotFound { name: name.to_string() })?;
        template.validate()?;
        Ok(template)
    }
}

impl Config for TemplateLibrary {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_defaults_contain_both_bullets() {
        let library = TemplateLibrary::with_defaults();
        assert_eq!(library.len(), 2);
        assert!(library.load(ENEMY_BULLET_TEMPLATE).is_ok());
        assert!(library.load(PLAYER_BULLET_TEMPLATE).is_ok());
    }

    #[test]
    fn test_missing_template() {
        let library = TemplateLibrary::new();
        match library.load("Rocket") {
            Err(PoolError::TemplateNotFound { name }) => assert_eq!(name, "Rocket"),
            other => panic!("Expected TemplateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_replaces_by_name() {
        let mut library = TemplateLibrary::with_defaults();
        library.insert(BulletTemplate::new(PLAYER_BULLET_TEMPLATE, 20.0, 0.05).with_damage(3));

        assert_eq!(library.len(), 2);
        let player = library.load(PLAYER_BULLET_TEMPLATE).unwrap();
        assert_eq!(player.speed, 20.0);
        assert_eq!(player.damage, 3);
    }

    #[test]
    fn test_invalid_speed_rejected() {
        let mut library = TemplateLibrary::new();
        library.insert(BulletTemplate::new("Dud", 0.0, 0.1));

        let err = library.load("Dud").unwrap_err();
        assert!(matches!(err, PoolError::InvalidTemplate { .. }));
        assert!(err.to_string().contains("speed must be positive"));
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let template = BulletTemplate::new("Ghost", 5.0, f32::NAN);
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_parse_library_toml() {
        let text = r#"
            [[templates]]
            name = "EnemyBullet"
            speed = 4.0
            radius = 0.2

            [[templates]]
            name = "PlayerBullet"
            speed = 15.0
            damage = 2
            radius = 0.1
        "#;

        let library = TemplateLibrary::from_str_with_format(text, ConfigFormat::Toml).unwrap();
        let enemy = library.load(ENEMY_BULLET_TEMPLATE).unwrap();
        assert_eq!(enemy.speed, 4.0);
        assert_eq!(enemy.damage, 1);
        assert_eq!(library.load(PLAYER_BULLET_TEMPLATE).unwrap().damage, 2);
    }
}
