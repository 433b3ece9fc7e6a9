//! Pool configuration

use serde::{Serialize, Deserialize};
use std::path::PathBuf;

use super::{Config, ConfigError};
use crate::projectiles::{BulletKind, Enemy, Player};

/// Settings for a single projectile pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSettings {
    /// Name of the template the pool's factory is built from
    pub template: String,
    /// Instances constructed up front during initialization
    #[serde(default)]
    pub prewarm: usize,
}

impl PoolSettings {
    /// Create settings for the named template with an empty pool
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            prewarm: 0,
        }
    }

    /// Settings for an empty pool using the default template of `K`
    pub fn for_kind<K: BulletKind>() -> Self {
        Self::new(K::DEFAULT_TEMPLATE)
    }

    /// Construct `count` instances during initialization
    pub fn with_prewarm(mut self, count: usize) -> Self {
        self.prewarm = count;
        self
    }

    fn validate(&self, pool: &str) -> Result<(), ConfigError> {
        if self.template.trim().is_empty() {
            return Err(ConfigError::Invalid(format!("{pool} template name cannot be empty")));
        }
        Ok(())
    }
}

/// Configuration for the projectile pools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Fallback log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Template library file; built-in templates are used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_path: Option<PathBuf>,
    /// Enemy bullet pool
    pub enemy_bullet: PoolSettings,
    /// Player bullet pool
    pub player_bullet: PoolSettings,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl PoolConfig {
    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Read templates from a file instead of the built-in library
    pub fn with_templates_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.templates_path = Some(path.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.enemy_bullet.validate("enemy_bullet")?;
        self.player_bullet.validate("player_bullet")?;
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            templates_path: None,
            enemy_bullet: PoolSettings::for_kind::<Enemy>(),
            player_bullet: PoolSettings::for_kind::<Player>(),
        }
    }
}

impl Config for PoolConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_default_pools_start_empty() {
        let config = PoolConfig::default();
        assert_eq!(config.enemy_bullet.prewarm, 0);
        assert_eq!(config.player_bullet.prewarm, 0);
        assert_eq!(config.enemy_bullet.template, Enemy::DEFAULT_TEMPLATE);
        assert_eq!(config.player_bullet.template, Player::DEFAULT_TEMPLATE);
        assert_eq!(config.enemy_bullet, PoolSettings::new("EnemyBullet"));
        assert_eq!(config.player_bullet, PoolSettings::new("PlayerBullet"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_template_rejected() {
        let mut config = PoolConfig::default();
        config.player_bullet.template = "  ".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("player_bullet"));
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
            log_level = "debug"

            [enemy_bullet]
            template = "EnemyBullet"

            [player_bullet]
            template = "PlayerBullet"
            prewarm = 1
        "#;

        let config = PoolConfig::from_str_with_format(text, ConfigFormat::Toml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.enemy_bullet.prewarm, 0);
        assert_eq!(config.player_bullet.prewarm, 1);
        assert!(config.templates_path.is_none());
    }

    #[test]
    fn test_parse_ron() {
        let text = r#"(
            enemy_bullet: (template: "Spitter", prewarm: 4),
            player_bullet: (template: "PlayerBullet"),
        )"#;

        let config = PoolConfig::from_str_with_format(text, ConfigFormat::Ron).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.enemy_bullet, PoolSettings::new("Spitter").with_prewarm(4));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let config = PoolConfig::default()
            .with_log_level("trace")
            .with_templates_path("assets/bullets.ron");

        for name in ["pools.toml", "pools.ron"] {
            let path = dir.path().join(name);
            config.save_to_file(&path).unwrap();
            let loaded = PoolConfig::load_from_file(&path).unwrap();
            assert_eq!(loaded, config);
        }
    }

    #[test]
    fn test_config_dir_removed_on_panic() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();

        let outcome = std::panic::catch_unwind(move || {
            let path = dir.path().join("pools.toml");
            PoolConfig::default().save_to_file(&path).unwrap();
            panic!("assertion failed after writing {}", path.display());
        });

        assert!(outcome.is_err());
        assert!(!root.exists());
    }
}
