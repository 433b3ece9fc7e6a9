//! Error types for pool initialization

use crate::config::ConfigError;

/// Errors raised while setting up projectile pools
///
/// Acquire and release never fail; only loading the template a pool builds
/// from can.
#[derive(thiserror::Error, Debug)]
pub enum PoolError {
    /// No template with this name exists in the source
    #[error("Template not found: {name}")]
    TemplateNotFound {
        /// Requested template name
        name: String,
    },

    /// Template exists but cannot build a usable entity
    #[error("Invalid template '{name}': {reason}")]
    InvalidTemplate {
        /// Template name
        name: String,
        /// What is wrong with it
        reason: String,
    },

    /// Configuration or template file could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for pool setup
pub type PoolResult<T> = Result<T, PoolError>;
