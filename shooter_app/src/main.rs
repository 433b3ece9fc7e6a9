//! Headless shooter demo
//!
//! Runs a fixed-step shoot-out between the player and a row of enemies and
//! reports how well the projectile pools recycled bullets.
//!
//! ```text
//! shooter_demo [config.toml|config.ron] [seconds]
//! ```

mod battle;
mod lifetime;

use projectile_pool::foundation::logging;
use projectile_pool::prelude::*;

use battle::Battle;

const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const DEFAULT_DURATION_SECS: f32 = 30.0;
const RNG_SEED: u64 = 0x5EED;

/// Errors that stop the demo
#[derive(thiserror::Error, Debug)]
enum AppError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to initialize projectile pools: {0}")]
    Pool(#[from] PoolError),

    #[error("Invalid duration '{0}', expected seconds")]
    InvalidDuration(String),
}

fn main() -> Result<(), AppError> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => PoolConfig::load_from_file(&path)?,
        None => PoolConfig::default(),
    };
    let duration = match args.next() {
        Some(raw) => raw
            .parse::<f32>()
            .ok()
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .ok_or(AppError::InvalidDuration(raw))?,
        None => DEFAULT_DURATION_SECS,
    };

    logging::init_with_level(&config.log_level);
    log::info!("Starting shooter demo ({:.1}s simulated)", duration);

    let templates = match &config.templates_path {
        Some(path) => {
            log::info!("Loading bullet templates from {}", path.display());
            TemplateLibrary::load_from_file(path)?
        }
        None => TemplateLibrary::with_defaults(),
    };

    let pools = ProjectilePools::initialize(&templates, &config)?;
    let mut battle = Battle::new(pools, RNG_SEED);

    let steps = (duration / FIXED_TIMESTEP).ceil() as u32;
    for step in 0..steps {
        battle.step(FIXED_TIMESTEP);

        if step % 600 == 0 {
            log::debug!("t={:.1}s in_flight={}", step as f32 * FIXED_TIMESTEP, battle.in_flight());
        }
    }
    battle.finish();

    log::info!("Peak bullets in flight: {}", battle.peak_in_flight());
    log::info!("Player bullet pool: {}", battle.pools().player_stats());
    log::info!("Enemy bullet pool: {}", battle.pools().enemy_stats());
    Ok(())
}
