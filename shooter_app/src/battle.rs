//! Headless shoot-out driving the projectile pools
//!
//! The player sits at the bottom of the playfield firing straight up, a row
//! of enemies at the top fires down at the player with some spread. Bullets
//! are retired when their lifetime runs out or they leave the playfield, and
//! go straight back to their pool.

use projectile_pool::prelude::*;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::lifetime::Lifetime;

/// Half the playfield height; bullets beyond this are off screen
const PLAYFIELD_HALF_HEIGHT: f32 = 10.0;
/// Half the playfield width
const PLAYFIELD_HALF_WIDTH: f32 = 8.0;
const PLAYER_FIRE_INTERVAL: f32 = 0.15;
const ENEMY_FIRE_INTERVAL: f32 = 0.6;
const PLAYER_BULLET_LIFETIME: f32 = 1.2;
const ENEMY_BULLET_LIFETIME: f32 = 2.5;
const ENEMY_SPREAD: f32 = 0.35;
const ENEMY_COUNT: usize = 4;

struct InFlight<B> {
    bullet: B,
    lifetime: Lifetime,
}

/// Game state for one shoot-out
pub struct Battle {
    pools: ProjectilePools,
    player_bullets: Vec<InFlight<PlayerBullet>>,
    enemy_bullets: Vec<InFlight<EnemyBullet>>,
    clock: f32,
    player_cooldown: f32,
    enemy_cooldown: f32,
    peak_in_flight: usize,
    rng: StdRng,
}

impl Battle {
    /// Start a battle with the given pools and RNG seed
    pub fn new(pools: ProjectilePools, seed: u64) -> Self {
        Self {
            pools,
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            clock: 0.0,
            player_cooldown: 0.0,
            enemy_cooldown: ENEMY_FIRE_INTERVAL,
            peak_in_flight: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Advance the simulation by one fixed step
    pub fn step(&mut self, delta_time: f32) {
        self.clock += delta_time;

        self.player_cooldown -= delta_time;
        if self.player_cooldown <= 0.0 {
            self.fire_player();
            self.player_cooldown += PLAYER_FIRE_INTERVAL;
        }

        self.enemy_cooldown -= delta_time;
        if self.enemy_cooldown <= 0.0 {
            self.fire_enemies();
            self.enemy_cooldown += ENEMY_FIRE_INTERVAL;
        }

        for shot in &mut self.player_bullets {
            shot.bullet.advance(delta_time);
        }
        for shot in &mut self.enemy_bullets {
            shot.bullet.advance(delta_time);
        }

        self.peak_in_flight = self.peak_in_flight.max(self.in_flight());
        self.retire_spent();
    }

    /// Return every bullet still in flight to its pool
    pub fn finish(&mut self) {
        for shot in self.player_bullets.drain(..) {
            self.pools.release_player_bullet(shot.bullet);
        }
        for shot in self.enemy_bullets.drain(..) {
            self.pools.release_enemy_bullet(shot.bullet);
        }
        log::debug!("Returned all bullets at t={:.2}s", self.clock);
    }

    /// Bullets currently in flight
    pub fn in_flight(&self) -> usize {
        self.player_bullets.len() + self.enemy_bullets.len()
    }

    /// Most bullets in flight at once so far
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight
    }

    /// The pools backing this battle
    pub fn pools(&self) -> &ProjectilePools {
        &self.pools
    }

    fn fire_player(&mut self) {
        let mut bullet = self.pools.acquire_player_bullet();
        bullet.fire(Vec3::new(0.0, -PLAYFIELD_HALF_HEIGHT + 1.0, 0.0), Vec3::y());
        self.player_bullets.push(InFlight {
            bullet,
            lifetime: Lifetime::new(self.clock, PLAYER_BULLET_LIFETIME),
        });
    }

    fn fire_enemies(&mut self) {
        let spacing = 2.0 * PLAYFIELD_HALF_WIDTH / ENEMY_COUNT as f32;
        for index in 0..ENEMY_COUNT {
            let x = -PLAYFIELD_HALF_WIDTH + spacing * (index as f32 + 0.5);
            let spread = self.rng.gen_range(-ENEMY_SPREAD..=ENEMY_SPREAD);

            let mut bullet = self.pools.acquire_enemy_bullet();
            bullet.fire(
                Vec3::new(x, PLAYFIELD_HALF_HEIGHT - 1.0, 0.0),
                Vec3::new(-x * 0.1 + spread, -1.0, 0.0),
            );
            self.enemy_bullets.push(InFlight {
                bullet,
                lifetime: Lifetime::new(self.clock, ENEMY_BULLET_LIFETIME),
            });
        }
    }

    fn retire_spent(&mut self) {
        let now = self.clock;
        let (spent, live): (Vec<_>, Vec<_>) = self
            .player_bullets
            .drain(..)
            .partition(|shot| is_spent(shot.bullet.position(), &shot.lifetime, now));
        self.player_bullets = live;
        for shot in spent {
            self.pools.release_player_bullet(shot.bullet);
        }

        let (spent, live): (Vec<_>, Vec<_>) = self
            .enemy_bullets
            .drain(..)
            .partition(|shot| is_spent(shot.bullet.position(), &shot.lifetime, now));
        self.enemy_bullets = live;
        for shot in spent {
            self.pools.release_enemy_bullet(shot.bullet);
        }
    }
}

fn is_spent(position: Vec3, lifetime: &Lifetime, now: f32) -> bool {
    lifetime.is_expired(now)
        || position.x.abs() > PLAYFIELD_HALF_WIDTH
        || position.y.abs() > PLAYFIELD_HALF_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn battle() -> Battle {
        let pools =
            ProjectilePools::initialize(&TemplateLibrary::with_defaults(), &PoolConfig::default())
                .unwrap();
        Battle::new(pools, 7)
    }

    #[test]
    fn test_first_step_fires_player() {
        let mut battle = battle();
        battle.step(DT);

        assert_eq!(battle.in_flight(), 1);
        assert_eq!(battle.pools().player_stats().created, 1);
        assert_eq!(battle.pools().enemy_stats().created, 0);
    }

    #[test]
    fn test_long_run_reuses_bullets() {
        let mut battle = battle();
        for _ in 0..1200 {
            battle.step(DT);
        }

        let player = battle.pools().player_stats();
        assert!(player.reused > 0);
        assert!(player.created <= battle.peak_in_flight() as u64 + 1);
        assert!(battle.pools().enemy_stats().reused > 0);
    }

    #[test]
    fn test_finish_returns_everything() {
        let mut battle = battle();
        for _ in 0..120 {
            battle.step(DT);
        }
        battle.finish();

        assert_eq!(battle.in_flight(), 0);
        let player = battle.pools().player_stats();
        let enemy = battle.pools().enemy_stats();
        assert_eq!(player.available as u64, player.created);
        assert_eq!(enemy.available as u64, enemy.created);
    }
}
