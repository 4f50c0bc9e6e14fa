//! Nova Strike - a top-down wave-survival arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, waves, collisions, game state)
//! - `audio`: Fire-and-forget sound event sink
//! - `highscores`: Best-score persistence
//! - `settings`: Player-tunable preferences

pub mod audio;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Fixed simulation rate
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Logical milliseconds per tick
    pub const TICK_MS: u64 = 1000 / TICKS_PER_SECOND as u64;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Per-axis movement per tick (both axes apply independently; no
    /// diagonal normalization)
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HP: i32 = 100;
    pub const PLAYER_START_LIVES: u32 = 3;
    /// Gap between the player spawn point and the bottom arena edge
    pub const PLAYER_SPAWN_MARGIN: f32 = 20.0;

    /// Firing
    pub const FIRE_COOLDOWN_MS: u64 = 300;
    pub const RAPID_FIRE_COOLDOWN_MS: u64 = 100;
    /// Lateral offsets for the side projectiles of multi-shot
    pub const TRIPLE_SHOT_OFFSET: f32 = 12.0;
    pub const DOUBLE_SHOT_OFFSET: f32 = 10.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 5.0;
    pub const PROJECTILE_HEIGHT: f32 = 10.0;
    /// Upward movement per tick
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_DAMAGE: i32 = 10;

    /// Enemy defaults (before archetype multipliers)
    pub const ENEMY_WIDTH: f32 = 30.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    pub const ENEMY_BASE_SPEED: f32 = 3.0;
    pub const ENEMY_BASE_HP: i32 = 20;
    /// Difficulty scaling: per-level increments and hard caps
    pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.35;
    pub const ENEMY_SPEED_CAP: f32 = 7.0;
    pub const ENEMY_HP_PER_LEVEL: i32 = 5;
    pub const ENEMY_HP_CAP: i32 = 80;

    /// Spawn cadence
    pub const SPAWN_INTERVAL_MS: u64 = 2000;
    pub const SPAWN_INTERVAL_STEP_MS: u64 = 200;
    pub const SPAWN_INTERVAL_MIN_MS: u64 = 500;

    /// Damage and defense
    pub const CONTACT_DAMAGE: i32 = 10;
    pub const INVULNERABILITY_MS: u64 = 2000;

    /// Pickups
    pub const PICKUP_WIDTH: f32 = 20.0;
    pub const PICKUP_HEIGHT: f32 = 20.0;
    /// Downward movement per tick
    pub const PICKUP_SPEED: f32 = 2.0;
    /// Timed pickup effects (rapid/double/triple) last this long
    pub const PICKUP_EFFECT_MS: u64 = 5000;
    /// Chance (percent) that a destroyed enemy drops a pickup
    pub const PICKUP_DROP_PERCENT: u32 = 25;

    /// Waves and difficulty
    pub const WAVE_BASE_TARGET: u32 = 5;
    pub const WAVE_TARGET_PER_WAVE: u32 = 2;
    pub const WAVE_PAUSE_MS: u64 = 3000;
    pub const DIFFICULTY_MIN: u32 = 1;
    pub const DIFFICULTY_MAX: u32 = 10;

    /// Visual effect timings
    pub const EXPLOSION_MS: u64 = 300;
    pub const EXPLOSION_RADIUS: f32 = 30.0;
    pub const HIT_FLASH_MS: u64 = 120;
    pub const HIT_FLASH_RADIUS: f32 = 10.0;
    pub const PICKUP_FLASH_MS: u64 = 200;
    pub const PICKUP_FLASH_RADIUS: f32 = 16.0;
}

/// Target enemy count for a 1-based wave number
#[inline]
pub fn wave_target(wave: u32) -> u32 {
    consts::WAVE_BASE_TARGET + wave.saturating_sub(1) * consts::WAVE_TARGET_PER_WAVE
}

/// Difficulty level for a 1-based wave number and configured base
#[inline]
pub fn difficulty_for_wave(base_difficulty: u32, wave: u32) -> u32 {
    (base_difficulty + wave / 3).min(consts::DIFFICULTY_MAX)
}
