//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed frame step, logical timestamps passed in by the caller
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod rect;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use snapshot::{EntitySnapshot, EntityType, RenderSnapshot};
pub use state::{
    Effect, EffectKind, Enemy, EnemyKind, GameEvent, GamePhase, GameState, MenuItem, Pickup,
    PickupKind, Player, Projectile, TimedEffect, WavePhase, WaveState,
};
pub use tick::{TickInput, tick};
