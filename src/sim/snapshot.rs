//! Read-only render snapshots
//!
//! The renderer collaborator consumes one of these per frame and never
//! touches the live simulation. Everything is plain serializable data
//! so a headless shell can also dump frames for inspection.

use serde::Serialize;

use super::state::{EffectKind, GamePhase, GameState, WavePhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityType {
    Player,
    Projectile,
    Enemy,
    Pickup,
    Effect,
}

/// One drawable entity
#[derive(Debug, Clone, Serialize)]
pub struct EntitySnapshot {
    pub entity_type: EntityType,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Archetype / pickup / effect tag for sprite selection
    pub tag: &'static str,
    /// Health as 0..=1 where the entity has health; 1.0 otherwise
    pub hp_fraction: f32,
}

/// Per-frame view of the whole session
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub phase: &'static str,
    pub score: u64,
    pub best_score: u64,
    pub wave: u32,
    pub difficulty: u32,
    /// Logical session time of this frame, milliseconds
    pub now_ms: u64,
    /// True during the inter-wave pause
    pub wave_pause: bool,
    /// Milliseconds left of the inter-wave pause; 0 outside it
    pub wave_pause_remaining_ms: u64,
    pub lives: u32,
    pub player_invulnerable: bool,
    /// Names of the player's active timed effects
    pub active_effects: Vec<&'static str>,
    pub menu_index: usize,
    pub base_difficulty: u32,
    pub entities: Vec<EntitySnapshot>,
}

fn phase_name(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Menu => "menu",
        GamePhase::Playing => "playing",
        GamePhase::Paused => "paused",
        GamePhase::Settings => "settings",
        GamePhase::GameOver => "game_over",
    }
}

impl RenderSnapshot {
    /// Capture the current frame at the given logical timestamp
    pub fn capture(state: &GameState, now_ms: u64) -> Self {
        let mut entities = Vec::with_capacity(
            1 + state.projectiles.len()
                + state.enemies.len()
                + state.pickups.len()
                + state.effects.len(),
        );

        if let Some(player) = &state.player {
            entities.push(EntitySnapshot {
                entity_type: EntityType::Player,
                x: player.rect.pos.x,
                y: player.rect.pos.y,
                width: player.rect.width,
                height: player.rect.height,
                tag: "player",
                hp_fraction: player.hp_fraction(),
            });
        }
        for projectile in &state.projectiles {
            entities.push(EntitySnapshot {
                entity_type: EntityType::Projectile,
                x: projectile.rect.pos.x,
                y: projectile.rect.pos.y,
                width: projectile.rect.width,
                height: projectile.rect.height,
                tag: "projectile",
                hp_fraction: 1.0,
            });
        }
        for enemy in &state.enemies {
            entities.push(EntitySnapshot {
                entity_type: EntityType::Enemy,
                x: enemy.rect.pos.x,
                y: enemy.rect.pos.y,
                width: enemy.rect.width,
                height: enemy.rect.height,
                tag: enemy.kind.as_str(),
                hp_fraction: enemy.hp_fraction(),
            });
        }
        for pickup in &state.pickups {
            entities.push(EntitySnapshot {
                entity_type: EntityType::Pickup,
                x: pickup.rect.pos.x,
                y: pickup.rect.pos.y,
                width: pickup.rect.width,
                height: pickup.rect.height,
                tag: pickup.kind.as_str(),
                hp_fraction: 1.0,
            });
        }
        for effect in &state.effects {
            entities.push(EntitySnapshot {
                entity_type: EntityType::Effect,
                x: effect.pos.x - effect.radius,
                y: effect.pos.y - effect.radius,
                width: effect.radius * 2.0,
                height: effect.radius * 2.0,
                tag: match effect.kind {
                    EffectKind::Explosion => "explosion",
                    EffectKind::HitFlash => "hit_flash",
                    EffectKind::PickupFlash => "pickup_flash",
                },
                hp_fraction: 1.0,
            });
        }

        let active_effects = state
            .player
            .as_ref()
            .map(|p| {
                let mut names: Vec<&'static str> = p
                    .active_effects
                    .keys()
                    .map(|e| match e {
                        super::state::TimedEffect::RapidFire => "rapid_fire",
                        super::state::TimedEffect::DoubleShot => "double_shot",
                        super::state::TimedEffect::TripleShot => "triple_shot",
                    })
                    .collect();
                names.sort_unstable();
                names
            })
            .unwrap_or_default();

        let wave_pause = state.wave.phase == WavePhase::Complete;
        let wave_pause_remaining_ms = if wave_pause {
            crate::consts::WAVE_PAUSE_MS
                .saturating_sub(now_ms.saturating_sub(state.wave.pause_started_ms))
        } else {
            0
        };

        Self {
            phase: phase_name(state.phase),
            score: state.score,
            best_score: state.best_score,
            wave: state.wave.wave,
            difficulty: state.wave.difficulty,
            now_ms,
            wave_pause,
            wave_pause_remaining_ms,
            lives: state.player.as_ref().map(|p| p.lives).unwrap_or(0),
            player_invulnerable: state.player.as_ref().is_some_and(|p| p.invulnerable),
            active_effects,
            menu_index: state.menu_index,
            base_difficulty: state.base_difficulty,
            entities,
        }
    }
}
