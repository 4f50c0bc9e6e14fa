//! Collision detection and resolution
//!
//! Pairwise AABB tests translated into damage, score, drops, and
//! removal flags. Removal is deferred to the end-of-frame sweep so no
//! collection is mutated while being traversed, and a kill can only be
//! credited once.

use super::spawn::roll_pickup_drop;
use super::state::{Effect, GameEvent, GameState, Pickup};
use crate::consts::CONTACT_DAMAGE;

/// Projectiles versus enemies. Each projectile damages the first live
/// enemy it overlaps and is destroyed on any hit, lethal or not. Score
/// and the pickup drop roll happen only on the killing hit.
pub fn resolve_projectile_hits(state: &mut GameState, now_ms: u64) {
    for projectile in state.projectiles.iter_mut() {
        if !projectile.alive {
            continue;
        }
        for enemy in state.enemies.iter_mut() {
            if !enemy.alive || !projectile.rect.intersects(&enemy.rect) {
                continue;
            }
            let lethal = enemy.take_damage(projectile.damage);
            projectile.alive = false;

            if lethal {
                state.score += enemy.score_value;
                state.effects.push(Effect::explosion(enemy.rect.center(), now_ms));
                state.events.push(GameEvent::Explosion);
                if let Some(kind) = roll_pickup_drop(&mut state.rng) {
                    state.pickups.push(Pickup::new(kind, enemy.rect.center()));
                    state.events.push(GameEvent::PickupDropped);
                }
            } else {
                state
                    .effects
                    .push(Effect::hit_flash(projectile.rect.center(), now_ms));
                state.events.push(GameEvent::ProjectileHit);
            }
            break;
        }
    }
}

/// Player versus enemies. Contact destroys every intersecting enemy
/// unconditionally; the player absorbs at most one fixed-damage hit
/// per frame, and none while invulnerable.
pub fn resolve_player_contact(state: &mut GameState, now_ms: u64) {
    let Some(player) = state.player.as_mut() else {
        return;
    };

    let mut contact = false;
    for enemy in state.enemies.iter_mut() {
        if !enemy.alive || !player.rect.intersects(&enemy.rect) {
            continue;
        }
        contact = true;
        enemy.alive = false;
        state.effects.push(Effect::explosion(enemy.rect.center(), now_ms));
        state.events.push(GameEvent::Explosion);
    }

    if contact {
        let was_invulnerable = player.invulnerable;
        player.take_damage(CONTACT_DAMAGE, now_ms);
        if !was_invulnerable {
            state.events.push(GameEvent::DamageTaken);
        }
    }
}

/// Player versus pickups. Every overlapping pickup is applied and
/// consumed; several may be collected in the same frame.
pub fn resolve_pickup_collection(state: &mut GameState, now_ms: u64) {
    let Some(player) = state.player.as_mut() else {
        return;
    };

    for pickup in state.pickups.iter_mut() {
        if !pickup.alive || !player.rect.intersects(&pickup.rect) {
            continue;
        }
        pickup.alive = false;
        player.apply_pickup(pickup.kind, now_ms);
        state
            .effects
            .push(Effect::pickup_flash(pickup.rect.center(), now_ms));
        state.events.push(GameEvent::PickupCollected(pickup.kind));
        log::debug!("Collected pickup: {}", pickup.kind.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Enemy, EnemyKind, GamePhase, PickupKind, Projectile};
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(12345);
        state.start_game(0);
        state.phase = GamePhase::Playing;
        state
    }

    fn enemy_at(x: f32, y: f32, hp: i32) -> Enemy {
        let mut enemy = Enemy::new(EnemyKind::Basic, x, 3.0, hp);
        enemy.rect.pos.y = y;
        enemy
    }

    fn projectile_at(center: Vec2) -> Projectile {
        let mut p = Projectile::new(center);
        p.rect = Rect::centered(center, PROJECTILE_WIDTH, PROJECTILE_HEIGHT);
        p
    }

    #[test]
    fn test_two_hits_kill_scores_once() {
        let mut state = playing_state();
        state.enemies.push(enemy_at(100.0, 100.0, 20));
        let center = state.enemies[0].rect.center();

        state.projectiles.push(projectile_at(center));
        resolve_projectile_hits(&mut state, 100);
        assert_eq!(state.score, 0, "non-lethal hit must not award score");
        assert_eq!(state.enemies[0].hp, 10);
        assert!(!state.projectiles[0].alive, "projectile dies on any hit");

        state.sweep_dead(100);
        state.projectiles.push(projectile_at(center));
        resolve_projectile_hits(&mut state, 200);
        assert_eq!(state.score, EnemyKind::Basic.score_value());
        assert!(!state.enemies[0].alive);

        // Re-running resolution the same frame credits nothing further
        state.projectiles.push(projectile_at(center));
        resolve_projectile_hits(&mut state, 200);
        assert_eq!(state.score, EnemyKind::Basic.score_value());
    }

    #[test]
    fn test_projectile_hits_only_first_enemy() {
        let mut state = playing_state();
        state.enemies.push(enemy_at(100.0, 100.0, 20));
        state.enemies.push(enemy_at(100.0, 100.0, 20));
        let center = state.enemies[0].rect.center();
        state.projectiles.push(projectile_at(center));

        resolve_projectile_hits(&mut state, 0);
        assert_eq!(state.enemies[0].hp, 10);
        assert_eq!(state.enemies[1].hp, 20, "only the first overlap is damaged");
    }

    #[test]
    fn test_contact_destroys_all_but_damages_once() {
        let mut state = playing_state();
        let player_rect = state.player.as_ref().unwrap().rect;
        let center = player_rect.center();

        for _ in 0..3 {
            let mut enemy = enemy_at(0.0, 0.0, 20);
            enemy.rect = Rect::centered(center, ENEMY_WIDTH, ENEMY_HEIGHT);
            state.enemies.push(enemy);
        }

        resolve_player_contact(&mut state, 1000);
        let player = state.player.as_ref().unwrap();
        assert_eq!(player.hp, PLAYER_MAX_HP - CONTACT_DAMAGE);
        assert!(player.invulnerable);
        assert!(state.enemies.iter().all(|e| !e.alive));
    }

    #[test]
    fn test_contact_while_invulnerable_still_kills_enemy() {
        let mut state = playing_state();
        let center = state.player.as_ref().unwrap().rect.center();
        {
            let player = state.player.as_mut().unwrap();
            player.invulnerable = true;
            player.invulnerable_since_ms = 1000;
        }
        let mut enemy = enemy_at(0.0, 0.0, 20);
        enemy.rect = Rect::centered(center, ENEMY_WIDTH, ENEMY_HEIGHT);
        state.enemies.push(enemy);

        resolve_player_contact(&mut state, 1001);
        assert!(!state.enemies[0].alive, "contact is always lethal to the enemy");
        assert_eq!(state.player.as_ref().unwrap().hp, PLAYER_MAX_HP);
        assert!(!state.events.contains(&GameEvent::DamageTaken));
    }

    #[test]
    fn test_multiple_pickups_collected_same_frame() {
        let mut state = playing_state();
        let center = state.player.as_ref().unwrap().rect.center();
        state.pickups.push(Pickup::new(PickupKind::Heal, center));
        state.pickups.push(Pickup::new(PickupKind::ExtraLife, center));

        {
            let player = state.player.as_mut().unwrap();
            player.hp = 40;
        }
        resolve_pickup_collection(&mut state, 0);

        let player = state.player.as_ref().unwrap();
        assert_eq!(player.hp, 40 + PLAYER_MAX_HP / 2);
        assert_eq!(player.lives, PLAYER_START_LIVES + 1);
        assert!(state.pickups.iter().all(|p| !p.alive));
    }

    #[test]
    fn test_dead_projectile_cannot_hit() {
        let mut state = playing_state();
        state.enemies.push(enemy_at(100.0, 100.0, 20));
        let center = state.enemies[0].rect.center();
        let mut p = projectile_at(center);
        p.alive = false;
        state.projectiles.push(p);

        resolve_projectile_hits(&mut state, 0);
        assert_eq!(state.enemies[0].hp, 20);
    }

    #[test]
    fn test_no_player_is_a_noop() {
        let mut state = GameState::new(1);
        state.pickups.push(Pickup::new(PickupKind::Heal, Vec2::new(10.0, 10.0)));
        resolve_player_contact(&mut state, 0);
        resolve_pickup_collection(&mut state, 0);
        assert!(state.pickups[0].alive);
    }
}
