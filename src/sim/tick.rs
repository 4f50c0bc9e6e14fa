//! Per-frame simulation step
//!
//! Drives the top-level state machine and, while playing, the fixed
//! frame order: input application, player timer/effect update, entity
//! updates, wave/difficulty update, collision resolution. Timestamps
//! are logical milliseconds supplied by the caller; the core never
//! reads a clock.

use super::collision::{resolve_pickup_collection, resolve_player_contact, resolve_projectile_hits};
use super::spawn::{spawn_enemy, spawn_interval_ms};
use super::state::{GameEvent, GamePhase, GameState, MenuItem, WavePhase};
use crate::consts::*;

/// Input for a single tick. Movement and fire report keys currently
/// held; everything else reports keys pressed this frame.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Logical timestamp in milliseconds, monotonically increasing
    pub now_ms: u64,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub menu_up: bool,
    pub menu_down: bool,
    pub select: bool,
    /// Escape / return to the previous screen
    pub back: bool,
    pub pause: bool,
    /// Restart from the game-over screen
    pub restart: bool,
    pub difficulty_up: bool,
    pub difficulty_down: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Menu => tick_menu(state, input),
        GamePhase::Settings => tick_settings(state, input),
        GamePhase::Paused => tick_paused(state, input),
        GamePhase::GameOver => tick_game_over(state, input),
        GamePhase::Playing => tick_playing(state, input),
    }
}

fn tick_menu(state: &mut GameState, input: &TickInput) {
    let item_count = MenuItem::ALL.len();
    if input.menu_up {
        state.menu_index = (state.menu_index + item_count - 1) % item_count;
    }
    if input.menu_down {
        state.menu_index = (state.menu_index + 1) % item_count;
    }
    if input.select {
        match MenuItem::ALL[state.menu_index] {
            MenuItem::Start => {
                state.start_game(input.now_ms);
                state.events.push(GameEvent::MusicStart);
            }
            MenuItem::Settings => {
                state.settings_return = GamePhase::Menu;
                state.phase = GamePhase::Settings;
            }
            MenuItem::Quit => {
                state.quit_requested = true;
            }
        }
    }
}

fn tick_settings(state: &mut GameState, input: &TickInput) {
    if input.difficulty_up {
        state.set_base_difficulty(state.base_difficulty + 1);
    }
    if input.difficulty_down {
        state.set_base_difficulty(state.base_difficulty.saturating_sub(1));
    }
    if input.back || input.select {
        log::info!("Settings closed: base difficulty {}", state.base_difficulty);
        state.phase = state.settings_return;
    }
}

fn tick_paused(state: &mut GameState, input: &TickInput) {
    if input.pause {
        state.phase = GamePhase::Playing;
    } else if input.select {
        state.settings_return = GamePhase::Paused;
        state.phase = GamePhase::Settings;
    }
}

fn tick_game_over(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.start_game(input.now_ms);
        state.events.push(GameEvent::MusicStart);
    } else if input.back {
        state.phase = GamePhase::Menu;
        state.menu_index = 0;
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput) {
    if input.pause {
        state.phase = GamePhase::Paused;
        return;
    }

    let now = input.now_ms;

    // Input application: movement and cooldown-gated fire
    if let Some(player) = state.player.as_mut() {
        player.apply_movement(input.up, input.down, input.left, input.right);
        if input.fire {
            let shots = player.fire(now);
            if !shots.is_empty() {
                state.events.push(GameEvent::Shoot);
                state.projectiles.extend(shots);
            }
        }
        player.update_timers(now);
    }

    // Entity collection updates
    for projectile in state.projectiles.iter_mut() {
        projectile.update();
    }
    for enemy in state.enemies.iter_mut() {
        enemy.update();
    }
    for pickup in state.pickups.iter_mut() {
        pickup.update();
    }

    update_wave(state, now);

    // Collision resolution, in fixed order
    resolve_projectile_hits(state, now);
    resolve_player_contact(state, now);
    resolve_pickup_collection(state, now);

    state.sweep_dead(now);

    let alive = state.player.as_ref().is_some_and(|p| p.is_alive());
    if !alive {
        if state.score > state.best_score {
            log::info!("New best score: {}", state.score);
            state.best_score = state.score;
        }
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        state.events.push(GameEvent::MusicStop);
    }
}

/// Wave/difficulty controller: spawn cadence while accumulating, then
/// a fixed pause once the wave is cleared before advancing.
fn update_wave(state: &mut GameState, now_ms: u64) {
    match state.wave.phase {
        WavePhase::Accumulating => {
            if !state.wave.all_spawned()
                && now_ms.saturating_sub(state.wave.last_spawn_ms)
                    >= spawn_interval_ms(state.wave.difficulty)
            {
                let enemy = spawn_enemy(&mut state.rng, state.wave.difficulty, state.wave.wave);
                state.enemies.push(enemy);
                state.wave.spawned += 1;
                state.wave.last_spawn_ms = now_ms;
            }

            if state.wave.all_spawned() && state.live_enemies() == 0 {
                log::info!("Wave {} complete", state.wave.wave);
                state.wave.phase = WavePhase::Complete;
                state.wave.pause_started_ms = now_ms;
                state.events.push(GameEvent::WaveComplete(state.wave.wave));
            }
        }
        WavePhase::Complete => {
            if now_ms.saturating_sub(state.wave.pause_started_ms) >= WAVE_PAUSE_MS {
                state.wave.advance(state.base_difficulty, now_ms);
                log::info!(
                    "Wave {} starting: target {}, difficulty {}",
                    state.wave.wave,
                    state.wave.target,
                    state.wave.difficulty
                );
            }
        }
    }
}
