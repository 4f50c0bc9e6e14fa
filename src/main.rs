//! Nova Strike entry point
//!
//! Runs a headless demo session: a small autopilot plays the game at
//! the fixed tick rate so the simulation core can be exercised and
//! profiled without a renderer attached. A graphical shell would drive
//! `tick` the same way and draw from `RenderSnapshot`.

use nova_strike::audio::AudioManager;
use nova_strike::consts::TICK_MS;
use nova_strike::highscores::HighScoreStore;
use nova_strike::settings::{SETTINGS_FILE, Settings};
use nova_strike::sim::{GamePhase, GameState, RenderSnapshot, TickInput, tick};

/// Demo run length: ten minutes of simulated play
const MAX_DEMO_TICKS: u64 = 10 * 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Nova Strike (headless demo) starting...");

    let settings = Settings::load(SETTINGS_FILE);
    let store = HighScoreStore::default();
    let best = store.load_high_score();

    let mut state = GameState::new(0x5eed_cafe);
    state.best_score = best;
    state.set_base_difficulty(settings.base_difficulty);

    let mut audio = AudioManager::new();
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_music_volume(settings.music_volume);

    // Select "Start Game" from the menu
    tick(
        &mut state,
        &TickInput {
            select: true,
            ..Default::default()
        },
    );

    let mut ticks = 0u64;
    while state.phase == GamePhase::Playing && ticks < MAX_DEMO_TICKS {
        ticks += 1;
        let input = autopilot_input(&state, ticks * TICK_MS);
        tick(&mut state, &input);
        for event in state.events.drain(..) {
            audio.handle_event(event);
        }
    }

    let snapshot = RenderSnapshot::capture(&state, ticks * TICK_MS);
    println!(
        "Demo over after {} ticks: phase={}, score={}, wave={}, difficulty={}",
        ticks, snapshot.phase, snapshot.score, snapshot.wave, snapshot.difficulty
    );

    if state.best_score > best {
        store.save_high_score(state.best_score as i64);
        println!("New best score: {}", state.best_score);
    }
}

/// Minimal demo pilot: line up under the nearest enemy and hold fire
fn autopilot_input(state: &GameState, now_ms: u64) -> TickInput {
    let mut input = TickInput {
        now_ms,
        fire: true,
        ..Default::default()
    };

    let Some(player) = &state.player else {
        return input;
    };
    let player_x = player.rect.center().x;

    let target = state
        .enemies
        .iter()
        .filter(|e| e.alive)
        .min_by(|a, b| {
            let da = (a.rect.center().x - player_x).abs();
            let db = (b.rect.center().x - player_x).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|e| e.rect.center().x);

    if let Some(target_x) = target {
        if target_x < player_x - 2.0 {
            input.left = true;
        } else if target_x > player_x + 2.0 {
            input.right = true;
        }
    }
    input
}
