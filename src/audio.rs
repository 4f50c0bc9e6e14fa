//! Audio event sink
//!
//! Maps simulation events to sound effects. Every call is
//! fire-and-forget: playback can never block or fail the simulation,
//! and a disabled sink changes nothing about gameplay. The headless
//! build logs effects instead of synthesizing them; a real backend
//! plugs in behind `play`.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fired
    Shoot,
    /// Enemy destroyed
    Explosion,
    /// Projectile hit without a kill
    Hit,
    /// Pickup collected
    PickupCollect,
    /// Player took damage
    DamageTaken,
    /// Wave cleared
    WaveClear,
    /// Run ended
    GameOver,
}

/// Audio manager for the game
pub struct AudioManager {
    enabled: bool,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    music_playing: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            enabled: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            music_playing: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn effective_volume(&self) -> f32 {
        if self.enabled {
            self.master_volume * self.sfx_volume
        } else {
            0.0
        }
    }

    /// Consume one simulation event. Events with no sound mapping are
    /// ignored.
    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Shoot => self.play(SoundEffect::Shoot),
            GameEvent::Explosion => self.play(SoundEffect::Explosion),
            GameEvent::ProjectileHit => self.play(SoundEffect::Hit),
            GameEvent::PickupCollected(_) => self.play(SoundEffect::PickupCollect),
            GameEvent::DamageTaken => self.play(SoundEffect::DamageTaken),
            GameEvent::WaveComplete(_) => self.play(SoundEffect::WaveClear),
            GameEvent::GameOver => self.play(SoundEffect::GameOver),
            GameEvent::MusicStart => self.start_music(),
            GameEvent::MusicStop => self.stop_music(),
            GameEvent::PickupDropped => {}
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let volume = self.effective_volume();
        if volume <= 0.0 {
            return;
        }
        log::debug!("sfx {:?} at volume {:.2}", effect, volume);
    }

    /// Start looping background music
    pub fn start_music(&mut self) {
        if !self.enabled || self.music_playing {
            return;
        }
        self.music_playing = true;
        log::debug!("music start at volume {:.2}", self.master_volume * self.music_volume);
    }

    /// Stop background music
    pub fn stop_music(&mut self) {
        if !self.music_playing {
            return;
        }
        self.music_playing = false;
        log::debug!("music stop");
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }
}
