use tracing::debug;

/// One-shot music effects the flow can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicEffect {
    Defeat,
    GameOver,
}

/// Background-music channel. Playback itself lives outside this crate; the
/// channel records what was asked of it so callers can verify ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioChannel {
    current_bgm: Option<String>,
    saved_bgm: Option<String>,
    effects: Vec<MusicEffect>,
}

impl AudioChannel {
    pub fn play_bgm(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!(bgm = %name, "bgm_started");
        self.saved_bgm = Some(name.clone());
        self.current_bgm = Some(name);
    }

    /// Stops playback but keeps the saved track, so `replay_bgm` can restore it.
    pub fn stop_bgm(&mut self) {
        if self.current_bgm.take().is_some() {
            debug!("bgm_stopped");
        }
    }

    pub fn replay_bgm(&mut self) {
        if let Some(name) = self.saved_bgm.clone() {
            debug!(bgm = %name, "bgm_replayed");
            self.current_bgm = Some(name);
        }
    }

    pub fn play_me(&mut self, effect: MusicEffect) {
        debug!(effect = ?effect, "music_effect");
        self.effects.push(effect);
    }

    pub fn current_bgm(&self) -> Option<&str> {
        self.current_bgm.as_deref()
    }

    pub fn effects(&self) -> &[MusicEffect] {
        &self.effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_then_replay_restores_the_saved_track() {
        let mut audio = AudioChannel::default();
        audio.play_bgm("overworld");
        audio.stop_bgm();
        assert_eq!(audio.current_bgm(), None);

        audio.replay_bgm();
        assert_eq!(audio.current_bgm(), Some("overworld"));
    }

    #[test]
    fn replay_without_a_saved_track_is_a_noop() {
        let mut audio = AudioChannel::default();
        audio.replay_bgm();
        assert_eq!(audio.current_bgm(), None);
    }

    #[test]
    fn effects_record_in_play_order() {
        let mut audio = AudioChannel::default();
        audio.play_me(MusicEffect::Defeat);
        audio.play_me(MusicEffect::GameOver);
        assert_eq!(
            audio.effects(),
            &[MusicEffect::Defeat, MusicEffect::GameOver]
        );
    }
}
