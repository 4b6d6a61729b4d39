/// Outcome of routing a battle defeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BattleDefeatOutcome {
    /// Losable battle: the loss is recorded and play continues.
    BattleEnded,
    /// Standard path: control moves to the game-over scene.
    GameOver(SceneRequest),
    /// A party-death event was reserved in place of the game-over entry; the
    /// battle keeps running until the event itself issues a scene command.
    EventScheduled(EventHandle),
}

/// Routes the instant of detected full-party defeat.
///
/// With a party-death event configured, the automatic game-over entry is
/// replaced wholesale. The after-game-over dispatch then only ever runs if
/// that event issues an explicit game-over of its own; an event that never
/// does so keeps the after-event from firing, by design.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DefeatRouter {
    handler: DefeatHandler,
}

impl DefeatRouter {
    pub(crate) fn new(handler: DefeatHandler) -> Self {
        Self { handler }
    }

    /// Battle branch. Defeat feedback plays before the routing decision so
    /// the player sees the loss no matter which path is taken.
    pub(crate) fn process_battle_defeat(&self, world: &mut GameWorld) -> BattleDefeatOutcome {
        if let Some(battle) = world.battle.as_mut() {
            battle.push_message("The party was defeated.");
        }
        world.audio.play_me(MusicEffect::Defeat);

        if world.battle.as_ref().is_some_and(BattleSession::can_lose) {
            world.audio.replay_bgm();
            if let Some(battle) = world.battle.as_mut() {
                battle.end(BattleResult::Defeat);
            }
            return BattleDefeatOutcome::BattleEnded;
        }

        match self.handler {
            DefeatHandler::Standard => {
                if let Some(battle) = world.battle.as_mut() {
                    battle.end(BattleResult::Defeat);
                }
                BattleDefeatOutcome::GameOver(SceneRequest::new(
                    SceneId::GameOver,
                    TransitionReason::Defeat,
                ))
            }
            DefeatHandler::CustomEvent(handle) => {
                world.audio.stop_bgm();
                world.party.revive_leader();
                world.events.reserve(handle);
                debug!(event = handle.get(), "party_death_event_reserved");
                BattleDefeatOutcome::EventScheduled(handle)
            }
        }
    }

    /// Map branch, evaluated once per tick while no battle is running.
    pub(crate) fn check_map_defeat(&self, world: &mut GameWorld) -> Option<SceneRequest> {
        if !world.party.is_all_dead() {
            return None;
        }
        match self.handler {
            DefeatHandler::Standard => Some(SceneRequest::new(
                SceneId::GameOver,
                TransitionReason::Defeat,
            )),
            DefeatHandler::CustomEvent(handle) => {
                world.party.revive_leader();
                world.events.reserve(handle);
                debug!(event = handle.get(), "party_death_event_reserved");
                None
            }
        }
    }
}
