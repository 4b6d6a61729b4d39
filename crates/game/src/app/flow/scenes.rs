pub(crate) struct TitleScene;

impl Scene for TitleScene {
    fn enter(&mut self, reason: TransitionReason, world: &mut GameWorld) {
        world.battle = None;
        world.screen.start_fade_in(FADE_TICKS);
        info!(reason = ?reason, "title_entered");
    }

    fn update(&mut self, _input: &InputSnapshot, world: &mut GameWorld) -> SceneCommand {
        world.screen.update();
        SceneCommand::None
    }
}

/// Field scene. Hosts the running battle session, drains reserved events to
/// the interpreter, and performs the per-tick defeat check.
pub(crate) struct MapScene {
    router: DefeatRouter,
    executed_events: Vec<EventHandle>,
}

impl MapScene {
    pub(crate) fn new(router: DefeatRouter) -> Self {
        Self {
            router,
            executed_events: Vec::new(),
        }
    }

    /// A reload bypasses the normal transfer fade, so the map fades itself in.
    /// A game-over dispatch deliberately does not: the screen stays black
    /// until the dispatched event fades it back in.
    fn needs_fade_in(reason: TransitionReason) -> bool {
        matches!(
            reason,
            TransitionReason::Boot | TransitionReason::SaveReloaded
        )
    }

    #[cfg(test)]
    pub(crate) fn executed_events(&self) -> &[EventHandle] {
        &self.executed_events
    }
}

impl Scene for MapScene {
    fn enter(&mut self, reason: TransitionReason, world: &mut GameWorld) {
        world.map.apply_pending_transfer();
        if Self::needs_fade_in(reason) {
            world.screen.start_fade_in(FADE_TICKS);
        }
        info!(
            reason = ?reason,
            map_id = world.map.map_id(),
            "map_entered"
        );
    }

    fn update(&mut self, _input: &InputSnapshot, world: &mut GameWorld) -> SceneCommand {
        world.screen.update();

        // Interpreter stand-in: pick up one reserved event per tick. The
        // event runs in whatever context reserved it, battle included.
        if let Some(handle) = world.events.take_next() {
            info!(event = handle.get(), "event_started");
            self.executed_events.push(handle);
        }

        if world.battle.as_ref().is_some_and(BattleSession::is_active) {
            if world.party.is_all_dead() {
                match self.router.process_battle_defeat(world) {
                    BattleDefeatOutcome::GameOver(request) => {
                        return SceneCommand::Goto(request);
                    }
                    BattleDefeatOutcome::BattleEnded
                    | BattleDefeatOutcome::EventScheduled(_) => {}
                }
            }
            // The battle owns the tick; no map-level defeat check.
            return SceneCommand::None;
        }

        if let Some(request) = self.router.check_map_defeat(world) {
            return SceneCommand::Goto(request);
        }
        SceneCommand::None
    }
}
