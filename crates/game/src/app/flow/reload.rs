#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReloadOutcome {
    Success,
    NoSaveFound,
    LoadError,
}

/// One-shot flow: reload the most recent save, or fall back to the title
/// screen. Reached only through the explicit reload-last-save command, never
/// from the defeat flow itself.
pub(crate) struct ReloadLastSaveScene {
    manager: SaveManager,
    load_success: bool,
    resolved: bool,
}

impl ReloadLastSaveScene {
    pub(crate) fn new(manager: SaveManager) -> Self {
        Self {
            manager,
            load_success: false,
            resolved: false,
        }
    }

    fn resolve(&mut self, world: &mut GameWorld) -> (ReloadOutcome, SceneRequest) {
        let title = SceneRequest::new(SceneId::Title, TransitionReason::TitleFallback);
        let slot = world.system.save_slot();

        if !self.manager.savefile_exists(slot) {
            // Not an error: the game has simply never been saved.
            info!(slot, "reload_no_savefile");
            return (ReloadOutcome::NoSaveFound, title);
        }

        match self.manager.load_game(slot) {
            Ok(save) => {
                save.apply_to_world(world);
                world.screen.cut_to_black();
                Self::reload_map_if_updated(&save, world);
                self.load_success = true;
                info!(slot, map_id = save.map_id, "reload_success");
                (
                    ReloadOutcome::Success,
                    SceneRequest::new(SceneId::Map, TransitionReason::SaveReloaded),
                )
            }
            Err(error) => {
                warn!(slot, error = %error, "reload_load_error");
                (ReloadOutcome::LoadError, title)
            }
        }
    }

    /// Re-places the player and forces a map rebuild when the loaded data was
    /// saved against a different content version.
    fn reload_map_if_updated(save: &SaveGame, world: &mut GameWorld) {
        if save.version_id != world.data_version_id() {
            world.map.reserve_transfer(save.map_id, save.player_x, save.player_y);
            world.map.request_map_reload();
        }
    }
}

impl Scene for ReloadLastSaveScene {
    fn enter(&mut self, _reason: TransitionReason, _world: &mut GameWorld) {
        self.load_success = false;
        self.resolved = false;
    }

    fn update(&mut self, _input: &InputSnapshot, world: &mut GameWorld) -> SceneCommand {
        if self.resolved {
            return SceneCommand::None;
        }
        self.resolved = true;
        let (outcome, request) = self.resolve(world);
        debug!(outcome = ?outcome, "reload_resolved");
        SceneCommand::Goto(request)
    }

    fn exit(&mut self, world: &mut GameWorld) {
        // Post-load bookkeeping fires only after a successful reload.
        if self.load_success {
            world.system.on_after_load();
        }
    }
}
