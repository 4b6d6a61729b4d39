#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameOverPhase {
    /// Fading the screen in before the wait-for-input step.
    Entering,
    /// Screen visible, waiting indefinitely for the continue input.
    Showing,
    /// Screen presentation suppressed by configuration; the continue input
    /// counts as already pressed.
    Hidden,
    /// Fading out toward the dispatch target.
    FadingOut,
}

/// End-of-run presentation scene. Whether anything is shown, and which scene
/// follows, both come from configuration resolved at startup.
pub(crate) struct GameOverScene {
    show_screen: bool,
    dispatch: GameOverDispatch,
    phase: GameOverPhase,
    fade_out_called: bool,
}

impl GameOverScene {
    pub(crate) fn new(config: &FlowConfig) -> Self {
        Self {
            show_screen: config.show_game_over_screen,
            dispatch: GameOverDispatch::from_config(config),
            phase: GameOverPhase::Hidden,
            fade_out_called: false,
        }
    }

    fn begin_fade_out(&mut self, world: &mut GameWorld) {
        // The fade-out-and-dispatch sequence runs once per occurrence.
        if self.fade_out_called {
            return;
        }
        self.fade_out_called = true;
        let ticks = match self.dispatch {
            GameOverDispatch::ToTitle => SLOW_FADE_TICKS,
            GameOverDispatch::ToCustomEvent(_) => GAME_OVER_DISPATCH_FADE_TICKS,
        };
        world.screen.start_fade_out(ticks);
        self.phase = GameOverPhase::FadingOut;
    }

    fn dispatch_next(&self, world: &mut GameWorld) -> SceneCommand {
        match self.dispatch {
            GameOverDispatch::ToTitle => SceneCommand::Goto(SceneRequest::new(
                SceneId::Title,
                TransitionReason::TitleFallback,
            )),
            GameOverDispatch::ToCustomEvent(handle) => {
                world.party.revive_leader();
                world.events.reserve(handle);
                info!(event = handle.get(), "after_game_over_event_reserved");
                // The map starts with the screen still black; the reserved
                // event is responsible for fading back in.
                SceneCommand::Goto(SceneRequest::new(
                    SceneId::Map,
                    TransitionReason::GameOverDispatch,
                ))
            }
        }
    }
}

impl Scene for GameOverScene {
    fn enter(&mut self, reason: TransitionReason, world: &mut GameWorld) {
        self.fade_out_called = false;
        world.battle = None;
        if self.show_screen {
            world.audio.stop_bgm();
            world.audio.play_me(MusicEffect::GameOver);
            world.screen.cut_to_black();
            world.screen.start_fade_in(SLOW_FADE_TICKS);
            self.phase = GameOverPhase::Entering;
        } else {
            self.phase = GameOverPhase::Hidden;
        }
        info!(
            reason = ?reason,
            show_screen = self.show_screen,
            "game_over_entered"
        );
    }

    fn update(&mut self, input: &InputSnapshot, world: &mut GameWorld) -> SceneCommand {
        world.screen.update();
        match self.phase {
            GameOverPhase::Entering => {
                if !world.screen.is_fading() {
                    self.phase = GameOverPhase::Showing;
                }
                SceneCommand::None
            }
            GameOverPhase::Showing => {
                if input.ok_pressed() {
                    self.begin_fade_out(world);
                }
                SceneCommand::None
            }
            GameOverPhase::Hidden => {
                self.begin_fade_out(world);
                SceneCommand::None
            }
            GameOverPhase::FadingOut => {
                if world.screen.is_fading() {
                    SceneCommand::None
                } else {
                    self.dispatch_next(world)
                }
            }
        }
    }
}
