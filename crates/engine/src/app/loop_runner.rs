use tracing::{debug, info};

use super::scene::{InputSnapshot, SceneMachine};
use crate::world::GameWorld;

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub max_ticks: u64,
    pub log_interval_ticks: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            max_ticks: 3600,
            log_interval_ticks: 600,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    QuitRequested { ticks_run: u64 },
    TickLimit { ticks_run: u64 },
}

/// Fixed-tick headless loop: one scene update per tick until the input
/// source requests quit or the tick budget runs out.
pub fn run_flow(
    config: &LoopConfig,
    machine: &mut SceneMachine,
    world: &mut GameWorld,
    mut input_source: impl FnMut(u64) -> InputSnapshot,
) -> RunOutcome {
    let max_ticks = config.max_ticks.max(1);
    let log_interval = config.log_interval_ticks.max(1);
    info!(max_ticks, log_interval, "loop_config");

    for tick in 0..max_ticks {
        let input = input_source(tick);
        if input.quit_requested() {
            info!(tick, "quit_requested");
            return RunOutcome::QuitRequested { ticks_run: tick };
        }
        machine.update(&input, world);

        if (tick + 1) % log_interval == 0 {
            debug!(
                tick,
                scene = ?machine.active_scene(),
                pending_events = world.events.len(),
                "tick_status"
            );
        }
    }

    RunOutcome::TickLimit {
        ticks_run: max_ticks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::scene::{Scene, SceneCommand, SceneId, TransitionReason};
    use crate::party::{Member, Party};

    struct IdleScene;

    impl Scene for IdleScene {
        fn enter(&mut self, _reason: TransitionReason, _world: &mut GameWorld) {}

        fn update(&mut self, _input: &InputSnapshot, _world: &mut GameWorld) -> SceneCommand {
            SceneCommand::None
        }
    }

    fn idle_machine() -> SceneMachine {
        SceneMachine::new(
            Box::new(IdleScene),
            Box::new(IdleScene),
            Box::new(IdleScene),
            Box::new(IdleScene),
        )
    }

    fn test_world() -> GameWorld {
        GameWorld::new(Party::new(vec![Member::new("Avery", 50)]), 1)
    }

    #[test]
    fn loop_stops_at_tick_limit() {
        let mut machine = idle_machine();
        let mut world = test_world();
        machine.boot(SceneId::Title, &mut world);

        let config = LoopConfig {
            max_ticks: 10,
            ..LoopConfig::default()
        };
        let outcome = run_flow(&config, &mut machine, &mut world, |_| InputSnapshot::empty());
        assert_eq!(outcome, RunOutcome::TickLimit { ticks_run: 10 });
    }

    #[test]
    fn quit_request_ends_the_loop_before_that_tick_updates() {
        let mut machine = idle_machine();
        let mut world = test_world();
        machine.boot(SceneId::Title, &mut world);

        let config = LoopConfig::default();
        let outcome = run_flow(&config, &mut machine, &mut world, |tick| {
            InputSnapshot::empty().with_quit_requested(tick == 3)
        });
        assert_eq!(outcome, RunOutcome::QuitRequested { ticks_run: 3 });
    }
}
