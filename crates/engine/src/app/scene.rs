use tracing::info;

use crate::world::GameWorld;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Title,
    Map,
    GameOver,
    ReloadSave,
}

/// Why a scene change was requested. Destination scenes branch on this at
/// entry instead of asking which scene ran before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionReason {
    /// Initial scene activation at startup.
    Boot,
    /// The party was defeated and the standard game-over path was taken.
    Defeat,
    /// Leaving the game-over scene toward the map, screen already black.
    GameOverDispatch,
    /// A save was just reloaded; the map must fade itself back in.
    SaveReloaded,
    /// A flow ended or fell back to the title screen.
    TitleFallback,
    /// An externally-issued command requested the transition.
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneRequest {
    pub target: SceneId,
    pub reason: TransitionReason,
}

impl SceneRequest {
    pub fn new(target: SceneId, reason: TransitionReason) -> Self {
        Self { target, reason }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Goto(SceneRequest),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    ok_pressed: bool,
    quit_requested: bool,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_ok_pressed(mut self, ok_pressed: bool) -> Self {
        self.ok_pressed = ok_pressed;
        self
    }

    pub fn with_quit_requested(mut self, quit_requested: bool) -> Self {
        self.quit_requested = quit_requested;
        self
    }

    pub fn ok_pressed(&self) -> bool {
        self.ok_pressed
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

pub trait Scene {
    fn enter(&mut self, reason: TransitionReason, world: &mut GameWorld);
    fn update(&mut self, input: &InputSnapshot, world: &mut GameWorld) -> SceneCommand;
    fn exit(&mut self, _world: &mut GameWorld) {}
}

/// Owns the four top-level scenes and routes transition requests between
/// them. One scene is active at a time; inactive scenes do not tick.
pub struct SceneMachine {
    title: Box<dyn Scene>,
    map: Box<dyn Scene>,
    game_over: Box<dyn Scene>,
    reload_save: Box<dyn Scene>,
    active: SceneId,
}

impl SceneMachine {
    pub fn new(
        title: Box<dyn Scene>,
        map: Box<dyn Scene>,
        game_over: Box<dyn Scene>,
        reload_save: Box<dyn Scene>,
    ) -> Self {
        Self {
            title,
            map,
            game_over,
            reload_save,
            active: SceneId::Title,
        }
    }

    pub fn active_scene(&self) -> SceneId {
        self.active
    }

    /// Activates the starting scene without running an exit on the default.
    pub fn boot(&mut self, start: SceneId, world: &mut GameWorld) {
        self.active = start;
        info!(scene = ?start, "scene_boot");
        self.scene_mut(start).enter(TransitionReason::Boot, world);
    }

    pub fn goto(&mut self, request: SceneRequest, world: &mut GameWorld) {
        info!(
            from = ?self.active,
            to = ?request.target,
            reason = ?request.reason,
            "scene_transition"
        );
        self.scene_mut(self.active).exit(world);
        self.active = request.target;
        self.scene_mut(request.target).enter(request.reason, world);
    }

    pub fn update(&mut self, input: &InputSnapshot, world: &mut GameWorld) {
        let command = self.scene_mut(self.active).update(input, world);
        if let SceneCommand::Goto(request) = command {
            self.goto(request, world);
        }
    }

    fn scene_mut(&mut self, id: SceneId) -> &mut dyn Scene {
        match id {
            SceneId::Title => self.title.as_mut(),
            SceneId::Map => self.map.as_mut(),
            SceneId::GameOver => self.game_over.as_mut(),
            SceneId::ReloadSave => self.reload_save.as_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::{Member, Party};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn test_world() -> GameWorld {
        GameWorld::new(Party::new(vec![Member::new("Avery", 50)]), 1)
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Lifecycle {
        Entered(TransitionReason),
        Updated,
        Exited,
    }

    struct ProbeScene {
        log: Rc<RefCell<Vec<(&'static str, Lifecycle)>>>,
        name: &'static str,
        command: SceneCommand,
    }

    impl ProbeScene {
        fn new(
            log: Rc<RefCell<Vec<(&'static str, Lifecycle)>>>,
            name: &'static str,
            command: SceneCommand,
        ) -> Box<Self> {
            Box::new(Self { log, name, command })
        }
    }

    impl Scene for ProbeScene {
        fn enter(&mut self, reason: TransitionReason, _world: &mut GameWorld) {
            self.log
                .borrow_mut()
                .push((self.name, Lifecycle::Entered(reason)));
        }

        fn update(&mut self, _input: &InputSnapshot, _world: &mut GameWorld) -> SceneCommand {
            self.log.borrow_mut().push((self.name, Lifecycle::Updated));
            self.command
        }

        fn exit(&mut self, _world: &mut GameWorld) {
            self.log.borrow_mut().push((self.name, Lifecycle::Exited));
        }
    }

    fn probe_machine(
        log: &Rc<RefCell<Vec<(&'static str, Lifecycle)>>>,
        map_command: SceneCommand,
    ) -> SceneMachine {
        SceneMachine::new(
            ProbeScene::new(log.clone(), "title", SceneCommand::None),
            ProbeScene::new(log.clone(), "map", map_command),
            ProbeScene::new(log.clone(), "game_over", SceneCommand::None),
            ProbeScene::new(log.clone(), "reload", SceneCommand::None),
        )
    }

    #[test]
    fn boot_enters_the_start_scene_with_boot_reason() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut machine = probe_machine(&log, SceneCommand::None);
        let mut world = test_world();

        machine.boot(SceneId::Map, &mut world);
        assert_eq!(machine.active_scene(), SceneId::Map);
        assert_eq!(
            log.borrow().as_slice(),
            &[("map", Lifecycle::Entered(TransitionReason::Boot))]
        );
    }

    #[test]
    fn goto_exits_old_scene_then_enters_new_with_reason() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut machine = probe_machine(&log, SceneCommand::None);
        let mut world = test_world();
        machine.boot(SceneId::Map, &mut world);
        log.borrow_mut().clear();

        machine.goto(
            SceneRequest::new(SceneId::GameOver, TransitionReason::Defeat),
            &mut world,
        );

        assert_eq!(machine.active_scene(), SceneId::GameOver);
        assert_eq!(
            log.borrow().as_slice(),
            &[
                ("map", Lifecycle::Exited),
                ("game_over", Lifecycle::Entered(TransitionReason::Defeat)),
            ]
        );
    }

    #[test]
    fn update_dispatches_a_goto_command_in_the_same_tick() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let request = SceneRequest::new(SceneId::Title, TransitionReason::TitleFallback);
        let mut machine = probe_machine(&log, SceneCommand::Goto(request));
        let mut world = test_world();
        machine.boot(SceneId::Map, &mut world);
        log.borrow_mut().clear();

        machine.update(&InputSnapshot::empty(), &mut world);

        assert_eq!(machine.active_scene(), SceneId::Title);
        assert_eq!(
            log.borrow().as_slice(),
            &[
                ("map", Lifecycle::Updated),
                ("map", Lifecycle::Exited),
                (
                    "title",
                    Lifecycle::Entered(TransitionReason::TitleFallback)
                ),
            ]
        );
    }

    #[test]
    fn only_the_active_scene_ticks() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut machine = probe_machine(&log, SceneCommand::None);
        let mut world = test_world();
        machine.boot(SceneId::Title, &mut world);
        log.borrow_mut().clear();

        machine.update(&InputSnapshot::empty(), &mut world);
        machine.update(&InputSnapshot::empty(), &mut world);

        assert_eq!(
            log.borrow().as_slice(),
            &[("title", Lifecycle::Updated), ("title", Lifecycle::Updated)]
        );
    }
}
