use std::fs;
use std::path::Path;

use engine::{
    BattleResult, BattleSession, EventHandle, GameWorld, InputSnapshot, MusicEffect, SaveGame,
    SaveManager, Scene, SceneCommand, SceneId, SceneMachine, SceneRequest, TransitionReason,
    FADE_TICKS, SLOW_FADE_TICKS,
};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Just enough of a fade-out to mask the scene swap; the dispatched event
/// owns fading the screen back in.
const GAME_OVER_DISPATCH_FADE_TICKS: u32 = 2;

include!("config.rs");
include!("router.rs");
include!("game_over.rs");
include!("reload.rs");
include!("scenes.rs");

/// Externally-invokable command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlowCommand {
    ReloadLastSave,
}

impl FlowCommand {
    pub(crate) fn request(self) -> SceneRequest {
        match self {
            Self::ReloadLastSave => {
                SceneRequest::new(SceneId::ReloadSave, TransitionReason::Command)
            }
        }
    }
}

pub(crate) fn build_scene_machine(config: &FlowConfig, manager: SaveManager) -> SceneMachine {
    let router = DefeatRouter::new(DefeatHandler::from_config(config));
    SceneMachine::new(
        Box::new(TitleScene),
        Box::new(MapScene::new(router)),
        Box::new(GameOverScene::new(config)),
        Box::new(ReloadLastSaveScene::new(manager)),
    )
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
