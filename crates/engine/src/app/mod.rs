mod loop_runner;
mod scene;

pub use loop_runner::{run_flow, LoopConfig, RunOutcome};
pub use scene::{
    InputSnapshot, Scene, SceneCommand, SceneId, SceneMachine, SceneRequest, TransitionReason,
};
