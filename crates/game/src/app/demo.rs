use engine::{
    run_flow, BattleSession, GameWorld, InputSnapshot, LoopConfig, Member, Party, SaveManager,
    SceneId,
};
use tracing::info;

use super::bootstrap::AppWiring;
use super::flow;
use super::flow::FlowCommand;

const DATA_VERSION_ID: u64 = 1;
const DEMO_TICK_BUDGET: u64 = 240;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scenario {
    BattleDefeat,
    MapDefeat,
    ReloadLastSave,
}

impl Scenario {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "battle_defeat" => Some(Self::BattleDefeat),
            "map_defeat" => Some(Self::MapDefeat),
            "reload_last_save" => Some(Self::ReloadLastSave),
            _ => None,
        }
    }
}

/// Drives one scripted defeat scenario through the real scene machine and
/// logs where the flow settles.
pub(crate) fn run_demo(wiring: AppWiring) {
    let party = Party::new(vec![
        Member::new("Avery", 50),
        Member::new("Brook", 40),
        Member::new("Corin", 30),
    ]);
    let mut world = GameWorld::new(party, DATA_VERSION_ID);
    world.map.set_position(1, 8, 6);
    world.audio.play_bgm("field");

    let manager = SaveManager::new(&wiring.paths.save_dir);
    let mut machine = flow::build_scene_machine(&wiring.config, manager);
    machine.boot(SceneId::Map, &mut world);

    match wiring.scenario {
        Scenario::BattleDefeat => {
            world.audio.play_bgm("battle");
            world.battle = Some(BattleSession::new(false));
            wipe_party(&mut world);
        }
        Scenario::MapDefeat => {
            wipe_party(&mut world);
        }
        Scenario::ReloadLastSave => {
            machine.goto(FlowCommand::ReloadLastSave.request(), &mut world);
        }
    }

    let loop_config = LoopConfig {
        max_ticks: DEMO_TICK_BUDGET,
        log_interval_ticks: 60,
    };
    // The demo player holds the confirm button down the whole time.
    let outcome = run_flow(&loop_config, &mut machine, &mut world, |_| {
        InputSnapshot::empty().with_ok_pressed(true)
    });

    info!(
        outcome = ?outcome,
        final_scene = ?machine.active_scene(),
        pending_events = world.events.len(),
        leader_hp = world.party.leader().map(|leader| leader.hp()),
        "scenario_finished"
    );
}

fn wipe_party(world: &mut GameWorld) {
    for member in world.party.members_mut() {
        member.set_hp(0);
    }
}
