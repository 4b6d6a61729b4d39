use std::path::PathBuf;

use engine::{resolve_app_paths, AppPaths, StartupError};
use tracing::{info, warn};

use super::demo::Scenario;
use super::flow::FlowConfig;

const CONFIG_ENV_VAR: &str = "GAMEOVER_CONFIG";
const SCENARIO_ENV_VAR: &str = "GAMEOVER_SCENARIO";

pub(crate) struct AppWiring {
    pub(crate) paths: AppPaths,
    pub(crate) config: FlowConfig,
    pub(crate) scenario: Scenario,
}

pub(crate) fn build_app() -> Result<AppWiring, StartupError> {
    let paths = resolve_app_paths()?;
    info!(
        root = %paths.root.display(),
        save_dir = %paths.save_dir.display(),
        "startup"
    );

    let config = load_config_from_env();
    let scenario = parse_scenario_from_env();
    info!(config = ?config, scenario = ?scenario, "app_wired");

    Ok(AppWiring {
        paths,
        config,
        scenario,
    })
}

/// Missing configuration is not an error; the defaults reproduce the
/// engine's stock game-over behavior.
fn load_config_from_env() -> FlowConfig {
    let Ok(raw_path) = std::env::var(CONFIG_ENV_VAR) else {
        return FlowConfig::default();
    };
    let path = PathBuf::from(raw_path);
    match FlowConfig::load_from_path(&path) {
        Ok(config) => {
            info!(path = %path.display(), "config_loaded");
            config
        }
        Err(error) => {
            warn!(path = %path.display(), error = %error, "config_load_failed_using_defaults");
            FlowConfig::default()
        }
    }
}

fn parse_scenario_from_env() -> Scenario {
    let Ok(raw) = std::env::var(SCENARIO_ENV_VAR) else {
        return Scenario::BattleDefeat;
    };
    match Scenario::from_name(raw.trim()) {
        Some(scenario) => scenario,
        None => {
            warn!(scenario = %raw, "unknown_scenario_using_battle_defeat");
            Scenario::BattleDefeat
        }
    }
}
