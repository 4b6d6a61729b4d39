/// Resolved flow configuration. Loaded once at startup and injected into the
/// scenes that need it; never re-read afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FlowConfig {
    pub(crate) party_death_event: Option<EventHandle>,
    pub(crate) show_game_over_screen: bool,
    pub(crate) after_game_over_event: Option<EventHandle>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            party_death_event: None,
            show_game_over_screen: true,
            after_game_over_event: None,
        }
    }
}

/// On-disk shape. Event fields use 0 for "unset", matching how designers
/// leave the option blank.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields, default)]
struct RawFlowConfig {
    party_death_event: u32,
    show_game_over_screen: bool,
    after_game_over_event: u32,
}

impl Default for RawFlowConfig {
    fn default() -> Self {
        Self {
            party_death_event: 0,
            show_game_over_screen: true,
            after_game_over_event: 0,
        }
    }
}

type ConfigResult<T> = Result<T, String>;

impl FlowConfig {
    pub(crate) fn load_from_path(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|error| format!("read config '{}': {error}", path.display()))?;
        Self::from_json_str(&raw)
    }

    pub(crate) fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        match serde_path_to_error::deserialize::<_, RawFlowConfig>(&mut deserializer) {
            Ok(raw_config) => Ok(Self::from_raw(raw_config)),
            Err(error) => {
                let path = error.path().to_string();
                let source = error.into_inner();
                if path.is_empty() || path == "." {
                    Err(format!("parse config json: {source}"))
                } else {
                    Err(format!("parse config json at {path}: {source}"))
                }
            }
        }
    }

    fn from_raw(raw: RawFlowConfig) -> Self {
        Self {
            party_death_event: EventHandle::from_raw(raw.party_death_event),
            show_game_over_screen: raw.show_game_over_screen,
            after_game_over_event: EventHandle::from_raw(raw.after_game_over_event),
        }
    }
}

/// What happens the instant the whole party is down. Selected once from
/// configuration, then consulted polymorphically per defeat occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DefeatHandler {
    Standard,
    CustomEvent(EventHandle),
}

impl DefeatHandler {
    pub(crate) fn from_config(config: &FlowConfig) -> Self {
        match config.party_death_event {
            Some(handle) => Self::CustomEvent(handle),
            None => Self::Standard,
        }
    }
}

/// Where the game-over scene hands control once it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameOverDispatch {
    ToTitle,
    ToCustomEvent(EventHandle),
}

impl GameOverDispatch {
    pub(crate) fn from_config(config: &FlowConfig) -> Self {
        match config.after_game_over_event {
            Some(handle) => Self::ToCustomEvent(handle),
            None => Self::ToTitle,
        }
    }
}
