use tracing::info;

/// How a battle concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleResult {
    Victory,
    Escape,
    Defeat,
}

/// State of the battle currently in progress, if any. Battle math is outside
/// this crate; the session only tracks the pieces the defeat flow touches.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleSession {
    can_lose: bool,
    result: Option<BattleResult>,
    log: Vec<String>,
}

impl BattleSession {
    pub fn new(can_lose: bool) -> Self {
        Self {
            can_lose,
            result: None,
            log: Vec::new(),
        }
    }

    pub fn can_lose(&self) -> bool {
        self.can_lose
    }

    pub fn is_active(&self) -> bool {
        self.result.is_none()
    }

    pub fn end(&mut self, result: BattleResult) {
        if self.result.is_none() {
            info!(result = ?result, "battle_ended");
            self.result = Some(result);
        }
    }

    pub fn result(&self) -> Option<BattleResult> {
        self.result
    }

    /// Battle message window stand-in; kept so feedback ordering is observable.
    pub fn push_message(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }
}
