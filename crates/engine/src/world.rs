use tracing::info;

use crate::audio::AudioChannel;
use crate::battle::BattleSession;
use crate::events::EventQueue;
use crate::party::Party;
use crate::screen::ScreenFade;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest {
    pub map_id: u32,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapState {
    map_id: u32,
    player_x: i32,
    player_y: i32,
    pending_transfer: Option<TransferRequest>,
    reload_requested: bool,
}

impl MapState {
    pub fn map_id(&self) -> u32 {
        self.map_id
    }

    pub fn player_position(&self) -> (i32, i32) {
        (self.player_x, self.player_y)
    }

    pub fn set_position(&mut self, map_id: u32, x: i32, y: i32) {
        self.map_id = map_id;
        self.player_x = x;
        self.player_y = y;
    }

    pub fn reserve_transfer(&mut self, map_id: u32, x: i32, y: i32) {
        self.pending_transfer = Some(TransferRequest { map_id, x, y });
    }

    /// Forces the destination map to rebuild on the next transfer, used when
    /// loaded data predates the current content version.
    pub fn request_map_reload(&mut self) {
        self.reload_requested = true;
    }

    pub fn reload_requested(&self) -> bool {
        self.reload_requested
    }

    pub fn pending_transfer(&self) -> Option<TransferRequest> {
        self.pending_transfer
    }

    /// Applies a reserved transfer. Returns true when one ran.
    pub fn apply_pending_transfer(&mut self) -> bool {
        let Some(transfer) = self.pending_transfer.take() else {
            return false;
        };
        self.map_id = transfer.map_id;
        self.player_x = transfer.x;
        self.player_y = transfer.y;
        self.reload_requested = false;
        info!(
            map_id = transfer.map_id,
            x = transfer.x,
            y = transfer.y,
            "map_transfer_applied"
        );
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemState {
    version_id: u64,
    save_slot: u32,
    after_load_count: u32,
}

impl SystemState {
    fn new(version_id: u64) -> Self {
        Self {
            version_id,
            save_slot: 0,
            after_load_count: 0,
        }
    }

    /// Content version the current session's data was authored against.
    /// Loading a save replaces this with the version recorded at save time.
    pub fn version_id(&self) -> u64 {
        self.version_id
    }

    pub fn set_version_id(&mut self, version_id: u64) {
        self.version_id = version_id;
    }

    /// Most recent save slot; 0 means the game has never been saved.
    pub fn save_slot(&self) -> u32 {
        self.save_slot
    }

    pub fn set_save_slot(&mut self, slot: u32) {
        self.save_slot = slot;
    }

    /// Post-load bookkeeping hook. Must run exactly once per successful load.
    pub fn on_after_load(&mut self) {
        self.after_load_count += 1;
        info!(count = self.after_load_count, "after_load_hook");
    }

    pub fn after_load_count(&self) -> u32 {
        self.after_load_count
    }
}

/// Shared engine state handed to every scene update.
#[derive(Debug, Clone, PartialEq)]
pub struct GameWorld {
    pub party: Party,
    pub screen: ScreenFade,
    pub audio: AudioChannel,
    pub events: EventQueue,
    pub map: MapState,
    pub system: SystemState,
    pub battle: Option<BattleSession>,
    data_version_id: u64,
}

impl GameWorld {
    pub fn new(party: Party, data_version_id: u64) -> Self {
        Self {
            party,
            screen: ScreenFade::default(),
            audio: AudioChannel::default(),
            events: EventQueue::default(),
            map: MapState::default(),
            system: SystemState::new(data_version_id),
            battle: None,
            data_version_id,
        }
    }

    /// Content version shipped with the running build.
    pub fn data_version_id(&self) -> u64 {
        self.data_version_id
    }
}
