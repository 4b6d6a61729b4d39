use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Handle of a designer-authored command sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventHandle(u32);

impl EventHandle {
    /// Raw configuration values use 0 for "none".
    pub fn from_raw(raw: u32) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Reservation buffer for events queued to run in the current scene context.
/// The interpreter that actually executes them is outside this crate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQueue {
    reserved: VecDeque<EventHandle>,
}

impl EventQueue {
    pub fn reserve(&mut self, handle: EventHandle) {
        debug!(event = handle.get(), "event_reserved");
        self.reserved.push_back(handle);
    }

    pub fn take_next(&mut self) -> Option<EventHandle> {
        self.reserved.pop_front()
    }

    pub fn pending(&self) -> impl Iterator<Item = EventHandle> + '_ {
        self.reserved.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.reserved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reserved.is_empty()
    }
}
