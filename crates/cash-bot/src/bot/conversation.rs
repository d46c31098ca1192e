//! Per-conversation input mode
//!
//! After the add or remove command the next free-text message of the same
//! conversation is read as a ticker. Modes are kept per conversation; the
//! watch-list itself is shared.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of one chat (Telegram chat id, or 0 for the console)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub i64);

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the next free-text message means
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationMode {
    #[default]
    Idle,
    /// Next message is a ticker to add
    AwaitingAdd,
    /// Next message is a ticker to remove
    AwaitingRemove,
}

/// Modes of every conversation seen so far
#[derive(Debug, Default)]
pub struct ConversationStore {
    modes: HashMap<ConversationId, ConversationMode>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode; unknown conversations are idle
    pub fn mode(&self, id: ConversationId) -> ConversationMode {
        self.modes.get(&id).copied().unwrap_or_default()
    }

    pub fn set_mode(&mut self, id: ConversationId, mode: ConversationMode) {
        if mode == ConversationMode::Idle {
            self.modes.remove(&id);
        } else {
            self.modes.insert(id, mode);
        }
    }

    /// Back to idle, returning the previous mode
    pub fn reset(&mut self, id: ConversationId) -> ConversationMode {
        self.modes.remove(&id).unwrap_or_default()
    }

    /// Number of conversations waiting for a ticker
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
