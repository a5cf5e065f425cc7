use serde::{Deserialize, Serialize};

use crate::types::session::Session;

/// The `[start, end)` playback window repeated while looping is enabled.
///
/// Transient state owned by the loop controller; it is rebuilt from a
/// `Session` when one is loaded and only mutated through the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopRange {
    pub start: f64,
    pub end: f64,
    pub enabled: bool,
}

impl LoopRange {
    pub fn new() -> Self {
        LoopRange {
            start: 0.0,
            end: 0.0,
            enabled: false,
        }
    }

    /// Rebuild the range from a loaded session. Loading never arms the
    /// loop by itself; the user re-enables it explicitly.
    pub fn from_session(session: &Session) -> Self {
        LoopRange {
            start: session.loop_start,
            end: session.loop_end,
            enabled: false,
        }
    }
}

impl Default for LoopRange {
    fn default() -> Self {
        Self::new()
    }
}
