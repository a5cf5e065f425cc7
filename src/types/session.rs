use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A persisted snapshot of a practice configuration: which video, the
/// loop window, the playback speed, and the user's note.
///
/// Sessions are append-only: the store assigns `id` on first persist and
/// the record is immutable afterwards, except for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Assigned by the store on creation; `None` on an unsaved instance.
    pub id: Option<i64>,
    /// Creation time in milliseconds since epoch, set once at save time.
    pub timestamp: i64,
    pub video_id: String,
    pub video_title: String,
    pub loop_start: f64,
    pub loop_end: f64,
    pub playback_rate: f64,
    pub note: String,
}

impl Session {
    /// Build an unsaved session stamped with the current time.
    pub fn new(
        video_id: String,
        video_title: String,
        loop_start: f64,
        loop_end: f64,
        playback_rate: f64,
        note: String,
    ) -> Self {
        Session {
            id: None,
            timestamp: Utc::now().timestamp_millis(),
            video_id,
            video_title,
            loop_start,
            loop_end,
            playback_rate,
            note,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Video metadata delivered by the player's ready event. Retrieval can
/// fail on the player side, in which case the video stays untitled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub video_id: String,
    pub video_title: String,
}
