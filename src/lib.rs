//! Core of a video practice looper: persistence for named practice
//! sessions over a dual-backend store with graceful degradation, and
//! the state machine driving scrubbing, loop boundaries, and seeks
//! against an opaque player.

pub mod error;
pub mod ops;
pub mod playback;
pub mod storage;
pub mod types;

pub use error::StorageError;
pub use ops::timecode::{format_display, format_loop_boundary, parse_loop_boundary};
pub use ops::video_url::{parse_video_id, watch_url};
pub use playback::bridge::PlayerBridge;
pub use playback::controller::{Boundary, LoopController, SeekRequest};
pub use playback::player::{Player, PlayerEvent};
pub use storage::SessionStore;
pub use types::loop_range::LoopRange;
pub use types::playback_state::PlaybackState;
pub use types::session::{Session, VideoInfo};
