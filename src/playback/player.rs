use crate::types::session::VideoInfo;

/// The opaque rendering widget, as far as this crate is concerned.
///
/// Implemented by the host UI over whatever actually renders the video;
/// this crate only ever commands it.
pub trait Player {
    fn seek_to(&mut self, seconds: f64);
    fn set_playback_rate(&mut self, rate: f64);
}

/// Events the player delivers on its own cadence.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Exactly once per load. `None` when metadata retrieval failed on
    /// the player side; the video is then treated as unknown rather
    /// than failing the load.
    Ready(Option<VideoInfo>),
    /// Fired once the video length is known.
    Duration(f64),
    /// Steady progress tick while playing.
    Progress {
        played_fraction: f64,
        played_seconds: f64,
    },
    Play,
    Pause,
}
