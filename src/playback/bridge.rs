use tracing::warn;

use crate::ops::timecode;
use crate::playback::controller::{Boundary, LoopController, SeekRequest};
use crate::playback::player::{Player, PlayerEvent};
use crate::storage::SessionStore;
use crate::types::session::{Session, VideoInfo};

/// Glue between the loop controller and an opaque player.
///
/// Routes player events into the controller, forwards every emitted
/// seek back to the player, and owns the save path that turns current
/// state into a persisted `Session`.
pub struct PlayerBridge<P: Player> {
    player: P,
    controller: LoopController,
    video: Option<VideoInfo>,
    /// Session being resumed, re-applied on every ready event.
    seed: Option<Session>,
}

impl<P: Player> PlayerBridge<P> {
    pub fn new(player: P) -> Self {
        Self {
            player,
            controller: LoopController::new(),
            video: None,
            seed: None,
        }
    }

    /// Bridge that resumes a saved session once the player is ready.
    pub fn with_session(player: P, session: Session) -> Self {
        Self {
            player,
            controller: LoopController::new(),
            video: None,
            seed: Some(session),
        }
    }

    pub fn controller(&self) -> &LoopController {
        &self.controller
    }

    pub fn video(&self) -> Option<&VideoInfo> {
        self.video.as_ref()
    }

    /// Feed one player event through the controller, forwarding any
    /// resulting seek to the player.
    pub fn handle_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Ready(info) => {
                if info.is_none() {
                    warn!("player ready without video metadata, title and id stay unknown");
                }
                self.video = info;
                self.controller.reset_for_load(self.seed.as_ref());
                self.player
                    .set_playback_rate(self.controller.state().playback_rate);
            }
            PlayerEvent::Duration(seconds) => self.controller.set_duration(seconds),
            PlayerEvent::Progress {
                played_fraction,
                played_seconds,
            } => {
                if let Some(request) = self.controller.on_progress(played_fraction, played_seconds)
                {
                    self.forward(request);
                }
            }
            PlayerEvent::Play => self.controller.set_playing(true),
            PlayerEvent::Pause => self.controller.set_playing(false),
        }
    }

    pub fn begin_seek(&mut self, fraction: f64) {
        self.controller.begin_seek(fraction);
    }

    pub fn commit_seek(&mut self) {
        let request = self.controller.commit_seek();
        self.forward(request);
    }

    pub fn jump(&mut self, delta_seconds: f64) {
        if let Some(request) = self.controller.jump(delta_seconds) {
            self.forward(request);
        }
    }

    pub fn toggle_loop(&mut self) {
        self.controller.toggle_loop();
    }

    pub fn set_loop_boundary_to_current(&mut self, boundary: Boundary) {
        self.controller.set_loop_boundary_to_current(boundary);
    }

    /// Apply a typed loop-boundary edit. Returns `false` and leaves the
    /// range untouched when the text does not parse.
    pub fn edit_loop_boundary(&mut self, boundary: Boundary, text: &str) -> bool {
        match timecode::parse_loop_boundary(text) {
            Some(seconds) => {
                self.controller.set_loop_boundary(boundary, seconds);
                true
            }
            None => false,
        }
    }

    pub fn set_playback_rate(&mut self, rate: f64) {
        self.controller.set_playback_rate(rate);
        self.player
            .set_playback_rate(self.controller.state().playback_rate);
    }

    /// Persist the current configuration. Refuses when no video is
    /// loaded or the note is empty, mirroring the save button being
    /// unavailable in those states. Returns the stored session.
    pub fn save_snapshot(&self, store: &SessionStore, note: &str) -> Option<Session> {
        let video = self.video.as_ref()?;
        let note = note.trim();
        if note.is_empty() {
            return None;
        }
        let session = self.controller.to_session(video, note.to_string());
        Some(store.save_session(session))
    }

    fn forward(&mut self, request: SeekRequest) {
        self.player.seek_to(request.seconds());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Test double standing in for the rendering widget.
    struct RecordingPlayer {
        seeks: Vec<f64>,
        rates: Vec<f64>,
    }

    impl RecordingPlayer {
        fn new() -> Self {
            Self {
                seeks: Vec::new(),
                rates: Vec::new(),
            }
        }
    }

    impl Player for RecordingPlayer {
        fn seek_to(&mut self, seconds: f64) {
            self.seeks.push(seconds);
        }
        fn set_playback_rate(&mut self, rate: f64) {
            self.rates.push(rate);
        }
    }

    fn ready_info() -> Option<VideoInfo> {
        Some(VideoInfo {
            video_id: "dQw4w9WgXcQ".to_string(),
            video_title: "Test Video".to_string(),
        })
    }

    #[test]
    fn test_ready_records_metadata() {
        let mut bridge = PlayerBridge::new(RecordingPlayer::new());
        bridge.handle_event(PlayerEvent::Ready(ready_info()));
        assert_eq!(bridge.video().unwrap().video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_ready_without_metadata_is_tolerated() {
        let mut bridge = PlayerBridge::new(RecordingPlayer::new());
        bridge.handle_event(PlayerEvent::Ready(None));
        assert!(bridge.video().is_none());
    }

    #[test]
    fn test_ready_reapplies_seeded_session() {
        let session = Session::new(
            "abc".to_string(),
            "Title".to_string(),
            30.0,
            40.0,
            0.5,
            "note".to_string(),
        );
        let mut bridge = PlayerBridge::with_session(RecordingPlayer::new(), session);
        bridge.handle_event(PlayerEvent::Ready(ready_info()));

        let range = bridge.controller().loop_range();
        assert_eq!(range.start, 30.0);
        assert_eq!(range.end, 40.0);
        assert!(!range.enabled);
        assert_eq!(bridge.controller().state().playback_rate, 0.5);
        // The seeded rate is pushed to the player.
        assert_eq!(bridge.player.rates.last(), Some(&0.5));
    }

    #[test]
    fn test_loop_forced_seek_reaches_player() {
        let mut bridge = PlayerBridge::new(RecordingPlayer::new());
        bridge.handle_event(PlayerEvent::Ready(ready_info()));
        bridge.handle_event(PlayerEvent::Duration(200.0));
        bridge.handle_event(PlayerEvent::Progress {
            played_fraction: 0.15,
            played_seconds: 30.0,
        });
        bridge.set_loop_boundary_to_current(Boundary::Start);
        bridge.handle_event(PlayerEvent::Progress {
            played_fraction: 0.2,
            played_seconds: 40.0,
        });
        bridge.set_loop_boundary_to_current(Boundary::End);

        bridge.handle_event(PlayerEvent::Progress {
            played_fraction: 0.201,
            played_seconds: 40.2,
        });
        assert_eq!(bridge.player.seeks.last(), Some(&30.0));
    }

    #[test]
    fn test_commit_seek_reaches_player() {
        let mut bridge = PlayerBridge::new(RecordingPlayer::new());
        bridge.handle_event(PlayerEvent::Duration(200.0));
        bridge.begin_seek(0.5);
        bridge.commit_seek();
        assert_eq!(bridge.player.seeks, vec![100.0]);
    }

    #[test]
    fn test_play_pause_track_state() {
        let mut bridge = PlayerBridge::new(RecordingPlayer::new());
        bridge.handle_event(PlayerEvent::Play);
        assert!(bridge.controller().state().is_playing);
        bridge.handle_event(PlayerEvent::Pause);
        assert!(!bridge.controller().state().is_playing);
    }

    #[test]
    fn test_edit_loop_boundary_parses_and_applies() {
        let mut bridge = PlayerBridge::new(RecordingPlayer::new());
        bridge.handle_event(PlayerEvent::Duration(200.0));
        assert!(bridge.edit_loop_boundary(Boundary::Start, "0:30.000"));
        assert!(bridge.edit_loop_boundary(Boundary::End, "1:15.500"));
        assert_eq!(bridge.controller().loop_range().start, 30.0);
        assert_eq!(bridge.controller().loop_range().end, 75.5);
    }

    #[test]
    fn test_edit_loop_boundary_rejects_malformed_text() {
        let mut bridge = PlayerBridge::new(RecordingPlayer::new());
        bridge.handle_event(PlayerEvent::Duration(200.0));
        bridge.edit_loop_boundary(Boundary::Start, "0:30.000");
        assert!(!bridge.edit_loop_boundary(Boundary::Start, "half past"));
        assert_eq!(bridge.controller().loop_range().start, 30.0);
    }

    #[test]
    fn test_save_snapshot_refuses_without_video() {
        let dir = tempdir().unwrap();
        let store = SessionStore::open(dir.path());
        let bridge = PlayerBridge::new(RecordingPlayer::new());
        assert!(bridge.save_snapshot(&store, "note").is_none());
    }

    #[test]
    fn test_save_snapshot_refuses_empty_note() {
        let dir = tempdir().unwrap();
        let store = SessionStore::open(dir.path());
        let mut bridge = PlayerBridge::new(RecordingPlayer::new());
        bridge.handle_event(PlayerEvent::Ready(ready_info()));
        assert!(bridge.save_snapshot(&store, "").is_none());
        assert!(bridge.save_snapshot(&store, "   ").is_none());
    }

    #[test]
    fn test_save_snapshot_persists_current_loop() {
        let dir = tempdir().unwrap();
        let store = SessionStore::open(dir.path());
        let mut bridge = PlayerBridge::new(RecordingPlayer::new());
        bridge.handle_event(PlayerEvent::Ready(ready_info()));
        bridge.handle_event(PlayerEvent::Duration(200.0));
        bridge.handle_event(PlayerEvent::Progress {
            played_fraction: 0.05,
            played_seconds: 10.0,
        });
        bridge.set_loop_boundary_to_current(Boundary::Start);
        bridge.handle_event(PlayerEvent::Progress {
            played_fraction: 0.25,
            played_seconds: 50.0,
        });
        bridge.set_loop_boundary_to_current(Boundary::End);

        let saved = bridge.save_snapshot(&store, "keep at 10-50").unwrap();
        assert!(saved.id.is_some());
        assert_eq!(saved.loop_start, 10.0);
        assert_eq!(saved.loop_end, 50.0);

        let sessions = store.all_sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].note, "keep at 10-50");
    }
}
