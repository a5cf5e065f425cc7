use crate::types::loop_range::LoopRange;
use crate::types::playback_state::PlaybackState;
use crate::types::session::{Session, VideoInfo};

/// Which loop boundary to pin to the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

/// A controller-issued instruction to move playback position.
///
/// `Forced` seeks come from the loop boundary check and may repeat on
/// consecutive ticks until the seek lands; `User` seeks come from
/// committed scrubs and jumps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekRequest {
    User(f64),
    Forced(f64),
}

impl SeekRequest {
    pub fn seconds(&self) -> f64 {
        match *self {
            SeekRequest::User(s) | SeekRequest::Forced(s) => s,
        }
    }
}

/// State machine for scrub position and the practice loop.
///
/// All operations are synchronous mutations of in-memory state; the
/// only side effect is at most one returned `SeekRequest`, which the
/// caller forwards to the player. While the duration is unknown every
/// fraction-of-duration computation short-circuits to zero, so no NaN
/// can reach displayed or persisted state.
pub struct LoopController {
    state: PlaybackState,
}

impl LoopController {
    /// The speed presets offered by the transport UI.
    pub const PLAYBACK_RATES: [f64; 7] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

    pub fn new() -> Self {
        Self {
            state: PlaybackState::new(),
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn loop_range(&self) -> &LoopRange {
        &self.state.loop_range
    }

    /// Authoritative video length, delivered by the player once known.
    pub fn set_duration(&mut self, duration: f64) {
        self.state.duration = duration.max(0.0);
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.state.is_playing = playing;
    }

    /// Non-positive rates are ignored; the rate must stay a valid
    /// multiplier.
    pub fn set_playback_rate(&mut self, rate: f64) {
        if rate > 0.0 {
            self.state.playback_rate = rate;
        }
    }

    /// External progress tick. Ignored entirely while a scrub drag is in
    /// flight so the tick cannot fight the drag. Otherwise updates the
    /// position and, when the loop is armed and the tick has reached the
    /// end boundary, asks for a seek back to the start.
    ///
    /// The boundary check is a level trigger re-evaluated on every tick,
    /// not an edge: a slow tick rate past the boundary keeps requesting
    /// the same seek until the player lands it.
    pub fn on_progress(&mut self, played_fraction: f64, played_seconds: f64) -> Option<SeekRequest> {
        if self.state.is_seeking {
            return None;
        }
        self.state.played_fraction = played_fraction.clamp(0.0, 1.0);

        let range = &self.state.loop_range;
        if range.enabled && played_seconds >= range.end {
            return Some(SeekRequest::Forced(range.start));
        }
        None
    }

    /// Start of a scrub drag. Manual scrubbing and auto-looping are
    /// mutually exclusive: starting a drag always disarms the loop.
    pub fn begin_seek(&mut self, fraction: f64) {
        self.state.is_seeking = true;
        self.state.loop_range.enabled = false;
        self.state.played_fraction = fraction.clamp(0.0, 1.0);
    }

    /// End of a scrub drag: releases the drag lock and asks for a seek
    /// to the dragged position.
    pub fn commit_seek(&mut self) -> SeekRequest {
        self.state.is_seeking = false;
        SeekRequest::User(self.state.position_seconds())
    }

    /// Pin a loop boundary to the current position, snapping the other
    /// boundary when the range would degenerate, and arm the loop.
    pub fn set_loop_boundary_to_current(&mut self, boundary: Boundary) {
        let current = self.state.position_seconds();
        let duration = self.state.duration;
        let range = &mut self.state.loop_range;
        match boundary {
            Boundary::Start => {
                range.start = current;
                if range.end <= current {
                    range.end = duration;
                }
            }
            Boundary::End => {
                range.end = current;
                if range.start >= current {
                    range.start = 0.0;
                }
            }
        }
        range.enabled = true;
    }

    /// Set a boundary to an explicit time, as typed into the loop
    /// inputs. Unlike pinning, a typed edit neither snaps the other
    /// boundary nor arms the loop.
    pub fn set_loop_boundary(&mut self, boundary: Boundary, seconds: f64) {
        let seconds = seconds.max(0.0);
        match boundary {
            Boundary::Start => self.state.loop_range.start = seconds,
            Boundary::End => self.state.loop_range.end = seconds,
        }
    }

    /// Arm or disarm the loop. Enabling with both boundaries still at
    /// zero defaults the range to current-position..duration so the
    /// first activation never produces an empty loop.
    pub fn toggle_loop(&mut self) {
        let current = self.state.position_seconds();
        let duration = self.state.duration;
        let range = &mut self.state.loop_range;
        if !range.enabled && range.start == 0.0 && range.end == 0.0 {
            range.start = current;
            range.end = duration;
        }
        range.enabled = !range.enabled;
    }

    /// Skip by a signed number of seconds, clamped to the video. No-op
    /// until the duration is known.
    pub fn jump(&mut self, delta_seconds: f64) -> Option<SeekRequest> {
        if self.state.duration <= 0.0 {
            return None;
        }
        let target = (self.state.position_seconds() + delta_seconds).clamp(0.0, self.state.duration);
        self.state.played_fraction = target / self.state.duration;
        Some(SeekRequest::User(target))
    }

    /// Seed loop bounds and rate from a loaded session. The loop stays
    /// disarmed until the user re-enables it.
    pub fn apply_session(&mut self, session: &Session) {
        self.state.loop_range = LoopRange::from_session(session);
        if session.playback_rate > 0.0 {
            self.state.playback_rate = session.playback_rate;
        } else {
            self.state.playback_rate = 1.0;
        }
    }

    /// Reset for a fresh video load: bounds and rate from the seed
    /// session when resuming, defaults otherwise. Looping is always
    /// disarmed on load.
    pub fn reset_for_load(&mut self, seed: Option<&Session>) {
        match seed {
            Some(session) => self.apply_session(session),
            None => {
                self.state.loop_range = LoopRange::new();
                self.state.playback_rate = 1.0;
            }
        }
    }

    /// Snapshot the current loop and rate into an unsaved session for
    /// the given video.
    pub fn to_session(&self, video: &VideoInfo, note: String) -> Session {
        Session::new(
            video.video_id.clone(),
            video.video_title.clone(),
            self.state.loop_range.start,
            self.state.loop_range.end,
            self.state.playback_rate,
            note,
        )
    }
}

impl Default for LoopController {
    fn default() -> Self {
        Self::new()
    }
}
