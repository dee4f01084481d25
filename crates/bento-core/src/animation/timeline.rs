#![forbid(unsafe_code)]

//! Timeline: labeled tracks at offsets, playable in either direction.
//!
//! A [`Timeline`] holds [`Track`]s, each an eased 0→1 ramp that starts at an
//! offset and lasts a duration. Track values are pure functions of the
//! timeline's playhead, so the timeline can run backwards through exactly
//! the states it passed going forwards.
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use bento_core::animation::{Easing, Timeline, Track};
//!
//! let mut timeline = Timeline::new()
//!     .add(Track::new("container", Duration::ZERO, Duration::from_millis(100)))
//!     .add(Track::new("heading", Duration::from_millis(100), Duration::from_millis(600))
//!         .easing(Easing::Power2Out));
//!
//! timeline.play();
//! timeline.tick(Duration::from_millis(350));
//! timeline.reverse(); // runs back from 350ms toward zero
//! ```
//!
//! # Invariants
//!
//! 1. Tracks are always sorted by offset (maintained on insertion).
//! 2. The playhead stays within `[0, duration]`.
//! 3. `play()` and `reverse()` never move the playhead; they only set the
//!    direction and resume playback.
//! 4. A forward run ends `Finished` at `duration`; a reverse run ends
//!    `Finished` at zero.
//! 5. `track_value()` at a given playhead is identical whichever direction
//!    the playhead arrived from.
//!
//! # Failure Modes
//!
//! - Zero-length track: treated as a step at its offset.
//! - Empty timeline: duration is 1ns, progress follows the playhead.

use std::time::Duration;

use super::{Animation, Easing, nonzero, ratio};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Playback direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Playhead moves toward the end.
    #[default]
    Forward,
    /// Playhead moves toward zero.
    Reverse,
}

/// Playback state of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not yet started.
    Idle,
    /// Actively playing.
    Playing,
    /// Parked at a seek point, not advancing.
    Paused,
    /// Reached the end of the current direction.
    Finished,
}

/// One eased ramp on a timeline.
#[derive(Debug, Clone)]
pub struct Track {
    label: String,
    offset: Duration,
    duration: Duration,
    easing: Easing,
}

impl Track {
    /// Create a linear track.
    #[must_use]
    pub fn new(label: impl Into<String>, offset: Duration, duration: Duration) -> Self {
        Self {
            label: label.into(),
            offset,
            duration,
            easing: Easing::Linear,
        }
    }

    /// Set the easing (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Track label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Start offset relative to the timeline start.
    #[must_use]
    pub fn offset(&self) -> Duration {
        self.offset
    }

    /// Track length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time at which this track finishes.
    #[must_use]
    pub fn end(&self) -> Duration {
        self.offset.saturating_add(self.duration)
    }

    /// Eased value at playhead `time`.
    #[must_use]
    pub fn value_at(&self, time: Duration) -> f32 {
        if self.duration.is_zero() {
            // A step: on once the playhead reaches the offset, off at zero.
            let on = time > self.offset || (time == self.offset && !time.is_zero());
            return if on { 1.0 } else { 0.0 };
        }
        if time <= self.offset {
            return 0.0;
        }
        self.easing.apply(ratio(time - self.offset, self.duration))
    }
}

/// A set of tracks played forward or backward by a single playhead.
#[derive(Debug, Clone)]
pub struct Timeline {
    tracks: Vec<Track>,
    total_duration: Duration,
    state: PlaybackState,
    direction: Direction,
    current_time: Duration,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Timeline {
    /// Create an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracks: Vec::new(),
            total_duration: Duration::from_nanos(1),
            state: PlaybackState::Idle,
            direction: Direction::Forward,
            current_time: Duration::ZERO,
        }
    }

    /// Add a track (builder pattern).
    #[must_use]
    pub fn add(mut self, track: Track) -> Self {
        self.push_track(track);
        self
    }

    /// Insert a track maintaining sort order by offset.
    pub fn push_track(&mut self, track: Track) {
        // Stable: same-offset tracks keep insertion order.
        let pos = self.tracks.partition_point(|t| t.offset <= track.offset);
        self.tracks.insert(pos, track);

        let end = self.tracks.iter().map(Track::end).max().unwrap_or_default();
        self.total_duration = nonzero(end);
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Playback control
// ---------------------------------------------------------------------------

impl Timeline {
    /// Play forward from the current playhead.
    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        self.state = if self.current_time >= self.total_duration {
            PlaybackState::Finished
        } else {
            PlaybackState::Playing
        };
    }

    /// Play backward from the current playhead.
    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.state = if self.current_time.is_zero() {
            PlaybackState::Finished
        } else {
            PlaybackState::Playing
        };
    }

    /// Move the playhead to `time`, clamped to `[0, duration]`.
    ///
    /// Playback state is kept unless the timeline was idle, in which case
    /// it becomes paused at the seek point.
    pub fn seek(&mut self, time: Duration) {
        self.current_time = time.min(self.total_duration);
        if self.state == PlaybackState::Idle {
            self.state = PlaybackState::Paused;
        }
    }

    /// Move the playhead to `progress * duration`.
    pub fn seek_progress(&mut self, progress: f32) {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.seek(self.total_duration.mul_f64(f64::from(p)));
    }

    /// Jump straight to the end, finished.
    pub fn finish(&mut self) {
        self.direction = Direction::Forward;
        self.current_time = self.total_duration;
        self.state = PlaybackState::Finished;
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl Timeline {
    /// Playhead position as a value in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f32 {
        ratio(self.current_time, self.total_duration)
    }

    /// Current playback state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current playback direction.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current playhead position.
    #[inline]
    #[must_use]
    pub fn current_time(&self) -> Duration {
        self.current_time
    }

    /// Total duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.total_duration
    }

    /// Value of a labeled track at the current playhead.
    ///
    /// Returns `None` if the label doesn't exist.
    #[must_use]
    pub fn track_value(&self, label: &str) -> Option<f32> {
        self.tracks
            .iter()
            .find(|t| t.label == label)
            .map(|t| t.value_at(self.current_time))
    }
}

// ---------------------------------------------------------------------------
// Animation trait implementation
// ---------------------------------------------------------------------------

impl Animation for Timeline {
    fn tick(&mut self, dt: Duration) {
        if self.state != PlaybackState::Playing {
            return;
        }
        match self.direction {
            Direction::Forward => {
                self.current_time = self.current_time.saturating_add(dt);
                if self.current_time >= self.total_duration {
                    self.current_time = self.total_duration;
                    self.state = PlaybackState::Finished;
                }
            }
            Direction::Reverse => {
                self.current_time = self.current_time.saturating_sub(dt);
                if self.current_time.is_zero() {
                    self.state = PlaybackState::Finished;
                }
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    fn value(&self) -> f32 {
        self.progress()
    }

    fn reset(&mut self) {
        self.state = PlaybackState::Idle;
        self.direction = Direction::Forward;
        self.current_time = Duration::ZERO;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
