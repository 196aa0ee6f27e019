//! Delta-time, frame id and frames-per-second bookkeeping.

use crate::time_utils::{self, NANOS_PER_SEC};

/// Turns the host's per-iteration timestamps into frame statistics.
///
/// Timestamps are in native clock ticks (nanoseconds) from an arbitrary
/// origin.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    frame_id: i64,
    delta_time: f32,
    last_time: Option<u64>,
    fps_window_start: u64,
    frames: u32,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            frame_id: -1,
            delta_time: 0.,
            last_time: None,
            fps_window_start: 0,
            frames: 0,
            fps: 0,
        }
    }
}

impl FrameClock {
    /// A clock that hasn't seen any frame yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start of a frame at `time`.
    ///
    /// The first call only sets the baseline, so its delta is zero.
    pub fn frame_start(&mut self, time: u64) {
        let last_time = self.last_time.unwrap_or(time);
        self.delta_time = time_utils::nanos_to_secs(time.saturating_sub(last_time));
        self.last_time = Some(time);

        if time.saturating_sub(self.fps_window_start) >= NANOS_PER_SEC {
            self.fps = self.frames;
            self.frames = 0;
            self.fps_window_start = time;
        }
        self.frames += 1;
        self.frame_id += 1;
    }

    /// Id of the current frame; `-1` before the first frame, then 0, 1, 2...
    pub fn frame_id(&self) -> i64 {
        self.frame_id
    }
    /// Seconds between the last two frames.
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }
    /// Frames counted during the last complete one-second window.
    pub fn frames_per_second(&self) -> u32 {
        self.fps
    }
}
