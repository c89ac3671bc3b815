//! Commands applied by the runtime event loop.
//!
//! Keyboard shortcuts, MPRIS calls and the tick timer all funnel into one
//! channel of `ControlCmd`s, so the transport only ever has a single writer.

use crate::transport::{RepeatMode, TimerId};

#[derive(Clone, Debug, PartialEq)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    Stop,
    SetShuffle(bool),
    SetRepeat(RepeatMode),
    /// Absolute volume, `0..=100` (clamped by the transport).
    SetVolume(i32),
    /// Relative scrub in seconds.
    SeekBy(f64),
    /// Absolute position in seconds.
    SetPosition(f64),
    /// One tick from the timer with the given id.
    Tick(TimerId),
}

impl From<TimerId> for ControlCmd {
    fn from(id: TimerId) -> Self {
        ControlCmd::Tick(id)
    }
}
