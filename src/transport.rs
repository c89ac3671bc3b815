//! Transport simulator: the playback state behind the bottom control bar.
//!
//! There is no audio engine. A [`Transport`] owns the loaded track and the
//! playback flags, and a one-second tick timer fakes progress while playing.
//! Everything the view shows is derived from that state on demand.

mod simulator;
mod time;
mod timer;
mod types;

pub use simulator::*;
pub use time::format_time;
pub use timer::{ThreadScheduler, TimerId};
pub use types::*;

#[cfg(test)]
pub(crate) use timer::manual::ManualScheduler;
