//! Static catalog shown by the playlist view.
//!
//! Nothing here is fetched or scanned: the sidebar entries, the playlist
//! header and the song rows are hardcoded mock data.

mod data;
mod display;
mod model;

pub use data::{daily_mix, demo_track};
pub use display::format_total_minutes;
pub use model::*;
