//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the playlist page, the
//! selected row and the transport behind the player bar.

mod model;

pub use model::*;
