//! Configuration loader and schema types.
//!
//! This module exposes the settings schema that seeds the transport and the
//! view, and helpers to load it from disk and the environment.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;
