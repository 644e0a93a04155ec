//! Prelude module for the tanggalan crate.
//!
//! Re-exports the derive macros used across modules.

pub use derive_more::Display;
