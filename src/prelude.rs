//! Prelude module for nin_validator crate.
//!
//! Re-exports commonly used derive macros from derive_more.

pub use derive_more::Display;
