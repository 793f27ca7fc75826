//! # paperbase-core
//!
//! Core types, traits, and abstractions for the paperbase document
//! classification and search library.
//!
//! This crate provides the foundational data structures, the error
//! type, text normalization, and the trait definitions that other
//! paperbase crates depend on.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod text;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use text::{frequency_table, is_stop_word, normalize};
pub use traits::*;
