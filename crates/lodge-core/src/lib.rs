//! # lodge-core
//!
//! Core types, traits, configuration, and error handling for Lodge.

pub mod config;
pub mod error;
pub mod traits;

pub use config::shellexpand;
pub use traits::{OrderBy, Query, Row, RowSource};
