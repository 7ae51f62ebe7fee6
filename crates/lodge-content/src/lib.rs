//! # lodge-content
//!
//! Row store backends and the localized views the site renders from them.

pub mod catalog;
pub mod store;
pub mod views;

pub use catalog::Catalog;
pub use store::JsonStore;
