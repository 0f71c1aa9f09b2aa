//! Core library components.

pub mod emit;
pub mod key;
pub mod store;
pub mod walk;
