//! Placeboard library exports for testing

pub mod core;
pub mod data;
pub mod tui;

pub use crate::core::directory::Role;
