//! Utilities

pub mod constants;
pub mod sound;
