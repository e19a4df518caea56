//! CLI command implementations

pub mod inspect;
pub mod mix;
pub mod render;
pub mod round;
pub mod silence;
pub mod tone;

mod output;
