//! WaveFactory CLI library.
//!
//! This crate provides the command implementations behind the `wavefactory`
//! binary, plus the JSON render configuration format.

pub mod commands;
pub mod config;
