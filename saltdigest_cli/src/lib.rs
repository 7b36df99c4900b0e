//! saltdigest CLI library
//!
//! Configuration, input handling, and output formatting used by the
//! `saltdigest` binary.

pub mod config;
pub mod input;
pub mod output;
pub mod terminal;
