//! CLI infrastructure for the vectactoe toolkit
//!
//! Dataset export, query inspection and offline advice.

pub mod commands;
pub mod logging;
pub mod output;
