//! Tic-Tac-Toe move advisor built on trajectory similarity
//!
//! This crate provides:
//! - Tic-Tac-Toe rules, move histories and exhaustive game enumeration
//! - Order-sensitive embeddings of move histories for nearest-neighbour search
//! - Reachability checks and a win/block/random move policy over ranked
//!   similarity candidates
//! - Dataset generation for seeding an external vector index
//! - A CLI for dataset export and offline advice

pub mod adapters;
pub mod advisor;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod embedding;
pub mod error;
pub mod ports;
pub mod service;
pub mod tictactoe;

pub use advisor::{Candidate, Possibility, Strategy, Suggestion};
pub use config::{AdvisorConfig, CandidateOrder};
pub use embedding::Padding;
pub use error::{Error, Result};
pub use service::{Advice, AdviceService};
pub use tictactoe::{BoardState, MoveSequence, Player};
