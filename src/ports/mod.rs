//! Ports (trait boundaries) for external dependencies.
//!
//! These traits are owned by the domain and implemented by adapters.

pub mod index;

pub use index::SimilarityIndex;
