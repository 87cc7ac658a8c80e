//! Move advice from similar historical games
//!
//! The similarity index returns ranked [`Candidate`]s for the live move
//! history. Each is checked for reachability from the live board, becoming a
//! [`Possibility`], and the policy turns the ranked possibilities into a
//! [`Suggestion`].

pub mod candidate;
pub mod policy;
pub mod query;
pub mod reachability;

pub use candidate::{Candidate, Possibility};
pub use policy::{MoveAdvisor, Strategy, Suggestion, suggest};
pub use query::VectorQuery;
pub use reachability::can_be_reached;
