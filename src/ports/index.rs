//! Similarity index port.
//!
//! The nearest-neighbour search engine lives outside this crate. This trait is
//! the boundary the advice service talks to.

use crate::{
    Result,
    advisor::{Candidate, VectorQuery},
};

/// Port for nearest-neighbour search over stored game records.
///
/// Implementations return at most `query.limit` candidates, best match first.
/// The order is significant: the move policy treats it as the tie-break.
///
/// # Examples
///
/// ```no_run
/// use vectactoe::advisor::{Candidate, VectorQuery};
/// use vectactoe::ports::SimilarityIndex;
///
/// fn best_board<I: SimilarityIndex>(index: &I, query: &VectorQuery) -> vectactoe::Result<Option<String>> {
///     Ok(index.search(query)?.into_iter().next().map(|c| c.board))
/// }
/// ```
pub trait SimilarityIndex {
    /// Run a similarity search.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is unavailable or rejects the query.
    /// Callers surface these errors unchanged; there is no local fallback.
    fn search(&self, query: &VectorQuery) -> Result<Vec<Candidate>>;
}

impl<T: SimilarityIndex + ?Sized> SimilarityIndex for &T {
    fn search(&self, query: &VectorQuery) -> Result<Vec<Candidate>> {
        (**self).search(query)
    }
}
