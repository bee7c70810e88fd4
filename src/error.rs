//! Error types shared by the review store and the seed loaders.

use thiserror::Error;

/// Reasons a review submission is rejected.
///
/// None of these change the review store; the UI reports them through the
/// notification surface and leaves the form open.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// The reviewer name is empty once surrounding whitespace is removed.
    #[error("please enter your name")]
    EmptyName,

    /// The comment is empty once surrounding whitespace is removed.
    #[error("please write a comment")]
    EmptyComment,

    /// A rating outside the 1-5 star scale.
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

/// Errors raised while parsing the JSON seed data bundled with the site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The seed JSON is malformed or a record failed validation.
    #[error("invalid {source_name} seed data: {message}")]
    Parse {
        /// Which seed file failed, e.g. `reviews.json`.
        source_name: &'static str,
        /// Description of the parse failure.
        message: String,
    },
}
