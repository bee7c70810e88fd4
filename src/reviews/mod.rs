//! Review aggregation, the per-page review store, and the review form.

pub mod aggregate;
pub mod form;
pub mod store;

pub use aggregate::{filter_reviews, summarize, RatingSummary};
pub use form::{FormState, ReviewDraft, ReviewFormModel};
pub use store::ReviewStore;
