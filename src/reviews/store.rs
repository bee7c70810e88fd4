use chrono::{DateTime, Utc};
use leptos::logging::{error, log};

use super::aggregate::{filter_reviews, summarize, RatingSummary};
use super::form::ReviewDraft;
use crate::catalog::seed;
use crate::error::{ReviewError, SeedError};
use crate::models::review::{EntityRef, Review};

/// The in-memory review collection owned by one page.
///
/// Nothing here is persisted: a store lives as long as the component that
/// created it, and submitted reviews are gone after a reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewStore {
    reviews: Vec<Review>,
}

impl ReviewStore {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    /// Parses a store from review JSON (an array of review records).
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        seed::parse_reviews(json).map(Self::new)
    }

    /// A store holding the bundled `reviews.json` records.
    ///
    /// The seed is compiled in, so a parse failure is a packaging bug. It is
    /// logged and the page continues with an empty store.
    pub fn seeded() -> Self {
        match seed::seed_reviews() {
            Ok(reviews) => {
                log!("[REVIEWS] Loaded {} seed reviews", reviews.len());
                Self::new(reviews)
            }
            Err(err) => {
                error!("[REVIEWS] Falling back to an empty review store: {}", err);
                Self::default()
            }
        }
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Reviews for `target` in the order they were added.
    pub fn reviews_for(&self, target: &EntityRef) -> Vec<Review> {
        filter_reviews(&self.reviews, target).cloned().collect()
    }

    pub fn summary_for(&self, target: &EntityRef) -> RatingSummary {
        summarize(filter_reviews(&self.reviews, target))
    }

    /// Appends a review as-is. No validation and no deduplication.
    pub fn push(&mut self, review: Review) {
        self.reviews.push(review);
    }

    /// Validates `draft` and appends it as a new, unverified review of
    /// `target` created at `now`.
    ///
    /// On error the store is left untouched.
    pub fn submit(
        &mut self,
        target: &EntityRef,
        draft: &ReviewDraft,
        now: DateTime<Utc>,
    ) -> Result<Review, ReviewError> {
        let review = draft.validate()?.into_review(target, now);
        log!("[REVIEWS] Added review {} for {}", review.id, target);
        self.reviews.push(review.clone());
        Ok(review)
    }
}
