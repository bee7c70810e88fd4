//! State of the "write a review" form, kept free of any UI types so the
//! submit flow can be tested without a browser.

use chrono::{DateTime, Utc};

use super::store::ReviewStore;
use crate::error::ReviewError;
use crate::models::review::{EntityRef, Rating, Review};

/// What the user has typed so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub user_name: String,
    pub rating: Rating,
    pub comment: String,
}

impl ReviewDraft {
    /// Checks both text fields are non-blank and returns trimmed copies.
    pub fn validate(&self) -> Result<ValidDraft, ReviewError> {
        let user_name = self.user_name.trim();
        if user_name.is_empty() {
            return Err(ReviewError::EmptyName);
        }
        let comment = self.comment.trim();
        if comment.is_empty() {
            return Err(ReviewError::EmptyComment);
        }
        Ok(ValidDraft {
            user_name: user_name.to_owned(),
            rating: self.rating,
            comment: comment.to_owned(),
        })
    }
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    user_name: String,
    rating: Rating,
    comment: String,
}

impl ValidDraft {
    /// Builds the stored record. The id comes from the wall clock, the date
    /// is the creation day, and user reviews are never verified.
    pub fn into_review(self, target: &EntityRef, now: DateTime<Utc>) -> Review {
        Review {
            id: format!("review-{}", now.timestamp_millis()),
            entity_type: target.entity_type,
            entity_id: target.entity_id.clone(),
            user_name: self.user_name,
            rating: self.rating,
            comment: self.comment,
            date: now.date_naive(),
            verified: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFormModel {
    state: FormState,
    draft: ReviewDraft,
}

impl ReviewFormModel {
    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == FormState::Open
    }

    pub fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    /// The "write a review" button flips the form open and shut.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            FormState::Closed => FormState::Open,
            FormState::Open => FormState::Closed,
        };
    }

    /// Hides the form. Typed text is kept for the next time it opens.
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
    }

    pub fn set_user_name(&mut self, user_name: String) {
        self.draft.user_name = user_name;
    }

    pub fn set_comment(&mut self, comment: String) {
        self.draft.comment = comment;
    }

    pub fn set_rating(&mut self, rating: Rating) {
        self.draft.rating = rating;
    }

    /// Submits the draft into `store`.
    ///
    /// On success the fields are reset and the form closes. On failure
    /// neither the form nor the store changes.
    pub fn submit(
        &mut self,
        store: &mut ReviewStore,
        target: &EntityRef,
        now: DateTime<Utc>,
    ) -> Result<Review, ReviewError> {
        let review = store.submit(target, &self.draft, now)?;
        self.draft = ReviewDraft::default();
        self.state = FormState::Closed;
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 14, 8, 0, 0).unwrap()
    }

    #[test]
    fn toggle_and_cancel_drive_the_state_machine() {
        let mut form = ReviewFormModel::default();
        assert_eq!(form.state(), FormState::Closed);
        form.toggle();
        assert!(form.is_open());
        form.toggle();
        assert_eq!(form.state(), FormState::Closed);
        form.toggle();
        form.cancel();
        assert_eq!(form.state(), FormState::Closed);
    }

    #[test]
    fn cancel_keeps_typed_text() {
        let mut form = ReviewFormModel::default();
        form.toggle();
        form.set_user_name("Kim".to_owned());
        form.cancel();
        assert_eq!(form.draft().user_name, "Kim");
    }

    #[test]
    fn successful_submit_resets_and_closes() {
        let mut store = ReviewStore::default();
        let target = EntityRef::business("dive-shop-pro");
        let mut form = ReviewFormModel::default();
        form.toggle();
        form.set_user_name("Ann".to_owned());
        form.set_comment("ok".to_owned());
        form.set_rating(Rating::new(3).unwrap());

        let review = form.submit(&mut store, &target, now()).unwrap();

        assert_eq!(review.rating.get(), 3);
        assert_eq!(form.state(), FormState::Closed);
        assert_eq!(form.draft(), &ReviewDraft::default());
        assert_eq!(form.draft().rating.get(), 5);
        assert_eq!(store.summary_for(&target).count(), 1);
    }

    #[test]
    fn failed_submit_keeps_form_open_and_store_empty() {
        let mut store = ReviewStore::default();
        let target = EntityRef::business("dive-shop-pro");
        let mut form = ReviewFormModel::default();
        form.toggle();
        form.set_comment("Great instructors".to_owned());
        let before = form.clone();

        assert_eq!(
            form.submit(&mut store, &target, now()),
            Err(ReviewError::EmptyName)
        );
        assert_eq!(form, before);
        assert!(form.is_open());
        assert!(store.is_empty());
    }

    #[test]
    fn name_is_checked_before_comment() {
        let draft = ReviewDraft::default();
        assert_eq!(draft.validate(), Err(ReviewError::EmptyName));
    }
}
