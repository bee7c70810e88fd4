use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ReviewError;

/// Kind of catalog entity a review can be attached to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Accommodation,
    Business,
}

impl EntityType {
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityType::Accommodation => "accommodation",
            EntityType::Business => "business",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The (type, id) pair a review is keyed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub entity_type: EntityType,
    pub entity_id: String,
}

impl EntityRef {
    pub fn new(entity_type: EntityType, entity_id: impl Into<String>) -> Self {
        Self {
            entity_type,
            entity_id: entity_id.into(),
        }
    }

    pub fn accommodation(entity_id: impl Into<String>) -> Self {
        Self::new(EntityType::Accommodation, entity_id)
    }

    pub fn business(entity_id: impl Into<String>) -> Self {
        Self::new(EntityType::Business, entity_id)
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.entity_type, self.entity_id)
    }
}

/// Anything in the catalog that can collect reviews.
pub trait Reviewable {
    fn entity_ref(&self) -> EntityRef;
}

/// A star rating on the 1-5 scale.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Result<Self, ReviewError> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(ReviewError::RatingOutOfRange(stars))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every valid rating, lowest first. Used to draw star rows.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

// New reviews start at five stars.
impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u8> for Rating {
    type Error = ReviewError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A single review as stored in `reviews.json` and in the in-memory store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub entity_type: EntityType,
    pub entity_id: String,
    pub user_name: String,
    pub rating: Rating,
    pub comment: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub verified: bool,
}

impl Review {
    pub fn is_for(&self, target: &EntityRef) -> bool {
        self.entity_type == target.entity_type && self.entity_id == target.entity_id
    }

    /// Date as shown on review cards, e.g. `Mar 05, 2024`.
    pub fn display_date(&self) -> String {
        self.date.format("%b %d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_rejects_values_outside_scale() {
        assert_eq!(Rating::new(0), Err(ReviewError::RatingOutOfRange(0)));
        assert_eq!(Rating::new(6), Err(ReviewError::RatingOutOfRange(6)));
        assert_eq!(Rating::new(3).map(Rating::get), Ok(3));
        assert_eq!(Rating::default().get(), 5);
        assert_eq!(Rating::all().count(), 5);
    }

    #[test]
    fn review_deserializes_from_seed_shape() {
        let json = r#"{
            "id": "review-1",
            "entityType": "business",
            "entityId": "sunset-cafe",
            "userName": "Mia",
            "rating": 4,
            "comment": "Great smoothies",
            "date": "2024-03-05",
            "verified": true
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.entity_type, EntityType::Business);
        assert_eq!(review.rating.get(), 4);
        assert!(review.is_for(&EntityRef::business("sunset-cafe")));
        assert!(!review.is_for(&EntityRef::accommodation("sunset-cafe")));
        assert_eq!(review.display_date(), "Mar 05, 2024");
    }

    #[test]
    fn review_with_out_of_range_rating_fails_to_parse() {
        let json = r#"{
            "id": "review-2",
            "entityType": "accommodation",
            "entityId": "dive-inn-bungalows",
            "userName": "Jo",
            "rating": 9,
            "comment": "?",
            "date": "2024-01-01"
        }"#;
        assert!(serde_json::from_str::<Review>(json).is_err());
    }

    #[test]
    fn verified_defaults_to_false() {
        let json = r#"{
            "id": "review-3",
            "entityType": "accommodation",
            "entityId": "backpacker-hostel",
            "userName": "Lee",
            "rating": 3,
            "comment": "Fine",
            "date": "2024-02-10"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert!(!review.verified);
    }
}
