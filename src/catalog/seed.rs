//! JSON seed data compiled into the bundle.

use serde::de::DeserializeOwned;

use crate::error::SeedError;
use crate::models::place::Destination;
use crate::models::review::Review;

const REVIEWS_JSON: &str = include_str!("data/reviews.json");
const DESTINATIONS_JSON: &str = include_str!("data/destinations.json");

fn parse<T: DeserializeOwned>(source_name: &'static str, json: &str) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(json).map_err(|e| SeedError::Parse {
        source_name,
        message: e.to_string(),
    })
}

pub fn parse_reviews(json: &str) -> Result<Vec<Review>, SeedError> {
    parse("reviews.json", json)
}

pub fn parse_destinations(json: &str) -> Result<Vec<Destination>, SeedError> {
    parse("destinations.json", json)
}

pub fn seed_reviews() -> Result<Vec<Review>, SeedError> {
    parse_reviews(REVIEWS_JSON)
}

pub fn seed_destinations() -> Result<Vec<Destination>, SeedError> {
    parse_destinations(DESTINATIONS_JSON)
}
