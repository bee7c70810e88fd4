//! Rating aggregation over a flat review collection.
//!
//! Every rating shown on the site comes from [`summarize`]. An entity with no
//! reviews has a count and average of zero; call sites that want to show
//! something else for unreviewed entities use [`RatingSummary::rating_or`].

use crate::models::review::{EntityRef, Review};

/// Reviews attached to `target`, in insertion order.
pub fn filter_reviews<'a>(
    reviews: &'a [Review],
    target: &'a EntityRef,
) -> impl Iterator<Item = &'a Review> + 'a {
    reviews.iter().filter(move |review| review.is_for(target))
}

/// Count and one-decimal mean of the given reviews.
pub fn summarize<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> RatingSummary {
    let (count, sum) = reviews
        .into_iter()
        .fold((0usize, 0u64), |(count, sum), review| {
            (count + 1, sum + u64::from(review.rating.get()))
        });

    if count == 0 {
        return RatingSummary::default();
    }

    let mean = sum as f64 / count as f64;
    RatingSummary {
        count,
        average: round_to_tenth(mean),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingSummary {
    count: usize,
    average: f64,
}

impl RatingSummary {
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Mean rating rounded to one decimal, `0.0` when there are no reviews.
    pub const fn average(&self) -> f64 {
        self.average
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The average, or `fallback` when nothing has been reviewed.
    pub fn rating_or(&self, fallback: f64) -> f64 {
        if self.is_empty() {
            fallback
        } else {
            self.average
        }
    }

    /// The average formatted with one decimal, e.g. `4.5` or `0.0`.
    pub fn display(&self) -> String {
        format!("{:.1}", self.average)
    }

    /// Number of whole stars to fill when drawing the average.
    pub fn filled_stars(&self) -> u8 {
        // average is in [0, 5]
        self.average.floor().clamp(0.0, 5.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::{EntityType, Rating};
    use chrono::NaiveDate;

    fn review(entity_type: EntityType, entity_id: &str, stars: u8) -> Review {
        Review {
            id: format!("review-{entity_id}-{stars}"),
            entity_type,
            entity_id: entity_id.to_owned(),
            user_name: "Tester".to_owned(),
            rating: Rating::new(stars).unwrap(),
            comment: "Nice".to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            verified: false,
        }
    }

    fn sample() -> Vec<Review> {
        vec![
            review(EntityType::Business, "x", 4),
            review(EntityType::Business, "x", 5),
            review(EntityType::Business, "y", 1),
        ]
    }

    #[test]
    fn summarizes_matching_reviews_only() {
        let reviews = sample();

        let x = EntityRef::business("x");
        let summary = summarize(filter_reviews(&reviews, &x));
        assert_eq!(summary.count(), 2);
        assert_eq!(summary.average(), 4.5);

        let y = EntityRef::business("y");
        let summary = summarize(filter_reviews(&reviews, &y));
        assert_eq!(summary.count(), 1);
        assert_eq!(summary.average(), 1.0);
    }

    #[test]
    fn absent_entity_summarizes_to_zero() {
        let reviews = sample();
        let z = EntityRef::business("z");
        let summary = summarize(filter_reviews(&reviews, &z));
        assert!(summary.is_empty());
        assert_eq!(summary.count(), 0);
        assert_eq!(summary.average(), 0.0);
        assert_eq!(summary.display(), "0.0");
        assert_eq!(summary.rating_or(4.7), 4.7);
    }

    #[test]
    fn entity_type_is_part_of_the_key() {
        let reviews = sample();
        let x = EntityRef::accommodation("x");
        assert_eq!(filter_reviews(&reviews, &x).count(), 0);
    }

    #[test]
    fn filter_preserves_insertion_order() {
        let reviews = vec![
            review(EntityType::Accommodation, "a", 2),
            review(EntityType::Accommodation, "b", 5),
            review(EntityType::Accommodation, "a", 4),
            review(EntityType::Accommodation, "a", 3),
        ];
        let target = EntityRef::accommodation("a");
        let stars: Vec<u8> = filter_reviews(&reviews, &target)
            .map(|r| r.rating.get())
            .collect();
        assert_eq!(stars, vec![2, 4, 3]);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let reviews = vec![
            review(EntityType::Business, "x", 5),
            review(EntityType::Business, "x", 4),
            review(EntityType::Business, "x", 4),
        ];
        let summary = summarize(&reviews);
        assert_eq!(summary.average(), 4.3);
        assert_eq!(summary.display(), "4.3");
        assert_eq!(summary.filled_stars(), 4);
        assert_eq!(summary.rating_or(1.0), 4.3);
    }

    #[test]
    fn half_tenths_round_up() {
        // 7 x 5 + 13 x 4 = 87 over 20 reviews, a mean of 4.35
        let reviews: Vec<Review> = std::iter::repeat(5)
            .take(7)
            .chain(std::iter::repeat(4).take(13))
            .map(|stars| review(EntityType::Business, "x", stars))
            .collect();
        let summary = summarize(&reviews);
        assert_eq!(summary.count(), 20);
        assert_eq!(summary.average(), 4.4);
        assert_eq!(summary.display(), "4.4");
    }

    #[test]
    fn average_is_order_independent_and_bounded() {
        let mut reviews = vec![
            review(EntityType::Business, "x", 1),
            review(EntityType::Business, "x", 5),
            review(EntityType::Business, "x", 2),
            review(EntityType::Business, "y", 3),
            review(EntityType::Business, "x", 4),
        ];
        let target = EntityRef::business("x");
        let forward = summarize(filter_reviews(&reviews, &target));
        reviews.reverse();
        let backward = summarize(filter_reviews(&reviews, &target));
        reviews.rotate_left(2);
        let rotated = summarize(filter_reviews(&reviews, &target));

        assert_eq!(forward, backward);
        assert_eq!(forward, rotated);
        assert!((0.0..=5.0).contains(&forward.average()));
        assert!(forward.average() > 0.0);
    }
}
