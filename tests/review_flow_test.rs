use chrono::{TimeZone, Utc};
use kohtao_guide::catalog;
use kohtao_guide::error::ReviewError;
use kohtao_guide::models::business::{filter_businesses, CategoryFilter};
use kohtao_guide::models::review::{EntityRef, Rating};
use kohtao_guide::reviews::{ReviewFormModel, ReviewStore};

#[test]
fn seeded_resort_summary_moves_with_a_new_review() {
    let mut store = ReviewStore::seeded();
    let target = EntityRef::accommodation("ocean-view-resort");

    let summary = store.summary_for(&target);
    assert_eq!(summary.count(), 2);
    assert_eq!(summary.average(), 4.5);

    let mut form = ReviewFormModel::default();
    form.toggle();
    form.set_user_name("Ann".to_owned());
    form.set_rating(Rating::new(3).unwrap());
    form.set_comment("ok".to_owned());

    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let review = form.submit(&mut store, &target, now).unwrap();
    assert_eq!(review.id, format!("review-{}", now.timestamp_millis()));
    assert!(!form.is_open());

    let summary = store.summary_for(&target);
    assert_eq!(summary.count(), 3);
    assert_eq!(summary.average(), 4.0);
}

#[test]
fn rejected_draft_leaves_store_and_form_alone() {
    let mut store = ReviewStore::seeded();
    let total = store.len();
    let target = EntityRef::business("sunset-cafe");

    let mut form = ReviewFormModel::default();
    form.toggle();
    form.set_user_name("   ".to_owned());
    form.set_comment("great coffee".to_owned());

    let err = form.submit(&mut store, &target, Utc::now()).unwrap_err();
    assert_eq!(err, ReviewError::EmptyName);
    assert_eq!(store.len(), total);
    assert!(form.is_open());
    assert_eq!(form.draft().comment, "great coffee");
}

#[test]
fn unreviewed_business_falls_back_to_its_listed_rating() {
    let store = ReviewStore::seeded();
    let market = catalog::businesses()
        .into_iter()
        .find(|b| b.name == "Island Market")
        .unwrap();
    let summary = store.summary_for(&EntityRef::business("island-market"));
    assert!(summary.is_empty());
    assert_eq!(summary.rating_or(market.listed_rating), market.listed_rating);
}

#[test]
fn all_filter_keeps_every_business() {
    let businesses = catalog::businesses();
    assert_eq!(filter_businesses(&businesses, CategoryFilter::All).len(), businesses.len());
    assert_eq!(filter_businesses(&businesses, CategoryFilter::Cafes).len(), 2);
}
