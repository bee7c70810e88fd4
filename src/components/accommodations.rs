use leptos::*;

use crate::catalog::{self, FEATURED_FALLBACK_RATING};
use crate::components::review_section::ReviewSection;
use crate::components::star_rating::StarRating;
use crate::models::accommodation::Accommodation;
use crate::models::review::Reviewable;
use crate::notify::use_toasts;
use crate::reviews::ReviewStore;

/// Featured resort with its reviews, followed by the accommodation grid.
///
/// Owns the review store for the page; every card reads its rating from it.
#[component]
pub fn Accommodations() -> impl IntoView {
    let store = create_rw_signal(ReviewStore::seeded());
    let featured = catalog::featured_accommodation();
    let featured_ref = featured.entity_ref();

    view! {
        <section class="accommodations" id="accommodations">
            <div class="section-header">
                <h2>"Where to Stay"</h2>
                <p>"From beach huts to private villas."</p>
            </div>
            <FeaturedCard accommodation=featured store=store />
            <ReviewSection target=featured_ref store=store />
            <div class="card-grid">
                {catalog::accommodations()
                    .into_iter()
                    .map(|accommodation| {
                        view! { <AccommodationCard accommodation=accommodation store=store /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FeaturedCard(accommodation: Accommodation, store: RwSignal<ReviewStore>) -> impl IntoView {
    let toasts = use_toasts();
    let target = accommodation.entity_ref();
    let summary = Signal::derive(move || store.with(|s| s.summary_for(&target)));
    let name = accommodation.name;

    view! {
        <article class="featured-card">
            <span class="badge badge-featured">"Featured"</span>
            <h3>{accommodation.name}</h3>
            <p class="location">{accommodation.location.label()}</p>
            <div class="featured-rating">
                <StarRating filled=Signal::derive(move || {
                    summary.get().rating_or(FEATURED_FALLBACK_RATING).floor() as u8
                }) />
                <span class="featured-rating-value">
                    {move || format!("{:.1}", summary.get().rating_or(FEATURED_FALLBACK_RATING))}
                </span>
                <span class="featured-review-count">
                    {move || format!("({} reviews)", summary.get().count())}
                </span>
            </div>
            <p class="card-description">{accommodation.description}</p>
            <ul class="amenities">
                {accommodation
                    .amenities
                    .iter()
                    .map(|amenity| view! { <li>{*amenity}</li> })
                    .collect_view()}
            </ul>
            <div class="card-footer">
                <span class="price">{accommodation.price}</span>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        toasts.notify("Booking request", format!("We'll check availability at {name}."));
                    }
                >
                    "Book Now"
                </button>
            </div>
        </article>
    }
}

#[component]
fn AccommodationCard(accommodation: Accommodation, store: RwSignal<ReviewStore>) -> impl IntoView {
    let toasts = use_toasts();
    let target = accommodation.entity_ref();
    let listed = accommodation.listed_rating;
    let rating = Signal::derive(move || store.with(|s| s.summary_for(&target).rating_or(listed)));
    let name = accommodation.name;

    view! {
        <article class="card accommodation-card">
            <div class="card-header">
                <h3>{accommodation.name}</h3>
                <span class=accommodation.kind.badge_class()>{accommodation.kind.label()}</span>
            </div>
            <p class="location">{accommodation.location.label()}</p>
            <div class="card-rating">
                <StarRating filled=Signal::derive(move || rating.get().floor() as u8) />
                <span>{move || format!("{:.1}", rating.get())}</span>
            </div>
            <p class="card-description">{accommodation.description}</p>
            <div class="card-footer">
                <span class="price">{accommodation.price}</span>
                <button
                    class="btn btn-outline"
                    on:click=move |_| {
                        toasts.notify(name, "Full details are coming soon.");
                    }
                >
                    "View Details"
                </button>
            </div>
        </article>
    }
}
