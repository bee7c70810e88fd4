use leptos::*;

use crate::catalog;
use crate::components::review_section::ReviewSection;
use crate::components::star_rating::StarRating;
use crate::models::business::{filter_businesses, Business, BusinessId, CategoryFilter};
use crate::models::review::Reviewable;
use crate::notify::use_toasts;
use crate::reviews::ReviewStore;

/// Business listing with category filters and reviews for the selected
/// business.
#[component]
pub fn BusinessDirectory() -> impl IntoView {
    let store = create_rw_signal(ReviewStore::seeded());
    let (filter, set_filter) = create_signal(CategoryFilter::default());
    let (selected, set_selected) = create_signal(BusinessId::SaireeBeachRestaurant);

    let all = store_value(catalog::businesses());
    let visible = move || all.with_value(|businesses| filter_businesses(businesses, filter.get()));

    let selected_name = move || {
        let id = selected.get();
        all.with_value(|businesses| {
            businesses
                .iter()
                .find(|b| b.id == id)
                .map(|b| b.name)
                .unwrap_or_default()
        })
    };

    view! {
        <section class="business-directory" id="businesses">
            <div class="section-header">
                <h2>"Local Business Directory"</h2>
                <p>"Restaurants, dive shops and more, rated by visitors."</p>
            </div>
            <div class="category-filters">
                {CategoryFilter::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class="filter-button"
                                class:active=move || filter.get() == option
                                on:click=move |_| set_filter.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="card-grid">
                <For
                    each=visible
                    key=|business| business.id
                    children=move |business| {
                        view! {
                            <BusinessCard
                                business=business
                                store=store
                                on_details=Callback::new(move |id: BusinessId| set_selected.set(id))
                            />
                        }
                    }
                />
            </div>
            {move || {
                let id = selected.get();
                view! {
                    <ReviewSection
                        target=id.entity_ref()
                        store=store
                        heading=format!("Reviews for {}", selected_name())
                    />
                }
            }}
        </section>
    }
}

#[component]
fn BusinessCard(
    business: Business,
    store: RwSignal<ReviewStore>,
    #[prop(into)] on_details: Callback<BusinessId>,
) -> impl IntoView {
    let toasts = use_toasts();
    let target = business.entity_ref();
    let listed = business.listed_rating;
    let rating = Signal::derive(move || store.with(|s| s.summary_for(&target).rating_or(listed)));
    let id = business.id;
    let name = business.name;
    let phone = business.phone;

    view! {
        <article class="card business-card">
            <div class="card-header">
                <span class="business-icon">{business.category.icon()}</span>
                <h3>{business.name}</h3>
                <span class=business.category.badge_class()>{business.category.label()}</span>
            </div>
            <div class="card-rating">
                <StarRating filled=Signal::derive(move || rating.get().floor() as u8) />
                <span>{move || format!("{:.1}", rating.get())}</span>
            </div>
            <p class="card-description">{business.description}</p>
            <ul class="business-facts">
                <li>{business.location.label()}</li>
                <li>{business.open_hours}</li>
                <li>{business.phone}</li>
            </ul>
            <div class="card-actions">
                <button
                    class="btn btn-outline"
                    on:click=move |_| {
                        on_details.call(id);
                        toasts.notify(name, "Showing reviews below.");
                    }
                >
                    "Details"
                </button>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        toasts.notify(format!("Contact {name}"), format!("Call {phone}"));
                    }
                >
                    "Contact"
                </button>
            </div>
        </article>
    }
}
