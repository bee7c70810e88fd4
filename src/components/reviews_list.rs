use leptos::*;

use crate::components::star_rating::StarRating;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(#[prop(into)] reviews: Signal<Vec<Review>>) -> impl IntoView {
    view! {
        <div class="reviews-list">
            <Show
                when=move || reviews.with(|r| !r.is_empty())
                fallback=|| view! { <div class="reviews-empty">"No reviews yet. Be the first to share your experience!"</div> }
            >
                <For
                    each=move || reviews.get()
                    key=|review| review.id.clone()
                    children=move |review| view! { <ReviewCard review=review /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let date = review.display_date();
    let stars = review.rating.get();

    view! {
        <article class="review-card">
            <header class="review-card-header">
                <div class="review-avatar" aria-hidden="true">"👤"</div>
                <div class="review-meta">
                    <span class="review-author">{review.user_name}</span>
                    {review
                        .verified
                        .then(|| view! { <span class="review-verified" title="Verified stay">"✔"</span> })}
                    <div class="review-date">{date}</div>
                </div>
                <StarRating filled=stars />
            </header>
            <p class="review-text">{review.comment}</p>
        </article>
    }
}
