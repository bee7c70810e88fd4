use leptos::*;

use crate::models::review::Rating;

fn star_class(filled: bool) -> &'static str {
    if filled {
        "star star-filled"
    } else {
        "star"
    }
}

/// Read-only row of five stars with the first `filled` lit.
#[component]
pub fn StarRating(#[prop(into)] filled: MaybeSignal<u8>) -> impl IntoView {
    view! {
        <div class="stars" aria-hidden="true">
            {Rating::all()
                .map(|star| {
                    let filled = filled.clone();
                    view! { <span class=move || star_class(star.get() <= filled.get())>"★"</span> }
                })
                .collect_view()}
        </div>
    }
}

/// Clickable star row used by the review form.
#[component]
pub fn StarPicker(
    #[prop(into)] rating: Signal<Rating>,
    #[prop(into)] on_change: Callback<Rating>,
) -> impl IntoView {
    view! {
        <div class="stars stars-interactive">
            {Rating::all()
                .map(|star| {
                    view! {
                        <button
                            type="button"
                            class="star-button"
                            aria-label=format!("{} stars", star.get())
                            on:click=move |_| on_change.call(star)
                        >
                            <span class=move || star_class(star <= rating.get())>"★"</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
