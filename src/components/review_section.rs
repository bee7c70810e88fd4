use chrono::Utc;
use leptos::logging::warn;
use leptos::*;

use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::components::star_rating::StarRating;
use crate::models::review::EntityRef;
use crate::notify::use_toasts;
use crate::reviews::{ReviewFormModel, ReviewStore};

/// Rating summary, review form and review list for one entity.
///
/// Reads and writes the page's `store`; the section itself only keeps the
/// form state.
#[component]
pub fn ReviewSection(
    target: EntityRef,
    store: RwSignal<ReviewStore>,
    #[prop(optional, into)] heading: Option<String>,
) -> impl IntoView {
    let toasts = use_toasts();
    let form = create_rw_signal(ReviewFormModel::default());
    let target = store_value(target);

    let reviews = Signal::derive(move || store.with(|s| target.with_value(|t| s.reviews_for(t))));
    let summary = Signal::derive(move || store.with(|s| target.with_value(|t| s.summary_for(t))));

    // Work on copies so a rejected draft never touches either signal.
    let submit = move || {
        let mut next_form = form.get_untracked();
        let mut next_store = store.get_untracked();
        let outcome = target.with_value(|t| next_form.submit(&mut next_store, t, Utc::now()));
        match outcome {
            Ok(_) => {
                store.set(next_store);
                form.set(next_form);
                toasts.notify("Thank you!", "Your review has been submitted.");
            }
            Err(err) => {
                warn!("[REVIEWS] Rejected review: {}", err);
                toasts.error("Please fill in all fields", err.to_string());
            }
        }
    };

    let heading = heading.unwrap_or_else(|| "Customer Reviews".to_owned());

    view! {
        <div class="review-section">
            <div class="review-summary">
                <div>
                    <h3>{heading}</h3>
                    <div class="review-summary-score">
                        <span class="review-average">{move || summary.get().display()}</span>
                        <div class="review-summary-stars">
                            <StarRating filled=Signal::derive(move || summary.get().filled_stars()) />
                            <span class="review-count">
                                {move || format!("{} reviews", summary.get().count())}
                            </span>
                        </div>
                    </div>
                </div>
                <button
                    class="btn btn-primary write-review"
                    on:click=move |_| form.update(ReviewFormModel::toggle)
                >
                    "Write a Review"
                </button>
            </div>

            <Show when=move || form.with(ReviewFormModel::is_open)>
                <ReviewForm form=form on_submit=Callback::new(move |_: ()| submit()) />
            </Show>

            <ReviewsList reviews=reviews />
        </div>
    }
}
