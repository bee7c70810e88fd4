use leptos::ev::SubmitEvent;
use leptos::*;

use crate::components::star_rating::StarPicker;
use crate::models::review::Rating;
use crate::reviews::ReviewFormModel;

/// The "write a review" form. Owns no state of its own: every keystroke goes
/// into `form`, and submitting is left to `on_submit`.
#[component]
pub fn ReviewForm(
    form: RwSignal<ReviewFormModel>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    let rating = Signal::derive(move || form.with(|f| f.draft().rating));

    view! {
        <div class="review-form">
            <h4>"Write a Review"</h4>
            <form on:submit=handle_submit>
                <label>
                    "Your Name"
                    <input
                        type="text"
                        class="review-name"
                        placeholder="Enter your name"
                        prop:value=move || form.with(|f| f.draft().user_name.clone())
                        on:input=move |e| form.update(|f| f.set_user_name(event_target_value(&e)))
                    />
                </label>
                <label>"Rating"</label>
                <StarPicker rating=rating on_change=move |star: Rating| form.update(|f| f.set_rating(star)) />
                <label>
                    "Your Review"
                    <textarea
                        class="review-comment"
                        placeholder="Share your experience..."
                        prop:value=move || form.with(|f| f.draft().comment.clone())
                        on:input=move |e| form.update(|f| f.set_comment(event_target_value(&e)))
                    />
                </label>
                <div class="review-form-actions">
                    <button type="submit" class="btn btn-primary review-submit">"Submit Review"</button>
                    <button
                        type="button"
                        class="btn btn-outline review-cancel"
                        on:click=move |_| form.update(ReviewFormModel::cancel)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
