use leptos::ev::SubmitEvent;
use leptos::*;

use crate::notify::use_toasts;

#[component]
pub fn Newsletter() -> impl IntoView {
    let toasts = use_toasts();
    let (email, set_email) = create_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if email.with_untracked(|e| e.trim().is_empty()) {
            return;
        }
        toasts.notify("Success!", "You've subscribed to island updates.");
        set_email.set(String::new());
    };

    view! {
        <section class="newsletter">
            <h2>"Stay in the Loop"</h2>
            <p>"Dive conditions, events and deals, once a month."</p>
            <form class="newsletter-form" on:submit=handle_submit>
                <input
                    type="email"
                    required
                    placeholder="Your email address"
                    prop:value=move || email.get()
                    on:input=move |e| set_email.set(event_target_value(&e))
                />
                <button type="submit" class="btn btn-primary">"Subscribe"</button>
            </form>
        </section>
    }
}
