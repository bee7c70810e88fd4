use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::A;

use crate::notify::use_toasts;

#[component]
pub fn Hero() -> impl IntoView {
    let toasts = use_toasts();
    let (query, set_query) = create_signal(String::new());

    // Enter in the input submits the form as well as the button.
    let handle_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let term = query.with_untracked(|q| q.trim().to_owned());
        if term.is_empty() {
            toasts.notify("Enter a search term", "Please enter what you're looking for");
        } else {
            toasts.notify("Searching...", format!("Looking for: {term}"));
        }
    };

    view! {
        <section class="hero">
            <div class="hero-content">
                <span class="hero-badge">"Gulf of Thailand"</span>
                <h1>"Discover Koh Tao"</h1>
                <p class="hero-lead">
                    "Crystal-clear water, world-class dive sites and quiet bays, all on one small island."
                </p>
                <form class="hero-search" on:submit=handle_search>
                    <input
                        type="text"
                        class="hero-search-input"
                        placeholder="Search dive sites, beaches, restaurants..."
                        prop:value=move || query.get()
                        on:input=move |e| set_query.set(event_target_value(&e))
                    />
                    <button type="submit" class="btn btn-primary hero-search-button">"Explore"</button>
                </form>
                <div class="hero-actions">
                    <A href="/activities" class="btn btn-primary">"Plan Your Trip"</A>
                    <A href="/diving" class="btn btn-outline">"Explore Dive Sites"</A>
                </div>
            </div>
        </section>
    }
}
