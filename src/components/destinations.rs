use leptos::*;

use crate::catalog;
use crate::models::place::Destination;
use crate::notify::use_toasts;

#[component]
pub fn Destinations() -> impl IntoView {
    let destinations = catalog::destinations();
    let has_destinations = !destinations.is_empty();

    view! {
        <section class="destinations" id="destinations">
            <div class="section-header">
                <h2>"Beaches & Viewpoints"</h2>
                <p>"Quiet bays, white sand and panoramic lookouts around the island."</p>
            </div>
            <Show
                when=move || has_destinations
                fallback=|| view! { <p class="empty-state">"No destinations to show right now."</p> }
            >
                <div class="card-grid">
                    {destinations
                        .iter()
                        .cloned()
                        .map(|destination| view! { <DestinationCard destination=destination /> })
                        .collect_view()}
                </div>
            </Show>
        </section>
    }
}

#[component]
fn DestinationCard(destination: Destination) -> impl IntoView {
    let toasts = use_toasts();
    let name = destination.name.clone();

    view! {
        <article class="card destination-card">
            <div class="card-header">
                <span class="destination-icon">{destination.kind.icon()}</span>
                <h3>{destination.name}</h3>
                <span class="badge">{destination.kind.label()}</span>
            </div>
            <p class="card-description">{destination.description}</p>
            <button
                class="btn btn-outline"
                on:click=move |_| {
                    toasts.notify("Explore", format!("More about {name} is coming soon."));
                }
            >
                "Explore"
            </button>
        </article>
    }
}
