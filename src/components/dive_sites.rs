use leptos::*;

use crate::catalog;
use crate::models::place::DiveSite;
use crate::notify::use_toasts;

#[component]
pub fn DiveSites() -> impl IntoView {
    view! {
        <section class="dive-sites" id="diving">
            <div class="section-header">
                <h2>"World-Class Dive Sites"</h2>
                <p>"From shallow coral gardens to deep pinnacles, there's a site for every level."</p>
            </div>
            <div class="card-grid">
                {catalog::dive_sites()
                    .into_iter()
                    .map(|site| view! { <DiveSiteCard site=site /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn DiveSiteCard(site: DiveSite) -> impl IntoView {
    let toasts = use_toasts();
    let name = site.name;

    view! {
        <article class="card dive-site-card">
            <div class="card-header">
                <h3>{site.name}</h3>
                <span class=site.difficulty.badge_class()>{site.difficulty.label()}</span>
            </div>
            <p class="card-description">{site.description}</p>
            <dl class="dive-site-facts">
                <dt>"Depth"</dt>
                <dd>{site.depth}</dd>
                <dt>"Highlights"</dt>
                <dd>{site.highlights}</dd>
            </dl>
            <div class="card-actions">
                <button
                    class="btn btn-outline"
                    on:click=move |_| {
                        toasts.notify(name, "Site details are coming soon.");
                    }
                >
                    "View Details"
                </button>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        toasts.notify(
                            "Booking request",
                            format!("We'll contact you about diving {name}."),
                        );
                    }
                >
                    "Book Dive"
                </button>
            </div>
        </article>
    }
}
