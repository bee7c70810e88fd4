use leptos::*;

use crate::catalog;
use crate::models::place::Activity;
use crate::notify::use_toasts;

#[component]
pub fn Activities() -> impl IntoView {
    view! {
        <section class="activities" id="activities">
            <div class="section-header">
                <h2>"Things to Do"</h2>
                <p>"Plenty to keep you busy between dives."</p>
            </div>
            <div class="card-grid">
                {catalog::activities()
                    .into_iter()
                    .map(|activity| view! { <ActivityCard activity=activity /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ActivityCard(activity: Activity) -> impl IntoView {
    let toasts = use_toasts();
    let title = activity.title;

    view! {
        <article class="card activity-card">
            <span class="activity-icon">{activity.icon}</span>
            <h3>{activity.title}</h3>
            <p class="card-description">{activity.description}</p>
            <ul class="activity-features">
                {activity
                    .features
                    .iter()
                    .map(|feature| view! { <li>{*feature}</li> })
                    .collect_view()}
            </ul>
            <div class="card-footer">
                <span class="price">{activity.price}</span>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        toasts.notify(title, "Thanks for your interest! We'll be in touch.");
                    }
                >
                    "Learn More"
                </button>
            </div>
        </article>
    }
}
