use chrono::{Datelike, Utc};
use leptos::*;
use leptos_router::A;

use crate::components::navigation::NAV_LINKS;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="footer-about">
                <h3>"Koh Tao Guide"</h3>
                <p>
                    "Dive sites, beaches, places to stay and local businesses on Thailand's turtle island."
                </p>
            </div>
            <ul class="footer-links">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| view! { <li><A href=href>{label}</A></li> })
                    .collect_view()}
            </ul>
            <p class="footer-copyright">{format!("© {year} Koh Tao Guide")}</p>
        </footer>
    }
}
