use leptos::*;
use leptos_router::A;

use crate::components::language_selector::LanguageSelector;

/// Scroll offset after which the bar gets its solid background.
const SCROLL_THRESHOLD_PX: f64 = 20.0;

pub const NAV_LINKS: [(&str, &str); 6] = [
    ("/diving", "Dive Sites"),
    ("/destinations", "Destinations"),
    ("/activities", "Activities"),
    ("/accommodations", "Accommodations"),
    ("/businesses", "Business Directory"),
    ("/map", "Map"),
];

#[component]
pub fn Navigation() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let (scrolled, set_scrolled) = create_signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let offset = gloo_utils::window().scroll_y().unwrap_or_default();
        set_scrolled.set(offset > SCROLL_THRESHOLD_PX);
    });
    on_cleanup(move || handle.remove());

    view! {
        <nav class="site-nav" class:scrolled=move || scrolled.get()>
            <A href="/" class="brand">
                <span class="brand-name">"Koh Tao Guide"</span>
            </A>
            <ul class="nav-links" class:open=move || menu_open.get()>
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <li on:click=move |_| set_menu_open.set(false)>
                                <A href=href>{label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <LanguageSelector />
            <button
                class="nav-toggle"
                aria-label="Toggle menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
        </nav>
    }
}
