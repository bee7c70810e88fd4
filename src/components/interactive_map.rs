use leptos::*;

use crate::catalog;
use crate::map::{find_point, map_points, MapPoint};
use crate::notify::use_toasts;

/// Clickable list of map points with an info panel for the selected one.
#[component]
pub fn InteractiveMap(
    #[prop(into)] points: Signal<Vec<MapPoint>>,
    #[prop(optional, into)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    let (selected_id, set_selected_id) = create_signal(None::<String>);

    let selected = move || {
        selected_id.with(|id| {
            id.as_deref()
                .and_then(|id| points.with(|points| find_point(points, id).cloned()))
        })
    };

    view! {
        <div class="interactive-map">
            <ul class="map-markers">
                <For
                    each=move || points.get()
                    key=|point| point.id.clone()
                    children=move |point| {
                        let id = point.id.clone();
                        let is_selected = {
                            let id = id.clone();
                            move || selected_id.with(|current| current.as_deref() == Some(id.as_str()))
                        };
                        view! {
                            <li>
                                <button
                                    class=point.marker().class()
                                    class:selected=is_selected
                                    on:click=move |_| {
                                        set_selected_id.set(Some(id.clone()));
                                        if let Some(on_select) = on_select {
                                            on_select.call(id.clone());
                                        }
                                    }
                                >
                                    {point.display_name.clone()}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            {move || {
                selected()
                    .map(|point| {
                        view! {
                            <div class="map-info-panel">
                                <h3>{point.display_name.clone()}</h3>
                                <p class="map-category">{point.category.label()}</p>
                                <p class="map-coordinates">
                                    {format!("{:.4}, {:.4}", point.latitude, point.longitude)}
                                </p>
                                <a href=point.external_url() target="_blank" rel="noopener noreferrer">
                                    "Open in Google Maps"
                                </a>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Map of the island's destinations.
#[component]
pub fn InteractiveMapSection() -> impl IntoView {
    let toasts = use_toasts();
    let points = store_value(map_points(&catalog::destinations()));

    let on_select = Callback::new(move |id: String| {
        let name = points.with_value(|points| {
            find_point(points, &id).map(|point| point.display_name.clone())
        });
        if let Some(name) = name {
            toasts.notify("Getting directions", format!("Opening map for {name}..."));
        }
    });

    view! {
        <section class="map-section" id="map">
            <div class="section-header">
                <h2>"Explore the Island"</h2>
                <p>"Pick a spot to see where it is."</p>
            </div>
            <InteractiveMap
                points=Signal::derive(move || points.get_value())
                on_select=on_select
            />
        </section>
    }
}
