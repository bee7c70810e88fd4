use leptos::*;
use leptos_meta::{Meta, Title};

/// Sets the document title (suffixed by the app-wide formatter) and, when
/// given, the meta description.
#[component]
pub fn PageTitle(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <Title text=title />
        {description.map(|content| view! { <Meta name="description" content=content /> })}
    }
}
