/// Root of the Koh Tao guide.
/// Provides the shared language and toast contexts, then routes between pages.
use leptos::*;
use leptos_meta::{provide_meta_context, Html, Title};
use leptos_router::{Route, Router, Routes};

use crate::components::{footer::Footer, navigation::Navigation, toaster::Toaster};
use crate::i18n::provide_language_context;
use crate::notify::provide_toasts;
use crate::pages::{
    AccommodationsPage, ActivitiesPage, BusinessesPage, DestinationsPage, DivingPage, HomePage,
    MapPage, NotFoundPage,
};

pub const SITE_NAME: &str = "Koh Tao Guide";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let language = provide_language_context();
    provide_toasts();

    view! {
        <Html lang=move || language.get().code() />
        <Title formatter=|title: String| format!("{title} | {SITE_NAME}") />
        <Router>
            <Navigation />
            <main>
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/diving" view=DivingPage />
                    <Route path="/destinations" view=DestinationsPage />
                    <Route path="/activities" view=ActivitiesPage />
                    <Route path="/accommodations" view=AccommodationsPage />
                    <Route path="/businesses" view=BusinessesPage />
                    <Route path="/map" view=MapPage />
                    <Route path="/*any" view=NotFoundPage />
                </Routes>
            </main>
            <Footer />
            <Toaster />
        </Router>
    }
}
