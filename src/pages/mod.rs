//! One component per route.

use leptos::*;
use leptos_router::A;

use crate::components::{
    accommodations::Accommodations, activities::Activities,
    business_directory::BusinessDirectory, destinations::Destinations, dive_sites::DiveSites,
    hero::Hero, interactive_map::InteractiveMapSection, newsletter::Newsletter,
    page_title::PageTitle,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageTitle
            title="Home"
            description="Your guide to Koh Tao: dive sites, beaches, activities, places to stay and local businesses."
        />
        <Hero />
        <DiveSites />
        <Destinations />
        <Activities />
        <Accommodations />
        <BusinessDirectory />
        <InteractiveMapSection />
        <Newsletter />
    }
}

#[component]
pub fn DivingPage() -> impl IntoView {
    view! {
        <PageTitle
            title="Dive Sites"
            description="Koh Tao's best dive sites, from beginner coral gardens to deep pinnacles."
        />
        <DiveSites />
    }
}

#[component]
pub fn DestinationsPage() -> impl IntoView {
    view! {
        <PageTitle title="Destinations" description="Beaches and viewpoints around Koh Tao." />
        <Destinations />
    }
}

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    view! {
        <PageTitle title="Activities" description="Diving courses, snorkelling, hiking and more." />
        <Activities />
    }
}

#[component]
pub fn AccommodationsPage() -> impl IntoView {
    view! {
        <PageTitle
            title="Accommodations"
            description="Resorts, bungalows, villas and hostels on Koh Tao, with guest reviews."
        />
        <Accommodations />
    }
}

#[component]
pub fn BusinessesPage() -> impl IntoView {
    view! {
        <PageTitle
            title="Business Directory"
            description="Restaurants, dive shops, cafés and shops on Koh Tao, rated by visitors."
        />
        <BusinessDirectory />
    }
}

#[component]
pub fn MapPage() -> impl IntoView {
    view! {
        <PageTitle title="Map" description="Find Koh Tao's beaches and viewpoints." />
        <InteractiveMapSection />
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageTitle title="Page Not Found" />
        <section class="not-found">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <A href="/">"Return to Home"</A>
        </section>
    }
}
