//! Static catalog content shown on the site.

pub mod seed;

use leptos::logging::error;

use crate::models::accommodation::{Accommodation, AccommodationId, AccommodationKind};
use crate::models::business::{Business, BusinessCategory, BusinessId};
use crate::models::place::{Activity, Destination, Difficulty, DiveSite, Location};

/// The featured accommodation shown in the hero card above the grid.
pub const FEATURED_ACCOMMODATION: AccommodationId = AccommodationId::OceanViewResort;

/// Rating shown for the featured accommodation until it has reviews.
pub const FEATURED_FALLBACK_RATING: f64 = 4.7;

pub fn featured_accommodation() -> Accommodation {
    Accommodation {
        id: FEATURED_ACCOMMODATION,
        name: "Ocean View Resort",
        description: "Hillside suites above Sairee Beach with an infinity pool and uninterrupted sunset views.",
        kind: AccommodationKind::Resort,
        listed_rating: FEATURED_FALLBACK_RATING,
        price: "From $120",
        location: Location::SaireeBeach,
        amenities: &["Infinity pool", "Restaurant", "Wi-Fi", "Air conditioning"],
    }
}

pub fn accommodations() -> Vec<Accommodation> {
    vec![
        Accommodation {
            id: AccommodationId::TaoBeachResort,
            name: "Tao Beach Resort",
            description: "Beachfront resort a few steps from the island's dive schools.",
            kind: AccommodationKind::Resort,
            listed_rating: 4.5,
            price: "$50-80",
            location: Location::SaireeBeach,
            amenities: &["Pool", "Restaurant", "Wi-Fi", "Air conditioning"],
        },
        Accommodation {
            id: AccommodationId::DiveInnBungalows,
            name: "Dive Inn Bungalows",
            description: "Simple wooden bungalows popular with divers on a budget.",
            kind: AccommodationKind::Bungalow,
            listed_rating: 4.2,
            price: "$25-45",
            location: Location::ChalokBaanKao,
            amenities: &["Wi-Fi", "Fan", "Shared bathroom"],
        },
        Accommodation {
            id: AccommodationId::LuxuryBeachVilla,
            name: "Luxury Beach Villa",
            description: "Private villa with its own stretch of sand and a full kitchen.",
            kind: AccommodationKind::Villa,
            listed_rating: 4.8,
            price: "$150-250",
            location: Location::MaeHaad,
            amenities: &["Private beach", "Pool", "Kitchen", "Air conditioning", "Wi-Fi"],
        },
        Accommodation {
            id: AccommodationId::BackpackerHostel,
            name: "Backpacker Hostel",
            description: "Social dorms and private rooms near the Sairee nightlife.",
            kind: AccommodationKind::Hostel,
            listed_rating: 4.0,
            price: "$10-20",
            location: Location::SaireeBeach,
            amenities: &["Shared kitchen", "Wi-Fi", "Common area"],
        },
    ]
}

pub fn businesses() -> Vec<Business> {
    vec![
        Business {
            id: BusinessId::SaireeBeachRestaurant,
            name: "Sairee Beach Restaurant",
            description: "Thai classics and fresh seafood with your feet in the sand.",
            category: BusinessCategory::Restaurant,
            listed_rating: 4.5,
            open_hours: "11:00 AM - 10:00 PM",
            phone: "+66 77 456 7890",
            location: Location::SaireeBeach,
        },
        Business {
            id: BusinessId::DiveShopPro,
            name: "Dive Shop Pro",
            description: "PADI courses from beginner to instructor, with daily boat trips.",
            category: BusinessCategory::DiveShop,
            listed_rating: 4.8,
            open_hours: "7:00 AM - 6:00 PM",
            phone: "+66 77 456 7891",
            location: Location::MaeHaad,
        },
        Business {
            id: BusinessId::IslandMarket,
            name: "Island Market",
            description: "Groceries, snacks and everyday essentials.",
            category: BusinessCategory::Shopping,
            listed_rating: 4.2,
            open_hours: "9:00 AM - 8:00 PM",
            phone: "+66 77 456 7892",
            location: Location::ChalokBaanKao,
        },
        Business {
            id: BusinessId::SunsetCafe,
            name: "Sunset Café",
            description: "Coffee, smoothies and the best seat for sunset.",
            category: BusinessCategory::Cafe,
            listed_rating: 4.6,
            open_hours: "7:00 AM - 9:00 PM",
            phone: "+66 77 456 7893",
            location: Location::SaireeBeach,
        },
        Business {
            id: BusinessId::ThaiMassageSpa,
            name: "Thai Massage Spa",
            description: "Traditional Thai massage to loosen up after a day of diving.",
            category: BusinessCategory::Spa,
            listed_rating: 4.7,
            open_hours: "10:00 AM - 10:00 PM",
            phone: "+66 77 456 7894",
            location: Location::MaeHaad,
        },
        Business {
            id: BusinessId::BeachBarGrill,
            name: "Beach Bar & Grill",
            description: "Barbecue, cold drinks and live music most nights.",
            category: BusinessCategory::Restaurant,
            listed_rating: 4.4,
            open_hours: "12:00 PM - 11:00 PM",
            phone: "+66 77 456 7895",
            location: Location::ChalokBaanKao,
        },
        Business {
            id: BusinessId::DiveGearStore,
            name: "Dive Gear Store",
            description: "Masks, fins, computers and servicing for your own kit.",
            category: BusinessCategory::Shopping,
            listed_rating: 4.5,
            open_hours: "8:00 AM - 7:00 PM",
            phone: "+66 77 456 7896",
            location: Location::SaireeBeach,
        },
        Business {
            id: BusinessId::OrganicJuiceBar,
            name: "Organic Juice Bar",
            description: "Cold-pressed juices and smoothie bowls.",
            category: BusinessCategory::Cafe,
            listed_rating: 4.3,
            open_hours: "8:00 AM - 6:00 PM",
            phone: "+66 77 456 7897",
            location: Location::MaeHaad,
        },
    ]
}

pub fn dive_sites() -> Vec<DiveSite> {
    vec![
        DiveSite {
            name: "Chumphon Pinnacle",
            difficulty: Difficulty::Advanced,
            depth: "14-36m",
            highlights: "Whale sharks, barracudas, giant groupers",
            description: "One of Koh Tao's most famous dive sites, known for its rich marine life and strong currents.",
        },
        DiveSite {
            name: "Sail Rock",
            difficulty: Difficulty::Advanced,
            depth: "15-40m",
            highlights: "Chimney swim-through, pelagic fish",
            description: "A spectacular pinnacle with a vertical chimney and striking underwater topography.",
        },
        DiveSite {
            name: "Japanese Gardens",
            difficulty: Difficulty::Beginner,
            depth: "8-14m",
            highlights: "Colourful coral gardens, tropical fish",
            description: "Calm conditions and coral formations make it a favourite for training dives.",
        },
        DiveSite {
            name: "Shark Island",
            difficulty: Difficulty::Intermediate,
            depth: "10-25m",
            highlights: "Blacktip reef sharks, turtles",
            description: "Good chances to spot sharks and other large marine life.",
        },
    ]
}

pub fn activities() -> Vec<Activity> {
    vec![
        Activity {
            icon: "🎓",
            title: "Diving Courses",
            description: "Learn to dive or level up with internationally recognised courses.",
            features: &["PADI certification", "Low deposit", "Experienced instructors"],
            price: "From $350",
        },
        Activity {
            icon: "⛵",
            title: "Boat Tours",
            description: "Round-the-island trips with snorkelling stops.",
            features: &["Full day", "Snorkel gear included", "Lunch on board"],
            price: "From $45",
        },
        Activity {
            icon: "🛵",
            title: "Bike Rentals",
            description: "Scooters and ATVs to reach the quieter bays.",
            features: &["Scooters and ATVs", "Daily and weekly rates", "Helmet included"],
            price: "From $8/day",
        },
        Activity {
            icon: "🍜",
            title: "Food Tours",
            description: "Taste your way through the island's kitchens.",
            features: &["Local restaurants", "Street food", "Cooking classes"],
            price: "From $30",
        },
        Activity {
            icon: "🎉",
            title: "Events & Parties",
            description: "Beach parties, live music and fire shows.",
            features: &["Full moon trips", "Live music", "Fire shows"],
            price: "Various",
        },
        Activity {
            icon: "📅",
            title: "Activity Calendar",
            description: "See what is on this week and book ahead.",
            features: &["Upcoming events", "Online booking", "Special deals"],
            price: "Free to browse",
        },
    ]
}

/// Destinations from the bundled seed. Logs and returns nothing if the seed
/// cannot be parsed.
pub fn destinations() -> Vec<Destination> {
    seed::seed_destinations().unwrap_or_else(|err| {
        error!("[SEED] {}", err);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn listings_have_unique_ids() {
        let mut accommodation_ids: HashSet<_> = accommodations().iter().map(|a| a.id).collect();
        assert_eq!(accommodation_ids.len(), 4);
        assert!(accommodation_ids.insert(FEATURED_ACCOMMODATION));

        let business_ids: HashSet<_> = businesses().iter().map(|b| b.id).collect();
        assert_eq!(business_ids.len(), BusinessId::ALL.len());
    }

    #[test]
    fn destinations_load_from_seed() {
        assert!(!destinations().is_empty());
    }
}
