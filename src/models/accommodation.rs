use serde::{Deserialize, Serialize};

use super::place::Location;
use super::review::{EntityRef, Reviewable};

/// Accommodations that can be reviewed. The slug is the `entityId` used in
/// `reviews.json`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AccommodationId {
    TaoBeachResort,
    DiveInnBungalows,
    LuxuryBeachVilla,
    BackpackerHostel,
    OceanViewResort,
}

impl AccommodationId {
    pub const ALL: [AccommodationId; 5] = [
        AccommodationId::TaoBeachResort,
        AccommodationId::DiveInnBungalows,
        AccommodationId::LuxuryBeachVilla,
        AccommodationId::BackpackerHostel,
        AccommodationId::OceanViewResort,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            AccommodationId::TaoBeachResort => "tao-beach-resort",
            AccommodationId::DiveInnBungalows => "dive-inn-bungalows",
            AccommodationId::LuxuryBeachVilla => "luxury-beach-villa",
            AccommodationId::BackpackerHostel => "backpacker-hostel",
            AccommodationId::OceanViewResort => "ocean-view-resort",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }
}

impl Reviewable for AccommodationId {
    fn entity_ref(&self) -> EntityRef {
        EntityRef::accommodation(self.slug())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccommodationKind {
    Resort,
    Bungalow,
    Villa,
    Hostel,
}

impl AccommodationKind {
    pub const fn label(self) -> &'static str {
        match self {
            AccommodationKind::Resort => "Resort",
            AccommodationKind::Bungalow => "Bungalow",
            AccommodationKind::Villa => "Villa",
            AccommodationKind::Hostel => "Hostel",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            AccommodationKind::Resort => "badge badge-teal",
            AccommodationKind::Bungalow => "badge badge-teal-gold",
            AccommodationKind::Villa => "badge badge-gold",
            AccommodationKind::Hostel => "badge badge-muted",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Accommodation {
    pub id: AccommodationId,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: AccommodationKind,
    /// Rating printed in the listing, independent of user reviews.
    pub listed_rating: f64,
    pub price: &'static str,
    pub location: Location,
    pub amenities: &'static [&'static str],
}

impl Reviewable for Accommodation {
    fn entity_ref(&self) -> EntityRef {
        self.id.entity_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::EntityType;

    #[test]
    fn slugs_round_trip_and_unknown_slug_is_none() {
        for id in AccommodationId::ALL {
            assert_eq!(AccommodationId::from_slug(id.slug()), Some(id));
        }
        assert_eq!(AccommodationId::from_slug("tao-beach-resrot"), None);
    }

    #[test]
    fn entity_ref_uses_accommodation_type() {
        let target = AccommodationId::OceanViewResort.entity_ref();
        assert_eq!(target.entity_type, EntityType::Accommodation);
        assert_eq!(target.entity_id, "ocean-view-resort");
    }

    #[test]
    fn serde_name_matches_slug() {
        let json = serde_json::to_string(&AccommodationId::DiveInnBungalows).unwrap();
        assert_eq!(json, "\"dive-inn-bungalows\"");
    }
}
