use serde::{Deserialize, Serialize};

/// Island centre, used when a destination has no usable coordinates.
pub const ISLAND_CENTER: Coordinates = Coordinates {
    latitude: 10.0956,
    longitude: 99.8404,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Areas of the island listings are filed under.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Location {
    SaireeBeach,
    ChalokBaanKao,
    MaeHaad,
}

impl Location {
    pub const fn label(self) -> &'static str {
        match self {
            Location::SaireeBeach => "Sairee Beach",
            Location::ChalokBaanKao => "Chalok Baan Kao",
            Location::MaeHaad => "Mae Haad",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            Difficulty::Beginner => "badge badge-gold",
            Difficulty::Intermediate => "badge badge-teal",
            Difficulty::Advanced => "badge badge-coral",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiveSite {
    pub name: &'static str,
    pub difficulty: Difficulty,
    pub depth: &'static str,
    pub highlights: &'static str,
    pub description: &'static str,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DestinationKind {
    Beach,
    Viewpoint,
    #[serde(other)]
    Other,
}

impl DestinationKind {
    pub const fn label(self) -> &'static str {
        match self {
            DestinationKind::Beach => "Beach",
            DestinationKind::Viewpoint => "Viewpoint",
            DestinationKind::Other => "Point of interest",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            DestinationKind::Beach => "🌴",
            DestinationKind::Viewpoint => "🌅",
            DestinationKind::Other => "📍",
        }
    }
}

/// A beach, viewpoint or other spot, as listed in `destinations.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub kind: DestinationKind,
    pub description: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl Destination {
    /// Coordinates for the map. Each axis that is missing or zero falls back
    /// to the island centre.
    pub fn coordinates(&self) -> Coordinates {
        let usable = |value: Option<f64>| value.filter(|v| *v != 0.0 && v.is_finite());
        Coordinates {
            latitude: usable(self.lat).unwrap_or(ISLAND_CENTER.latitude),
            longitude: usable(self.lng).unwrap_or(ISLAND_CENTER.longitude),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn destination(lat: Option<f64>, lng: Option<f64>) -> Destination {
        Destination {
            id: "sairee-beach".to_owned(),
            name: "Sairee Beach".to_owned(),
            kind: DestinationKind::Beach,
            description: String::new(),
            lat,
            lng,
        }
    }

    #[test]
    fn missing_or_zero_coordinates_fall_back_to_island_center() {
        assert_eq!(destination(None, None).coordinates(), ISLAND_CENTER);
        let coords = destination(Some(0.0), Some(99.82)).coordinates();
        assert_eq!(coords.latitude, ISLAND_CENTER.latitude);
        assert_eq!(coords.longitude, 99.82);
    }

    #[test]
    fn unknown_destination_kind_parses_as_other() {
        let json = r#"{"id":"x","name":"X","kind":"temple","description":""}"#;
        let parsed: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, DestinationKind::Other);
        assert_eq!(parsed.lat, None);
    }
}
