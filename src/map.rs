//! Points handed to the map surface and the external map link.

use crate::models::place::{Destination, DestinationKind};

const GOOGLE_MAPS_SEARCH: &str = "https://www.google.com/maps/search/?api=1&query=";

#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub id: String,
    pub display_name: String,
    pub category: DestinationKind,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Destination> for MapPoint {
    fn from(destination: &Destination) -> Self {
        let coords = destination.coordinates();
        Self {
            id: destination.id.clone(),
            display_name: destination.name.clone(),
            category: destination.kind,
            latitude: coords.latitude,
            longitude: coords.longitude,
        }
    }
}

impl MapPoint {
    pub fn marker(&self) -> MarkerKind {
        match self.category {
            DestinationKind::Beach => MarkerKind::Beach,
            DestinationKind::Viewpoint | DestinationKind::Other => MarkerKind::Landmark,
        }
    }

    pub fn external_url(&self) -> String {
        google_maps_url(self.latitude, self.longitude)
    }
}

/// Beaches get their own marker colour; everything else shares one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Beach,
    Landmark,
}

impl MarkerKind {
    pub const fn class(self) -> &'static str {
        match self {
            MarkerKind::Beach => "marker marker-beach",
            MarkerKind::Landmark => "marker marker-landmark",
        }
    }
}

pub fn map_points(destinations: &[Destination]) -> Vec<MapPoint> {
    destinations.iter().map(MapPoint::from).collect()
}

pub fn find_point<'a>(points: &'a [MapPoint], id: &str) -> Option<&'a MapPoint> {
    points.iter().find(|point| point.id == id)
}

/// Google Maps search link for a coordinate pair.
pub fn google_maps_url(latitude: f64, longitude: f64) -> String {
    let query = format!("{latitude},{longitude}");
    format!("{GOOGLE_MAPS_SEARCH}{}", urlencoding::encode(&query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::place::ISLAND_CENTER;

    fn destination(id: &str, kind: DestinationKind, lat: Option<f64>) -> Destination {
        Destination {
            id: id.to_owned(),
            name: id.to_uppercase(),
            kind,
            description: String::new(),
            lat,
            lng: Some(99.83),
        }
    }

    #[test]
    fn points_carry_id_name_and_fallback_coordinates() {
        let points = map_points(&[
            destination("shark-bay", DestinationKind::Beach, Some(10.06)),
            destination("hilltop", DestinationKind::Viewpoint, None),
        ]);
        assert_eq!(points[0].display_name, "SHARK-BAY");
        assert_eq!(points[0].latitude, 10.06);
        assert_eq!(points[1].latitude, ISLAND_CENTER.latitude);
        assert_eq!(points[0].marker(), MarkerKind::Beach);
        assert_eq!(points[1].marker(), MarkerKind::Landmark);
    }

    #[test]
    fn find_point_by_id() {
        let points = map_points(&[destination("shark-bay", DestinationKind::Beach, None)]);
        assert!(find_point(&points, "shark-bay").is_some());
        assert!(find_point(&points, "nowhere").is_none());
    }

    #[test]
    fn google_maps_url_encodes_the_query() {
        assert_eq!(
            google_maps_url(10.0956, 99.8404),
            "https://www.google.com/maps/search/?api=1&query=10.0956%2C99.8404"
        );
    }
}
