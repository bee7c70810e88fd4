use serde::{Deserialize, Serialize};

use super::place::Location;
use super::review::{EntityRef, Reviewable};

/// Businesses listed in the directory. The slug is the `entityId` used in
/// `reviews.json`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessId {
    SaireeBeachRestaurant,
    DiveShopPro,
    IslandMarket,
    SunsetCafe,
    ThaiMassageSpa,
    BeachBarGrill,
    DiveGearStore,
    OrganicJuiceBar,
}

impl BusinessId {
    pub const ALL: [BusinessId; 8] = [
        BusinessId::SaireeBeachRestaurant,
        BusinessId::DiveShopPro,
        BusinessId::IslandMarket,
        BusinessId::SunsetCafe,
        BusinessId::ThaiMassageSpa,
        BusinessId::BeachBarGrill,
        BusinessId::DiveGearStore,
        BusinessId::OrganicJuiceBar,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            BusinessId::SaireeBeachRestaurant => "sairee-beach-restaurant",
            BusinessId::DiveShopPro => "dive-shop-pro",
            BusinessId::IslandMarket => "island-market",
            BusinessId::SunsetCafe => "sunset-cafe",
            BusinessId::ThaiMassageSpa => "thai-massage-spa",
            BusinessId::BeachBarGrill => "beach-bar-grill",
            BusinessId::DiveGearStore => "dive-gear-store",
            BusinessId::OrganicJuiceBar => "organic-juice-bar",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == slug)
    }
}

impl Reviewable for BusinessId {
    fn entity_ref(&self) -> EntityRef {
        EntityRef::business(self.slug())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum BusinessCategory {
    Restaurant,
    DiveShop,
    Shopping,
    Cafe,
    Spa,
}

impl BusinessCategory {
    /// Parses the free-text category tags found in listings.
    ///
    /// Matching is case-insensitive and accepts the spelling variants seen
    /// in the data ("dive shop", "diveShop", "café"). Anything else is
    /// `None` so callers decide what an unknown category means.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "restaurant" => Some(BusinessCategory::Restaurant),
            "diveshop" | "dive shop" | "dive-shop" => Some(BusinessCategory::DiveShop),
            "shopping" => Some(BusinessCategory::Shopping),
            "cafe" | "café" => Some(BusinessCategory::Cafe),
            "spa" => Some(BusinessCategory::Spa),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BusinessCategory::Restaurant => "Restaurant",
            BusinessCategory::DiveShop => "Dive Shop",
            BusinessCategory::Shopping => "Shopping",
            BusinessCategory::Cafe => "Café",
            BusinessCategory::Spa => "Spa",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            BusinessCategory::Restaurant => "🍽",
            BusinessCategory::DiveShop => "🤿",
            BusinessCategory::Shopping => "🛍",
            BusinessCategory::Cafe => "☕",
            BusinessCategory::Spa => "💆",
        }
    }

    pub const fn badge_class(self) -> &'static str {
        match self {
            BusinessCategory::Restaurant => "badge badge-coral",
            BusinessCategory::DiveShop => "badge badge-teal",
            BusinessCategory::Shopping => "badge badge-gold",
            BusinessCategory::Cafe => "badge badge-teal-gold",
            BusinessCategory::Spa => "badge badge-gold-coral",
        }
    }
}

/// Category buttons of the business directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Restaurants,
    DiveShops,
    Shopping,
    Cafes,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Restaurants,
        CategoryFilter::DiveShops,
        CategoryFilter::Shopping,
        CategoryFilter::Cafes,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Restaurants => "Restaurants",
            CategoryFilter::DiveShops => "Dive Shops",
            CategoryFilter::Shopping => "Shopping",
            CategoryFilter::Cafes => "Cafés",
        }
    }

    pub const fn matches(self, category: BusinessCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Restaurants => matches!(category, BusinessCategory::Restaurant),
            CategoryFilter::DiveShops => matches!(category, BusinessCategory::DiveShop),
            CategoryFilter::Shopping => matches!(category, BusinessCategory::Shopping),
            CategoryFilter::Cafes => matches!(category, BusinessCategory::Cafe),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: BusinessId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: BusinessCategory,
    /// Rating printed in the listing; shown when nobody has reviewed yet.
    pub listed_rating: f64,
    pub open_hours: &'static str,
    pub phone: &'static str,
    pub location: Location,
}

impl Reviewable for Business {
    fn entity_ref(&self) -> EntityRef {
        self.id.entity_ref()
    }
}

/// Businesses accepted by `filter`, in listing order.
pub fn filter_businesses(businesses: &[Business], filter: CategoryFilter) -> Vec<Business> {
    businesses
        .iter()
        .filter(|business| filter.matches(business.category))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(id: BusinessId, category: BusinessCategory) -> Business {
        Business {
            id,
            name: id.slug(),
            description: "",
            category,
            listed_rating: 4.0,
            open_hours: "",
            phone: "",
            location: Location::SaireeBeach,
        }
    }

    #[test]
    fn category_tags_parse_case_insensitively() {
        assert_eq!(BusinessCategory::from_tag("Dive Shop"), Some(BusinessCategory::DiveShop));
        assert_eq!(BusinessCategory::from_tag("diveShop"), Some(BusinessCategory::DiveShop));
        assert_eq!(BusinessCategory::from_tag("CAFÉ"), Some(BusinessCategory::Cafe));
        assert_eq!(BusinessCategory::from_tag(" spa "), Some(BusinessCategory::Spa));
        assert_eq!(BusinessCategory::from_tag("bakery"), None);
    }

    #[test]
    fn all_filter_keeps_spas() {
        let listing = vec![
            business(BusinessId::ThaiMassageSpa, BusinessCategory::Spa),
            business(BusinessId::SunsetCafe, BusinessCategory::Cafe),
        ];
        assert_eq!(filter_businesses(&listing, CategoryFilter::All).len(), 2);
        assert!(CategoryFilter::ALL
            .iter()
            .skip(1)
            .all(|filter| !filter.matches(BusinessCategory::Spa)));
    }

    #[test]
    fn filter_preserves_listing_order() {
        let listing = vec![
            business(BusinessId::SaireeBeachRestaurant, BusinessCategory::Restaurant),
            business(BusinessId::IslandMarket, BusinessCategory::Shopping),
            business(BusinessId::BeachBarGrill, BusinessCategory::Restaurant),
        ];
        let ids: Vec<_> = filter_businesses(&listing, CategoryFilter::Restaurants)
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![BusinessId::SaireeBeachRestaurant, BusinessId::BeachBarGrill]);
    }

    #[test]
    fn business_slugs_round_trip() {
        for id in BusinessId::ALL {
            assert_eq!(BusinessId::from_slug(id.slug()), Some(id));
        }
    }
}
