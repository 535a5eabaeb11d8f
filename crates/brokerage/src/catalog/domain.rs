use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Sale,
    Rent,
}

impl ListingKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sale => "Sale",
            Self::Rent => "Rent",
        }
    }
}

/// Submission payload for a new listing; the store stamps the listing date.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub location: String,
    pub price: u64,
    pub kind: ListingKind,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub size_sqft: u32,
    pub latitude: f64,
    pub longitude: f64,
    /// Opaque image payload. Never inspected or transcoded.
    #[serde(default)]
    pub image: Option<Vec<u8>>,
}

/// One listed property. Immutable after creation; removal is the only
/// mutation the catalog supports.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyListing {
    pub title: String,
    pub location: String,
    pub price: u64,
    pub kind: ListingKind,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub size_sqft: u32,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing)]
    pub image: Option<Vec<u8>>,
    pub listed_on: NaiveDate,
}

impl PropertyListing {
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// What the map boundary gets per listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub price: u64,
}
