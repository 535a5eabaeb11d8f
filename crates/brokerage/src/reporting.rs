//! Admin reporting: dashboard aggregates and the CSV export.

use serde::Serialize;

use crate::catalog::{ListingStore, PropertyListing};
use crate::favorites::FavoritesTracker;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MostSaved {
    pub title: String,
    pub saves: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_listings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_saved: Option<MostSaved>,
}

pub fn dashboard_summary(
    catalog: &ListingStore,
    favorites: &FavoritesTracker,
) -> DashboardSummary {
    DashboardSummary {
        total_listings: catalog.len(),
        most_saved: favorites
            .most_favorited()
            .map(|(title, saves)| MostSaved { title, saves }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer flush failed: {0}")]
    Flush(String),
}

/// One export row per listing; the image payload is deliberately absent.
#[derive(Debug, Serialize)]
struct ListingRow<'a> {
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Location")]
    location: &'a str,
    #[serde(rename = "Price")]
    price: u64,
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(rename = "Bedrooms")]
    bedrooms: u8,
    #[serde(rename = "Bathrooms")]
    bathrooms: u8,
    #[serde(rename = "Size")]
    size_sqft: u32,
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
    #[serde(rename = "Date")]
    listed_on: String,
}

impl<'a> From<&'a PropertyListing> for ListingRow<'a> {
    fn from(listing: &'a PropertyListing) -> Self {
        Self {
            title: &listing.title,
            location: &listing.location,
            price: listing.price,
            kind: listing.kind.label(),
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
            size_sqft: listing.size_sqft,
            latitude: listing.latitude,
            longitude: listing.longitude,
            listed_on: listing.listed_on.format("%Y-%m-%d").to_string(),
        }
    }
}

/// UTF-8 CSV of every listing in insertion order.
pub fn export_csv(catalog: &ListingStore) -> Result<Vec<u8>, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for listing in catalog.listings() {
        writer.serialize(ListingRow::from(listing))?;
    }
    writer
        .into_inner()
        .map_err(|err| ReportError::Flush(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ListingDraft, ListingKind};
    use chrono::NaiveDate;

    fn catalog() -> ListingStore {
        let mut store = ListingStore::new();
        store
            .add(
                ListingDraft {
                    title: "Lakeview Villa".to_string(),
                    location: "Riverside".to_string(),
                    price: 450_000,
                    kind: ListingKind::Sale,
                    bedrooms: 3,
                    bathrooms: 2,
                    size_sqft: 1_400,
                    latitude: 12.5,
                    longitude: 77.25,
                    image: Some(vec![0xFF, 0xD8, 0xFF]),
                },
                NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
            )
            .expect("adds");
        store
    }

    #[test]
    fn export_has_the_expected_header_and_no_image_column() {
        let bytes = export_csv(&catalog()).expect("exports");
        let text = String::from_utf8(bytes).expect("utf-8");
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Title,Location,Price,Type,Bedrooms,Bathrooms,Size,Latitude,Longitude,Date")
        );
        let row = lines.next().expect("one data row");
        assert!(row.starts_with("Lakeview Villa,Riverside,450000,Sale,3,2,1400,"));
        assert!(row.ends_with("2025-06-01"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_catalog_exports_bare_bytes() {
        let store = ListingStore::new();
        let bytes = export_csv(&store).expect("exports");
        // csv only emits the header once a record establishes the shape.
        assert!(bytes.is_empty());
    }

    #[test]
    fn summary_combines_count_and_favorite_leader() {
        let mut favorites = FavoritesTracker::new();
        favorites.add("Lakeview Villa");
        favorites.add("Lakeview Villa");
        let summary = dashboard_summary(&catalog(), &favorites);
        assert_eq!(summary.total_listings, 1);
        assert_eq!(
            summary.most_saved,
            Some(MostSaved {
                title: "Lakeview Villa".to_string(),
                saves: 2
            })
        );
    }
}
