use chrono::NaiveDate;

use super::domain::{ListingDraft, MapMarker, PropertyListing};

pub const LISTING_CAPACITY: usize = 50;
pub const MIN_SIZE_SQFT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("listing limit reached; delete old entries to add more")]
    LimitReached,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("size must be at least {MIN_SIZE_SQFT} sqft")]
    SizeTooSmall,
}

/// Insertion-ordered listing store, capped at [`LISTING_CAPACITY`] entries.
#[derive(Debug, Default)]
pub struct ListingStore {
    listings: Vec<PropertyListing>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn listings(&self) -> &[PropertyListing] {
        &self.listings
    }

    pub fn get(&self, index: usize) -> Option<&PropertyListing> {
        self.listings.get(index)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.listings
            .iter()
            .map(|listing| listing.title.as_str())
            .collect()
    }

    /// Validate and append. The capacity check runs first, so a full store
    /// rejects even malformed drafts with `LimitReached`.
    pub fn add(&mut self, draft: ListingDraft, listed_on: NaiveDate) -> Result<(), CatalogError> {
        if self.listings.len() >= LISTING_CAPACITY {
            return Err(CatalogError::LimitReached);
        }
        if draft.title.trim().is_empty() {
            return Err(CatalogError::MissingField("title"));
        }
        if draft.location.trim().is_empty() {
            return Err(CatalogError::MissingField("location"));
        }
        if draft.size_sqft < MIN_SIZE_SQFT {
            return Err(CatalogError::SizeTooSmall);
        }

        self.listings.push(PropertyListing {
            title: draft.title,
            location: draft.location,
            price: draft.price,
            kind: draft.kind,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            size_sqft: draft.size_sqft,
            latitude: draft.latitude,
            longitude: draft.longitude,
            image: draft.image,
            listed_on,
        });
        Ok(())
    }

    /// Bulk-equal delete: removes every listing whose title is exactly equal
    /// and returns how many went. Duplicate titles are a known sharp edge.
    pub fn remove_by_title(&mut self, title: &str) -> usize {
        let before = self.listings.len();
        self.listings.retain(|listing| listing.title != title);
        before - self.listings.len()
    }

    pub fn map_markers(&self) -> Vec<MapMarker> {
        self.listings
            .iter()
            .map(|listing| MapMarker {
                latitude: listing.latitude,
                longitude: listing.longitude,
                title: listing.title.clone(),
                price: listing.price,
            })
            .collect()
    }
}
