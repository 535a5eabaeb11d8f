//! The property listing catalog: records, the capacity-bounded store, and the
//! display filter.

pub mod domain;
pub mod filter;
pub mod store;

pub use domain::{ListingDraft, ListingKind, MapMarker, PropertyListing};
pub use filter::{KindFilter, ListingFilter};
pub use store::{CatalogError, ListingStore, LISTING_CAPACITY, MIN_SIZE_SQFT};
