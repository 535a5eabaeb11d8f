use serde::{Deserialize, Serialize};

use super::domain::{ListingKind, PropertyListing};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindFilter {
    #[default]
    All,
    Sale,
    Rent,
}

impl KindFilter {
    const fn admits(self, kind: ListingKind) -> bool {
        match self {
            Self::All => true,
            Self::Sale => matches!(kind, ListingKind::Sale),
            Self::Rent => matches!(kind, ListingKind::Rent),
        }
    }
}

/// Pure display filter: kind, price ceiling, and a case-insensitive title
/// keyword. Insertion order is preserved and applying the same filter twice
/// returns the same subsequence.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingFilter {
    #[serde(default)]
    pub kind: KindFilter,
    pub max_price: u64,
    #[serde(default)]
    pub keyword: String,
}

impl ListingFilter {
    pub fn matches(&self, listing: &PropertyListing) -> bool {
        if !self.kind.admits(listing.kind) {
            return false;
        }
        if listing.price > self.max_price {
            return false;
        }
        if self.keyword.is_empty() {
            return true;
        }
        listing
            .title
            .to_lowercase()
            .contains(&self.keyword.to_lowercase())
    }

    pub fn apply<'a>(&self, listings: &'a [PropertyListing]) -> Vec<&'a PropertyListing> {
        listings
            .iter()
            .filter(|listing| self.matches(listing))
            .collect()
    }
}
