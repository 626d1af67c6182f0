//! Append-only collection of normalized listings produced by one run.

use serde::Serialize;

use super::listing::Listing;

/// The ordered batch of listings produced from one provider payload
///
/// Serializes as a single JSON array. Listings are owned exclusively by the
/// collection once pushed; there is no mutable access afterwards.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ListingCollection {
    listings: Vec<Listing>,
}

impl ListingCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished listing
    pub fn push(&mut self, listing: Listing) {
        self.listings.push(listing);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    /// Merge another collection onto the end of this one
    pub fn extend(&mut self, other: ListingCollection) {
        self.listings.extend(other.listings);
    }
}

impl From<Vec<Listing>> for ListingCollection {
    fn from(listings: Vec<Listing>) -> Self {
        Self { listings }
    }
}

impl<'a> IntoIterator for &'a ListingCollection {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.listings.iter()
    }
}
