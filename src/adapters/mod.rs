//! Source adapters: provider-specific JSON to normalized listings
//!
//! Each adapter locates the provider's record array inside a raw payload and
//! maps one raw record to one validated [`Listing`]. A record that cannot be
//! adapted (missing identity, malformed nesting) is logged and skipped; it
//! never aborts the sibling records. Adapters hold no mutable state, so
//! records can be adapted sequentially or across the rayon pool.

mod immoscout;
mod immowelt;

pub use immoscout::ImmoscoutAdapter;
pub use immowelt::ImmoweltAdapter;

use std::fmt::Debug;

use log::warn;
use rayon::prelude::*;
use serde_json::Value;

use crate::error::{NormalizerError, Result};
use crate::models::{Listing, ListingCollection};

/// Core trait implemented by every provider adapter
pub trait SourceAdapter: Debug + Send + Sync {
    /// Short name of the provider feed
    fn source_name(&self) -> &'static str;

    /// Locate the raw record array inside a provider payload
    ///
    /// # Errors
    /// Fails with `MalformedRecord` when the payload does not contain the
    /// provider's record array at all; no records are reachable then, so
    /// this aborts the whole run for this provider.
    fn records<'a>(&self, payload: &'a Value) -> Result<Vec<&'a Value>>;

    /// Map one raw provider record to a validated listing
    fn adapt_record(&self, record: &Value) -> Result<Listing>;

    /// Adapt a full payload in source order, skipping records that fail
    fn adapt(&self, payload: &Value) -> Result<ListingCollection> {
        let mut collection = ListingCollection::new();
        for record in self.records(payload)? {
            match self.adapt_record(record) {
                Ok(listing) => collection.push(listing),
                Err(e) => warn!("{}: skipping listing: {e}", self.source_name()),
            }
        }
        Ok(collection)
    }

    /// Adapt a full payload across the rayon pool
    ///
    /// Records are independent, so no coordination is needed; the collect
    /// preserves source order.
    fn adapt_parallel(&self, payload: &Value) -> Result<ListingCollection> {
        let listings: Vec<Listing> = self
            .records(payload)?
            .into_par_iter()
            .filter_map(|record| match self.adapt_record(record) {
                Ok(listing) => Some(listing),
                Err(e) => {
                    warn!("{}: skipping listing: {e}", self.source_name());
                    None
                }
            })
            .collect();
        Ok(listings.into())
    }
}

/// Create a source adapter from a provider name
pub fn adapter_from_name(name: &str) -> Result<Box<dyn SourceAdapter>> {
    match name.to_lowercase().as_str() {
        "immowelt" => Ok(Box::new(ImmoweltAdapter)),
        "immoscout" | "immoscout24" | "immobilienscout24" => Ok(Box::new(ImmoscoutAdapter)),
        other => Err(NormalizerError::UnknownSource(other.to_string())),
    }
}
