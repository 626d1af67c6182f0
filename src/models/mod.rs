//! Domain models: the normalized listing record and its collection.

pub mod collection;
pub mod listing;

pub use collection::ListingCollection;
pub use listing::Listing;
