//! The normalized listing record shared by every provider
//!
//! Fields are private; every write goes through a setter that routes the
//! candidate value through the record validator, so the struct never holds
//! a value that violates its field's constraints. Serialization uses the
//! public alias of each field and omits absent optionals.

use serde::Serialize;

use crate::error::{NormalizerError, Result};
use crate::validate::validate_field;

/// One normalized listing
///
/// `uid` and `url` are always present and non-empty after construction;
/// every other scalar field is optional, with absence distinct from the
/// empty string. `photos` is an ordered, possibly empty sequence of URIs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    uid: String,
    url: String,
    photos: Vec<String>,
    // Core listing fields
    #[serde(skip_serializing_if = "Option::is_none")]
    bathrooms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bedrooms: Option<String>,
    #[serde(rename = "constructionYear", skip_serializing_if = "Option::is_none")]
    construction_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "energyRating", skip_serializing_if = "Option::is_none")]
    energy_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    features: Option<String>,
    #[serde(rename = "fireType", skip_serializing_if = "Option::is_none")]
    fire_type: Option<String>,
    #[serde(rename = "floorType", skip_serializing_if = "Option::is_none")]
    floor_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    garage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    heating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    latitude: Option<f64>,
    #[serde(rename = "livingArea", skip_serializing_if = "Option::is_none")]
    living_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parking: Option<String>,
    #[serde(rename = "plotArea", skip_serializing_if = "Option::is_none")]
    plot_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<String>,
    #[serde(rename = "priceFrom", skip_serializing_if = "Option::is_none")]
    price_from: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    listing_ref: Option<String>,
    #[serde(rename = "rentPeriod", skip_serializing_if = "Option::is_none")]
    rent_period: Option<String>,
    #[serde(rename = "rentPrice", skip_serializing_if = "Option::is_none")]
    rent_price: Option<String>,
    #[serde(rename = "rentPriceFrom", skip_serializing_if = "Option::is_none")]
    rent_price_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rooms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "terraceArea", skip_serializing_if = "Option::is_none")]
    terrace_area: Option<String>,
    #[serde(rename = "totalArea", skip_serializing_if = "Option::is_none")]
    total_area: Option<String>,
    #[serde(rename = "transferPrice", skip_serializing_if = "Option::is_none")]
    transfer_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(rename = "rentStatus", skip_serializing_if = "Option::is_none")]
    rent_status: Option<String>,
    // Agency fields
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contacts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    listing_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_private: Option<bool>,
    // Other fields
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rent_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ref2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    root_location_ids: Option<String>,
}

/// Generate the accessor and validated setter for a text field
macro_rules! text_field {
    ($( $field:ident => $setter:ident ),+ $(,)?) => {
        $(
            #[must_use]
            pub fn $field(&self) -> Option<&str> {
                self.$field.as_deref()
            }

            /// Assign the field, routing the value through the validator
            pub fn $setter(&mut self, value: Option<String>) {
                self.$field = validate_field(stringify!($field), value);
            }
        )+
    };
}

impl Listing {
    /// Create a listing from its mandatory identifying fields
    ///
    /// # Errors
    /// Returns `MissingIdentity` if either value is empty.
    pub fn new(uid: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let uid = uid.into();
        let url = validate_field("url", Some(url.into())).unwrap_or_default();
        if uid.is_empty() || url.is_empty() {
            return Err(NormalizerError::MissingIdentity(
                "listing requires a non-empty uid and url".to_string(),
            ));
        }
        Ok(Self {
            uid,
            url,
            photos: Vec::new(),
            bathrooms: None,
            bedrooms: None,
            construction_year: None,
            description: None,
            energy_rating: None,
            features: None,
            fire_type: None,
            floor_type: None,
            garage: None,
            heating: None,
            latitude: None,
            living_area: None,
            location: None,
            longitude: None,
            parking: None,
            plot_area: None,
            price: None,
            price_from: None,
            listing_ref: None,
            rent_period: None,
            rent_price: None,
            rent_price_from: None,
            rooms: None,
            subtype: None,
            title: None,
            terrace_area: None,
            total_area: None,
            transfer_price: None,
            status: None,
            rent_status: None,
            company: None,
            contacts: None,
            listing_agent: None,
            phone: None,
            is_private: None,
            currency: None,
            rent_currency: None,
            ref2: None,
            bank: None,
            root_location_ids: None,
        })
    }

    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    /// Replace the photo sequence
    pub fn set_photos(&mut self, photos: Vec<String>) {
        self.photos = photos;
    }

    /// Append one photo URI
    pub fn add_photo(&mut self, uri: String) {
        self.photos.push(uri);
    }

    text_field! {
        bathrooms => set_bathrooms,
        bedrooms => set_bedrooms,
        construction_year => set_construction_year,
        description => set_description,
        energy_rating => set_energy_rating,
        features => set_features,
        fire_type => set_fire_type,
        floor_type => set_floor_type,
        garage => set_garage,
        heating => set_heating,
        living_area => set_living_area,
        location => set_location,
        parking => set_parking,
        plot_area => set_plot_area,
        price => set_price,
        price_from => set_price_from,
        rent_period => set_rent_period,
        rent_price => set_rent_price,
        rent_price_from => set_rent_price_from,
        rooms => set_rooms,
        subtype => set_subtype,
        title => set_title,
        terrace_area => set_terrace_area,
        total_area => set_total_area,
        transfer_price => set_transfer_price,
        status => set_status,
        rent_status => set_rent_status,
        company => set_company,
        contacts => set_contacts,
        listing_agent => set_listing_agent,
        phone => set_phone,
        currency => set_currency,
        rent_currency => set_rent_currency,
        ref2 => set_ref2,
        bank => set_bank,
        root_location_ids => set_root_location_ids,
    }

    // `ref` is a keyword, so its accessor pair is written out by hand; the
    // registry still knows the field under its public name.
    #[must_use]
    pub fn listing_ref(&self) -> Option<&str> {
        self.listing_ref.as_deref()
    }

    /// Assign the provider reference, routing the value through the validator
    pub fn set_listing_ref(&mut self, value: Option<String>) {
        self.listing_ref = validate_field("ref", value);
    }

    // Coordinate and flag fields carry no constraints in the registry and
    // are stored directly.
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn set_latitude(&mut self, value: Option<f64>) {
        self.latitude = value;
    }

    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    pub fn set_longitude(&mut self, value: Option<f64>) {
        self.longitude = value;
    }

    #[must_use]
    pub fn is_private(&self) -> Option<bool> {
        self.is_private
    }

    pub fn set_is_private(&mut self, value: Option<bool>) {
        self.is_private = value;
    }
}
