//! Adapter for the ImmobilienScout24 search feed.

use log::debug;
use serde_json::Value;

use super::SourceAdapter;
use crate::error::{NormalizerError, Result};
use crate::models::Listing;
use crate::utils::{f64_at, join_nonempty, scalar_string, string_at};

const EXPOSE_URL: &str = "https://www.immobilienscout24.de/expose/";
const ROOT_LOCATION_IDS: &str = "412312";

/// Adapter for ImmobilienScout24 search-result payloads
#[derive(Debug, Default)]
pub struct ImmoscoutAdapter;

/// Collect photo URIs from one gallery attachment entry
fn photo_urls(attachment: &Value) -> Vec<String> {
    attachment
        .get("urls")
        .and_then(Value::as_array)
        .map(|urls| {
            urls.iter()
                .filter_map(|image| string_at(image, &["url", "@href"]))
                .collect()
        })
        .unwrap_or_default()
}

impl SourceAdapter for ImmoscoutAdapter {
    fn source_name(&self) -> &'static str {
        "immoscout24"
    }

    fn records<'a>(&self, payload: &'a Value) -> Result<Vec<&'a Value>> {
        payload
            .get("searchResponseModel")
            .and_then(|v| v.get("resultlist.resultlist"))
            .and_then(|v| v.get("resultlistEntries"))
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("resultlistEntry"))
            .and_then(Value::as_array)
            .map(|records| records.iter().collect())
            .ok_or_else(|| {
                NormalizerError::MalformedRecord(
                    "missing 'resultlistEntry' array in search response".to_string(),
                )
            })
    }

    fn adapt_record(&self, record: &Value) -> Result<Listing> {
        let estate = record.get("resultlist.realEstate").unwrap_or(&Value::Null);
        let uid = string_at(record, &["@id"])
            .ok_or_else(|| NormalizerError::MissingIdentity("no '@id' on entry".to_string()))?;
        let reference = string_at(record, &["realEstateId"]).ok_or_else(|| {
            NormalizerError::MissingIdentity(format!("no 'realEstateId' on entry {uid}"))
        })?;

        let mut listing = Listing::new(uid.clone(), format!("{EXPOSE_URL}{reference}"))?;
        listing.set_listing_ref(Some(reference));
        listing.set_title(string_at(estate, &["title"]));

        // realEstateTags.tag is a bare string for one tag, an array for many
        listing.set_features(
            match record.get("realEstateTags").and_then(|tags| tags.get("tag")) {
                Some(Value::Array(tags)) => join_nonempty(tags.iter().map(scalar_string)),
                Some(tag) => scalar_string(tag),
                None => None,
            },
        );

        listing.set_living_area(string_at(estate, &["livingSpace"]));
        listing.set_rooms(string_at(estate, &["numberOfRooms"]));
        listing.set_root_location_ids(Some(ROOT_LOCATION_IDS.to_string()));
        listing.set_energy_rating(string_at(estate, &["energyEfficiencyClass"]));
        listing.set_company(string_at(estate, &["realtorCompanyName"]));
        listing.set_subtype(string_at(estate, &["@xsi.type"]));

        // galleryAttachments.attachment is one object or a list of objects;
        // an entry without usable urls is skipped, not fatal
        let mut photos = Vec::new();
        match estate
            .get("galleryAttachments")
            .and_then(|gallery| gallery.get("attachment"))
        {
            Some(Value::Array(attachments)) => {
                for attachment in attachments {
                    let urls = photo_urls(attachment);
                    if urls.is_empty() {
                        debug!("{uid}: gallery attachment without urls");
                    }
                    photos.extend(urls);
                }
            }
            Some(attachment) => photos.extend(photo_urls(attachment)),
            None => {}
        }
        listing.set_photos(photos);

        let address = estate.get("address").unwrap_or(&Value::Null);
        listing.set_location(join_nonempty([
            string_at(address, &["city"]),
            string_at(address, &["quarter"]),
            string_at(address, &["postcode"]),
            string_at(address, &["street"]),
            string_at(address, &["houseNumber"]),
        ]));
        listing.set_latitude(f64_at(address, &["wgs84Coordinate", "latitude"]));
        listing.set_longitude(f64_at(address, &["wgs84Coordinate", "longitude"]));

        if let Some(contacts) = estate.get("contactDetails") {
            listing.set_phone(string_at(contacts, &["phoneNumber"]));
            let agent = [
                string_at(contacts, &["firstname"]),
                string_at(contacts, &["lastname"]),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
            listing.set_listing_agent(if agent.is_empty() { None } else { Some(agent) });
        }

        if let Some(price) = estate.get("price") {
            let value = string_at(price, &["value"]);
            match price.get("marketingType").and_then(Value::as_str) {
                Some(kind) if kind.contains("PURCHASE") => {
                    listing.set_status(Some("active".to_string()));
                    listing.set_price(value);
                }
                Some(kind) if kind.contains("RENT") => {
                    listing.set_rent_status(Some("active".to_string()));
                    listing.set_rent_price(value);
                    listing.set_rent_period(string_at(price, &["priceIntervalType"]));
                }
                _ => {}
            }
        }

        Ok(listing)
    }
}
