//! Adapter for the Immowelt search feed.

use serde_json::Value;

use super::SourceAdapter;
use crate::error::{NormalizerError, Result};
use crate::models::Listing;
use crate::utils::{f64_at, join_nonempty, scalar_string, string_at};

const EXPOSE_URL: &str = "https://www.immowelt.de/expose/";
const PROJECT_URL: &str = "https://www.immowelt.de/projekte/expose/";
const ROOT_LOCATION_IDS: &str = "313123";

/// Adapter for Immowelt search-result payloads
#[derive(Debug, Default)]
pub struct ImmoweltAdapter;

impl SourceAdapter for ImmoweltAdapter {
    fn source_name(&self) -> &'static str {
        "immowelt"
    }

    fn records<'a>(&self, payload: &'a Value) -> Result<Vec<&'a Value>> {
        payload
            .get("data")
            .and_then(Value::as_array)
            .map(|records| records.iter().collect())
            .ok_or_else(|| {
                NormalizerError::MalformedRecord("missing top-level 'data' array".to_string())
            })
    }

    fn adapt_record(&self, record: &Value) -> Result<Listing> {
        let uid = string_at(record, &["id"])
            .ok_or_else(|| NormalizerError::MissingIdentity("no 'id' on record".to_string()))?;
        let reference = string_at(record, &["onlineId"]).ok_or_else(|| {
            NormalizerError::MissingIdentity(format!("no 'onlineId' on record {uid}"))
        })?;
        // Projects expose under a different URL prefix than plain listings
        let prefix = if record.get("itemType").and_then(Value::as_str) == Some("PROJECT") {
            PROJECT_URL
        } else {
            EXPOSE_URL
        };

        let mut listing = Listing::new(uid, format!("{prefix}{reference}"))?;
        listing.set_listing_ref(Some(reference));
        listing.set_title(string_at(record, &["title"]));
        listing.set_ref2(string_at(record, &["projectId"]));

        if let Some(pictures) = record.get("pictures").and_then(Value::as_array) {
            listing.set_photos(
                pictures
                    .iter()
                    .filter_map(|picture| string_at(picture, &["imageUri"]))
                    .collect(),
            );
        }
        if let Some(features) = record.get("features").and_then(Value::as_array) {
            listing.set_features(join_nonempty(features.iter().map(scalar_string)));
        }

        listing.set_construction_year(string_at(record, &["constructionYear"]));
        listing.set_subtype(
            record
                .get("estateTypes")
                .and_then(Value::as_array)
                .and_then(|types| types.first())
                .and_then(scalar_string),
        );
        listing.set_latitude(f64_at(record, &["place", "point", "lat"]));
        listing.set_longitude(f64_at(record, &["place", "point", "lon"]));
        listing.set_rooms(string_at(record, &["roomsMin"]));
        listing.set_company(string_at(record, &["broker", "companyName"]));
        listing.set_root_location_ids(Some(ROOT_LOCATION_IDS.to_string()));
        listing.set_location(join_nonempty([
            string_at(record, &["place", "city"]),
            string_at(record, &["place", "district"]),
            string_at(record, &["place", "postcode"]),
            string_at(record, &["place", "street"]),
            string_at(record, &["place", "houseNumber"]),
        ]));

        if let Some(areas) = record.get("areas").and_then(Value::as_array) {
            for area in areas {
                match area.get("type").and_then(Value::as_str) {
                    Some("LIVING_AREA") => listing.set_living_area(string_at(area, &["sizeMin"])),
                    Some("PLOT_AREA") => listing.set_plot_area(string_at(area, &["sizeMin"])),
                    _ => {}
                }
            }
        }

        if let Some(price) = record.get("primaryPrice") {
            let amount = string_at(price, &["amountMin"]);
            match price.get("type").and_then(Value::as_str) {
                Some(kind) if kind.contains("RENT") => listing.set_rent_price(amount),
                Some(kind) if kind.contains("PURCHASE") => listing.set_price(amount),
                _ => {}
            }
        }
        match record.get("distributionType").and_then(Value::as_str) {
            Some(dist) if dist.contains("SALE") => listing.set_status(Some("active".to_string())),
            Some(dist) if dist.contains("RENT") => {
                listing.set_rent_status(Some("active".to_string()));
            }
            _ => {}
        }

        Ok(listing)
    }
}
