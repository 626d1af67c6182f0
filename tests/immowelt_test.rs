//! Immowelt adapter: payload mapping and per-record failure confinement.

use listing_normalizer::{ImmoweltAdapter, NormalizerError, SourceAdapter};
use serde_json::json;

fn sample_payload() -> serde_json::Value {
    json!({
        "data": [
            {
                "id": "abc-1",
                "onlineId": "2XYZ9",
                "itemType": "ESTATE",
                "title": "Helle Wohnung",
                "pictures": [
                    {"imageUri": "https://img.example/1.jpg"},
                    {"imageUri": "https://img.example/2.jpg"}
                ],
                "features": ["Balkon", "Keller"],
                "constructionYear": 1987,
                "estateTypes": ["APARTMENT"],
                "place": {
                    "city": "Berlin",
                    "district": "Mitte",
                    "postcode": "10115",
                    "street": "Invalidenstr.",
                    "houseNumber": "7",
                    "point": {"lat": 52.53, "lon": 13.38}
                },
                "roomsMin": 3,
                "broker": {"companyName": "Muster Immobilien GmbH"},
                "areas": [
                    {"type": "LIVING_AREA", "sizeMin": 86},
                    {"type": "PLOT_AREA", "sizeMin": 120}
                ],
                "primaryPrice": {"type": "PURCHASE_PRICE", "amountMin": 450000},
                "distributionType": "SALE"
            },
            {
                // No onlineId: adaptation of this record must fail
                "id": "abc-2",
                "title": "Kaputt"
            },
            {
                "id": "abc-3",
                "onlineId": "3PRJ1",
                "itemType": "PROJECT",
                "primaryPrice": {"type": "RENT_PER_MONTH", "amountMin": 1200},
                "distributionType": "RENT"
            }
        ]
    })
}

#[test]
fn maps_a_full_record() {
    let collection = ImmoweltAdapter.adapt(&sample_payload()).unwrap();
    let listing = &collection.listings()[0];

    assert_eq!(listing.uid(), "abc-1");
    assert_eq!(listing.listing_ref(), Some("2XYZ9"));
    assert_eq!(listing.url(), "https://www.immowelt.de/expose/2XYZ9");
    assert_eq!(listing.title(), Some("Helle Wohnung"));
    assert_eq!(listing.photos().len(), 2);
    assert_eq!(listing.features(), Some("Balkon, Keller"));
    assert_eq!(listing.construction_year(), Some("1987"));
    assert_eq!(listing.subtype(), Some("APARTMENT"));
    assert_eq!(listing.latitude(), Some(52.53));
    assert_eq!(listing.longitude(), Some(13.38));
    assert_eq!(listing.rooms(), Some("3"));
    assert_eq!(listing.company(), Some("Muster Immobilien GmbH"));
    assert_eq!(listing.root_location_ids(), Some("313123"));
    assert_eq!(
        listing.location(),
        Some("Berlin, Mitte, 10115, Invalidenstr., 7")
    );
    assert_eq!(listing.living_area(), Some("86"));
    assert_eq!(listing.plot_area(), Some("120"));
    assert_eq!(listing.price(), Some("450000"));
    assert_eq!(listing.status(), Some("active"));
    assert_eq!(listing.rent_status(), None);
}

#[test]
fn record_without_identity_is_skipped_not_fatal() {
    let collection = ImmoweltAdapter.adapt(&sample_payload()).unwrap();
    assert_eq!(collection.len(), 2);
    assert!(collection.iter().all(|l| l.uid() != "abc-2"));
}

#[test]
fn projects_use_the_project_url_prefix() {
    let collection = ImmoweltAdapter.adapt(&sample_payload()).unwrap();
    let project = collection
        .iter()
        .find(|l| l.uid() == "abc-3")
        .unwrap();
    assert_eq!(project.url(), "https://www.immowelt.de/projekte/expose/3PRJ1");
    assert_eq!(project.rent_price(), Some("1200"));
    assert_eq!(project.rent_status(), Some("active"));
    assert_eq!(project.status(), None);
}

#[test]
fn minimal_record_yields_identity_and_nothing_else() {
    let payload = json!({"data": [{"id": "m-1", "onlineId": "M1"}]});
    let collection = ImmoweltAdapter.adapt(&payload).unwrap();
    let listing = &collection.listings()[0];

    assert_eq!(listing.uid(), "m-1");
    assert_eq!(listing.listing_ref(), Some("M1"));
    assert_eq!(listing.url(), "https://www.immowelt.de/expose/M1");
    assert!(listing.photos().is_empty());
    assert_eq!(listing.title(), None);
    assert_eq!(listing.location(), None);
    assert_eq!(listing.price(), None);
    assert_eq!(listing.company(), None);
    assert_eq!(listing.latitude(), None);
}

#[test]
fn payload_without_data_array_is_malformed() {
    let result = ImmoweltAdapter.adapt(&json!({"results": []}));
    assert!(matches!(result, Err(NormalizerError::MalformedRecord(_))));
}

#[test]
fn parallel_adaptation_matches_sequential() {
    let payload = sample_payload();
    let sequential = ImmoweltAdapter.adapt(&payload).unwrap();
    let parallel = ImmoweltAdapter.adapt_parallel(&payload).unwrap();
    assert_eq!(sequential.listings(), parallel.listings());
}
