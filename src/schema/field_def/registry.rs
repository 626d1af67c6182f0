//! Centralized registry of field rules for the normalized listing schema
//!
//! This module is the single source of truth for field roles, external
//! aliases, and constraints. Adding a constrained field to the schema means
//! adding exactly one entry to `FIELD_RULES`.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::field::Constraint::{MaxLength, NumericOnly, SymbolFiltered};
use super::field::FieldRole::{Agency, CoreListing, Unclassified};
use super::field::FieldRule;

macro_rules! rule {
    ($name:literal, $alias:literal, $role:expr, [$($constraint:expr),*]) => {
        FieldRule {
            name: $name,
            alias: $alias,
            role: $role,
            constraints: &[$($constraint),*],
        }
    };
}

/// Every field of the normalized listing record, with alias, role and
/// constraints. Declaration order follows the record layout.
pub static FIELD_RULES: &[FieldRule] = &[
    rule!("uid", "uid", Unclassified, []),
    rule!("photos", "photos", Unclassified, []),
    // Core listing fields
    rule!("bathrooms", "bathrooms", CoreListing, [NumericOnly]),
    rule!("bedrooms", "bedrooms", CoreListing, [NumericOnly]),
    rule!("construction_year", "constructionYear", CoreListing, [NumericOnly]),
    rule!("description", "description", CoreListing, [SymbolFiltered]),
    rule!("energy_rating", "energyRating", CoreListing, []),
    rule!("features", "features", CoreListing, []),
    rule!("fire_type", "fireType", CoreListing, []),
    rule!("floor_type", "floorType", CoreListing, [MaxLength(32)]),
    rule!("garage", "garage", CoreListing, [NumericOnly]),
    rule!("heating", "heating", CoreListing, [MaxLength(64)]),
    rule!("latitude", "latitude", CoreListing, []),
    rule!("living_area", "livingArea", CoreListing, [NumericOnly]),
    rule!("location", "location", CoreListing, []),
    rule!("longitude", "longitude", CoreListing, []),
    rule!("parking", "parking", CoreListing, [MaxLength(32)]),
    rule!("plot_area", "plotArea", CoreListing, [NumericOnly]),
    rule!("price", "price", CoreListing, [NumericOnly]),
    rule!("price_from", "priceFrom", CoreListing, [NumericOnly]),
    rule!("ref", "ref", CoreListing, [MaxLength(64)]),
    rule!("rent_period", "rentPeriod", CoreListing, []),
    rule!("rent_price", "rentPrice", CoreListing, [NumericOnly]),
    rule!("rent_price_from", "rentPriceFrom", CoreListing, [NumericOnly]),
    rule!("rooms", "rooms", CoreListing, [NumericOnly]),
    rule!("subtype", "subtype", CoreListing, [MaxLength(64)]),
    rule!("title", "title", CoreListing, [MaxLength(128), SymbolFiltered]),
    rule!("terrace_area", "terraceArea", CoreListing, []),
    rule!("total_area", "totalArea", CoreListing, [NumericOnly]),
    rule!("transfer_price", "transferPrice", CoreListing, [NumericOnly]),
    rule!("url", "url", CoreListing, [MaxLength(1024)]),
    rule!("status", "status", CoreListing, [MaxLength(8)]),
    rule!("rent_status", "rentStatus", CoreListing, [MaxLength(8)]),
    // Agency fields
    rule!("company", "company", Agency, [MaxLength(64)]),
    rule!("contacts", "contacts", Agency, [MaxLength(64)]),
    rule!("listing_agent", "listing_agent", Agency, [MaxLength(64)]),
    rule!("phone", "phone", Agency, [MaxLength(32)]),
    rule!("is_private", "is_private", Agency, []),
    // Other fields
    rule!("currency", "currency", Unclassified, []),
    rule!("rent_currency", "rent_currency", Unclassified, []),
    rule!("ref2", "ref2", Unclassified, []),
    rule!("bank", "bank", Unclassified, []),
    rule!("root_location_ids", "root_location_ids", Unclassified, [MaxLength(1024)]),
];

fn rule_index() -> &'static FxHashMap<&'static str, &'static FieldRule> {
    static INDEX: OnceLock<FxHashMap<&'static str, &'static FieldRule>> = OnceLock::new();
    INDEX.get_or_init(|| FIELD_RULES.iter().map(|rule| (rule.name, rule)).collect())
}

/// Look up the rule for a field by its internal name
///
/// Returns `None` for fields outside the schema; such fields carry no
/// constraints and pass through validation unchanged.
#[must_use]
pub fn rules_for(field_name: &str) -> Option<&'static FieldRule> {
    rule_index().get(field_name).copied()
}

/// External serialization key for a field
#[must_use]
pub fn alias_for(field_name: &str) -> Option<&'static str> {
    rules_for(field_name).map(|rule| rule.alias)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldRole;
    use std::collections::HashSet;

    #[test]
    fn field_names_are_unique() {
        let names: HashSet<_> = FIELD_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names.len(), FIELD_RULES.len());
    }

    #[test]
    fn max_lengths_are_positive() {
        for rule in FIELD_RULES {
            if let Some(max) = rule.max_length() {
                assert!(max > 0, "{} declares MaxLength(0)", rule.name);
            }
        }
    }

    #[test]
    fn alias_table_matches_public_contract() {
        assert_eq!(alias_for("construction_year"), Some("constructionYear"));
        assert_eq!(alias_for("living_area"), Some("livingArea"));
        assert_eq!(alias_for("plot_area"), Some("plotArea"));
        assert_eq!(alias_for("price_from"), Some("priceFrom"));
        assert_eq!(alias_for("rent_price"), Some("rentPrice"));
        assert_eq!(alias_for("rent_price_from"), Some("rentPriceFrom"));
        assert_eq!(alias_for("rent_status"), Some("rentStatus"));
        assert_eq!(alias_for("transfer_price"), Some("transferPrice"));
        assert_eq!(alias_for("listing_agent"), Some("listing_agent"));
        assert_eq!(alias_for("phone"), Some("phone"));
        assert_eq!(alias_for("not_a_field"), None);
    }

    #[test]
    fn lookup_finds_declared_rules() {
        let rule = rules_for("title").unwrap();
        assert_eq!(rule.role, FieldRole::CoreListing);
        assert_eq!(rule.max_length(), Some(128));
        assert!(rule.symbol_filtered());
        assert!(!rule.numeric_only());

        let rule = rules_for("rooms").unwrap();
        assert!(rule.numeric_only());
        assert_eq!(rule.max_length(), None);

        assert!(rules_for("unknown").is_none());
    }

    #[test]
    fn matches_name_covers_aliases() {
        let rule = rules_for("construction_year").unwrap();
        assert!(rule.matches_name("construction_year"));
        assert!(rule.matches_name("constructionYear"));
        assert!(!rule.matches_name("constructionyear"));
    }
}
