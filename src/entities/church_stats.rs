//! Church statistics per country

use crate::core::resource::{Resource, ResourceMessages};
use crate::core::validation::{ValidatedPayload, ValidationConfig, filters, validators};
use serde::{Deserialize, Serialize};

const COUNTRY_REQUIRED: &str = "Country name is required";
const COUNTRY_NOT_EMPTY: &str = "Country name cannot be empty if provided";
const COUNTRY_STRING: &str = "Country name must be a string";
const STAKES: &str = "Stakes must be a non-negative integer";
const TEMPLES: &str = "Temples must be a non-negative integer";
const MEMBERS: &str = "Church members must be a non-negative integer";
const TEMPLE_PRESENT: &str = "Temple present must be a boolean";
const CONTRIBUTIONS: &str = "Temple contributions must be a non-negative integer";
const NAMES_SUBMITTED: &str = "Names submitted to temple must be a non-negative integer";

/// Marker type for the `/churchstats` resource
#[derive(Debug, Clone, Copy)]
pub struct ChurchStats;

impl Resource for ChurchStats {
    type New = NewCountryStats;
    type Changes = CountryStatsChanges;

    const COLLECTION: &'static str = "cojccountries";
    const PATH: &'static str = "/churchstats";

    const MESSAGES: ResourceMessages = ResourceMessages {
        created: "Country opened",
        not_found: "Country not found",
        no_changes: "No changes made to country",
        list_failed: "Error fetching countries",
        get_failed: "Error fetching country",
        create_failed: "Error opening country",
        replace_failed: "Error updating country",
        delete_failed: "Error closing church office",
        invalid_id: "ID must be a valid MongoDB ObjectId",
    };
}

/// Counter rules shared by create (required) and replace (optional)
fn counters(config: ValidationConfig, required: bool) -> ValidationConfig {
    let declare = |config: ValidationConfig, field: &'static str| {
        if required {
            config.required(field)
        } else {
            config.optional(field)
        }
    };
    // 5.0 and 5 are the same count
    let counter = |config: ValidationConfig, field: &'static str, message: &'static str| {
        declare(config, field)
            .filter(filters::whole_number())
            .check(validators::non_negative_integer(), message)
    };

    let config = counter(config, "stakes", STAKES);
    let config = counter(config, "temples", TEMPLES);
    let config = counter(config, "church_members", MEMBERS);
    let config = declare(config, "temple_present").check(validators::is_boolean(), TEMPLE_PRESENT);
    let config = counter(config, "temple_contributions", CONTRIBUTIONS);
    counter(config, "names_submitted_to_temple", NAMES_SUBMITTED)
}

/// Fields accepted when opening a country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCountryStats {
    pub country: String,
    pub stakes: i64,
    pub temples: i64,
    pub church_members: i64,
    pub temple_present: bool,
    pub temple_contributions: i64,
    pub names_submitted_to_temple: i64,
}

impl ValidatedPayload for NewCountryStats {
    fn rules() -> ValidationConfig {
        let config = ValidationConfig::new()
            .required("country")
            .filter(filters::trim())
            .check(validators::not_empty(), COUNTRY_REQUIRED)
            .check(validators::is_string(), COUNTRY_STRING);
        counters(config, true)
    }
}

/// Fields accepted when updating a country; absent fields are left as stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryStatsChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stakes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temples: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub church_members: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temple_present: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temple_contributions: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names_submitted_to_temple: Option<i64>,
}

impl ValidatedPayload for CountryStatsChanges {
    fn rules() -> ValidationConfig {
        let config = ValidationConfig::new()
            .optional("country")
            .filter(filters::trim())
            .check(validators::not_empty(), COUNTRY_NOT_EMPTY)
            .check(validators::is_string(), COUNTRY_STRING);
        counters(config, false).require_any("At least one field must be provided")
    }
}
