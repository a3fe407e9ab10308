//! Temple resource

use crate::core::resource::{Resource, ResourceMessages};
use crate::core::validation::{ValidatedPayload, ValidationConfig, validators};
use serde::{Deserialize, Serialize};

const NAME_REQUIRED: &str = "Temple name is required";
const NAME_STRING: &str = "Temple name must be a string";
const NAME_LENGTH: &str = "Temple name must be at least 3 characters";
const CITY_REQUIRED: &str = "City is required";
const CITY_STRING: &str = "City must be a string";
const ANNOUNCEMENT_REQUIRED: &str = "Valid announcement date (YYYY-MM-DD) is required";
const ANNOUNCEMENT_OPTIONAL: &str = "Valid announcement date (YYYY-MM-DD) is required if provided";
const DEDICATION: &str = "Valid dedication date (YYYY-MM-DD) is required if provided";
const SIZE_STRING: &str = "Size must be a string";

/// Marker type for the `/temples` resource
#[derive(Debug, Clone, Copy)]
pub struct Temples;

impl Resource for Temples {
    type New = NewTemple;
    type Changes = TempleChanges;

    const COLLECTION: &'static str = "temples";
    const PATH: &'static str = "/temples";

    const MESSAGES: ResourceMessages = ResourceMessages {
        created: "Temple announced",
        not_found: "Temple not found",
        no_changes: "No changes made to temple",
        list_failed: "Error fetching temples",
        get_failed: "Error fetching temple",
        create_failed: "Error announcing temple",
        replace_failed: "Error renovating temple",
        delete_failed: "Error deleting temple",
        invalid_id: "Invalid temple ID format (must be a 24-character hex string)",
    };
}

/// Fields accepted when announcing a temple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTemple {
    pub temple_name: String,
    pub city: String,
    pub date_of_announcement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_dedication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl ValidatedPayload for NewTemple {
    fn rules() -> ValidationConfig {
        ValidationConfig::new()
            .required("temple_name")
            .check(validators::not_empty(), NAME_REQUIRED)
            .check(validators::is_string(), NAME_STRING)
            .check(validators::min_chars(3), NAME_LENGTH)
            .required("city")
            .check(validators::not_empty(), CITY_REQUIRED)
            .check(validators::is_string(), CITY_STRING)
            .required("date_of_announcement")
            .check(validators::date_like(), ANNOUNCEMENT_REQUIRED)
            .optional("date_of_dedication")
            .check(validators::date_like(), DEDICATION)
            .optional("size")
            .check(validators::is_string(), SIZE_STRING)
    }
}

/// Fields accepted when renovating a temple; absent fields are left as stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempleChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temple_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_announcement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_dedication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl ValidatedPayload for TempleChanges {
    fn rules() -> ValidationConfig {
        ValidationConfig::new()
            .optional("temple_name")
            .check(validators::is_string(), NAME_STRING)
            .check(validators::min_chars(3), NAME_LENGTH)
            .optional("city")
            .check(validators::is_string(), CITY_STRING)
            .optional("date_of_announcement")
            .check(validators::date_like(), ANNOUNCEMENT_OPTIONAL)
            .optional("date_of_dedication")
            .check(validators::date_like(), DEDICATION)
            .optional("size")
            .check(validators::is_string(), SIZE_STRING)
            .require_any("At least one field must be provided")
    }
}
