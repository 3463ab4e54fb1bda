//! Built-in reference data for the time zone and country pickers.
//!
//! The tables are process-wide constants, materialized once on first use
//! and never mutated, so concurrent readers need no synchronization.

mod countries;
mod timezones;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::options::{OptionGroupInput, country_groups, timezone_groups};

/// A time zone record, `{zoneName}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeZone {
    #[serde(rename = "zoneName")]
    pub zone_name: String,
}

impl TimeZone {
    pub fn new(zone_name: impl Into<String>) -> Self {
        Self {
            zone_name: zone_name.into(),
        }
    }
}

/// A country record, `{id, value}`: ISO code and display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub value: String,
}

impl Country {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

lazy_static! {
    static ref TIME_ZONES: Vec<TimeZone> = timezones::ZONE_NAMES.iter().map(|name| TimeZone::new(*name)).collect();
    static ref COUNTRIES: Vec<Country> = countries::COUNTRY_TABLE
        .iter()
        .map(|(id, value)| Country::new(*id, *value))
        .collect();
    static ref TIME_ZONE_GROUPS: Vec<OptionGroupInput> = timezone_groups(&TIME_ZONES);
    static ref COUNTRY_GROUPS: Vec<OptionGroupInput> = country_groups(&COUNTRIES);
}

/// Every built-in time zone, in table order.
pub fn time_zones() -> &'static [TimeZone] {
    &TIME_ZONES
}

/// Every built-in country, in table order.
pub fn countries() -> &'static [Country] {
    &COUNTRIES
}

/// Time zones grouped by prefix and split to the group capacity.
pub fn grouped_time_zones() -> &'static [OptionGroupInput] {
    &TIME_ZONE_GROUPS
}

/// Countries grouped by initial-letter bucket.
pub fn grouped_countries() -> &'static [OptionGroupInput] {
    &COUNTRY_GROUPS
}
