//! Read-only country and region tables consumed by the decision core.
//!
//! A snapshot is built once (the bundled `standard` tables or a CSV export
//! from the refresh tooling) and shared immutably for the life of the process.

mod import;
mod standard;

pub use import::ReferenceImportError;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::info;

/// Named group of countries usable in place of listing each one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionAlias {
    pub name: String,
    pub countries: Vec<String>,
}

/// Announced launch for a roadmap country, e.g. `Jan 26, 2026` or `Mar 2026`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchDate {
    pub label: String,
    /// First day of the announced launch window.
    pub window_start: NaiveDate,
}

impl LaunchDate {
    pub fn parse(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }

        let window_start = NaiveDate::parse_from_str(trimmed, "%b %d, %Y")
            .or_else(|_| NaiveDate::parse_from_str(trimmed, "%B %d, %Y"))
            .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
            .or_else(|_| NaiveDate::parse_from_str(&format!("1 {trimmed}"), "%d %b %Y"))
            .or_else(|_| NaiveDate::parse_from_str(&format!("1 {trimmed}"), "%d %B %Y"))
            .ok()?;

        Some(Self {
            label: trimmed.to_string(),
            window_start,
        })
    }
}

impl PartialOrd for LaunchDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LaunchDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.window_start
            .cmp(&other.window_start)
            .then_with(|| self.label.cmp(&other.label))
    }
}

/// Family-A tables: who may send, who may receive, and who is coming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalPayoutsTables {
    pub senders: BTreeSet<String>,
    pub recipients: BTreeSet<String>,
    pub roadmap: BTreeMap<String, LaunchDate>,
}

/// Family-B tables. No sender/recipient split and no per-country dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectTables {
    pub supported: BTreeSet<String>,
    pub roadmap: BTreeSet<String>,
}

/// Immutable, versioned snapshot of every table the core reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTables {
    version: String,
    regions: Vec<RegionAlias>,
    source_locations: Vec<String>,
    /// Countries offered as destinations even when no support table lists them.
    destination_options: Vec<String>,
    global_payouts: GlobalPayoutsTables,
    connect: ConnectTables,
}

impl ReferenceTables {
    pub fn standard() -> Self {
        standard::standard_tables()
    }

    /// Loads the snapshot at `path`, or the bundled tables when no path is configured.
    pub fn load(path: Option<&Path>) -> Result<Self, ReferenceImportError> {
        let tables = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::standard(),
        };

        info!(
            version = %tables.version,
            regions = tables.regions.len(),
            global_payouts_recipients = tables.global_payouts.recipients.len(),
            global_payouts_roadmap = tables.global_payouts.roadmap.len(),
            connect_supported = tables.connect.supported.len(),
            "reference tables loaded"
        );

        Ok(tables)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn regions(&self) -> &[RegionAlias] {
        &self.regions
    }

    pub fn region(&self, name: &str) -> Option<&RegionAlias> {
        self.regions.iter().find(|region| region.name == name)
    }

    pub fn is_region(&self, name: &str) -> bool {
        self.region(name).is_some()
    }

    pub fn source_locations(&self) -> &[String] {
        &self.source_locations
    }

    pub fn destination_options(&self) -> &[String] {
        &self.destination_options
    }

    pub fn global_payouts(&self) -> &GlobalPayoutsTables {
        &self.global_payouts
    }

    pub fn connect(&self) -> &ConnectTables {
        &self.connect
    }

    /// Every country named anywhere in the snapshot, sorted and deduplicated.
    pub fn known_countries(&self) -> BTreeSet<&str> {
        let mut countries: BTreeSet<&str> = BTreeSet::new();
        countries.extend(
            self.regions
                .iter()
                .flat_map(|region| region.countries.iter().map(String::as_str)),
        );
        countries.extend(self.source_locations.iter().map(String::as_str));
        countries.extend(self.destination_options.iter().map(String::as_str));
        countries.extend(self.global_payouts.senders.iter().map(String::as_str));
        countries.extend(self.global_payouts.recipients.iter().map(String::as_str));
        countries.extend(self.global_payouts.roadmap.keys().map(String::as_str));
        countries.extend(self.connect.supported.iter().map(String::as_str));
        countries.extend(self.connect.roadmap.iter().map(String::as_str));
        countries
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::standard()
    }
}
