use super::{ConnectTables, GlobalPayoutsTables, LaunchDate, ReferenceTables, RegionAlias};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

/// Failures while reading a refreshed reference snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceImportError {
    #[error("failed to read reference tables: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid reference CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: country cell is empty")]
    MissingCountry { row: usize },
    #[error("row {row}: region rows need a region name")]
    MissingRegion { row: usize },
    #[error("row {row}: roadmap entry for {country} needs a launch date")]
    MissingLaunchDate { row: usize, country: String },
    #[error("row {row}: launch date '{value}' for {country} is not recognised")]
    InvalidLaunchDate {
        row: usize,
        country: String,
        value: String,
    },
    #[error("region {region} lists region {nested}; regions cannot contain regions")]
    NestedRegion { region: String, nested: String },
    #[error("region {region} also appears as a country in the {table} table")]
    RegionNamedAsCountry { region: String, table: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TableKind {
    Region,
    SourceLocation,
    DestinationOption,
    GlobalPayoutsSender,
    GlobalPayoutsRecipient,
    GlobalPayoutsRoadmap,
    ConnectSupported,
    ConnectRoadmap,
}

#[derive(Debug, Deserialize)]
struct ReferenceRow {
    table: TableKind,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    country: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    region: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    launch_date: Option<String>,
}

impl ReferenceTables {
    /// Reads a snapshot CSV; the version label is taken from the file stem.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceImportError> {
        let path = path.as_ref();
        let version = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "imported".to_string());
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, version)
    }

    /// Reads a snapshot CSV with header `table,country,region,launch_date`.
    pub fn from_reader<R: Read>(
        reader: R,
        version: impl Into<String>,
    ) -> Result<Self, ReferenceImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut tables = ReferenceTables {
            version: version.into(),
            regions: Vec::new(),
            source_locations: Vec::new(),
            destination_options: Vec::new(),
            global_payouts: GlobalPayoutsTables::default(),
            connect: ConnectTables::default(),
        };

        for (index, record) in csv_reader.deserialize::<ReferenceRow>().enumerate() {
            // Header is line 1.
            let row_number = index + 2;
            let row = record?;
            let country = row
                .country
                .ok_or(ReferenceImportError::MissingCountry { row: row_number })?;

            match row.table {
                TableKind::Region => {
                    let name = row
                        .region
                        .ok_or(ReferenceImportError::MissingRegion { row: row_number })?;
                    push_region_member(&mut tables.regions, name, country);
                }
                TableKind::SourceLocation => {
                    if !tables.source_locations.contains(&country) {
                        tables.source_locations.push(country);
                    }
                }
                TableKind::DestinationOption => {
                    if !tables.destination_options.contains(&country) {
                        tables.destination_options.push(country);
                    }
                }
                TableKind::GlobalPayoutsSender => {
                    tables.global_payouts.senders.insert(country);
                }
                TableKind::GlobalPayoutsRecipient => {
                    tables.global_payouts.recipients.insert(country);
                }
                TableKind::GlobalPayoutsRoadmap => {
                    let raw = row.launch_date.ok_or_else(|| {
                        ReferenceImportError::MissingLaunchDate {
                            row: row_number,
                            country: country.clone(),
                        }
                    })?;
                    let date = LaunchDate::parse(&raw).ok_or_else(|| {
                        ReferenceImportError::InvalidLaunchDate {
                            row: row_number,
                            country: country.clone(),
                            value: raw.clone(),
                        }
                    })?;
                    tables.global_payouts.roadmap.insert(country, date);
                }
                TableKind::ConnectSupported => {
                    tables.connect.supported.insert(country);
                }
                TableKind::ConnectRoadmap => {
                    tables.connect.roadmap.insert(country);
                }
            }
        }

        ensure_regions_are_flat(&tables.regions)?;
        ensure_regions_are_not_countries(&tables)?;
        Ok(tables)
    }
}

fn push_region_member(regions: &mut Vec<RegionAlias>, name: String, country: String) {
    match regions.iter_mut().find(|region| region.name == name) {
        Some(region) => {
            if !region.countries.contains(&country) {
                region.countries.push(country);
            }
        }
        None => regions.push(RegionAlias {
            name,
            countries: vec![country],
        }),
    }
}

fn ensure_regions_are_flat(regions: &[RegionAlias]) -> Result<(), ReferenceImportError> {
    for region in regions {
        if let Some(nested) = region
            .countries
            .iter()
            .find(|country| regions.iter().any(|other| &other.name == *country))
        {
            return Err(ReferenceImportError::NestedRegion {
                region: region.name.clone(),
                nested: nested.clone(),
            });
        }
    }
    Ok(())
}

fn ensure_regions_are_not_countries(tables: &ReferenceTables) -> Result<(), ReferenceImportError> {
    let country_tables: [(&'static str, Vec<&String>); 7] = [
        ("source_location", tables.source_locations.iter().collect()),
        ("destination_option", tables.destination_options.iter().collect()),
        (
            "global_payouts_sender",
            tables.global_payouts.senders.iter().collect(),
        ),
        (
            "global_payouts_recipient",
            tables.global_payouts.recipients.iter().collect(),
        ),
        (
            "global_payouts_roadmap",
            tables.global_payouts.roadmap.keys().collect(),
        ),
        ("connect_supported", tables.connect.supported.iter().collect()),
        ("connect_roadmap", tables.connect.roadmap.iter().collect()),
    ];

    for region in &tables.regions {
        for (table, countries) in &country_tables {
            if countries.iter().any(|country| **country == region.name) {
                return Err(ReferenceImportError::RegionNamedAsCountry {
                    region: region.name.clone(),
                    table: *table,
                });
            }
        }
    }
    Ok(())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "table,country,region,launch_date\n";

    fn import(body: &str) -> Result<ReferenceTables, ReferenceImportError> {
        let csv = format!("{HEADER}{body}");
        ReferenceTables::from_reader(Cursor::new(csv.into_bytes()), "test-snapshot")
    }

    #[test]
    fn imports_every_table_kind() {
        let tables = import(
            "region,France,Europe,\n\
             region,Germany,Europe,\n\
             region,France,Europe,\n\
             source_location,United States,,\n\
             global_payouts_sender,United States,,\n\
             global_payouts_recipient,France,,\n\
             global_payouts_roadmap,Japan,,\"Apr 2026\"\n\
             connect_supported,Germany,,\n\
             connect_roadmap,Peru,,\n",
        )
        .expect("snapshot imports");

        assert_eq!(tables.version(), "test-snapshot");
        let europe = tables.region("Europe").expect("region present");
        assert_eq!(europe.countries, vec!["France", "Germany"]);
        assert_eq!(tables.source_locations(), &["United States".to_string()]);
        assert!(tables.global_payouts().senders.contains("United States"));
        assert!(tables.global_payouts().recipients.contains("France"));
        assert_eq!(
            tables.global_payouts().roadmap["Japan"].label,
            "Apr 2026".to_string()
        );
        assert!(tables.connect().supported.contains("Germany"));
        assert!(tables.connect().roadmap.contains("Peru"));
    }

    #[test]
    fn rejects_roadmap_rows_without_dates() {
        let err = import("global_payouts_roadmap,Japan,,\n").expect_err("date required");
        match err {
            ReferenceImportError::MissingLaunchDate { row, country } => {
                assert_eq!(row, 2);
                assert_eq!(country, "Japan");
            }
            other => panic!("expected missing launch date, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unparseable_launch_dates() {
        let err = import("global_payouts_roadmap,Japan,,next spring\n").expect_err("bad date");
        assert!(matches!(
            err,
            ReferenceImportError::InvalidLaunchDate { ref value, .. } if value == "next spring"
        ));
    }

    #[test]
    fn rejects_region_rows_without_names() {
        let err = import("region,France,,\n").expect_err("region required");
        assert!(matches!(err, ReferenceImportError::MissingRegion { row: 2 }));
    }

    #[test]
    fn rejects_nested_regions() {
        let err = import(
            "region,France,Europe,\n\
             region,Europe,EMEA,\n",
        )
        .expect_err("nesting rejected");
        match err {
            ReferenceImportError::NestedRegion { region, nested } => {
                assert_eq!(region, "EMEA");
                assert_eq!(nested, "Europe");
            }
            other => panic!("expected nested region error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_region_names_listed_as_countries() {
        let err = import(
            "region,France,Europe,\n\
             connect_supported,Europe,,\n\
             connect_supported,United States,,\n",
        )
        .expect_err("region used as country");
        match err {
            ReferenceImportError::RegionNamedAsCountry { region, table } => {
                assert_eq!(region, "Europe");
                assert_eq!(table, "connect_supported");
            }
            other => panic!("expected region named as country, got {other:?}"),
        }

        let err = import(
            "region,France,Europe,\n\
             global_payouts_roadmap,Europe,,Mar 2026\n",
        )
        .expect_err("region used as roadmap country");
        assert!(matches!(
            err,
            ReferenceImportError::RegionNamedAsCountry { table: "global_payouts_roadmap", .. }
        ));
    }

    #[test]
    fn destination_options_keep_file_order_without_duplicates() {
        let tables = import(
            "destination_option,Kosovo,,\n\
             destination_option,Aruba,,\n\
             destination_option,Kosovo,,\n",
        )
        .expect("snapshot imports");

        assert_eq!(tables.destination_options(), &["Kosovo", "Aruba"]);
    }

    #[test]
    fn rejects_unknown_table_names() {
        let err = import("pricing,France,,\n").expect_err("unknown table");
        assert!(matches!(err, ReferenceImportError::Csv(_)));
    }

    #[test]
    fn rejects_blank_country_cells() {
        let err = import("connect_supported,,,\n").expect_err("country required");
        assert!(matches!(err, ReferenceImportError::MissingCountry { row: 2 }));
    }
}
