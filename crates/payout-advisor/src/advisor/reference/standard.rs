use super::{ConnectTables, GlobalPayoutsTables, LaunchDate, ReferenceTables, RegionAlias};
use std::collections::{BTreeMap, BTreeSet};

pub(super) const STANDARD_VERSION: &str = "standard-2025-12";

pub(super) fn standard_tables() -> ReferenceTables {
    ReferenceTables {
        version: STANDARD_VERSION.to_string(),
        regions: standard_regions(),
        source_locations: owned(SOURCE_LOCATIONS),
        destination_options: owned(DESTINATION_COUNTRIES),
        global_payouts: GlobalPayoutsTables {
            senders: set(&["United States", "United Kingdom"]),
            recipients: set(GLOBAL_PAYOUTS_RECIPIENTS),
            roadmap: standard_roadmap(),
        },
        connect: ConnectTables {
            supported: set(CONNECT_SUPPORTED),
            roadmap: set(CONNECT_ROADMAP),
        },
    }
}

fn standard_roadmap() -> BTreeMap<String, LaunchDate> {
    let roadmap = GLOBAL_PAYOUTS_ROADMAP
        .iter()
        .filter_map(|(country, label)| {
            LaunchDate::parse(label).map(|date| (country.to_string(), date))
        })
        .collect::<BTreeMap<_, _>>();
    debug_assert_eq!(
        roadmap.len(),
        GLOBAL_PAYOUTS_ROADMAP.len(),
        "bundled roadmap has an unparseable launch date"
    );
    roadmap
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn standard_regions() -> Vec<RegionAlias> {
    vec![
        RegionAlias {
            name: "EMEA".to_string(),
            countries: owned(&[
                "Austria",
                "Belgium",
                "Bulgaria",
                "Croatia",
                "Cyprus",
                "Czech Republic",
                "Denmark",
                "Estonia",
                "Finland",
                "France",
                "Germany",
                "Greece",
                "Hungary",
                "Iceland",
                "Ireland",
                "Italy",
                "Latvia",
                "Liechtenstein",
                "Lithuania",
                "Luxembourg",
                "Malta",
                "Netherlands",
                "Norway",
                "Poland",
                "Portugal",
                "Romania",
                "Slovakia",
                "Slovenia",
                "Spain",
                "Sweden",
                "United Kingdom",
                "Gibraltar",
                "Russia",
                "Armenia",
                "Israel",
                "Jordan",
                "Kuwait",
                "Oman",
                "Turkey",
                "United Arab Emirates",
                "Albania",
                "Bosnia and Herzegovina",
                "Serbia",
                "Switzerland",
            ]),
        },
        RegionAlias {
            name: "APAC".to_string(),
            countries: owned(&[
                "Armenia",
                "Brunei",
                "China",
                "Hong Kong",
                "India",
                "Indonesia",
                "Japan",
                "Malaysia",
                "Mongolia",
                "Philippines",
                "Singapore",
                "South Korea",
                "Sri Lanka",
                "Taiwan",
                "Thailand",
                "Vietnam",
                "Australia",
                "New Zealand",
            ]),
        },
        RegionAlias {
            name: "North America".to_string(),
            countries: owned(&["Canada", "United States"]),
        },
        RegionAlias {
            name: "LATAM".to_string(),
            countries: owned(&[
                "Mexico",
                "Belize",
                "Costa Rica",
                "El Salvador",
                "Guatemala",
                "Honduras",
                "Nicaragua",
                "Panama",
                "Bahamas",
                "Jamaica",
                "Dominican Republic",
                "Puerto Rico",
                "Trinidad and Tobago",
                "Argentina",
                "Bolivia",
                "Brazil",
                "Chile",
                "Colombia",
                "Ecuador",
                "Guyana",
                "Paraguay",
                "Peru",
                "Suriname",
                "Uruguay",
                "Venezuela",
            ]),
        },
        RegionAlias {
            name: "Africa".to_string(),
            countries: owned(&[
                "Algeria",
                "Benin",
                "Botswana",
                "Cameroon",
                "Côte d'Ivoire",
                "Egypt",
                "Ethiopia",
                "Ghana",
                "Kenya",
                "Mauritius",
                "Morocco",
                "Namibia",
                "Nigeria",
                "Rwanda",
                "Senegal",
                "South Africa",
                "Tanzania",
                "Tunisia",
                "Uganda",
                "Zimbabwe",
            ]),
        },
    ]
}

const SOURCE_LOCATIONS: &[&str] = &[
    "United States",
    "United Kingdom",
    "Australia",
    "Austria",
    "Belgium",
    "Brazil",
    "Bulgaria",
    "Canada",
    "Croatia",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Ghana",
    "Gibraltar",
    "Greece",
    "Hong Kong",
    "Hungary",
    "India",
    "Indonesia",
    "Ireland",
    "Italy",
    "Japan",
    "Kenya",
    "Latvia",
    "Liechtenstein",
    "Lithuania",
    "Luxembourg",
    "Malaysia",
    "Malta",
    "Mexico",
    "Netherlands",
    "New Zealand",
    "Nigeria",
    "Norway",
    "Poland",
    "Portugal",
    "Romania",
    "Singapore",
    "Slovakia",
    "Slovenia",
    "South Africa",
    "Spain",
    "Sweden",
    "Switzerland",
    "Thailand",
    "United Arab Emirates",
];

const GLOBAL_PAYOUTS_RECIPIENTS: &[&str] = &[
    "Albania",
    "Algeria",
    "Armenia",
    "Australia",
    "Austria",
    "Bahamas",
    "Belgium",
    "Benin",
    "Bosnia and Herzegovina",
    "Botswana",
    "Brunei",
    "Bulgaria",
    "Canada",
    "Côte d'Ivoire",
    "Croatia",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Ecuador",
    "El Salvador",
    "Estonia",
    "Ethiopia",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Guyana",
    "Hungary",
    "Iceland",
    "India",
    "Indonesia",
    "Ireland",
    "Israel",
    "Italy",
    "Jamaica",
    "Jordan",
    "Kenya",
    "Kuwait",
    "Latvia",
    "Liechtenstein",
    "Lithuania",
    "Luxembourg",
    "Malta",
    "Mauritius",
    "Mexico",
    "Mongolia",
    "Morocco",
    "Namibia",
    "Netherlands",
    "New Zealand",
    "Norway",
    "Oman",
    "Panama",
    "Philippines",
    "Poland",
    "Portugal",
    "Romania",
    "Senegal",
    "Serbia",
    "Singapore",
    "Slovakia",
    "Slovenia",
    "South Africa",
    "Spain",
    "Sri Lanka",
    "Sweden",
    "Switzerland",
    "Tanzania",
    "Tunisia",
    "Turkey",
    "United Kingdom",
    "United States",
];

const GLOBAL_PAYOUTS_ROADMAP: &[(&str, &str)] = &[
    ("Antigua and Barbuda", "Jan 26, 2026"),
    ("Bahrain", "Jan 26, 2026"),
    ("Belize", "Jan 26, 2026"),
    ("Cayman Islands", "Jan 26, 2026"),
    ("Gambia", "Jan 26, 2026"),
    ("Honduras", "Jan 26, 2026"),
    ("Maldives", "Jan 26, 2026"),
    ("Mozambique", "Jan 26, 2026"),
    ("Nicaragua", "Jan 26, 2026"),
    ("Papua New Guinea", "Jan 26, 2026"),
    ("Saint Lucia", "Jan 26, 2026"),
    ("Seychelles", "Jan 26, 2026"),
    ("Suriname", "Jan 26, 2026"),
    ("Zimbabwe", "Jan 26, 2026"),
    ("Bhutan", "Feb 26, 2026"),
    ("Cambodia", "Feb 26, 2026"),
    ("Dominican Republic", "Feb 26, 2026"),
    ("Equatorial Guinea", "Feb 26, 2026"),
    ("Fiji", "Feb 26, 2026"),
    ("Grenada", "Feb 26, 2026"),
    ("Kyrgyzstan", "Feb 26, 2026"),
    ("Lebanon", "Feb 26, 2026"),
    ("Lesotho", "Feb 26, 2026"),
    ("Malawi", "Feb 26, 2026"),
    ("Sao Tome and Principe", "Feb 26, 2026"),
    ("Solomon Islands", "Feb 26, 2026"),
    ("Tonga", "Feb 26, 2026"),
    ("Angola", "Mar 2026"),
    ("Cameroon", "Mar 2026"),
    ("Ghana", "Mar 2026"),
    ("Nigeria", "Mar 2026"),
    ("Rwanda", "Mar 2026"),
    ("Uganda", "Mar 2026"),
    ("Japan", "Apr 2026"),
];

const CONNECT_SUPPORTED: &[&str] = &[
    "United States",
    "United Kingdom",
    "Austria",
    "Belgium",
    "Bulgaria",
    "Croatia",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Hungary",
    "Ireland",
    "Italy",
    "Latvia",
    "Liechtenstein",
    "Lithuania",
    "Luxembourg",
    "Malta",
    "Netherlands",
    "Norway",
    "Poland",
    "Portugal",
    "Romania",
    "Slovakia",
    "Slovenia",
    "Spain",
    "Sweden",
    "Canada",
    "Switzerland",
];

const CONNECT_ROADMAP: &[&str] = &[
    "Andorra",
    "Angola",
    "Anguilla",
    "Antigua and Barbuda",
    "Argentina",
    "Armenia",
    "Azerbaijan",
    "Bahamas",
    "Bahrain",
    "Belize",
    "Bermuda",
    "Bhutan",
    "Bolivia",
    "Bosnia and Herzegovina",
    "Botswana",
    "Brunei",
    "Cabo Verde",
    "Chile",
    "Colombia",
    "Comoros",
    "Cook Islands",
    "Costa Rica",
    "Djibouti",
    "Dominica",
    "Dominican Republic",
    "East Timor (Timor-Leste)",
    "Ecuador",
    "Equatorial Guinea",
    "Eswatini",
    "Fiji",
    "Gabon",
    "Gambia",
    "Guatemala",
    "Guernsey",
    "Guinea",
    "Guyana",
    "Honduras",
    "Isle of Man",
    "Jersey",
    "Kazakhstan",
    "Kiribati",
    "Kyrgyzstan",
    "Lesotho",
    "Liberia",
    "Madagascar",
    "Malawi",
    "Maldives",
    "Marshall Islands",
    "Mauritania",
    "Mauritius",
    "Micronesia",
    "Mongolia",
    "Montenegro",
    "Montserrat",
    "Nauru",
    "Oman",
    "Palau",
    "Pakistan",
    "Papua New Guinea",
    "Paraguay",
    "Peru",
    "Philippines",
    "Qatar",
    "Saint Kitts and Nevis",
    "Saint Lucia",
    "Saint Vincent and the Grenadines",
    "Samoa",
    "San Marino",
    "Sao Tome and Principe",
    "Saudi Arabia",
    "Serbia",
    "Seychelles",
    "Sierra Leone",
    "Solomon Islands",
    "Sri Lanka",
    "Suriname",
    "Tajikistan",
    "Togo",
    "Tonga",
    "Turkmenistan",
    "Tuvalu",
    "Uruguay",
    "Vatican City (Holy See)",
    "Zambia",
];

/// Every country a destination can name, whether or not any table lists it.
const DESTINATION_COUNTRIES: &[&str] = &[
    "Afghanistan",
    "Albania",
    "Algeria",
    "Andorra",
    "Angola",
    "Anguilla",
    "Antigua and Barbuda",
    "Argentina",
    "Armenia",
    "Aruba",
    "Australia",
    "Austria",
    "Azerbaijan",
    "Bahamas",
    "Bahrain",
    "Bangladesh",
    "Barbados",
    "Belarus",
    "Belgium",
    "Belize",
    "Benin",
    "Bermuda",
    "Bhutan",
    "Bolivia",
    "Bosnia and Herzegovina",
    "Botswana",
    "Brazil",
    "Brunei",
    "Bulgaria",
    "Burkina Faso",
    "Burundi",
    "Cabo Verde",
    "Cambodia",
    "Cameroon",
    "Canada",
    "Cayman Islands",
    "Central African Republic",
    "Chad",
    "Chile",
    "China",
    "Colombia",
    "Comoros",
    "Congo (Brazzaville)",
    "Congo (Kinshasa)",
    "Cook Islands",
    "Costa Rica",
    "Côte d'Ivoire",
    "Croatia",
    "Cuba",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Djibouti",
    "Dominica",
    "Dominican Republic",
    "East Timor (Timor-Leste)",
    "Ecuador",
    "Egypt",
    "El Salvador",
    "Equatorial Guinea",
    "Eritrea",
    "Estonia",
    "Eswatini",
    "Ethiopia",
    "Fiji",
    "Finland",
    "France",
    "Gabon",
    "Gambia",
    "Georgia",
    "Germany",
    "Ghana",
    "Gibraltar",
    "Greece",
    "Grenada",
    "Guatemala",
    "Guernsey",
    "Guinea",
    "Guinea-Bissau",
    "Guyana",
    "Haiti",
    "Honduras",
    "Hong Kong",
    "Hungary",
    "Iceland",
    "India",
    "Indonesia",
    "Iran",
    "Iraq",
    "Ireland",
    "Isle of Man",
    "Israel",
    "Italy",
    "Jamaica",
    "Japan",
    "Jersey",
    "Jordan",
    "Kazakhstan",
    "Kenya",
    "Kiribati",
    "Kosovo",
    "Kuwait",
    "Kyrgyzstan",
    "Laos",
    "Latvia",
    "Lebanon",
    "Lesotho",
    "Liberia",
    "Libya",
    "Liechtenstein",
    "Lithuania",
    "Luxembourg",
    "Macau",
    "Madagascar",
    "Malawi",
    "Malaysia",
    "Maldives",
    "Mali",
    "Malta",
    "Marshall Islands",
    "Mauritania",
    "Mauritius",
    "Mexico",
    "Micronesia",
    "Moldova",
    "Monaco",
    "Mongolia",
    "Montenegro",
    "Montserrat",
    "Morocco",
    "Mozambique",
    "Myanmar (Burma)",
    "Namibia",
    "Nauru",
    "Nepal",
    "Netherlands",
    "New Zealand",
    "Nicaragua",
    "Niger",
    "Nigeria",
    "North Korea",
    "North Macedonia",
    "Norway",
    "Oman",
    "Pakistan",
    "Palau",
    "Palestine",
    "Panama",
    "Papua New Guinea",
    "Paraguay",
    "Peru",
    "Philippines",
    "Poland",
    "Portugal",
    "Puerto Rico",
    "Qatar",
    "Romania",
    "Russia",
    "Rwanda",
    "Saint Kitts and Nevis",
    "Saint Lucia",
    "Saint Vincent and the Grenadines",
    "Samoa",
    "San Marino",
    "Sao Tome and Principe",
    "Saudi Arabia",
    "Senegal",
    "Serbia",
    "Seychelles",
    "Sierra Leone",
    "Singapore",
    "Slovakia",
    "Slovenia",
    "Solomon Islands",
    "Somalia",
    "South Africa",
    "South Korea",
    "South Sudan",
    "Spain",
    "Sri Lanka",
    "Sudan",
    "Suriname",
    "Sweden",
    "Switzerland",
    "Syria",
    "Taiwan",
    "Tajikistan",
    "Tanzania",
    "Thailand",
    "Togo",
    "Tonga",
    "Trinidad and Tobago",
    "Tunisia",
    "Turkey",
    "Turkmenistan",
    "Turks and Caicos Islands",
    "Tuvalu",
    "Uganda",
    "Ukraine",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Uruguay",
    "Uzbekistan",
    "Vanuatu",
    "Vatican City (Holy See)",
    "Venezuela",
    "Vietnam",
    "Yemen",
    "Zambia",
    "Zimbabwe",
];
