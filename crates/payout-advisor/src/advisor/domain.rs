use serde::{Deserialize, Serialize};

/// Placeholder selection meaning "unspecified"; never classified.
pub const OTHER_SENTINEL: &str = "Other";

/// The two mutually exclusive integration paths the rule engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntegrationFamily {
    /// Direct-funds-ownership path: the platform pays out of its own balance.
    GlobalPayouts,
    /// Stay-out-of-funds-flow path: money moves through connected accounts.
    Connect,
}

impl IntegrationFamily {
    pub fn label(&self) -> &'static str {
        match self {
            IntegrationFamily::GlobalPayouts => "Global Payouts",
            IntegrationFamily::Connect => "Connect",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            IntegrationFamily::GlobalPayouts => "global-payouts",
            IntegrationFamily::Connect => "connect",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "global-payouts" | "global_payouts" | "globalpayouts" => Some(Self::GlobalPayouts),
            "connect" => Some(Self::Connect),
            _ => None,
        }
    }
}

/// Funds-flow shape within an integration family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundsFlow {
    /// A1: payouts straight from the platform's own account.
    DirectPayout,
    /// B1: destination charges or separate charges and transfers; platform is merchant of record.
    DestinationCharges,
    /// B2: direct charges or destination on-behalf-of; connected account is merchant of record.
    DirectCharges,
}

impl FundsFlow {
    pub fn code(&self) -> &'static str {
        match self {
            FundsFlow::DirectPayout => "A1",
            FundsFlow::DestinationCharges => "B1",
            FundsFlow::DirectCharges => "B2",
        }
    }
}

/// Identifies which entry of the ordered rule list produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    DirectInternationalFast,
    DirectDomesticFast,
    PlatformMerchantOfRecord,
    ConnectedMerchantOfRecord,
    GeneralGlobalPayouts,
    GeneralConnect,
    Fallback,
}

/// Questionnaire answers for a single session. Unset answers are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    #[serde(default)]
    pub own_funds: Option<bool>,
    #[serde(default)]
    pub international_payouts: Option<bool>,
    #[serde(default)]
    pub stay_out_of_funds_flow: Option<bool>,
    #[serde(default)]
    pub fast_integration: Option<bool>,
    #[serde(default)]
    pub merchant_of_record: Option<bool>,
    #[serde(default)]
    pub source_location: Option<String>,
    #[serde(default)]
    pub destinations: Option<Vec<String>>,
}

impl AnswerSet {
    /// Builds an answer set from the five yes/no answers, leaving locations unset.
    pub fn from_flags(
        own_funds: bool,
        international_payouts: bool,
        stay_out_of_funds_flow: bool,
        fast_integration: bool,
        merchant_of_record: bool,
    ) -> Self {
        Self {
            own_funds: Some(own_funds),
            international_payouts: Some(international_payouts),
            stay_out_of_funds_flow: Some(stay_out_of_funds_flow),
            fast_integration: Some(fast_integration),
            merchant_of_record: Some(merchant_of_record),
            source_location: None,
            destinations: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source_location = Some(source.into());
        self
    }

    pub fn with_destinations<I, S>(mut self, destinations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.destinations = Some(destinations.into_iter().map(Into::into).collect());
        self
    }
}

/// Returns the source country when it names a real location.
pub fn resolved_source(source: Option<&str>) -> Option<&str> {
    source.filter(|value| !value.is_empty() && *value != OTHER_SENTINEL)
}

/// One recommended integration path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub rule: RuleId,
    pub integration: IntegrationFamily,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<FundsFlow>,
    pub title: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub use_cases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_note: Option<String>,
}

/// Aggregate destination coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverageStatus {
    FullySupported,
    PartiallySupported,
    NotSupported,
    Unknown,
}

impl CoverageStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CoverageStatus::FullySupported => "fully supported",
            CoverageStatus::PartiallySupported => "partially supported",
            CoverageStatus::NotSupported => "not supported",
            CoverageStatus::Unknown => "unknown",
        }
    }
}

/// A destination that is not live yet. Family-A entries carry a launch date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledDestination {
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ScheduledDestination {
    pub const COMING_SOON: &'static str = "Coming Soon";

    pub fn label(&self) -> &str {
        self.date.as_deref().unwrap_or(Self::COMING_SOON)
    }
}

/// Partition of the expanded destinations plus the derived aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageResult {
    pub status: CoverageStatus,
    pub message: String,
    pub supported: Vec<String>,
    pub scheduled: Vec<ScheduledDestination>,
    pub unsupported: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CoverageResult {
    pub fn total(&self) -> usize {
        self.supported.len() + self.scheduled.len() + self.unsupported.len()
    }
}

/// Coarse availability of an integration for a single source country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityStatus {
    Supported,
    Partial,
    Unsupported,
    Unknown,
}

impl AvailabilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityStatus::Supported => "supported",
            AvailabilityStatus::Partial => "partial",
            AvailabilityStatus::Unsupported => "unsupported",
            AvailabilityStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub status: AvailabilityStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
