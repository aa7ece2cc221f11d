use super::domain::{resolved_source, AvailabilityResult, AvailabilityStatus, IntegrationFamily};
use super::reference::ReferenceTables;

/// Answers "can this integration be used at all from here", independent of destinations.
#[derive(Debug, Clone, Copy)]
pub struct MarketAvailabilityResolver<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> MarketAvailabilityResolver<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn availability(
        &self,
        integration: IntegrationFamily,
        source: Option<&str>,
    ) -> AvailabilityResult {
        let Some(country) = resolved_source(source) else {
            return AvailabilityResult {
                status: AvailabilityStatus::Unknown,
                message: "Market availability unknown".to_string(),
                details: Some(
                    "Please contact your Stripe representative to verify availability in your region."
                        .to_string(),
                ),
            };
        };

        match integration {
            IntegrationFamily::GlobalPayouts => self.global_payouts(country),
            IntegrationFamily::Connect => self.connect(country),
        }
    }

    fn global_payouts(&self, country: &str) -> AvailabilityResult {
        let tables = self.tables.global_payouts();

        if tables.senders.contains(country) {
            AvailabilityResult {
                status: AvailabilityStatus::Supported,
                message: format!("Global Payouts is available in {country}"),
                details: Some(format!(
                    "As a sender country, you can pay out to {}+ recipient countries from {country}.",
                    tables.recipients.len()
                )),
            }
        } else if tables.recipients.contains(country) {
            AvailabilityResult {
                status: AvailabilityStatus::Partial,
                message: format!("{country} is supported as a recipient country only"),
                details: Some(format!(
                    "Global Payouts can send funds TO this country, but cannot be used to send FROM this country. Sender countries are currently limited to {}.",
                    tables
                        .senders
                        .iter()
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(" and ")
                )),
            }
        } else {
            AvailabilityResult {
                status: AvailabilityStatus::Unsupported,
                message: format!("Global Payouts is not yet available in {country}"),
                details: Some(
                    "This country is not currently supported as a sender or recipient. Please contact Stripe for future availability."
                        .to_string(),
                ),
            }
        }
    }

    fn connect(&self, country: &str) -> AvailabilityResult {
        if self.tables.connect().supported.contains(country) {
            AvailabilityResult {
                status: AvailabilityStatus::Supported,
                message: format!("Connect cross-border payouts is available in {country}"),
                details: Some(
                    "You can make cross-border payouts to connected accounts in US, UK, EEA, Canada, and Switzerland."
                        .to_string(),
                ),
            }
        } else {
            AvailabilityResult {
                status: AvailabilityStatus::Unsupported,
                message: format!("Connect cross-border payouts is not available in {country}"),
                details: Some(
                    "Cross-border payouts are currently supported for platforms in US, UK, EEA, Canada, and Switzerland only."
                        .to_string(),
                ),
            }
        }
    }
}
