use super::domain::{
    resolved_source, CoverageResult, CoverageStatus, IntegrationFamily, ScheduledDestination,
    OTHER_SENTINEL,
};
use super::geo::GeoResolver;
use super::reference::{LaunchDate, ReferenceTables};
use std::cmp::Ordering;

/// Where a single destination lands for a given integration family.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Placement<'t> {
    Supported,
    Scheduled(Option<&'t LaunchDate>),
    Unsupported,
}

/// Partitions expanded destinations into supported / scheduled / unsupported.
#[derive(Debug, Clone, Copy)]
pub struct CoverageClassifier<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> CoverageClassifier<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn classify<S: AsRef<str>>(
        &self,
        integration: IntegrationFamily,
        source: Option<&str>,
        destinations: Option<&[S]>,
    ) -> CoverageResult {
        let (source, destinations) = match (resolved_source(source), destinations) {
            (Some(source), Some(destinations)) if !destinations.is_empty() => {
                (source, destinations)
            }
            _ => return undetermined(),
        };

        let expanded = GeoResolver::new(self.tables).expand(destinations);
        let can_send = self.can_send_from(integration, source);

        let mut supported = Vec::new();
        let mut scheduled: Vec<(Option<&LaunchDate>, String)> = Vec::new();
        let mut unsupported = Vec::new();

        for country in expanded {
            if country == OTHER_SENTINEL {
                continue;
            }
            match self.place(integration, can_send, &country) {
                Placement::Supported => supported.push(country),
                Placement::Scheduled(date) => scheduled.push((date, country)),
                Placement::Unsupported => unsupported.push(country),
            }
        }

        scheduled.sort_by(|(left_date, left), (right_date, right)| {
            launch_order(*left_date, *right_date).then_with(|| left.cmp(right))
        });
        let scheduled = scheduled
            .into_iter()
            .map(|(date, country)| ScheduledDestination {
                country,
                date: date.map(|date| date.label.clone()),
            })
            .collect::<Vec<_>>();

        let mut result = CoverageResult {
            status: CoverageStatus::Unknown,
            message: String::new(),
            supported,
            scheduled,
            unsupported,
            details: None,
        };

        if can_send {
            summarise(&mut result, source);
        } else {
            sender_blocked(&mut result, integration, source);
        }
        result
    }

    fn can_send_from(&self, integration: IntegrationFamily, source: &str) -> bool {
        match integration {
            IntegrationFamily::GlobalPayouts => {
                self.tables.global_payouts().senders.contains(source)
            }
            IntegrationFamily::Connect => self.tables.connect().supported.contains(source),
        }
    }

    /// Supported beats scheduled beats unsupported. A blocked sender can never
    /// produce a supported placement.
    fn place(&self, integration: IntegrationFamily, can_send: bool, country: &str) -> Placement<'a> {
        match integration {
            IntegrationFamily::GlobalPayouts => {
                let tables = self.tables.global_payouts();
                if can_send && tables.recipients.contains(country) {
                    Placement::Supported
                } else if let Some(date) = tables.roadmap.get(country) {
                    Placement::Scheduled(Some(date))
                } else {
                    Placement::Unsupported
                }
            }
            IntegrationFamily::Connect => {
                let tables = self.tables.connect();
                if can_send && tables.supported.contains(country) {
                    Placement::Supported
                } else if tables.roadmap.contains(country) {
                    Placement::Scheduled(None)
                } else {
                    Placement::Unsupported
                }
            }
        }
    }
}

/// Dated launches first, in window order; undated ("Coming Soon") last.
fn launch_order(left: Option<&LaunchDate>, right: Option<&LaunchDate>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.cmp(right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn undetermined() -> CoverageResult {
    CoverageResult {
        status: CoverageStatus::Unknown,
        message: "Fund flow support cannot be determined".to_string(),
        supported: Vec::new(),
        scheduled: Vec::new(),
        unsupported: Vec::new(),
        details: Some(
            "Please select both a source location and at least one destination to check fund flow support."
                .to_string(),
        ),
    }
}

fn sender_blocked(result: &mut CoverageResult, integration: IntegrationFamily, source: &str) {
    result.status = CoverageStatus::NotSupported;
    match integration {
        IntegrationFamily::GlobalPayouts => {
            result.message = format!("Cannot send Global Payouts from {source}");
            result.details = Some(format!(
                "Global Payouts can only be sent from US or UK. {source} is not a supported sender country."
            ));
        }
        IntegrationFamily::Connect => {
            result.message = format!("Cannot send Connect payouts from {source}");
            result.details = Some(
                "Connect cross-border payouts require the platform to be in US, UK, EEA, Canada, or Switzerland."
                    .to_string(),
            );
        }
    }
}

fn summarise(result: &mut CoverageResult, source: &str) {
    let supported = result.supported.len();
    let scheduled = result.scheduled.len();
    let unsupported = result.unsupported.len();

    if unsupported == 0 && scheduled == 0 {
        result.status = CoverageStatus::FullySupported;
        result.message = format!("All {supported} destination(s) are supported");
        result.details = Some(format!(
            "Fund flows from {source} to all selected destinations are supported."
        ));
    } else if supported == 0 && scheduled == 0 {
        result.status = CoverageStatus::NotSupported;
        result.message = "No selected destinations are supported".to_string();
        result.details = Some(format!(
            "None of the selected destinations can receive payouts from {source} with this integration."
        ));
    } else {
        result.status = CoverageStatus::PartiallySupported;
        result.message = format!(
            "{supported} of {} destination(s) supported",
            result.total()
        );
        result.details = Some(if scheduled > 0 {
            format!(
                "Some destinations are coming soon, and some are not yet supported for payouts from {source}."
            )
        } else {
            format!("Some destinations are not supported for payouts from {source}.")
        });
    }
}
