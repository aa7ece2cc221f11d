use crate::cli::TablesArgs;
use crate::infra::{load_advisor, parse_answer, parse_integration};
use clap::{ArgAction, Args};
use payout_advisor::advisor::{
    AnswerSet, Assessment, AvailabilityResult, CoverageResult, IntegrationFamily, RegionAlias,
};
use payout_advisor::error::AppError;
use serde::Serialize;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Will payouts come out of your own funds? (yes/no)
    #[arg(long, action = ArgAction::Set, value_parser = parse_answer)]
    pub(crate) own_funds: bool,
    /// Do you need to pay out to recipients in other countries? (yes/no)
    #[arg(long, action = ArgAction::Set, value_parser = parse_answer)]
    pub(crate) international: bool,
    /// Do you want to stay out of the flow of funds? (yes/no)
    #[arg(long, action = ArgAction::Set, value_parser = parse_answer)]
    pub(crate) stay_out_of_flow: bool,
    /// Is speed of integration the priority? (yes/no)
    #[arg(long, action = ArgAction::Set, value_parser = parse_answer)]
    pub(crate) fast_integration: bool,
    /// Will your platform be the merchant of record? (yes/no)
    #[arg(long, action = ArgAction::Set, value_parser = parse_answer)]
    pub(crate) merchant_of_record: bool,
    /// Country the money is sent from
    #[arg(long)]
    pub(crate) source: Option<String>,
    /// Destination country or region alias; repeat for several
    #[arg(long = "destination")]
    pub(crate) destinations: Vec<String>,
    /// Print the assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) tables: TablesArgs,
}

#[derive(Args, Debug)]
pub(crate) struct CoverageArgs {
    /// Integration family: global-payouts or connect
    #[arg(long, value_parser = parse_integration)]
    pub(crate) integration: IntegrationFamily,
    /// Country the money is sent from
    #[arg(long)]
    pub(crate) source: String,
    /// Destination country or region alias; repeat for several
    #[arg(long = "destination")]
    pub(crate) destinations: Vec<String>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) tables: TablesArgs,
}

#[derive(Debug, Serialize)]
struct CoverageReport {
    integration: IntegrationFamily,
    market_availability: AvailabilityResult,
    coverage: CoverageResult,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        own_funds,
        international,
        stay_out_of_flow,
        fast_integration,
        merchant_of_record,
        source,
        destinations,
        json,
        tables,
    } = args;

    let advisor = load_advisor(tables.reference_tables)?;
    let mut answers = AnswerSet::from_flags(
        own_funds,
        international,
        stay_out_of_flow,
        fast_integration,
        merchant_of_record,
    );
    answers.source_location = source;
    if !destinations.is_empty() {
        answers.destinations = Some(destinations);
    }

    let assessment = advisor.assess(&answers);
    if json {
        print_json(&assessment)?;
    } else {
        print!("{}", render_assessment(&assessment));
    }
    Ok(())
}

pub(crate) fn run_coverage(args: CoverageArgs) -> Result<(), AppError> {
    let CoverageArgs {
        integration,
        source,
        destinations,
        json,
        tables,
    } = args;

    let advisor = load_advisor(tables.reference_tables)?;
    let report = CoverageReport {
        integration,
        market_availability: advisor.availability(integration, Some(source.as_str())),
        coverage: advisor.classify(
            integration,
            Some(source.as_str()),
            Some(destinations.as_slice()),
        ),
    };

    if json {
        print_json(&report)?;
    } else {
        println!("{} from {}", integration.label(), source);
        print!("{}", render_availability(&report.market_availability));
        print!("{}", render_coverage(&report.coverage));
    }
    Ok(())
}

pub(crate) fn run_regions(args: TablesArgs) -> Result<(), AppError> {
    let advisor = load_advisor(args.reference_tables)?;
    print!("{}", render_regions(advisor.tables().regions()));
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn render_assessment(assessment: &Assessment) -> String {
    let recommendation = &assessment.recommendation;
    let mut lines = vec![format!("Recommended: {}", recommendation.title)];

    let flow = recommendation
        .flow
        .map(|flow| format!(" (flow {})", flow.code()))
        .unwrap_or_default();
    lines.push(format!(
        "Integration: {}{}",
        recommendation.integration.label(),
        flow
    ));
    lines.push(recommendation.description.clone());

    if let Some(conflict) = &assessment.conflict {
        lines.push(format!("Warning: {conflict}"));
    }

    lines.push("Benefits:".to_string());
    lines.extend(recommendation.benefits.iter().map(|item| format!("  - {item}")));
    lines.push("Use cases:".to_string());
    lines.extend(recommendation.use_cases.iter().map(|item| format!("  - {item}")));

    if let Some(note) = &recommendation.implementation_note {
        lines.push(format!("Implementation note: {note}"));
    }
    if let Some(link) = &recommendation.docs_link {
        lines.push(format!("Docs: {link}"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out.push_str(&render_availability(&assessment.market_availability));
    out.push_str(&render_coverage(&assessment.coverage));
    out.push_str(&format!(
        "Reference tables: {}\n",
        assessment.reference_version
    ));
    out
}

pub(crate) fn render_availability(result: &AvailabilityResult) -> String {
    let mut out = format!(
        "Market availability ({}): {}\n",
        result.status.label(),
        result.message
    );
    if let Some(details) = &result.details {
        out.push_str(&format!("  {details}\n"));
    }
    out
}

pub(crate) fn render_coverage(result: &CoverageResult) -> String {
    let mut out = format!(
        "Destination coverage ({}): {}\n",
        result.status.label(),
        result.message
    );
    if let Some(details) = &result.details {
        out.push_str(&format!("  {details}\n"));
    }
    if !result.supported.is_empty() {
        out.push_str(&format!("  Supported: {}\n", result.supported.join(", ")));
    }
    if !result.scheduled.is_empty() {
        let scheduled = result
            .scheduled
            .iter()
            .map(|entry| format!("{} ({})", entry.country, entry.label()))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("  Scheduled: {scheduled}\n"));
    }
    if !result.unsupported.is_empty() {
        out.push_str(&format!(
            "  Not supported: {}\n",
            result.unsupported.join(", ")
        ));
    }
    out
}

pub(crate) fn render_regions(regions: &[RegionAlias]) -> String {
    regions
        .iter()
        .map(|region| {
            format!(
                "{} ({}): {}\n",
                region.name,
                region.countries.len(),
                region.countries.join(", ")
            )
        })
        .collect()
}
