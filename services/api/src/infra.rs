use metrics_exporter_prometheus::PrometheusHandle;
use payout_advisor::advisor::{Advisor, IntegrationFamily, ReferenceTables};
use payout_advisor::config::AppConfig;
use payout_advisor::error::AppError;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds an advisor for one-shot CLI commands. An explicit path beats `APP_REFERENCE_TABLES`.
pub(crate) fn load_advisor(reference_tables: Option<PathBuf>) -> Result<Advisor, AppError> {
    let path = match reference_tables {
        Some(path) => Some(path),
        None => AppConfig::load()?.advisor.reference_tables,
    };
    let tables = ReferenceTables::load(path.as_deref())?;
    Ok(Advisor::new(tables))
}

pub(crate) fn parse_answer(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        _ => Err(format!("expected yes/no, got '{raw}'")),
    }
}

pub(crate) fn parse_integration(raw: &str) -> Result<IntegrationFamily, String> {
    IntegrationFamily::parse(raw)
        .ok_or_else(|| format!("expected 'global-payouts' or 'connect', got '{raw}'"))
}
