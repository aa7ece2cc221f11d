//! Integration recommendation and geographic feasibility checks.
//!
//! The rule engine maps the yes/no answers to one recommendation; coverage
//! and availability then annotate it using the recommended integration
//! family and the location answers. Everything here is a pure function of
//! the answers and the injected [`ReferenceTables`].

mod availability;
mod coverage;
pub mod domain;
mod geo;
pub mod questionnaire;
pub mod reference;
pub mod rules;

#[cfg(test)]
mod tests;

pub use availability::MarketAvailabilityResolver;
pub use coverage::CoverageClassifier;
pub use domain::{
    AnswerSet, AvailabilityResult, AvailabilityStatus, CoverageResult, CoverageStatus, FundsFlow,
    IntegrationFamily, Recommendation, RuleId, ScheduledDestination, OTHER_SENTINEL,
};
pub use geo::GeoResolver;
pub use questionnaire::{questionnaire, Answer, AnswerConflict, Question, QuestionId, QuestionKind};
pub use reference::{LaunchDate, ReferenceImportError, ReferenceTables, RegionAlias};
pub use rules::{Rule, RuleEngine};

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Full result for one answer set: the recommendation plus its feasibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub recommendation: Recommendation,
    pub market_availability: AvailabilityResult,
    pub coverage: CoverageResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<AnswerConflict>,
    pub reference_version: String,
}

/// Owns a reference snapshot and the rule engine that reads it.
#[derive(Debug, Clone)]
pub struct Advisor {
    tables: ReferenceTables,
    engine: RuleEngine,
}

impl Advisor {
    pub fn new(tables: ReferenceTables) -> Self {
        Self {
            tables,
            engine: RuleEngine::standard(),
        }
    }

    pub fn standard() -> Self {
        Self::new(ReferenceTables::standard())
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    pub fn recommend(&self, answers: &AnswerSet) -> Recommendation {
        self.engine.evaluate(answers)
    }

    pub fn expand<I, S>(&self, destinations: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        GeoResolver::new(&self.tables).expand(destinations)
    }

    pub fn classify<S: AsRef<str>>(
        &self,
        integration: IntegrationFamily,
        source: Option<&str>,
        destinations: Option<&[S]>,
    ) -> CoverageResult {
        CoverageClassifier::new(&self.tables).classify(integration, source, destinations)
    }

    pub fn availability(
        &self,
        integration: IntegrationFamily,
        source: Option<&str>,
    ) -> AvailabilityResult {
        MarketAvailabilityResolver::new(&self.tables).availability(integration, source)
    }

    pub fn questionnaire(&self) -> Vec<Question> {
        questionnaire(&self.tables)
    }

    pub fn assess(&self, answers: &AnswerSet) -> Assessment {
        let recommendation = self.recommend(answers);
        let integration = recommendation.integration;
        let source = answers.source_location.as_deref();

        let market_availability = self.availability(integration, source);
        let coverage = self.classify(integration, source, answers.destinations.as_deref());
        let conflict = answers.conflict();

        debug!(
            rule = ?recommendation.rule,
            integration = integration.slug(),
            availability = market_availability.status.label(),
            coverage = coverage.status.label(),
            conflict = conflict.is_some(),
            "assessment complete"
        );

        Assessment {
            recommendation,
            market_availability,
            coverage,
            conflict,
            reference_version: self.tables.version().to_string(),
        }
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::standard()
    }
}
