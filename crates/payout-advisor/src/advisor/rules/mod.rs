//! First-match rule evaluation over the five yes/no answers.
//!
//! Rules are checked top to bottom and the first matching predicate wins, so
//! the narrow guards (rules 1-4) must stay ahead of the broad ones (rules 5-6).
//! Anything that matches nothing lands on the terminal fallback.

mod catalog;

use super::domain::{AnswerSet, Recommendation, RuleId};

type Predicate = fn(&AnswerSet) -> bool;
type Builder = fn(&AnswerSet) -> Recommendation;

/// A single `(predicate, variant)` pair.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    matches: Predicate,
    recommend: Builder,
}

impl Rule {
    pub fn new(id: RuleId, matches: Predicate, recommend: Builder) -> Self {
        Self {
            id,
            matches,
            recommend,
        }
    }

    pub fn matches(&self, answers: &AnswerSet) -> bool {
        (self.matches)(answers)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("id", &self.id).finish()
    }
}

/// Ordered rule list with a mandatory catch-all.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<Rule>,
    fallback: Rule,
}

impl RuleEngine {
    pub fn new(rules: Vec<Rule>, fallback: Builder) -> Self {
        Self {
            rules,
            fallback: Rule::new(RuleId::Fallback, |_| true, fallback),
        }
    }

    pub fn standard() -> Self {
        Self::new(standard_rules(), catalog::fallback)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the first matching rule, or the fallback when none match.
    pub fn matching_rule(&self, answers: &AnswerSet) -> &Rule {
        self.rules
            .iter()
            .find(|rule| rule.matches(answers))
            .unwrap_or(&self.fallback)
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> Recommendation {
        let rule = self.matching_rule(answers);
        (rule.recommend)(answers)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard()
    }
}

fn yes(answer: Option<bool>) -> bool {
    answer == Some(true)
}

fn no(answer: Option<bool>) -> bool {
    answer == Some(false)
}

fn standard_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            RuleId::DirectInternationalFast,
            |a| {
                yes(a.own_funds)
                    && yes(a.international_payouts)
                    && no(a.stay_out_of_funds_flow)
                    && yes(a.fast_integration)
                    && yes(a.merchant_of_record)
            },
            catalog::direct_international_fast,
        ),
        Rule::new(
            RuleId::DirectDomesticFast,
            |a| {
                yes(a.own_funds)
                    && no(a.international_payouts)
                    && no(a.stay_out_of_funds_flow)
                    && yes(a.fast_integration)
            },
            catalog::direct_domestic_fast,
        ),
        Rule::new(
            RuleId::PlatformMerchantOfRecord,
            |a| no(a.own_funds) && yes(a.stay_out_of_funds_flow) && yes(a.merchant_of_record),
            catalog::platform_merchant_of_record,
        ),
        Rule::new(
            RuleId::ConnectedMerchantOfRecord,
            |a| no(a.own_funds) && yes(a.stay_out_of_funds_flow) && no(a.merchant_of_record),
            catalog::connected_merchant_of_record,
        ),
        Rule::new(
            RuleId::GeneralGlobalPayouts,
            |a| yes(a.own_funds) && no(a.stay_out_of_funds_flow),
            catalog::general_global_payouts,
        ),
        Rule::new(
            RuleId::GeneralConnect,
            |a| no(a.own_funds),
            catalog::general_connect,
        ),
    ]
}
