use super::domain::{AnswerSet, OTHER_SENTINEL};
use super::reference::ReferenceTables;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    OwnFunds,
    InternationalPayouts,
    StayOutOfFundsFlow,
    FastIntegration,
    MerchantOfRecord,
    SourceLocation,
    Destinations,
}

impl QuestionId {
    pub const ALL: [QuestionId; 7] = [
        QuestionId::OwnFunds,
        QuestionId::InternationalPayouts,
        QuestionId::StayOutOfFundsFlow,
        QuestionId::FastIntegration,
        QuestionId::MerchantOfRecord,
        QuestionId::SourceLocation,
        QuestionId::Destinations,
    ];

    pub fn prompt(&self) -> &'static str {
        match self {
            QuestionId::OwnFunds => "Are you paying your own funds?",
            QuestionId::InternationalPayouts => "Do you need international payouts?",
            QuestionId::StayOutOfFundsFlow => "Do you need to stay out of the flow of funds?",
            QuestionId::FastIntegration => "Do you need a fast integration?",
            QuestionId::MerchantOfRecord => "Are you the Merchant of Record?",
            QuestionId::SourceLocation => "Where is your merchant / user located?",
            QuestionId::Destinations => {
                "Select the primary location(s) of the users your merchant/user will be paying out to"
            }
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuestionId::OwnFunds => {
                "This determines whether you are using your own funds to do the payout (alternatively you might have licensing (MTL) or exemptions to required licensing)."
            }
            QuestionId::InternationalPayouts => {
                "Support for paying out to recipients in multiple countries."
            }
            QuestionId::StayOutOfFundsFlow => {
                "You want funds to flow directly between your platform and your users."
            }
            QuestionId::FastIntegration => "Quick time-to-market is critical for your use case.",
            QuestionId::MerchantOfRecord => {
                "Your company name will appear on the card statement / payment. You are responsible for collecting payment and managing the customer relationship."
            }
            QuestionId::SourceLocation => {
                "Select the primary location of your merchant or user (the source of the payout)."
            }
            QuestionId::Destinations => {
                "Choose all regions or countries where recipients are located. You can select multiple options."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    YesNo,
    Dropdown { options: Vec<String> },
    Multiselect { options: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub description: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// The seven questions in display order, with options drawn from `tables`.
pub fn questionnaire(tables: &ReferenceTables) -> Vec<Question> {
    QuestionId::ALL
        .into_iter()
        .map(|id| Question {
            id,
            prompt: id.prompt(),
            description: id.description(),
            kind: match id {
                QuestionId::SourceLocation => QuestionKind::Dropdown {
                    options: source_options(tables),
                },
                QuestionId::Destinations => QuestionKind::Multiselect {
                    options: destination_options(tables),
                },
                _ => QuestionKind::YesNo,
            },
        })
        .collect()
}

fn source_options(tables: &ReferenceTables) -> Vec<String> {
    let mut options: Vec<String> = tables
        .source_locations()
        .iter()
        .filter(|location| location.as_str() != OTHER_SENTINEL)
        .cloned()
        .collect();
    options.push(OTHER_SENTINEL.to_string());
    options
}

/// Region aliases first, then every selectable or tabled country in sorted order, then the sentinel.
fn destination_options(tables: &ReferenceTables) -> Vec<String> {
    let mut options: Vec<String> = tables
        .regions()
        .iter()
        .map(|region| region.name.clone())
        .collect();
    options.extend(
        tables
            .known_countries()
            .into_iter()
            .filter(|country| *country != OTHER_SENTINEL && !tables.is_region(country))
            .map(str::to_string),
    );
    options.push(OTHER_SENTINEL.to_string());
    options
}

/// A single answer as submitted from the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "question", content = "value", rename_all = "snake_case")]
pub enum Answer {
    OwnFunds(bool),
    InternationalPayouts(bool),
    StayOutOfFundsFlow(bool),
    FastIntegration(bool),
    MerchantOfRecord(bool),
    SourceLocation(String),
    Destinations(Vec<String>),
}

/// Paying out of your own funds and staying out of the funds flow are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("answering yes to {attempted:?} conflicts with the existing yes to {existing:?}")]
pub struct AnswerConflict {
    pub attempted: QuestionId,
    pub existing: QuestionId,
}

impl AnswerSet {
    /// Applies one answer. A conflicting yes is rejected and leaves the set untouched.
    pub fn record(&mut self, answer: Answer) -> Result<(), AnswerConflict> {
        match answer {
            Answer::OwnFunds(value) => {
                if value && self.stay_out_of_funds_flow == Some(true) {
                    return Err(AnswerConflict {
                        attempted: QuestionId::OwnFunds,
                        existing: QuestionId::StayOutOfFundsFlow,
                    });
                }
                self.own_funds = Some(value);
                if value {
                    self.stay_out_of_funds_flow = Some(false);
                }
            }
            Answer::StayOutOfFundsFlow(value) => {
                if value && self.own_funds == Some(true) {
                    return Err(AnswerConflict {
                        attempted: QuestionId::StayOutOfFundsFlow,
                        existing: QuestionId::OwnFunds,
                    });
                }
                self.stay_out_of_funds_flow = Some(value);
                if value {
                    self.own_funds = Some(false);
                }
            }
            Answer::InternationalPayouts(value) => self.international_payouts = Some(value),
            Answer::FastIntegration(value) => self.fast_integration = Some(value),
            Answer::MerchantOfRecord(value) => self.merchant_of_record = Some(value),
            Answer::SourceLocation(location) => self.source_location = Some(location),
            Answer::Destinations(destinations) => self.destinations = Some(destinations),
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.own_funds.is_some()
            && self.international_payouts.is_some()
            && self.stay_out_of_funds_flow.is_some()
            && self.fast_integration.is_some()
            && self.merchant_of_record.is_some()
            && self.source_location.is_some()
            && self
                .destinations
                .as_ref()
                .is_some_and(|destinations| !destinations.is_empty())
    }

    /// Reports the own-funds / stay-out contradiction when it slipped past `record`.
    pub fn conflict(&self) -> Option<AnswerConflict> {
        (self.own_funds == Some(true) && self.stay_out_of_funds_flow == Some(true)).then_some(
            AnswerConflict {
                attempted: QuestionId::StayOutOfFundsFlow,
                existing: QuestionId::OwnFunds,
            },
        )
    }
}
