use super::common::*;
use crate::advisor::{
    Answer, AnswerSet, CoverageStatus, IntegrationFamily, QuestionId, QuestionKind, OTHER_SENTINEL,
};

#[test]
fn catalog_lists_seven_questions_in_order() {
    let questions = advisor().questionnaire();

    let ids: Vec<QuestionId> = questions.iter().map(|question| question.id).collect();
    assert_eq!(ids, QuestionId::ALL.to_vec());
    assert!(questions[..5]
        .iter()
        .all(|question| question.kind == QuestionKind::YesNo));
    assert_eq!(questions[0].prompt, "Are you paying your own funds?");
}

#[test]
fn source_options_end_with_sentinel() {
    let questions = advisor().questionnaire();

    match &questions[5].kind {
        QuestionKind::Dropdown { options } => {
            assert_eq!(options.first().map(String::as_str), Some("United States"));
            assert_eq!(options.last().map(String::as_str), Some(OTHER_SENTINEL));
            assert_eq!(
                options.iter().filter(|option| *option == OTHER_SENTINEL).count(),
                1
            );
        }
        other => panic!("expected dropdown, got {other:?}"),
    }
}

#[test]
fn destination_options_put_regions_first() {
    let advisor = advisor();
    let questions = advisor.questionnaire();

    match &questions[6].kind {
        QuestionKind::Multiselect { options } => {
            let region_count = advisor.tables().regions().len();
            let regions: Vec<&str> = options[..region_count]
                .iter()
                .map(String::as_str)
                .collect();
            assert_eq!(regions, vec!["EMEA", "APAC", "North America", "LATAM", "Africa"]);

            let countries = &options[region_count..options.len() - 1];
            let mut sorted = countries.to_vec();
            sorted.sort();
            assert_eq!(countries, sorted.as_slice());
            assert!(countries.iter().any(|country| country == "Gibraltar"));
            assert_eq!(options.last().map(String::as_str), Some(OTHER_SENTINEL));
        }
        other => panic!("expected multiselect, got {other:?}"),
    }
}

#[test]
fn destinations_outside_every_table_are_offered_and_unsupported() {
    let advisor = advisor();
    let questions = advisor.questionnaire();

    let QuestionKind::Multiselect { options } = &questions[6].kind else {
        panic!("expected multiselect");
    };
    assert_eq!(options.len(), 217);
    for country in ["Afghanistan", "Bangladesh", "Georgia", "Iran", "Aruba", "Kosovo"] {
        assert!(
            options.iter().any(|option| option == country),
            "{country} missing from destination options"
        );
    }

    let coverage = advisor.classify(
        IntegrationFamily::GlobalPayouts,
        Some("United States"),
        Some(&["Afghanistan"][..]),
    );
    assert_eq!(coverage.status, CoverageStatus::NotSupported);
    assert_eq!(coverage.unsupported, vec!["Afghanistan"]);
}

#[test]
fn own_funds_yes_forces_stay_out_to_no() {
    let mut answers = AnswerSet::default();

    answers.record(Answer::OwnFunds(true)).expect("no conflict");

    assert_eq!(answers.own_funds, Some(true));
    assert_eq!(answers.stay_out_of_funds_flow, Some(false));
}

#[test]
fn stay_out_yes_forces_own_funds_to_no() {
    let mut answers = AnswerSet::default();

    answers
        .record(Answer::StayOutOfFundsFlow(true))
        .expect("no conflict");

    assert_eq!(answers.stay_out_of_funds_flow, Some(true));
    assert_eq!(answers.own_funds, Some(false));
}

#[test]
fn conflicting_yes_is_rejected_without_changes() {
    let mut answers = AnswerSet::default();
    answers
        .record(Answer::StayOutOfFundsFlow(true))
        .expect("first answer");
    answers.record(Answer::OwnFunds(false)).expect("explicit no");
    let before = answers.clone();

    // Recording stay-out again is fine; flipping own funds to yes is not.
    answers
        .record(Answer::StayOutOfFundsFlow(true))
        .expect("idempotent");
    let mut forced = before.clone();
    forced.own_funds = Some(true);
    let err = forced
        .record(Answer::StayOutOfFundsFlow(true))
        .expect_err("conflict");
    assert_eq!(err.attempted, QuestionId::StayOutOfFundsFlow);
    assert_eq!(err.existing, QuestionId::OwnFunds);
    assert_eq!(forced.stay_out_of_funds_flow, Some(true));
    assert_eq!(forced.own_funds, Some(true));

    let err = answers.record(Answer::OwnFunds(true)).expect_err("conflict");
    assert_eq!(err.attempted, QuestionId::OwnFunds);
    assert_eq!(answers, before);
}

#[test]
fn no_answers_never_conflict() {
    let mut answers = AnswerSet::default();
    answers.record(Answer::OwnFunds(false)).expect("no");
    answers.record(Answer::StayOutOfFundsFlow(false)).expect("no");

    assert_eq!(answers.own_funds, Some(false));
    assert_eq!(answers.stay_out_of_funds_flow, Some(false));
    assert!(answers.conflict().is_none());
}

#[test]
fn completeness_requires_locations_and_destinations() {
    let mut answers = answers([true, true, false, true, true]);
    assert!(!answers.is_complete());

    answers
        .record(Answer::SourceLocation("United States".to_string()))
        .expect("location");
    assert!(!answers.is_complete());

    answers
        .record(Answer::Destinations(Vec::new()))
        .expect("destinations");
    assert!(!answers.is_complete(), "empty destination list is incomplete");

    answers
        .record(Answer::Destinations(vec!["EMEA".to_string()]))
        .expect("destinations");
    assert!(answers.is_complete());
}

#[test]
fn answers_deserialize_from_question_payloads() {
    let answer: Answer =
        serde_json::from_str(r#"{"question":"destinations","value":["EMEA","Japan"]}"#)
            .expect("valid payload");
    assert_eq!(
        answer,
        Answer::Destinations(vec!["EMEA".to_string(), "Japan".to_string()])
    );

    let answer: Answer = serde_json::from_str(r#"{"question":"own_funds","value":true}"#)
        .expect("valid payload");
    assert_eq!(answer, Answer::OwnFunds(true));
}
