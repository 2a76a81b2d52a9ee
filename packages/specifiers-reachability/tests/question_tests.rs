//! Question construction and JSON binding

mod common;

use common::*;
use pretty_assertions::assert_eq;

use specifiers_reachability::shared::models::IntegerSpace;
use specifiers_reachability::{
    config::DEFAULT_MAX_TRACES, DispositionSpecifier, PacketHeaderConstraints,
    PathConstraintsInput, Question, QuestionOptions, ReachabilityConfig, ReachabilityError,
    SpecifiersReachabilityQuestion,
};

#[test]
fn test_options_read_back() {
    let headers = PacketHeaderConstraints {
        dst_ips: Some("1.1.1.1".to_string()),
        ..Default::default()
    };
    let path = PathConstraintsInput::unconstrained()
        .start_location("r1")
        .end_location("r2")
        .forbidden_locations("r3");

    let question = QuestionBuilder::new()
        .actions("failure")
        .headers(headers.clone())
        .ignore_filters(true)
        .max_traces(9)
        .path(path.clone())
        .build();

    assert_eq!(question.actions(), &DispositionSpecifier::failure());
    assert_eq!(question.headers(), &headers);
    assert!(question.ignore_filters());
    assert_eq!(question.max_traces(), 9);
    assert_eq!(question.path_constraints(), &path);
}

#[test]
fn test_empty_options_give_defaults() {
    let question = SpecifiersReachabilityQuestion::new(QuestionOptions::default());
    assert_eq!(question.actions(), &DispositionSpecifier::success());
    assert_eq!(question.max_traces(), DEFAULT_MAX_TRACES);
    assert_eq!(question.path_constraints().start_location, "all");
    assert_eq!(question.path_constraints().transit_locations, None);
}

#[test]
fn test_config_default_max_traces() {
    let config = ReachabilityConfig::default().default_max_traces(100);
    let question = SpecifiersReachabilityQuestion::with_config(QuestionOptions::default(), &config);
    assert_eq!(question.max_traces(), 100);
}

#[test]
fn test_empty_json_is_default_question() {
    let question = SpecifiersReachabilityQuestion::from_json("{}").unwrap();
    assert_eq!(question, SpecifiersReachabilityQuestion::default());
}

#[test]
fn test_json_round_trip() {
    let question = SpecifiersReachabilityQuestion::from_json(fixture_full_question_json()).unwrap();
    let json = question.to_json().unwrap();
    let again = SpecifiersReachabilityQuestion::from_json(&json).unwrap();
    assert_eq!(again, question);
}

#[test]
fn test_constrained_to_nothing_round_trips() {
    let headers = PacketHeaderConstraints {
        src_ports: Some(IntegerSpace::from_ranges([])),
        ip_protocols: Some(Vec::new()),
        ..Default::default()
    };
    let question = QuestionBuilder::new().headers(headers).build();
    let json = question.to_json().unwrap();
    assert_eq!(SpecifiersReachabilityQuestion::from_json(&json).unwrap(), question);
}

#[test]
fn test_json_errors() {
    let err = SpecifiersReachabilityQuestion::from_json(r#"{"maxTraces": "many"}"#).unwrap_err();
    assert!(matches!(err, ReachabilityError::Json(_)));

    let err = SpecifiersReachabilityQuestion::from_json(r#"{"colour": "red"}"#).unwrap_err();
    assert!(matches!(err, ReachabilityError::Json(_)));
}

#[test]
fn test_question_metadata() {
    let question = QuestionBuilder::new().build();
    assert_eq!(question.name(), "specifiersReachability");
    assert!(question.requires_data_plane());
}

#[test]
fn test_builder_options_match_question() {
    let builder = QuestionBuilder::new().max_traces(3);
    let options = builder.options();
    assert_eq!(options.max_traces, Some(3));
    assert_eq!(SpecifiersReachabilityQuestion::from(options), builder.build());
}
