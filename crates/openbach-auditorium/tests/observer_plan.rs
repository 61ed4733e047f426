//! Functional tests for the observer: the last stop before the controller.

use openbach_auditorium::{ObserverError, ScenarioObserver};
use openbach_scenario::Scenario;
use openbach_test_utils as fixtures;

/// Tenet: a valid scenario ends up on disk as a decodable document, and
/// the report reflects what was written.
#[test]
fn valid_scenarios_are_written_to_the_target_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ping_check.json");

    let scenario = fixtures::ping_scenario();
    let report = ScenarioObserver::new()
        .with_output_file(&path)
        .pretty(true)
        .launch(&scenario)
        .unwrap();
    assert_eq!(report.function_count, 2);

    let written = std::fs::read_to_string(&path).unwrap();
    let decoded = Scenario::from_json(&written).unwrap();
    assert_eq!(decoded.name(), "ping_check");
    assert_eq!(decoded.function_count(), 2);
}

/// Tenet: an invalid document never reaches the target; the observer
/// fails before writing anything.
#[test]
fn invalid_scenarios_are_refused_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never_written.json");

    let scenario = Scenario::from_json(fixtures::document_with_cycle()).unwrap();
    let error = ScenarioObserver::new()
        .with_output_file(&path)
        .launch(&scenario)
        .unwrap_err();
    assert!(matches!(error, ObserverError::Invalid(_)));
    assert!(!path.exists());
}
