//! Functional tests for the opt-in validation pass.
//!
//! The construction API cannot express a malformed graph, so these tests
//! feed the pass what it actually exists for: decoded documents whose wait
//! sets were written by hand (or by a buggy frontend), plus nested
//! scenarios built through shared handles.

use openbach_graph::{validate, DependencyGraph, GraphError};
use openbach_scenario::Scenario;
use openbach_test_utils as fixtures;

/// Tenet: everything the builder can produce passes validation.
#[test]
fn builder_output_is_always_valid() {
    for scenario in [fixtures::ping_scenario(), fixtures::rate_scenario()] {
        let report = validate(&scenario).unwrap();
        assert_eq!(report.function_count, scenario.function_count());
        assert_eq!(report.execution_order.len(), scenario.function_count());
    }
}

/// Tenet: a wait reference to an undeclared identifier is rejected with
/// both ends of the broken edge named.
#[test]
fn dangling_references_are_rejected() {
    let scenario = Scenario::from_json(fixtures::document_with_dangling_wait()).unwrap();
    match validate(&scenario).unwrap_err() {
        GraphError::DanglingReference { from, to } => {
            assert_eq!(from.as_u32(), 1);
            assert_eq!(to.as_u32(), 7);
        }
        other => panic!("expected dangling reference, got {other:?}"),
    }
}

/// Tenet: mutually waiting nodes cannot be scheduled and are rejected.
#[test]
fn cycles_are_rejected() {
    let scenario = Scenario::from_json(fixtures::document_with_cycle()).unwrap();
    assert!(matches!(
        validate(&scenario).unwrap_err(),
        GraphError::CycleDetected(_)
    ));
}

/// Tenet: identifier reuse breaks the stable-identity invariant and is
/// rejected before any edge is considered.
#[test]
fn duplicate_identifiers_are_rejected() {
    let scenario = Scenario::from_json(fixtures::document_with_duplicate_ids()).unwrap();
    match validate(&scenario).unwrap_err() {
        GraphError::DuplicateId(id) => assert_eq!(id.as_u32(), 3),
        other => panic!("expected duplicate id, got {other:?}"),
    }
}

/// Tenet: a node waiting on itself is a self-loop, reported as such rather
/// than as a generic cycle.
#[test]
fn self_waits_are_rejected() {
    let scenario = Scenario::from_json(fixtures::document_with_self_wait()).unwrap();
    match validate(&scenario).unwrap_err() {
        GraphError::SelfWait(id) => assert_eq!(id.as_u32(), 0),
        other => panic!("expected self wait, got {other:?}"),
    }
}

/// Tenet: the schedule honors every wait edge: each node appears after
/// all of its predecessors.
#[test]
fn execution_order_respects_predecessors() {
    let scenario = fixtures::rate_scenario();
    let graph = DependencyGraph::from_scenario(&scenario).unwrap();
    let order = graph.topological_order().unwrap();

    for function in scenario.functions() {
        let position = |id| order.iter().position(|&o| o == id).unwrap();
        for &dep in function
            .wait
            .launched
            .iter()
            .chain(&function.wait.finished)
        {
            assert!(position(dep) < position(function.id()));
        }
    }
}
