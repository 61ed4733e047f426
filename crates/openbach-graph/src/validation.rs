//! Opt-in validation pass over a built scenario
//!
//! The builder itself never validates; running this pass before submission
//! is how a frontend turns "fails later on the controller" into "fails
//! now, with a reason". The pass recurses into every embedded sub-scenario
//! and therefore also catches a scenario embedding itself.

use crate::dag::DependencyGraph;
use crate::error::GraphError;
use openbach_scenario::{FunctionId, Scenario};

/// Outcome of a successful validation pass
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Function nodes in the top-level scenario
    pub function_count: usize,
    /// Wait edges in the top-level scenario
    pub edge_count: usize,
    /// Sub-scenarios visited, the top-level one included
    pub scenarios_checked: usize,
    /// One executable schedule for the top-level scenario
    pub execution_order: Vec<FunctionId>,
}

/// Validate a scenario and every sub-scenario reachable from it
pub fn validate(scenario: &Scenario) -> Result<ValidationReport, GraphError> {
    let mut path = Vec::new();
    let mut scenarios_checked = 0;
    let (graph, execution_order) = validate_inner(scenario, &mut path, &mut scenarios_checked)?;

    Ok(ValidationReport {
        function_count: graph.node_count(),
        edge_count: graph.edge_count(),
        scenarios_checked,
        execution_order,
    })
}

// Sub-scenarios are namespaced by name on the controller, so the embedding
// path is tracked by name as well: one name twice on the path is a cycle.
fn validate_inner(
    scenario: &Scenario,
    path: &mut Vec<String>,
    scenarios_checked: &mut usize,
) -> Result<(DependencyGraph, Vec<FunctionId>), GraphError> {
    if path.iter().any(|ancestor| ancestor == scenario.name()) {
        return Err(GraphError::RecursiveScenario(scenario.name().to_string()));
    }

    let graph = DependencyGraph::from_scenario(scenario)?;
    let order = graph.topological_order()?;

    path.push(scenario.name().to_string());
    for function in scenario.functions() {
        if let Some(nested) = function.as_start_scenario() {
            let child = nested.scenario.read();
            validate_inner(&child, path, scenarios_checked)?;
        }
    }
    path.pop();

    *scenarios_checked += 1;
    tracing::debug!(
        scenario = scenario.name(),
        functions = graph.node_count(),
        edges = graph.edge_count(),
        "scenario validated"
    );
    Ok((graph, order))
}
