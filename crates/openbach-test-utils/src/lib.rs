//! Testing utilities for the OpenBACH workspace
//!
//! Shared fixtures: canned scenarios and malformed document snippets.

#![allow(missing_docs)]

use openbach_scenario::{
    FunctionId, Scenario, ScenarioHandle, StartJobInstance, StartScenarioInstance,
    StopJobInstance, Wait,
};

/// An fping probe on entity `E`, stopped five seconds after it launched.
pub fn ping_scenario() -> Scenario {
    let mut scenario = Scenario::new("ping_check", "probe then stop");
    let probe = scenario.add_function(
        StartJobInstance::new("fping", "E").with_parameter("destination_ip", "10.0.0.2"),
        Wait::new(),
    );
    scenario.add_function(
        StopJobInstance::of([probe]),
        Wait::launched([probe]).with_delay(5),
    );
    scenario
}

/// An iperf3 rate measurement between two entities, built via the helper.
pub fn rate_scenario() -> Scenario {
    let mut scenario = Scenario::new("rate_tcp", "TCP goodput");
    scenario.add_constant("server_ip", "192.168.1.4");
    openbach_helpers::iperf3_rate_tcp(
        &mut scenario,
        "client",
        "server",
        "$server_ip",
        30,
        Wait::new(),
    );
    scenario
}

/// A parent scenario embedding `child` under two separate nodes.
pub fn parent_embedding_twice(child: &ScenarioHandle) -> (Scenario, FunctionId, FunctionId) {
    let mut parent = Scenario::new("parent", "embeds one child twice");
    let p1 = parent.add_function(StartScenarioInstance::new(child.clone()), Wait::new());
    let p2 = parent.add_function(StartScenarioInstance::new(child.clone()), Wait::new());
    (parent, p1, p2)
}

/// Document whose second node waits on an identifier nobody declares.
pub fn document_with_dangling_wait() -> &'static str {
    r#"{
        "name": "dangling",
        "description": "",
        "openbach_functions": [
            {"id": 0, "wait": {"launched": [], "finished": [], "delay": 0},
             "start_job_instance": {"job_name": "fping", "entity": "e", "parameters": {}}},
            {"id": 1, "wait": {"launched": [7], "finished": [], "delay": 0},
             "stop_job_instance": {"openbach_function_ids": [0]}}
        ]
    }"#
}

/// Document where two nodes wait on each other.
pub fn document_with_cycle() -> &'static str {
    r#"{
        "name": "cycle",
        "description": "",
        "openbach_functions": [
            {"id": 0, "wait": {"launched": [1], "finished": [], "delay": 0},
             "start_job_instance": {"job_name": "fping", "entity": "e", "parameters": {}}},
            {"id": 1, "wait": {"launched": [], "finished": [0], "delay": 0},
             "start_job_instance": {"job_name": "fping", "entity": "e", "parameters": {}}}
        ]
    }"#
}

/// Document reusing one identifier for two nodes.
pub fn document_with_duplicate_ids() -> &'static str {
    r#"{
        "name": "duplicate",
        "description": "",
        "openbach_functions": [
            {"id": 3, "wait": {"launched": [], "finished": [], "delay": 0},
             "start_job_instance": {"job_name": "fping", "entity": "e", "parameters": {}}},
            {"id": 3, "wait": {"launched": [], "finished": [], "delay": 0},
             "start_job_instance": {"job_name": "fping", "entity": "f", "parameters": {}}}
        ]
    }"#
}

/// Document whose single node waits on itself.
pub fn document_with_self_wait() -> &'static str {
    r#"{
        "name": "selfish",
        "description": "",
        "openbach_functions": [
            {"id": 0, "wait": {"launched": [], "finished": [0], "delay": 0},
             "start_job_instance": {"job_name": "fping", "entity": "e", "parameters": {}}}
        ]
    }"#
}
