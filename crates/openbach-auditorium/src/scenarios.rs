//! Canned scenarios behind the CLI subcommands
//!
//! Each function mirrors one executor script: turn CLI arguments into a
//! built scenario, constants declared so the controller frontend can
//! rebind them without rebuilding.

use openbach_helpers::{fping_measure_rtt, iperf3_rate_tcp};
use openbach_scenario::{Scenario, Wait};

/// RTT check: fping from `entity` towards `destination_ip`.
#[must_use]
pub fn ping(entity: &str, destination_ip: &str, duration_secs: u32) -> Scenario {
    let mut scenario = Scenario::new("ping_check", "RTT measurement with fping");
    scenario.add_constant("destination_ip", destination_ip);
    scenario.add_constant("duration", duration_secs);
    fping_measure_rtt(
        &mut scenario,
        entity,
        "$destination_ip",
        "$duration",
        Wait::new(),
    );
    scenario
}

/// TCP goodput: iperf3 pair between two entities.
#[must_use]
pub fn rate(
    client_entity: &str,
    server_entity: &str,
    server_ip: &str,
    duration_secs: u32,
) -> Scenario {
    let mut scenario = Scenario::new("rate_tcp", "TCP goodput measurement with iperf3");
    scenario.add_constant("server_ip", server_ip);
    scenario.add_constant("duration", duration_secs);
    iperf3_rate_tcp(
        &mut scenario,
        client_entity,
        server_entity,
        "$server_ip",
        "$duration",
        Wait::new(),
    );
    scenario
}
