//! Traffic generation helpers

use openbach_scenario::{Argument, FunctionId, Scenario, StartJobInstance, StopJobInstance, Wait};

/// Default iperf3 control/data port
const IPERF3_PORT: i64 = 5201;

/// Start an iperf3 server/client pair and tear the server down once the
/// client is done.
///
/// The pass-through `wait` applies to the server node; the client starts
/// one second after the server has launched. Returns the client and stop
/// nodes; waiting on them means the measurement is over and the server is
/// gone.
pub fn iperf3_rate_tcp(
    scenario: &mut Scenario,
    client_entity: &str,
    server_entity: &str,
    server_ip: impl Into<Argument>,
    duration_secs: impl Into<Argument>,
    wait: Wait,
) -> Vec<FunctionId> {
    let server = scenario.add_function(
        StartJobInstance::new("iperf3", server_entity)
            .with_parameter("server", true)
            .with_parameter("port", IPERF3_PORT),
        wait,
    );
    let client = scenario.add_function(
        StartJobInstance::new("iperf3", client_entity)
            .with_parameter("server_ip", server_ip)
            .with_parameter("port", IPERF3_PORT)
            .with_parameter("duration", duration_secs),
        Wait::launched([server]).with_delay(1),
    );
    let stop = scenario.add_function(StopJobInstance::of([server]), Wait::finished([client]));
    vec![client, stop]
}
