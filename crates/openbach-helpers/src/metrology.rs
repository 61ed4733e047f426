//! Measurement helpers: RTT probes and packet captures

use openbach_scenario::{Argument, FunctionId, Scenario, StartJobInstance, StopJobInstance, Wait};

/// Measure round-trip time with fping for `duration_secs`.
///
/// Single-node helper; `wait` applies to the probe itself, which is also
/// the returned head.
pub fn fping_measure_rtt(
    scenario: &mut Scenario,
    entity: &str,
    destination_ip: impl Into<Argument>,
    duration_secs: impl Into<Argument>,
    wait: Wait,
) -> Vec<FunctionId> {
    let probe = scenario.add_function(
        StartJobInstance::new("fping", entity)
            .with_parameter("destination_ip", destination_ip)
            .with_parameter("duration", duration_secs),
        wait,
    );
    vec![probe]
}

/// Start a tcpdump capture on `entity`'s interface, writing to
/// `capture_file` on the agent.
///
/// The capture runs until stopped; pair with [`stop_all_captures`].
pub fn tcpdump_capture(
    scenario: &mut Scenario,
    entity: &str,
    interface: impl Into<Argument>,
    capture_file: impl Into<Argument>,
    wait: Wait,
) -> Vec<FunctionId> {
    let capture = scenario.add_function(
        StartJobInstance::new("tcpdump_pcap", entity)
            .with_parameter("interface", interface)
            .with_parameter("capture_file", capture_file),
        wait,
    );
    vec![capture]
}

/// Stop every capture added to the scenario so far with one stop node.
///
/// Bulk teardown: the targets are collected through
/// `extract_function_id`, so captures added by other helpers are included
/// too. Returns the stop node.
pub fn stop_all_captures(scenario: &mut Scenario, wait: Wait) -> Vec<FunctionId> {
    let captures: Vec<FunctionId> = scenario.extract_function_id(&["tcpdump_pcap"]).collect();
    let stop = scenario.add_function(StopJobInstance::of(captures), wait);
    vec![stop]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_stop_collects_every_capture() {
        let mut scenario = Scenario::new("captures", "");
        let first = tcpdump_capture(&mut scenario, "a", "eth0", "/tmp/a.pcap", Wait::new());
        fping_measure_rtt(&mut scenario, "a", "10.0.0.2", 10, Wait::new());
        let second = tcpdump_capture(&mut scenario, "b", "eth1", "/tmp/b.pcap", Wait::new());

        let stop = stop_all_captures(&mut scenario, Wait::new());
        let payload = scenario.function(stop[0]).unwrap().as_stop_job().unwrap();
        assert_eq!(payload.targets, vec![first[0], second[0]]);
    }

    #[test]
    fn bulk_stop_without_captures_is_a_noop_stop() {
        let mut scenario = Scenario::new("empty", "");
        let stop = stop_all_captures(&mut scenario, Wait::new());
        let payload = scenario.function(stop[0]).unwrap().as_stop_job().unwrap();
        assert!(payload.targets.is_empty());
    }
}
