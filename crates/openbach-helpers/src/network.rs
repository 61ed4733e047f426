//! Link impairment helpers (tc/netem through the tc_configure_link job)

use openbach_scenario::{Argument, FunctionId, Scenario, StartJobInstance, Wait};

/// Apply a netem delay on `entity`'s interface.
///
/// Impairments persist until cleared; pair with [`tc_clear_link`].
pub fn tc_configure_link(
    scenario: &mut Scenario,
    entity: &str,
    interface: impl Into<Argument>,
    delay_ms: impl Into<Argument>,
    wait: Wait,
) -> Vec<FunctionId> {
    let apply = scenario.add_function(
        StartJobInstance::new("tc_configure_link", entity)
            .with_parameter("operation", "apply")
            .with_parameter("interface_name", interface)
            .with_parameter("delay", delay_ms),
        wait,
    );
    vec![apply]
}

/// Remove every impairment from `entity`'s interface.
pub fn tc_clear_link(
    scenario: &mut Scenario,
    entity: &str,
    interface: impl Into<Argument>,
    wait: Wait,
) -> Vec<FunctionId> {
    let clear = scenario.add_function(
        StartJobInstance::new("tc_configure_link", entity)
            .with_parameter("operation", "clear")
            .with_parameter("interface_name", interface),
        wait,
    );
    vec![clear]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_then_clear_brackets_a_measurement() {
        let mut scenario = Scenario::new("impaired_ping", "");
        let applied = tc_configure_link(&mut scenario, "router", "eth0", 100, Wait::new());
        let cleared = tc_clear_link(
            &mut scenario,
            "router",
            "eth0",
            Wait::finished(applied.clone()).with_delay(30),
        );

        let apply_job = scenario.function(applied[0]).unwrap().as_start_job().unwrap();
        assert_eq!(apply_job.parameter("operation"), Some(&Argument::String("apply".into())));

        let clear_job = scenario.function(cleared[0]).unwrap().as_start_job().unwrap();
        assert_eq!(clear_job.parameter("operation"), Some(&Argument::String("clear".into())));
        assert_eq!(scenario.function(cleared[0]).unwrap().wait.finished, applied);
    }
}
