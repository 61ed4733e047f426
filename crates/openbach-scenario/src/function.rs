//! Function nodes
//!
//! A function node is one schedulable unit: start a job on an agent entity,
//! stop previously started jobs, or start a nested scenario instance. Each
//! node carries its stable identifier, its wait block and exactly one
//! variant payload, the same shape the serialized document exposes to the
//! controller.

use crate::argument::Argument;
use crate::scenario::{Scenario, ScenarioHandle};
use crate::wait::Wait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Identifier of a function node, unique and stable within its scenario
///
/// Minted monotonically by `Scenario::add_function`; there is no public
/// constructor, so a wait set can only reference nodes that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FunctionId(u32);

impl FunctionId {
    #[inline]
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw value, as it appears in the serialized document
    #[inline]
    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl Display for FunctionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One schedulable action plus its dependency metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenbachFunction {
    id: FunctionId,
    /// Dependency wait block
    pub wait: Wait,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    /// Variant payload
    #[serde(flatten)]
    pub kind: FunctionKind,
}

impl OpenbachFunction {
    pub(crate) fn new(id: FunctionId, wait: Wait, kind: FunctionKind) -> Self {
        Self {
            id,
            wait,
            label: None,
            kind,
        }
    }

    /// Stable identifier within the owning scenario
    #[inline]
    #[must_use]
    pub fn id(&self) -> FunctionId {
        self.id
    }

    /// Free-text label shown by the controller frontend
    #[inline]
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Attach a display label
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Job name, for start-job nodes
    #[inline]
    #[must_use]
    pub fn job_name(&self) -> Option<&str> {
        self.as_start_job().map(|job| job.job_name.as_str())
    }

    /// View the start-job payload, if this node starts a job
    #[must_use]
    pub fn as_start_job(&self) -> Option<&StartJobInstance> {
        match &self.kind {
            FunctionKind::StartJobInstance(job) => Some(job),
            _ => None,
        }
    }

    /// Mutable view of the start-job payload
    pub fn as_start_job_mut(&mut self) -> Option<&mut StartJobInstance> {
        match &mut self.kind {
            FunctionKind::StartJobInstance(job) => Some(job),
            _ => None,
        }
    }

    /// View the stop payload, if this node stops jobs
    #[must_use]
    pub fn as_stop_job(&self) -> Option<&StopJobInstance> {
        match &self.kind {
            FunctionKind::StopJobInstance(stop) => Some(stop),
            _ => None,
        }
    }

    /// Mutable view of the stop payload
    pub fn as_stop_job_mut(&mut self) -> Option<&mut StopJobInstance> {
        match &mut self.kind {
            FunctionKind::StopJobInstance(stop) => Some(stop),
            _ => None,
        }
    }

    /// View the nested-scenario payload, if this node starts one
    #[must_use]
    pub fn as_start_scenario(&self) -> Option<&StartScenarioInstance> {
        match &self.kind {
            FunctionKind::StartScenarioInstance(nested) => Some(nested),
            _ => None,
        }
    }

    /// Mutable view of the nested-scenario payload
    pub fn as_start_scenario_mut(&mut self) -> Option<&mut StartScenarioInstance> {
        match &mut self.kind {
            FunctionKind::StartScenarioInstance(nested) => Some(nested),
            _ => None,
        }
    }
}

/// Closed set of schedulable actions
///
/// Externally tagged so that, flattened into [`OpenbachFunction`], every
/// serialized node carries exactly one variant-specific payload key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FunctionKind {
    /// Start a job instance on an agent entity
    #[serde(rename = "start_job_instance")]
    StartJobInstance(StartJobInstance),
    /// Stop previously started job instances
    #[serde(rename = "stop_job_instance")]
    StopJobInstance(StopJobInstance),
    /// Start an instance of a nested scenario
    #[serde(rename = "start_scenario_instance")]
    StartScenarioInstance(StartScenarioInstance),
}

impl From<StartJobInstance> for FunctionKind {
    fn from(payload: StartJobInstance) -> Self {
        Self::StartJobInstance(payload)
    }
}

impl From<StopJobInstance> for FunctionKind {
    fn from(payload: StopJobInstance) -> Self {
        Self::StopJobInstance(payload)
    }
}

impl From<StartScenarioInstance> for FunctionKind {
    fn from(payload: StartScenarioInstance) -> Self {
        Self::StartScenarioInstance(payload)
    }
}

/// Job invocation payload: job identity plus free-form parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartJobInstance {
    /// Name of the job to start
    pub job_name: String,
    /// Agent entity the job runs on
    pub entity: String,
    /// Job-specific parameters, recorded verbatim
    #[serde(default)]
    pub parameters: IndexMap<String, Argument>,
}

impl StartJobInstance {
    /// New payload with an empty parameter set
    #[must_use]
    pub fn new(job_name: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            job_name: job_name.into(),
            entity: entity.into(),
            parameters: IndexMap::new(),
        }
    }

    /// Add one parameter, builder style
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Argument>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Add or replace one parameter in place
    pub fn set_parameter(&mut self, key: impl Into<String>, value: impl Into<Argument>) {
        self.parameters.insert(key.into(), value.into());
    }

    /// Look up one parameter
    #[inline]
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&Argument> {
        self.parameters.get(key)
    }
}

/// Teardown payload referencing previously created start nodes
///
/// Zero targets is constructible; stopping a node that was never started is
/// a caller error surfaced by the executor, never here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopJobInstance {
    /// Start nodes this stop applies to
    #[serde(rename = "openbach_function_ids", default)]
    pub targets: Vec<FunctionId>,
}

impl StopJobInstance {
    /// New stop payload with no targets yet
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the given start nodes; several nodes allow bulk teardown
    #[must_use]
    pub fn of(targets: impl IntoIterator<Item = FunctionId>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
        }
    }

    /// Add one more node to stop
    pub fn add_target(&mut self, id: FunctionId) {
        self.targets.push(id);
    }
}

/// Nested scenario payload: shared child handle plus argument bindings
///
/// The child is held by reference, not copied; embedding the same handle
/// under several parent nodes aliases one scenario, and mutating it after
/// embedding is observable through every one of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartScenarioInstance {
    /// Child scenario, shared by reference
    #[serde(rename = "scenario_name", with = "scenario_by_name")]
    pub scenario: ScenarioHandle,
    /// Bindings for the child's declared constants
    #[serde(default)]
    pub arguments: IndexMap<String, Argument>,
}

impl StartScenarioInstance {
    /// Embed a child scenario with no argument bindings yet
    #[must_use]
    pub fn new(scenario: impl Into<ScenarioHandle>) -> Self {
        Self {
            scenario: scenario.into(),
            arguments: IndexMap::new(),
        }
    }

    /// Bind one child constant, builder style
    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Argument>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// Bind or rebind one child constant in place
    pub fn set_argument(&mut self, name: impl Into<String>, value: impl Into<Argument>) {
        self.arguments.insert(name.into(), value.into());
    }
}

/// Children serialize by name: the controller owns the child document and
/// resolves it at execution time. Decoding therefore reconstructs a by-name
/// handle around an otherwise empty scenario.
mod scenario_by_name {
    use super::{Scenario, ScenarioHandle};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        handle: &ScenarioHandle,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let guard = handle.read();
        serializer.serialize_str(guard.name())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<ScenarioHandle, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ScenarioHandle::new(Scenario::new(name, "")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_with_zero_targets_is_constructible() {
        let stop = StopJobInstance::new();
        assert!(stop.targets.is_empty());
        let encoded = serde_json::to_string(&stop).unwrap();
        assert_eq!(encoded, r#"{"openbach_function_ids":[]}"#);
    }

    #[test]
    fn start_job_records_parameters_verbatim() {
        let job = StartJobInstance::new("iperf3", "client")
            .with_parameter("server_ip", "$server_ip")
            .with_parameter("port", 5201);
        assert!(job.parameter("server_ip").unwrap().is_placeholder());
        assert_eq!(job.parameter("port"), Some(&Argument::Integer(5201)));
    }

    #[test]
    fn nested_scenario_serializes_by_name() {
        let child = Scenario::new("child", "nested");
        let nested = StartScenarioInstance::new(child).with_argument("x", 1);
        let encoded = serde_json::to_string(&nested).unwrap();
        assert_eq!(encoded, r#"{"scenario_name":"child","arguments":{"x":1}}"#);
    }
}
