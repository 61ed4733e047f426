//! Scenario container
//!
//! A [`Scenario`] owns the ordered collection of function nodes and the
//! declared constants, and is the unit handed to the controller once
//! serialized. Construction is a single mutation pass: repeated
//! `add_function` calls, each returning the new node's identifier for later
//! wait sets. The container validates nothing; an inconsistent graph is
//! the executor's problem (or `openbach-graph`'s, when asked).

use crate::argument::Argument;
use crate::error::ScenarioError;
use crate::function::{FunctionId, FunctionKind, OpenbachFunction, StartJobInstance};
use crate::wait::Wait;
use indexmap::IndexMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A named, described collection of function nodes plus declared constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    constants: IndexMap<String, Argument>,
    #[serde(rename = "openbach_functions", default)]
    functions: Vec<OpenbachFunction>,
}

impl Scenario {
    /// Create an empty scenario
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            constants: IndexMap::new(),
            functions: Vec::new(),
        }
    }

    /// Scenario name, the submission identifier on the controller
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the scenario
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Free-text description
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Declare a named constant default
    ///
    /// Re-declaring an existing name overwrites its value (last write wins)
    /// while keeping the original declaration position.
    pub fn add_constant(&mut self, name: impl Into<String>, value: impl Into<Argument>) {
        self.constants.insert(name.into(), value.into());
    }

    /// Look up a declared constant
    #[inline]
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<&Argument> {
        self.constants.get(name)
    }

    /// All declared constants, in declaration order
    #[inline]
    #[must_use]
    pub fn constants(&self) -> &IndexMap<String, Argument> {
        &self.constants
    }

    /// Append a function node and return its new identifier
    ///
    /// The wait block may only reference identifiers returned by earlier
    /// calls on this scenario; that ordering is the whole dependency
    /// discipline, and there is no validation pass here.
    pub fn add_function(&mut self, kind: impl Into<FunctionKind>, wait: Wait) -> FunctionId {
        let id = self.next_id();
        self.functions.push(OpenbachFunction::new(id, wait, kind.into()));
        id
    }

    // Identifiers stay unique and monotonic even after decoding a document
    // whose ids were not assigned by this builder.
    fn next_id(&self) -> FunctionId {
        FunctionId::new(
            self.functions
                .iter()
                .map(|function| function.id().as_u32() + 1)
                .max()
                .unwrap_or(0),
        )
    }

    /// Look up a node by identifier
    #[must_use]
    pub fn function(&self, id: FunctionId) -> Option<&OpenbachFunction> {
        self.functions.iter().find(|function| function.id() == id)
    }

    /// Look up a node for post-wiring (the `configure` step)
    pub fn function_mut(&mut self, id: FunctionId) -> Option<&mut OpenbachFunction> {
        self.functions
            .iter_mut()
            .find(|function| function.id() == id)
    }

    /// Like [`Scenario::function`], but failing with [`ScenarioError`]
    pub fn try_function(&self, id: FunctionId) -> Result<&OpenbachFunction, ScenarioError> {
        self.function(id)
            .ok_or(ScenarioError::FunctionNotFound(id))
    }

    /// All nodes, in declaration order
    #[inline]
    #[must_use]
    pub fn functions(&self) -> &[OpenbachFunction] {
        &self.functions
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    /// Whether no node has been added yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Identifiers of start-job nodes whose job name is one of `job_names`
    ///
    /// Lazy, in declaration order, and restartable: the iterator is
    /// cloneable and a fresh call yields the same sequence. An empty result
    /// is not an error.
    pub fn extract_function_id<'a>(
        &'a self,
        job_names: &'a [&'a str],
    ) -> impl Iterator<Item = FunctionId> + Clone + 'a {
        self.functions.iter().filter_map(move |function| {
            function
                .as_start_job()
                .filter(|job| job_names.contains(&job.job_name.as_str()))
                .map(|_| function.id())
        })
    }

    /// Like [`Scenario::extract_function_id`], narrowed by a predicate
    ///
    /// Used to tell apart same-named jobs added by helper functions, e.g.
    /// captures on one specific entity.
    pub fn extract_function_id_if<'a, P>(
        &'a self,
        job_name: &'a str,
        predicate: P,
    ) -> impl Iterator<Item = FunctionId> + Clone + 'a
    where
        P: Fn(&StartJobInstance) -> bool + Clone + 'a,
    {
        self.functions.iter().filter_map(move |function| {
            function
                .as_start_job()
                .filter(|job| job.job_name == job_name && predicate(job))
                .map(|_| function.id())
        })
    }

    /// Encode the scenario document for the controller
    pub fn to_json(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode the scenario document, human-readable
    pub fn to_json_pretty(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a scenario document
    ///
    /// Nested scenario references come back as by-name handles; the
    /// controller owns the child documents themselves.
    pub fn from_json(document: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(document)?)
    }
}

/// Shared, reference-counted handle to a scenario
///
/// This is how a child scenario is embedded into parent nodes: by
/// reference, not by copy. Cloning the handle aliases the same underlying
/// scenario, so constants mutated after embedding are observed through
/// every parent node holding the handle.
#[derive(Debug, Clone)]
pub struct ScenarioHandle(Arc<RwLock<Scenario>>);

impl ScenarioHandle {
    /// Wrap a scenario for shared embedding
    #[must_use]
    pub fn new(scenario: Scenario) -> Self {
        Self(Arc::new(RwLock::new(scenario)))
    }

    /// Read access to the shared scenario
    pub fn read(&self) -> RwLockReadGuard<'_, Scenario> {
        self.0.read()
    }

    /// Write access to the shared scenario
    pub fn write(&self) -> RwLockWriteGuard<'_, Scenario> {
        self.0.write()
    }

    /// Owned copy of the shared scenario's name
    #[must_use]
    pub fn name(&self) -> String {
        self.read().name().to_string()
    }

    /// Whether two handles alias the same scenario
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Scenario> for ScenarioHandle {
    fn from(scenario: Scenario) -> Self {
        Self::new(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{StartScenarioInstance, StopJobInstance};

    #[test]
    fn identifiers_are_monotonic_and_stable() {
        let mut scenario = Scenario::new("ids", "");
        let a = scenario.add_function(StartJobInstance::new("fping", "client"), Wait::new());
        let b = scenario.add_function(StopJobInstance::of([a]), Wait::new());
        assert_eq!(a.as_u32(), 0);
        assert_eq!(b.as_u32(), 1);
        assert_eq!(scenario.function(a).unwrap().id(), a);
    }

    #[test]
    fn constant_overwrite_is_last_write_wins() {
        let mut scenario = Scenario::new("constants", "");
        scenario.add_constant("rate", "10M");
        scenario.add_constant("port", 5201);
        scenario.add_constant("rate", "20M");
        assert_eq!(scenario.constants().len(), 2);
        assert_eq!(scenario.constant("rate"), Some(&Argument::String("20M".into())));
        // the first declaration position is kept
        assert_eq!(scenario.constants().get_index(0).unwrap().0, "rate");
    }

    #[test]
    fn extraction_preserves_declaration_order_and_restarts() {
        let mut scenario = Scenario::new("extract", "");
        let first = scenario.add_function(StartJobInstance::new("tcpdump_pcap", "a"), Wait::new());
        scenario.add_function(StartJobInstance::new("fping", "a"), Wait::new());
        let second = scenario.add_function(StartJobInstance::new("tcpdump_pcap", "b"), Wait::new());

        let ids: Vec<_> = scenario.extract_function_id(&["tcpdump_pcap"]).collect();
        assert_eq!(ids, vec![first, second]);

        let again: Vec<_> = scenario.extract_function_id(&["tcpdump_pcap"]).collect();
        assert_eq!(again, ids);

        let restartable = scenario.extract_function_id(&["tcpdump_pcap"]);
        assert_eq!(restartable.clone().count(), 2);
        assert_eq!(restartable.count(), 2);
    }

    #[test]
    fn extraction_by_predicate_narrows_matches() {
        let mut scenario = Scenario::new("extract", "");
        scenario.add_function(StartJobInstance::new("tcpdump_pcap", "alpha"), Wait::new());
        let beta = scenario.add_function(StartJobInstance::new("tcpdump_pcap", "beta"), Wait::new());

        let ids: Vec<_> = scenario
            .extract_function_id_if("tcpdump_pcap", |job| job.entity == "beta")
            .collect();
        assert_eq!(ids, vec![beta]);
    }

    #[test]
    fn embedded_child_is_aliased_not_copied() {
        let child = ScenarioHandle::new(Scenario::new("child", ""));
        child.write().add_constant("x", 1);

        let mut parent = Scenario::new("parent", "");
        let p1 = parent.add_function(StartScenarioInstance::new(child.clone()), Wait::new());
        let p2 = parent.add_function(StartScenarioInstance::new(child.clone()), Wait::new());

        child.write().add_constant("x", 2);

        for id in [p1, p2] {
            let nested = parent.function(id).unwrap().as_start_scenario().unwrap();
            assert!(nested.scenario.ptr_eq(&child));
            assert_eq!(
                nested.scenario.read().constant("x"),
                Some(&Argument::Integer(2))
            );
        }
    }

    #[test]
    fn decoded_documents_keep_adding_unique_ids() {
        let document = r#"{
            "name": "decoded",
            "description": "",
            "openbach_functions": [
                {"id": 4, "wait": {"launched": [], "finished": [], "delay": 0},
                 "start_job_instance": {"job_name": "fping", "entity": "e", "parameters": {}}}
            ]
        }"#;
        let mut scenario = Scenario::from_json(document).unwrap();
        let next = scenario.add_function(StartJobInstance::new("fping", "e"), Wait::new());
        assert_eq!(next.as_u32(), 5);
    }
}
