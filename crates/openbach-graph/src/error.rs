//! Error types for the dependency-graph pass
//!
//! None of these can arise from a scenario assembled exclusively through
//! `Scenario::add_function`, since identifiers are only obtainable from
//! earlier calls. They exist for hand-edited or decoded documents, and for wait
//! sets wired with identifiers minted by a *different* scenario.

use openbach_scenario::FunctionId;

/// Rejections produced while building or checking a dependency graph
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    /// Two nodes share one identifier
    #[error("duplicate function id {0}")]
    DuplicateId(FunctionId),

    /// A node waits on itself
    #[error("function {0} waits on itself")]
    SelfWait(FunctionId),

    /// A wait set references an identifier the scenario does not declare
    #[error("function {from} waits on unknown function {to}")]
    DanglingReference {
        /// Node declaring the wait
        from: FunctionId,
        /// The unknown identifier it references
        to: FunctionId,
    },

    /// The wait edges form a cycle
    #[error("dependency cycle through function {0}")]
    CycleDetected(FunctionId),

    /// A scenario embeds itself through its chain of sub-scenarios
    #[error("scenario {0:?} embeds itself through its sub-scenarios")]
    RecursiveScenario(String),
}
