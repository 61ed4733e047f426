//! OpenBACH Dependency-Graph Analysis
//!
//! Turns a built scenario into a statically checked dependency graph:
//!
//! - [`DependencyGraph`]: wait edges as a directed graph, with entry/exit
//!   and scheduling queries
//! - [`validate`]: opt-in structural pass (duplicate identifiers,
//!   self-waits, dangling references, cycles, recursive sub-scenario
//!   embeddings), recursing into every embedded scenario
//! - [`ValidationReport`]: counts plus one executable schedule
//!
//! Scenarios assembled exclusively through `Scenario::add_function` pass by
//! construction; this crate earns its keep on decoded or hand-edited
//! documents, and on wait sets wired with identifiers from the wrong
//! scenario.

mod dag;
mod error;
mod validation;

pub use dag::{DependencyGraph, EdgeKind};
pub use error::GraphError;
pub use validation::{validate, ValidationReport};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
