//! OpenBACH Scenario Graph Builder
//!
//! Declarative construction of OpenBACH scenarios: directed graphs of job
//! invocations with explicit ordering constraints, handed to the remote
//! controller as a JSON document.
//!
//! # Core Concepts
//!
//! - [`Scenario`]: ordered collection of function nodes plus declared
//!   constants; the unit of submission
//! - [`OpenbachFunction`]: one schedulable action: start a job, stop jobs,
//!   or start a nested scenario instance
//! - [`Wait`]: per-node `launched`/`finished` predecessor sets and a
//!   post-condition [`Delay`]
//! - [`Placeholder`]: `$name` markers recorded verbatim and resolved by the
//!   executor, never by the builder
//! - [`ScenarioHandle`]: shared reference under which a child scenario is
//!   embedded (aliased, not copied)
//!
//! # Example
//!
//! ```
//! use openbach_scenario::{Scenario, StartJobInstance, StopJobInstance, Wait};
//!
//! let mut scenario = Scenario::new("rate_tcp", "Measure TCP goodput");
//! scenario.add_constant("server_ip", "192.168.1.4");
//!
//! let server = scenario.add_function(
//!     StartJobInstance::new("iperf3", "server").with_parameter("port", 5201),
//!     Wait::new(),
//! );
//! let client = scenario.add_function(
//!     StartJobInstance::new("iperf3", "client").with_parameter("server_ip", "$server_ip"),
//!     Wait::launched([server]).with_delay(1),
//! );
//! scenario.add_function(StopJobInstance::of([server]), Wait::finished([client]));
//!
//! let document = scenario.to_json_pretty().unwrap();
//! assert!(document.contains("openbach_functions"));
//! ```

mod argument;
mod error;
mod function;
mod scenario;
mod wait;

pub use argument::{Argument, Placeholder};
pub use error::{PlaceholderError, ScenarioError};
pub use function::{
    FunctionId, FunctionKind, OpenbachFunction, StartJobInstance, StartScenarioInstance,
    StopJobInstance,
};
pub use scenario::{Scenario, ScenarioHandle};
pub use wait::{Delay, Wait};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
