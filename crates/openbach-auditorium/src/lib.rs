//! OpenBACH Auditorium
//!
//! Executor-side surface: canned scenario builders behind a CLI, and the
//! [`ScenarioObserver`] that validates and emits the scenario document.
//! Submission over HTTP and polling the scenario instance are the business
//! of external tooling fed by the emitted document.

mod observer;
pub mod scenarios;

pub use observer::{ObserverError, OutputTarget, ScenarioObserver};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
