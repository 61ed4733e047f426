//! Scenario observer: validate, render, hand over
//!
//! The observer is the tail end of every executor script: it runs the
//! dependency-graph pass over the built scenario, renders the JSON
//! document and writes it to the configured target. Submitting the
//! document to the controller is the job of external tooling.

use openbach_graph::{GraphError, ValidationReport};
use openbach_scenario::{Scenario, ScenarioError};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Failures on the way from a built scenario to an emitted document
#[derive(Debug, thiserror::Error)]
pub enum ObserverError {
    /// Scenario failed the dependency-graph pass
    #[error("invalid scenario: {0}")]
    Invalid(#[from] GraphError),

    /// Document could not be rendered
    #[error("render failed: {0}")]
    Render(#[from] ScenarioError),

    /// Target could not be written
    #[error("write failed: {0}")]
    Write(#[from] io::Error),
}

/// Where the scenario document goes
#[derive(Debug, Clone, Default)]
pub enum OutputTarget {
    /// Write to standard output
    #[default]
    Stdout,
    /// Write to a file
    File(PathBuf),
}

/// Serializes a built scenario for submission to the controller
#[derive(Debug, Default)]
pub struct ScenarioObserver {
    target: OutputTarget,
    pretty: bool,
}

impl ScenarioObserver {
    /// Observer writing a compact document to stdout
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the document to `path` instead of stdout
    #[must_use]
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.target = OutputTarget::File(path.into());
        self
    }

    /// Render the document human-readable
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Validate the scenario, render its document and write it out
    pub fn launch(&self, scenario: &Scenario) -> Result<ValidationReport, ObserverError> {
        let report = openbach_graph::validate(scenario)?;
        tracing::info!(
            scenario = scenario.name(),
            functions = report.function_count,
            edges = report.edge_count,
            "scenario validated"
        );

        let document = if self.pretty {
            scenario.to_json_pretty()?
        } else {
            scenario.to_json()?
        };

        match &self.target {
            OutputTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(document.as_bytes())?;
                out.write_all(b"\n")?;
            }
            OutputTarget::File(path) => {
                fs::write(path, document)?;
                tracing::info!(path = %path.display(), "scenario document written");
            }
        }
        Ok(report)
    }
}
