//! Wait-edge model
//!
//! Every function node carries one [`Wait`] block: the predecessors that
//! must have *started* (`launched`), the predecessors that must have
//! *completed* (`finished`), and an extra [`Delay`] applied once both
//! conditions hold. Completion policy (success vs. failure) is the
//! executor's business, not recorded here.

use crate::argument::Placeholder;
use crate::function::FunctionId;
use serde::{Deserialize, Serialize};

/// Delay in seconds applied after all wait conditions are satisfied
///
/// Inside a scenario whose constants are not yet bound the delay may itself
/// be a `$name` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Delay {
    /// Literal seconds
    Seconds(u64),
    /// Placeholder bound at execution time
    Placeholder(Placeholder),
}

impl Delay {
    /// Whether this is the trivial zero delay
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Seconds(0))
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::Seconds(0)
    }
}

impl From<u64> for Delay {
    fn from(seconds: u64) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<Placeholder> for Delay {
    fn from(placeholder: Placeholder) -> Self {
        Self::Placeholder(placeholder)
    }
}

/// Dependency wait block of a function node
///
/// References point at nodes added earlier to the same scenario; because
/// identifiers are only minted by `Scenario::add_function`, forward and
/// self references cannot be expressed through the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wait {
    /// Predecessors that must have transitioned to started
    #[serde(default)]
    pub launched: Vec<FunctionId>,
    /// Predecessors that must have fully completed
    #[serde(default)]
    pub finished: Vec<FunctionId>,
    /// Extra seconds once the conditions above hold
    #[serde(default)]
    pub delay: Delay,
}

impl Wait {
    /// Empty wait block: run as soon as scheduled
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until the given nodes have started
    #[must_use]
    pub fn launched(ids: impl IntoIterator<Item = FunctionId>) -> Self {
        Self::new().with_launched(ids)
    }

    /// Wait until the given nodes have completed
    #[must_use]
    pub fn finished(ids: impl IntoIterator<Item = FunctionId>) -> Self {
        Self::new().with_finished(ids)
    }

    /// Add started-predecessors
    #[must_use]
    pub fn with_launched(mut self, ids: impl IntoIterator<Item = FunctionId>) -> Self {
        self.launched.extend(ids);
        self
    }

    /// Add completed-predecessors
    #[must_use]
    pub fn with_finished(mut self, ids: impl IntoIterator<Item = FunctionId>) -> Self {
        self.finished.extend(ids);
        self
    }

    /// Set the post-condition delay
    #[must_use]
    pub fn with_delay(mut self, delay: impl Into<Delay>) -> Self {
        self.delay = delay.into();
        self
    }

    /// Whether this block constrains nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.launched.is_empty() && self.finished.is_empty() && self.delay.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wait_constrains_nothing() {
        assert!(Wait::new().is_empty());
        assert!(Delay::default().is_zero());
    }

    #[test]
    fn delay_may_be_a_placeholder() {
        let delay: Delay = Placeholder::new("settle_time").into();
        assert!(!delay.is_zero());
        let encoded = serde_json::to_string(&delay).unwrap();
        assert_eq!(encoded, "\"$settle_time\"");
    }

    #[test]
    fn builder_methods_accumulate() {
        let a = FunctionId::new(0);
        let b = FunctionId::new(1);
        let wait = Wait::launched([a]).with_finished([b]).with_delay(5);
        assert_eq!(wait.launched, vec![a]);
        assert_eq!(wait.finished, vec![b]);
        assert_eq!(wait.delay, Delay::Seconds(5));
    }
}
