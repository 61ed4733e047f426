//! OpenBACH Scenario Helpers
//!
//! Convenience builders for common multi-node idioms: start a receiver,
//! then a sender once the receiver is up, then tear the receiver down when
//! the sender finishes, that sort of thing.
//!
//! Every helper follows one contract:
//! - it takes a pass-through [`Wait`](openbach_scenario::Wait) applied to
//!   the *first* node it adds, and
//! - it returns the node identifiers a caller should use as a later node's
//!   wait set.
//!
//! Helpers are call-site sugar over the core model; they impose no
//! invariants of their own.

mod metrology;
mod network;
mod traffic;

pub use metrology::{fping_measure_rtt, stop_all_captures, tcpdump_capture};
pub use network::{tc_clear_link, tc_configure_link};
pub use traffic::iperf3_rate_tcp;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
