//! Probe orchestration.
//!
//! [`Prober::probe`] validates the address, applies the domain policy,
//! resolves MX candidates and runs one SMTP session per admitted candidate
//! until one accepts. [`MailboxChecker`] wraps it with accumulating,
//! builder-style configuration.

mod checker;
mod error;
mod options;
mod prober;
mod types;

pub use checker::MailboxChecker;
pub use error::ProbeError;
pub use options::{DEFAULT_LOCAL_HOST, DEFAULT_TIMEOUT, ProbeOptions, SMTP_PORT};
pub use prober::Prober;
pub use types::{ProbeRequest, ProbeResult};
