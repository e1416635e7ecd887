//! MX resolution.
//!
//! [`resolve_candidates`] never fails: when the lookup errors or returns
//! nothing, the domain itself is tried as an implicit MX with weight
//! [`DEFAULT_WEIGHT`].

mod error;
mod resolver;
mod types;

pub use error::MxError as Error;
pub use resolver::{LookupMx, lookup_candidates, resolve_candidates, system_resolver};
pub use types::{DEFAULT_WEIGHT, MxCandidate};
