#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use super::ProbeOptions;
use crate::policy::DomainPolicy;

/// Immutable input of one probe: the target plus a snapshot of the
/// configuration in force when it was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub email: String,
    pub options: ProbeOptions,
    pub policy: DomainPolicy,
}

impl ProbeRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            options: ProbeOptions::default(),
            policy: DomainPolicy::default(),
        }
    }

    pub fn with_options(mut self, options: ProbeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_policy(mut self, policy: DomainPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Verdict plus the transcript of the run that produced it.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeResult {
    pub exists: bool,
    pub transcript: Vec<String>,
}
