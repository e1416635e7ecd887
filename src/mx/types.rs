use std::fmt;

/// Preference weight assigned to the implicit MX when a domain publishes none.
pub const DEFAULT_WEIGHT: u16 = 10;

/// One mail-exchange host and its preference. Ordering is by weight, then host,
/// which is the order candidates are tried in.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MxCandidate {
    pub weight: u16,
    pub host: String,
}

impl MxCandidate {
    pub fn new(weight: u16, host: impl Into<String>) -> Self {
        Self {
            weight,
            host: host.into(),
        }
    }

    /// Implicit MX: the domain itself, written as a rooted name.
    pub fn implicit(domain: &str) -> Self {
        Self::new(DEFAULT_WEIGHT, format!("{domain}."))
    }
}

impl fmt::Display for MxCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.host, self.weight)
    }
}
