//! Caller-supplied domain lists.
//!
//! Two independent sets, both stored lower-cased:
//! - excluded domains: the address domain is refused outright on an exact match;
//! - temporary suffixes: an MX host ending in `.<suffix>` is never contacted.

use std::collections::BTreeSet;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainPolicy {
    excluded: BTreeSet<String>,
    temporary: BTreeSet<String>,
}

impl DomainPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `domains` into the excluded set. Duplicates collapse.
    pub fn add_excluded_domains<I, S>(&mut self, domains: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        merge_into(&mut self.excluded, domains);
        self
    }

    /// Merges `suffixes` into the temporary/disposable suffix set.
    pub fn add_temporary_domains<I, S>(&mut self, suffixes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        merge_into(&mut self.temporary, suffixes);
        self
    }

    /// Case-insensitive exact membership in the excluded set.
    pub fn is_excluded(&self, domain: &str) -> bool {
        self.excluded.contains(&domain.trim().to_lowercase())
    }

    /// `true` when `host` sits under one of the temporary suffixes.
    ///
    /// The suffix must be anchored at the end of `host` and preceded by a `.`
    /// or whitespace: `mail.example.com` matches `example.com`,
    /// `notexample.com` and `example.com` itself do not.
    pub fn is_temporary(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.temporary
            .iter()
            .any(|suffix| has_label_suffix(&host, suffix))
    }

    /// Whether an MX host may be contacted at all; the negation of
    /// [`is_temporary`](Self::is_temporary).
    pub fn admits_exchange(&self, host: &str) -> bool {
        !self.is_temporary(host)
    }

    pub fn excluded(&self) -> impl Iterator<Item = &str> {
        self.excluded.iter().map(String::as_str)
    }

    pub fn temporary(&self) -> impl Iterator<Item = &str> {
        self.temporary.iter().map(String::as_str)
    }
}

fn merge_into<I, S>(set: &mut BTreeSet<String>, items: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    set.extend(
        items
            .into_iter()
            .map(|item| item.into().trim().to_lowercase())
            .filter(|item| !item.is_empty()),
    );
}

fn has_label_suffix(host: &str, suffix: &str) -> bool {
    host.strip_suffix(suffix)
        .and_then(|head| head.chars().last())
        .is_some_and(|boundary| boundary == '.' || boundary.is_whitespace())
}
