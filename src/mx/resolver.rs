use trust_dns_resolver::{
    Resolver,
    error::{ResolveError, ResolveErrorKind},
};

use super::{Error, MxCandidate};
use crate::transcript::Transcript;

/// Builds a synchronous resolver from the system configuration.
pub fn system_resolver() -> Result<Resolver, Error> {
    Resolver::from_system_conf().map_err(Error::resolver_init)
}

/// Looks up MX records for `domain`, sorted by weight then host.
///
/// A domain without MX records yields an empty list, not an error.
pub fn lookup_candidates<R>(resolver: &R, domain: &str) -> Result<Vec<MxCandidate>, Error>
where
    R: LookupMx + ?Sized,
{
    let domain = domain.trim();
    if domain.is_empty() {
        return Err(Error::EmptyDomain);
    }

    let mut candidates = match resolver.lookup_mx(domain) {
        Ok(candidates) => candidates,
        Err(err) if is_no_records(&err) => Vec::new(),
        Err(err) => return Err(Error::lookup(domain, err)),
    };

    candidates.sort();
    candidates.dedup();
    Ok(candidates)
}

/// Resolves the hosts to try for `domain`, in order. Never empty.
///
/// Records exactly one transcript line listing every candidate.
pub fn resolve_candidates<R>(
    resolver: &R,
    domain: &str,
    transcript: &mut Transcript,
) -> Vec<MxCandidate>
where
    R: LookupMx + ?Sized,
{
    let (candidates, fallback_reason) = match lookup_candidates(resolver, domain) {
        Ok(candidates) if !candidates.is_empty() => (candidates, None),
        Ok(_) => (
            vec![MxCandidate::implicit(domain)],
            Some("no MX records".to_string()),
        ),
        Err(err) => (vec![MxCandidate::implicit(domain)], Some(err.to_string())),
    };

    let listing = candidates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    match fallback_reason {
        Some(reason) => transcript.record(format!("mx candidates: {listing} [fallback: {reason}]")),
        None => transcript.record(format!("mx candidates: {listing}")),
    }
    candidates
}

pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}

fn is_no_records(err: &ResolveError) -> bool {
    matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. })
}

/// Source of MX records. Implemented for the system [`Resolver`]; tests
/// substitute a stub.
pub trait LookupMx {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxCandidate>, ResolveError>;
}

impl LookupMx for Resolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxCandidate>, ResolveError> {
        let lookup = Resolver::mx_lookup(self, domain)?;
        let mut candidates = Vec::new();
        for mx in lookup.iter() {
            let host = normalize_exchange(mx.exchange().to_utf8());
            candidates.push(MxCandidate::new(mx.preference(), host));
        }
        Ok(candidates)
    }
}

#[cfg(test)]
impl LookupMx for crate::mx::tests::StubResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxCandidate>, ResolveError> {
        (self.on_lookup)(domain)
    }
}
