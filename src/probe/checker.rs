use trust_dns_resolver::Resolver;

use super::{ProbeError, ProbeOptions, ProbeRequest, Prober};
use crate::mx::LookupMx;
use crate::policy::DomainPolicy;
use crate::smtp::{Connector, TcpConnector};

/// Builder-style front end for probing one address repeatedly.
///
/// Domain lists, sender and debug mode accumulate on the checker and apply
/// to every later [`check`](Self::check). All mutation goes through
/// `&mut self`; share a checker across threads only behind a lock.
pub struct MailboxChecker<R = Resolver, C = TcpConnector> {
    prober: Prober<R, C>,
    email: String,
    options: ProbeOptions,
    policy: DomainPolicy,
    logs: Vec<String>,
}

impl MailboxChecker {
    /// Uses the system resolver. `local_host` falls back to
    /// [`DEFAULT_LOCAL_HOST`](super::DEFAULT_LOCAL_HOST).
    pub fn new(email: impl Into<String>, local_host: Option<&str>) -> Result<Self, ProbeError> {
        let options = ProbeOptions::with_local_host(ProbeOptions::resolve_local_host(local_host, None));
        Ok(Self::with_prober(Prober::system()?, email, options))
    }
}

impl<R: LookupMx, C: Connector> MailboxChecker<R, C> {
    pub fn with_prober(prober: Prober<R, C>, email: impl Into<String>, options: ProbeOptions) -> Self {
        Self {
            prober,
            email: email.into(),
            options,
            policy: DomainPolicy::default(),
            logs: Vec::new(),
        }
    }

    pub fn add_excluded_domains<I, S>(&mut self, domains: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.add_excluded_domains(domains);
        self
    }

    pub fn add_temporary_domains<I, S>(&mut self, suffixes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.policy.add_temporary_domains(suffixes);
        self
    }

    pub fn set_sender(&mut self, sender: impl Into<String>) -> &mut Self {
        self.options.sender = Some(sender.into());
        self
    }

    /// Clears the previous logs and captures a transcript on later checks.
    pub fn set_debug(&mut self) -> &mut Self {
        self.logs.clear();
        self.options.capture_transcript = true;
        self
    }

    /// Snapshot of the current configuration as a standalone request.
    pub fn request(&self) -> ProbeRequest {
        ProbeRequest::new(self.email.clone())
            .with_options(self.options.clone())
            .with_policy(self.policy.clone())
    }

    pub fn check(&mut self) -> bool {
        let result = self.prober.probe(&self.request());
        self.logs = result.transcript;
        result.exists
    }

    /// Transcript of the last [`check`](Self::check).
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    pub fn options(&self) -> &ProbeOptions {
        &self.options
    }

    pub fn policy(&self) -> &DomainPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mx::MxCandidate;
    use crate::mx::tests::StubResolver;
    use crate::smtp::testing::MockConnector;

    fn checker(email: &str) -> MailboxChecker<StubResolver, MockConnector> {
        let prober = Prober::new(
            StubResolver::answering(vec![MxCandidate::new(10, "mx.example.com")]),
            MockConnector::new().with_server(
                "mx.example.com",
                &["220 ready\r\n", "250 hi\r\n", "250 ok\r\n", "250 ok\r\n"],
            ),
        );
        MailboxChecker::with_prober(prober, email, ProbeOptions::with_local_host("probe.test"))
    }

    #[test]
    fn logs_are_empty_without_debug() {
        let mut checker = checker("user@example.com");
        assert!(checker.check());
        assert!(checker.logs().is_empty());
    }

    #[test]
    fn each_check_starts_a_fresh_transcript() {
        let mut checker = checker("user@example.com");
        checker.set_debug();
        assert!(checker.check());
        let first = checker.logs().to_vec();
        assert!(checker.check());
        assert_eq!(checker.logs(), first.as_slice());
        assert_eq!(
            checker.logs().iter().filter(|l| l.starts_with("mx candidates")).count(),
            1
        );
    }

    #[test]
    fn set_debug_clears_previous_logs() {
        let mut checker = checker("bad-address");
        checker.set_debug();
        assert!(!checker.check());
        assert_eq!(checker.logs(), ["invalid email bad-address"]);
        checker.set_debug();
        assert!(checker.logs().is_empty());
    }

    #[test]
    fn accumulated_configuration_applies_to_later_checks() {
        let mut checker = checker("user@example.com");
        checker
            .add_temporary_domains(["example.org"])
            .add_excluded_domains(["other.com"])
            .set_debug();
        assert!(checker.check());

        checker.add_excluded_domains(vec!["EXAMPLE.com".to_string()]);
        assert!(!checker.check());
        assert_eq!(checker.logs(), ["excluded domain example.com"]);
        assert_eq!(checker.policy().excluded().count(), 2);
    }

    #[test]
    fn sender_change_rebuilds_the_script() {
        let mut checker = checker("user@example.com");
        assert_eq!(checker.request().options.sender(), "robot@probe.test");
        checker.set_sender("bounce@probe.test");
        assert!(checker.check());
        assert_eq!(checker.options().sender(), "bounce@probe.test");
    }
}
