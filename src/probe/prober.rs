use trust_dns_resolver::Resolver;

use super::{ProbeError, ProbeRequest, ProbeResult};
use crate::mx::{LookupMx, resolve_candidates, system_resolver};
use crate::smtp::{Connector, SmtpScript, SmtpSession, TcpConnector};
use crate::transcript::Transcript;
use crate::validator::{domain_of, is_valid_email};

/// Null-route MX value published by domains that accept no mail.
const NULL_ROUTE: &str = "0.0.0.0";

/// Runs probes. Holds no per-probe state: everything a probe depends on
/// travels in its [`ProbeRequest`].
pub struct Prober<R = Resolver, C = TcpConnector> {
    resolver: R,
    connector: C,
}

impl Prober {
    /// System DNS configuration, plain TCP.
    pub fn system() -> Result<Self, ProbeError> {
        Ok(Self::new(system_resolver()?, TcpConnector))
    }
}

impl<R: LookupMx, C: Connector> Prober<R, C> {
    pub fn new(resolver: R, connector: C) -> Self {
        Self {
            resolver,
            connector,
        }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Checks whether `request.email` is accepted by one of its MX hosts.
    ///
    /// Candidates are tried one at a time in resolution order; the first
    /// accepting host ends the probe. Every failure mode resolves to `false`.
    pub fn probe(&self, request: &ProbeRequest) -> ProbeResult {
        let mut transcript = Transcript::new(request.options.capture_transcript);
        let exists = self.run(request, &mut transcript);
        ProbeResult {
            exists,
            transcript: transcript.into_lines(),
        }
    }

    fn run(&self, request: &ProbeRequest, transcript: &mut Transcript) -> bool {
        let ProbeRequest {
            email,
            options,
            policy,
        } = request;

        if !self.connector.is_available() {
            transcript.record("socket support unavailable");
            return false;
        }

        let domain = match domain_of(email) {
            Some(domain) if is_valid_email(email) => domain,
            _ => {
                transcript.record(format!("invalid email {email}"));
                return false;
            }
        };

        if let Err(err) = options.validate() {
            transcript.record(format!("invalid options: {err}"));
            return false;
        }

        if policy.is_excluded(domain) {
            transcript.record(format!("excluded domain {domain}"));
            return false;
        }

        let candidates = resolve_candidates(&self.resolver, domain, transcript);
        let script = SmtpScript::new(&options.local_host, &options.sender(), email);

        for (step, candidate) in candidates.iter().enumerate() {
            let host = candidate.host.as_str();
            if !policy.admits_exchange(host) {
                transcript.record(format!("excluded mxdomain {host}"));
                continue;
            }
            transcript.record(format!("step {step}: {host}"));
            if host.is_empty() || host == NULL_ROUTE {
                transcript.record(format!("{host}: invalid value"));
                continue;
            }

            let session = match SmtpSession::connect(
                &self.connector,
                host,
                options.port,
                options.connect_timeout,
                options.read_timeout,
            ) {
                Ok(session) => session,
                Err(err) => {
                    transcript.record(format!("{host}: no connection ({err})"));
                    continue;
                }
            };

            if session.run(&script, transcript) {
                return true;
            }
        }

        false
    }
}
