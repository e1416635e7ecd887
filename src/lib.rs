#![forbid(unsafe_code)]
//! mailprobe_lib: does this mailbox accept mail? Asked over a partial SMTP
//! handshake, without ever sending a message.

pub mod mx;
pub mod policy;
pub mod probe;
pub mod smtp;
pub mod transcript;
pub mod validator;

pub use mx::{DEFAULT_WEIGHT, Error as MxError, LookupMx, MxCandidate, resolve_candidates};
pub use policy::DomainPolicy;
pub use probe::{
    DEFAULT_LOCAL_HOST, MailboxChecker, ProbeError, ProbeOptions, ProbeRequest, ProbeResult,
    Prober,
};
pub use smtp::{Connector, SessionError, SmtpScript, SmtpSession, SmtpStep, TcpConnector};
pub use transcript::Transcript;
pub use validator::{domain_of, is_valid_email};
