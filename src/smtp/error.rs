use std::io;

use thiserror::Error;

/// Failures while talking to one candidate host.
///
/// None of these abort a probe: the session logs them and the candidate
/// counts as a negative.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no address resolved for {host}")]
    NoAddress { host: String },
    #[error("connection to {host} failed: {source}")]
    Connect {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("timed out waiting for reply to {command}")]
    Timeout { command: String },
    #[error("connection closed before reply to {command}")]
    ConnectionClosed { command: String },
    #[error("I/O error: {source}")]
    Io {
        #[source]
        source: io::Error,
    },
}

impl SessionError {
    pub(crate) fn connect(host: &str, source: io::Error) -> Self {
        Self::Connect {
            host: host.to_string(),
            source,
        }
    }

    pub(crate) fn read(command: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => Self::Timeout {
                command: command.to_string(),
            },
            _ => Self::Io { source },
        }
    }

    pub(crate) fn io(source: io::Error) -> Self {
        Self::Io { source }
    }
}
