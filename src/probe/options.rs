use std::borrow::Cow;
use std::time::Duration;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use super::ProbeError;

/// Identity announced in `HELO` when nothing better is known.
pub const DEFAULT_LOCAL_HOST: &str = "localhost";
pub const SMTP_PORT: u16 = 25;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration knobs for one probe.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    pub local_host: String,
    /// Envelope sender; `robot@<local_host>` when unset or empty.
    pub sender: Option<String>,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub port: u16,
    pub capture_transcript: bool,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            local_host: DEFAULT_LOCAL_HOST.to_string(),
            sender: None,
            connect_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
            port: SMTP_PORT,
            capture_transcript: false,
        }
    }
}

impl ProbeOptions {
    pub fn with_local_host(local_host: impl Into<String>) -> Self {
        Self {
            local_host: local_host.into(),
            ..Self::default()
        }
    }

    /// Picks the local identity: an explicit value first, then the host the
    /// caller's own request was addressed to (e.g. an HTTP `Host` header),
    /// then [`DEFAULT_LOCAL_HOST`].
    pub fn resolve_local_host(explicit: Option<&str>, host_header: Option<&str>) -> String {
        explicit
            .into_iter()
            .chain(host_header)
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(DEFAULT_LOCAL_HOST)
            .to_string()
    }

    pub fn sender(&self) -> Cow<'_, str> {
        match self.sender.as_deref().filter(|value| !value.is_empty()) {
            Some(sender) => Cow::Borrowed(sender),
            None => Cow::Owned(format!("robot@{}", self.local_host)),
        }
    }

    /// Rejects identities that would break the command line they are placed
    /// on.
    pub fn validate(&self) -> Result<(), ProbeError> {
        let host = self.local_host.as_str();
        if host.is_empty() || host.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ProbeError::InvalidLocalHost(host.to_string()));
        }
        let sender = self.sender();
        if sender
            .chars()
            .any(|c| c.is_control() || matches!(c, '<' | '>'))
        {
            return Err(ProbeError::InvalidSender(sender.into_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_probe_contract() {
        let options = ProbeOptions::default();
        assert_eq!(options.port, 25);
        assert_eq!(options.connect_timeout, Duration::from_secs(15));
        assert_eq!(options.read_timeout, Duration::from_secs(15));
        assert!(!options.capture_transcript);
        assert_eq!(options.sender(), "robot@localhost");
    }

    #[test]
    fn sender_derives_from_local_host_unless_set() {
        let mut options = ProbeOptions::with_local_host("probe.example.net");
        assert_eq!(options.sender(), "robot@probe.example.net");
        options.sender = Some(String::new());
        assert_eq!(options.sender(), "robot@probe.example.net");
        options.sender = Some("bounce@example.net".to_string());
        assert_eq!(options.sender(), "bounce@example.net");
    }

    #[test]
    fn local_host_resolution_order() {
        assert_eq!(
            ProbeOptions::resolve_local_host(Some("a.example"), Some("b.example")),
            "a.example"
        );
        assert_eq!(
            ProbeOptions::resolve_local_host(Some(" "), Some("b.example")),
            "b.example"
        );
        assert_eq!(
            ProbeOptions::resolve_local_host(None, None),
            DEFAULT_LOCAL_HOST
        );
    }

    #[test]
    fn validate_rejects_command_injection() {
        let options = ProbeOptions::with_local_host("evil\r\nRSET");
        assert!(matches!(
            options.validate(),
            Err(ProbeError::InvalidLocalHost(_))
        ));

        let options = ProbeOptions {
            sender: Some("a@b>\r\nRCPT TO:<x@y".to_string()),
            ..ProbeOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ProbeError::InvalidSender(_))
        ));

        assert!(ProbeOptions::default().validate().is_ok());
    }
}
