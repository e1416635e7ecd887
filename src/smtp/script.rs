use std::fmt;

/// The four probe commands, in the order they are sent.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpStep {
    Helo,
    MailFrom,
    RcptTo,
    /// Lower-case `data`: provokes a reply, no message body ever follows.
    Data,
}

impl fmt::Display for SmtpStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Helo => "HELO",
            Self::MailFrom => "MAIL FROM",
            Self::RcptTo => "RCPT TO",
            Self::Data => "data",
        })
    }
}

/// Command lines for one probe, without line terminators.
///
/// Derived from the local identity, sender and target on every probe, so a
/// changed sender is always reflected on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpScript {
    commands: Vec<(SmtpStep, String)>,
}

impl SmtpScript {
    pub fn new(local_host: &str, sender: &str, target: &str) -> Self {
        Self {
            commands: vec![
                (SmtpStep::Helo, format!("HELO {local_host}")),
                (SmtpStep::MailFrom, format!("MAIL FROM:<{sender}>")),
                (SmtpStep::RcptTo, format!("RCPT TO:<{target}>")),
                (SmtpStep::Data, "data".to_string()),
            ],
        }
    }

    pub fn commands(&self) -> impl Iterator<Item = (SmtpStep, &str)> {
        self.commands
            .iter()
            .map(|(step, line)| (*step, line.as_str()))
    }
}
