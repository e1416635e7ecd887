use std::io::{BufRead, BufReader, Read, Write};
use std::time::Duration;

use super::{Connector, SessionError, SmtpScript, SmtpStep};
use crate::transcript::Transcript;

/// Upper bound for a single reply read. Anything beyond stays buffered for
/// the next step.
pub const MAX_REPLY_LEN: u64 = 1024;

const QUIT_CMD: &str = "QUIT";

/// One connection to one candidate host.
///
/// Each step writes one command and reads exactly one reply line; the first
/// line read is therefore whatever the server sent first (its greeting).
/// Multi-line replies are not reassembled.
pub struct SmtpSession<S: Read + Write> {
    host: String,
    stream: BufReader<S>,
}

impl<S: Read + Write> SmtpSession<S> {
    pub fn new(host: impl Into<String>, stream: S) -> Self {
        Self {
            host: host.into(),
            stream: BufReader::new(stream),
        }
    }

    pub fn connect<C>(
        connector: &C,
        host: &str,
        port: u16,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Result<Self, SessionError>
    where
        C: Connector<Stream = S>,
    {
        let stream = connector.connect(host, port, connect_timeout, read_timeout)?;
        Ok(Self::new(host, stream))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Plays `script` until a step fails, then sends `QUIT` and closes the
    /// connection. The verdict is the outcome of the last step attempted.
    pub fn run(mut self, script: &SmtpScript, transcript: &mut Transcript) -> bool {
        let mut accepted = false;
        for (step, command) in script.commands() {
            accepted = match self.exchange(step, command) {
                Ok(reply) => {
                    transcript.record_reply(self.host(), &reply);
                    is_positive(&reply)
                }
                Err(err) => {
                    transcript.record(format!("{}: {step} failed: {err}", self.host()));
                    false
                }
            };
            if !accepted {
                break;
            }
        }
        self.quit(transcript);
        accepted
    }

    fn exchange(&mut self, step: SmtpStep, command: &str) -> Result<String, SessionError> {
        self.send(command)?;
        self.read_reply(step)
    }

    fn send(&mut self, command: &str) -> Result<(), SessionError> {
        let mut line = command.as_bytes().to_vec();
        line.extend_from_slice(b"\r\n");
        let stream = self.stream.get_mut();
        stream.write_all(&line).map_err(SessionError::io)?;
        stream.flush().map_err(SessionError::io)
    }

    fn read_reply(&mut self, step: SmtpStep) -> Result<String, SessionError> {
        let mut raw = Vec::new();
        let read = (&mut self.stream)
            .take(MAX_REPLY_LEN)
            .read_until(b'\n', &mut raw)
            .map_err(|err| SessionError::read(&step.to_string(), err))?;
        if read == 0 {
            return Err(SessionError::ConnectionClosed {
                command: step.to_string(),
            });
        }
        let text = String::from_utf8_lossy(&raw);
        Ok(text.trim_end_matches(['\r', '\n']).to_string())
    }

    // Consumes the session: the stream is dropped, and closed, right after.
    fn quit(mut self, transcript: &mut Transcript) {
        if let Err(err) = self.send(QUIT_CMD) {
            transcript.record(format!("{}: {QUIT_CMD} failed: {err}", self.host()));
        }
    }
}

/// Positive completion, judged on the leading digit only.
pub fn is_positive(reply: &str) -> bool {
    reply.starts_with('2')
}
