/// Ordered log of one probe run.
///
/// Lines are kept only when capture is enabled. With the `with-tracing`
/// feature every recorded line is also emitted as a `tracing` event, whether
/// or not it is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    enabled: bool,
    lines: Vec<String>,
}

impl Transcript {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            lines: Vec::new(),
        }
    }

    /// Diagnostic line (decision points, connection failures).
    pub fn record(&mut self, line: impl Into<String>) {
        let line = line.into();
        #[cfg(feature = "with-tracing")]
        tracing::debug!(target: "mailprobe", "{line}");
        self.push(line);
    }

    /// Raw server response, stored verbatim minus the line terminator.
    #[cfg_attr(not(feature = "with-tracing"), allow(unused_variables))]
    pub fn record_reply(&mut self, host: &str, reply: &str) {
        #[cfg(feature = "with-tracing")]
        tracing::trace!(target: "mailprobe", host, "S: {reply}");
        self.push(reply.to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn push(&mut self, line: String) {
        if self.enabled {
            self.lines.push(line);
        }
    }
}
