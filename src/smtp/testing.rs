//! In-memory SMTP peers for session and probe tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Cursor, Read, Write};
use std::rc::Rc;
use std::time::Duration;

use super::{Connector, SessionError};

/// What the client did to one scripted stream.
#[derive(Debug, Default)]
pub(crate) struct Wire {
    pub written: Vec<u8>,
    pub drops: usize,
}

impl Wire {
    pub(crate) fn commands(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.written)
            .split_terminator("\r\n")
            .map(str::to_string)
            .collect()
    }
}

/// Replays canned reply lines. Once drained it either reports EOF or, when
/// `stall` is set, a read timeout.
pub(crate) struct ScriptedStream {
    replies: Cursor<Vec<u8>>,
    stall: bool,
    wire: Rc<RefCell<Wire>>,
}

impl ScriptedStream {
    pub(crate) fn new(replies: &[&str], stall: bool) -> (Self, Rc<RefCell<Wire>>) {
        let wire = Rc::new(RefCell::new(Wire::default()));
        let stream = Self {
            replies: Cursor::new(replies.concat().into_bytes()),
            stall,
            wire: Rc::clone(&wire),
        };
        (stream, wire)
    }
}

impl Read for ScriptedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.replies.read(buf)?;
        if read == 0 && self.stall && !buf.is_empty() {
            return Err(io::Error::new(io::ErrorKind::WouldBlock, "read timed out"));
        }
        Ok(read)
    }
}

impl Write for ScriptedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.wire.borrow_mut().written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ScriptedStream {
    fn drop(&mut self) {
        self.wire.borrow_mut().drops += 1;
    }
}

struct MockServer {
    replies: Vec<&'static str>,
    stall: bool,
}

/// Hands out [`ScriptedStream`]s per host; unknown hosts refuse the connection.
pub(crate) struct MockConnector {
    available: bool,
    servers: HashMap<String, MockServer>,
    connects: RefCell<Vec<String>>,
    wires: RefCell<HashMap<String, Rc<RefCell<Wire>>>>,
}

impl MockConnector {
    pub(crate) fn new() -> Self {
        Self {
            available: true,
            servers: HashMap::new(),
            connects: RefCell::new(Vec::new()),
            wires: RefCell::new(HashMap::new()),
        }
    }

    pub(crate) fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub(crate) fn with_server(mut self, host: &str, replies: &[&'static str]) -> Self {
        self.servers.insert(
            host.to_string(),
            MockServer {
                replies: replies.to_vec(),
                stall: false,
            },
        );
        self
    }

    pub(crate) fn with_stalling_server(mut self, host: &str, replies: &[&'static str]) -> Self {
        self.servers.insert(
            host.to_string(),
            MockServer {
                replies: replies.to_vec(),
                stall: true,
            },
        );
        self
    }

    pub(crate) fn connects(&self) -> Vec<String> {
        self.connects.borrow().clone()
    }

    pub(crate) fn wire(&self, host: &str) -> Option<Rc<RefCell<Wire>>> {
        self.wires.borrow().get(host).cloned()
    }
}

impl Connector for MockConnector {
    type Stream = ScriptedStream;

    fn is_available(&self) -> bool {
        self.available
    }

    fn connect(
        &self,
        host: &str,
        _port: u16,
        _connect_timeout: Duration,
        _read_timeout: Duration,
    ) -> Result<ScriptedStream, SessionError> {
        self.connects.borrow_mut().push(host.to_string());
        let server = self.servers.get(host).ok_or_else(|| {
            SessionError::connect(host, io::Error::from(io::ErrorKind::ConnectionRefused))
        })?;
        let (stream, wire) = ScriptedStream::new(&server.replies, server.stall);
        self.wires.borrow_mut().insert(host.to_string(), wire);
        Ok(stream)
    }
}
