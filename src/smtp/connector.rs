use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use super::SessionError;

/// Opens the byte stream a session runs over.
pub trait Connector {
    type Stream: Read + Write;

    /// Whether this environment can open sockets at all. A probe gives up
    /// before resolving anything when this is `false`.
    fn is_available(&self) -> bool {
        true
    }

    /// Connects to `host:port`. `read_timeout` bounds every subsequent read on
    /// the returned stream. A zero duration disables the corresponding bound.
    fn connect(
        &self,
        host: &str,
        port: u16,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Result<Self::Stream, SessionError>;
}

/// Plain TCP, no TLS.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

impl Connector for TcpConnector {
    type Stream = TcpStream;

    fn connect(
        &self,
        host: &str,
        port: u16,
        connect_timeout: Duration,
        read_timeout: Duration,
    ) -> Result<TcpStream, SessionError> {
        let addrs = (host, port)
            .to_socket_addrs()
            .map_err(|err| SessionError::connect(host, err))?;

        let mut last_err = None;
        for addr in addrs {
            let attempt = match nonzero(connect_timeout) {
                Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
                None => TcpStream::connect(addr),
            };
            match attempt {
                Ok(stream) => {
                    stream
                        .set_read_timeout(nonzero(read_timeout))
                        .map_err(SessionError::io)?;
                    stream
                        .set_write_timeout(nonzero(read_timeout))
                        .map_err(SessionError::io)?;
                    return Ok(stream);
                }
                Err(err) => last_err = Some(err),
            }
        }

        Err(match last_err {
            Some(err) => SessionError::connect(host, err),
            None => SessionError::NoAddress {
                host: host.to_string(),
            },
        })
    }
}

fn nonzero(duration: Duration) -> Option<Duration> {
    (!duration.is_zero()).then_some(duration)
}
