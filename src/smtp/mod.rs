//! Plain-text SMTP probing over one connection.
//!
//! The script is `HELO`, `MAIL FROM`, `RCPT TO`, then a lower-case `data`
//! probe; the session always disconnects with `QUIT` and never sends a
//! message body. Replies are classified by their first character only.

mod connector;
mod error;
mod script;
mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use connector::{Connector, TcpConnector};
pub use error::SessionError;
pub use script::{SmtpScript, SmtpStep};
pub use session::{MAX_REPLY_LEN, SmtpSession, is_positive};
