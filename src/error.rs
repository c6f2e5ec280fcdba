use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Broad failure class of an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The client was built with unusable settings.
    Config,
    /// Socket, path, permission or transport failure.
    Connection,
    /// The peer answered with nothing.
    Protocol,
    /// The answer was not text.
    Encoding,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid client configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("cannot connect to {}: {source}", path.display())]
    Connect { path: PathBuf, source: io::Error },

    #[error("cannot set socket timeout: {0}")]
    Timeout(#[source] io::Error),

    #[error("failed to send request: {0}")]
    Send(#[source] io::Error),

    #[error("failed to receive acknowledgment: {0}")]
    Receive(#[source] io::Error),

    #[error("peer closed the connection without acknowledging")]
    EmptyResponse,

    #[error("acknowledgment is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfig(_) => ErrorKind::Config,
            Self::Connect { .. } | Self::Timeout(_) | Self::Send(_) | Self::Receive(_) => {
                ErrorKind::Connection
            }
            Self::EmptyResponse => ErrorKind::Protocol,
            Self::Encoding(_) => ErrorKind::Encoding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes() {
        let refused = ClientError::Connect {
            path: PathBuf::from("/nonexistent.sock"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(refused.kind(), ErrorKind::Connection);
        assert_eq!(
            ClientError::Receive(io::Error::from(io::ErrorKind::WouldBlock)).kind(),
            ErrorKind::Connection
        );
        assert_eq!(ClientError::EmptyResponse.kind(), ErrorKind::Protocol);
        assert_eq!(ClientError::InvalidConfig("zero").kind(), ErrorKind::Config);

        let bad = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        assert_eq!(ClientError::from(bad).kind(), ErrorKind::Encoding);
    }

    #[test]
    fn test_connect_message_names_path() {
        let err = ClientError::Connect {
            path: PathBuf::from("/var/lib/life_mngr/monitor.sock"),
            source: io::Error::from(io::ErrorKind::ConnectionRefused),
        };
        assert!(
            err.to_string()
                .starts_with("cannot connect to /var/lib/life_mngr/monitor.sock: ")
        );
    }
}
