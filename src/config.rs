use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SOCKET_PATH: &str = "/var/lib/life_mngr/monitor.sock";
pub const SUSPEND_REQUEST: &str = "req_sys_suspend";
pub const SUSPEND_ACK: &str = "ack_sys_suspend";
pub const RECV_BUF_LEN: usize = 1024;
/// Upper bound on the receive buffer; the acknowledgment is a short token.
pub const MAX_BUF_LEN: usize = 64 * 1024;

/// Settings for one request/acknowledgment exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub socket_path: PathBuf,
    pub request: String,
    pub buf_len: usize,
    /// Read and write timeout. `None` blocks indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from(DEFAULT_SOCKET_PATH),
            request: SUSPEND_REQUEST.to_string(),
            buf_len: RECV_BUF_LEN,
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_socket_path(mut self, socket_path: impl AsRef<Path>) -> Self {
        self.socket_path = socket_path.as_ref().to_path_buf();
        self
    }

    pub fn with_request(mut self, request: impl Into<String>) -> Self {
        self.request = request.into();
        self
    }

    pub fn with_buf_len(mut self, buf_len: usize) -> Self {
        self.buf_len = buf_len;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_life_manager() {
        let config = ClientConfig::default();
        assert_eq!(config.socket_path, Path::new("/var/lib/life_mngr/monitor.sock"));
        assert_eq!(config.request, "req_sys_suspend");
        assert_eq!(config.buf_len, 1024);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::default()
            .with_socket_path("/tmp/p.sock")
            .with_request("req_ping")
            .with_buf_len(16)
            .with_timeout(Some(Duration::from_millis(250)));
        assert_eq!(config.socket_path, Path::new("/tmp/p.sock"));
        assert_eq!(config.request, "req_ping");
        assert_eq!(config.buf_len, 16);
        assert_eq!(config.timeout, Some(Duration::from_millis(250)));
    }
}
