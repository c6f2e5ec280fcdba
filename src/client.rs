use std::io::{Read, Write};
use std::os::unix::net::UnixStream;

use log::debug;

use crate::config::{ClientConfig, MAX_BUF_LEN};
use crate::error::ClientError;

/// Sends one request to the monitor socket and waits for its acknowledgment.
///
/// Every call opens its own connection. The stream is owned by the call and
/// closed when it returns, whether the exchange succeeded or not.
#[derive(Debug, Clone)]
pub struct RequestClient {
    config: ClientConfig,
}

impl RequestClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        if config.buf_len == 0 {
            return Err(ClientError::InvalidConfig("receive buffer size must be non-zero"));
        }
        if config.buf_len > MAX_BUF_LEN {
            return Err(ClientError::InvalidConfig("receive buffer size exceeds 64 KiB"));
        }
        if config.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ClientError::InvalidConfig("timeout must be non-zero"));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Connects, writes the request, reads a single chunk of at most
    /// `buf_len` bytes and decodes it as the acknowledgment.
    pub fn send_suspend_request(&self) -> Result<String, ClientError> {
        let path = &self.config.socket_path;
        debug!("connecting to {}", path.display());
        let mut stream = UnixStream::connect(path).map_err(|source| ClientError::Connect {
            path: path.clone(),
            source,
        })?;

        if let Some(timeout) = self.config.timeout {
            stream
                .set_read_timeout(Some(timeout))
                .map_err(ClientError::Timeout)?;
            stream
                .set_write_timeout(Some(timeout))
                .map_err(ClientError::Timeout)?;
        }

        stream
            .write_all(self.config.request.as_bytes())
            .map_err(ClientError::Send)?;
        debug!("sent {:?}", self.config.request);

        let mut buffer = vec![0; self.config.buf_len];
        let bytes_read = stream.read(&mut buffer).map_err(ClientError::Receive)?;
        if bytes_read == 0 {
            return Err(ClientError::EmptyResponse);
        }
        buffer.truncate(bytes_read);
        debug!("received {} bytes", bytes_read);

        Ok(String::from_utf8(buffer)?)
    }
}

/// The line the client prints after a successful exchange.
pub fn ack_line(ack: &str) -> String {
    format!("Waiting for ACK message...: {}", ack)
}
