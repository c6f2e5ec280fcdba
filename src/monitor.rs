//! A stand-in for the life manager's monitor socket.
//!
//! It answers the suspend request with a fixed acknowledgment and closes any
//! other connection without replying.

use std::fs;
use std::io::{self, Read, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{error, info, warn};

use crate::config::{RECV_BUF_LEN, SUSPEND_ACK, SUSPEND_REQUEST};

#[derive(Debug)]
pub struct MockMonitor {
    listener: UnixListener,
    socket_path: PathBuf,
    handler: Arc<Handler>,
}

#[derive(Debug)]
struct Handler {
    request: String,
    ack: String,
}

impl MockMonitor {
    /// Binds to `socket_path`, replacing a stale socket file if present.
    pub fn bind(socket_path: impl AsRef<Path>) -> io::Result<Self> {
        let socket_path = socket_path.as_ref().to_path_buf();
        if fs::metadata(&socket_path).is_ok() {
            fs::remove_file(&socket_path)?;
        }

        let listener = UnixListener::bind(&socket_path)?;
        Ok(Self {
            listener,
            socket_path,
            handler: Arc::new(Handler {
                request: SUSPEND_REQUEST.to_string(),
                ack: SUSPEND_ACK.to_string(),
            }),
        })
    }

    pub fn with_ack(mut self, ack: impl Into<String>) -> Self {
        self.handler = Arc::new(Handler {
            request: self.handler.request.clone(),
            ack: ack.into(),
        });
        self
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Accepts clients until the listener fails.
    /// If `single_shot` is true, handles one client inline and returns.
    pub fn serve(&self, single_shot: bool) -> io::Result<()> {
        for stream in self.listener.incoming() {
            let stream = stream?;
            if single_shot {
                self.handler.handle(stream);
                break;
            }
            let handler = Arc::clone(&self.handler);
            std::thread::spawn(move || handler.handle(stream));
        }
        Ok(())
    }
}

impl Drop for MockMonitor {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.socket_path) {
            error!("Failed to remove socket file {:?}: {}", self.socket_path, e);
        }
    }
}

impl Handler {
    fn handle(&self, stream: UnixStream) {
        if let Err(e) = self.respond(stream) {
            error!("Error serving client: {}", e);
        }
    }

    fn respond(&self, mut stream: UnixStream) -> io::Result<()> {
        let mut buffer = [0; RECV_BUF_LEN];
        let bytes_read = stream.read(&mut buffer)?;
        let received = String::from_utf8_lossy(&buffer[..bytes_read]);

        if received != self.request {
            warn!("Unexpected request {:?}, closing", received);
            return Ok(());
        }

        info!("Received {}, replying {}", received, self.ack);
        stream.write_all(self.ack.as_bytes())
    }
}
