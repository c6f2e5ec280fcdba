//! Asks the life manager to suspend the system.
//!
//! The request is a bare token written to the monitor's Unix socket; the
//! manager answers with a short acknowledgment.

pub mod client;
pub mod config;
pub mod error;
pub mod monitor;

pub use client::{RequestClient, ack_line};
pub use config::{
    ClientConfig, DEFAULT_SOCKET_PATH, MAX_BUF_LEN, RECV_BUF_LEN, SUSPEND_ACK, SUSPEND_REQUEST,
};
pub use error::{ClientError, ErrorKind};
pub use monitor::MockMonitor;
