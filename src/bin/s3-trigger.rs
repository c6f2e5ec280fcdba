use clap::Parser;
use clap::builder::TypedValueParser;
use s3_trigger::{
    ClientConfig, DEFAULT_SOCKET_PATH, MAX_BUF_LEN, RECV_BUF_LEN, RequestClient, SUSPEND_REQUEST,
    ack_line,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Send a suspend request to the life manager", long_about = None)]
struct Args {
    /// Monitor socket of the life manager
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SOCKET_PATH)]
    socket: PathBuf,
    /// Request token written to the socket
    #[arg(long, default_value = SUSPEND_REQUEST)]
    request: String,
    /// Maximum number of acknowledgment bytes to read
    #[arg(
        long,
        default_value_t = RECV_BUF_LEN,
        value_parser = clap::value_parser!(u32)
            .range(1..=MAX_BUF_LEN as i64)
            .map(|n| n as usize)
    )]
    buf_len: usize,
    /// Read/write timeout in milliseconds; blocks indefinitely when absent
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = ClientConfig::default()
        .with_socket_path(&args.socket)
        .with_request(args.request)
        .with_buf_len(args.buf_len)
        .with_timeout(args.timeout_ms.map(Duration::from_millis));

    match RequestClient::new(config).and_then(|client| client.send_suspend_request()) {
        Ok(ack) => {
            println!("{}", ack_line(&ack));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Client error: {}", e);
            ExitCode::FAILURE
        }
    }
}
