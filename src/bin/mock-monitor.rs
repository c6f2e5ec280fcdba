use clap::Parser;
use log::{error, info};
use s3_trigger::{DEFAULT_SOCKET_PATH, MockMonitor, SUSPEND_ACK};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Answer suspend requests like the life manager", long_about = None)]
struct Args {
    /// Socket to listen on
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SOCKET_PATH)]
    socket: PathBuf,
    /// Acknowledgment sent back for a suspend request
    #[arg(long, default_value = SUSPEND_ACK)]
    ack: String,
    /// Exit after handling one client
    #[arg(long)]
    once: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let monitor = match MockMonitor::bind(&args.socket) {
        Ok(m) => m.with_ack(args.ack),
        Err(e) => {
            error!("Failed to bind to socket {:?}: {}", args.socket, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Monitor listening on {:?}", monitor.socket_path());
    if let Err(e) = monitor.serve(args.once) {
        error!("Error accepting connection: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
