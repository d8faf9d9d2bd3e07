//! hosting Server Binary
//!
//! Runs the HTTP server for hosting live Kabo rooms.
//! Supports WebSocket connections for real-time play.

use clap::Parser;
use kabo::*;

#[derive(Parser)]
#[command(about = "Kabo room server")]
struct Args {
    /// Address to bind the HTTP/WebSocket server to.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: String,
    /// Maximum hand total at which a cabo call is accepted.
    #[arg(long, default_value_t = 9)]
    cabo: Score,
}

#[tokio::main]
async fn main() {
    log();
    kys();
    let args = Args::parse();
    let rules = gameplay::Rules {
        cabo_threshold: args.cabo,
        ..Default::default()
    };
    hosting::Server::run(args.bind, rules).await.unwrap();
}
