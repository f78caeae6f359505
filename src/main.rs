mod cli;

use crate::cli::Cli;
use clap::Parser;
use tracing::{error, info};

use rrb_server::debug::{DebugConfig, init_logging};
use rrb_server::domain::board::BoardDriver;
use rrb_server::infrastructure::hardware::mock_board::MockBoard;
use rrb_server::interfaces::web::server::create_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let debug_config = if cli.log_to_file {
        DebugConfig::production()
    } else {
        DebugConfig::default()
    };
    if let Err(e) = init_logging(&debug_config) {
        eprintln!("Failed to initialize logging: {e}");
    }

    // The physical RRB3 driver is an external collaborator; the server runs
    // against the mock until one is plugged in here.
    let board: Box<dyn BoardDriver> = Box::new(MockBoard::new());

    info!("Starting server on {}:{}", cli.host, cli.port);
    match create_server(cli.host, cli.port, board).await {
        Ok(_) => {
            info!("Server terminated normally");
        }
        Err(e) => {
            error!("Server failed: {e}");
            eprintln!("❌ Server failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
