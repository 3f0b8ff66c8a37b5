use clap::Parser;
use std::io;

use todo_server::logging::init_logging;
use todo_server::{run_server, Cli};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug, cli.log_level.as_deref());

    let config = cli.server_config();
    log::info!("Starting todo server on {}", config.bind_address());
    if cli.debug {
        log::debug!("Debug mode enabled");
        log::debug!("Server configuration: {:?}", config);
    }

    if let Err(e) = run_server(config).await {
        log::error!("Todo server exited with error: {}", e);
        return Err(e);
    }
    Ok(())
}
