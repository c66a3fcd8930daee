use clap::Parser;
use log::error;

use runway::api::{Cli, Command, ProjectionDefaults, run_http_server, run_projection_command};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Serve { port } => run_http_server(port, ProjectionDefaults::default())
            .await
            .map_err(|e| format!("Server error: {e}")),
        Command::Project(args) => run_projection_command(args).map_err(|e| e.to_string()),
    };

    if let Err(msg) = outcome {
        error!("{msg}");
        std::process::exit(1);
    }
}
