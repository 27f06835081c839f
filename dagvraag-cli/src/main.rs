use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::openapi::{run_openapi, OpenApiArgs};
use commands::serve::{run_serve, ServeArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "dagvraag", author, version, about = "Question of the day API server")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve(ServeArgs),
    /// Print the OpenAPI document to stdout
    Openapi(OpenApiArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine, real environment variables still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => run_serve(args).await?,
        Commands::Openapi(args) => run_openapi(args)?,
    }

    Ok(())
}
