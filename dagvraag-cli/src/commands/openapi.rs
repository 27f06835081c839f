//! Print the OpenAPI description of the HTTP API

use anyhow::{Context, Result};
use clap::Parser;

/// Arguments for the openapi command
#[derive(Parser, Debug)]
pub struct OpenApiArgs {
    /// Pretty-print the JSON document
    #[arg(long)]
    pub pretty: bool,
}

pub fn run_openapi(args: OpenApiArgs) -> Result<()> {
    let json = dagvraag_server::http::openapi::to_json(args.pretty)
        .context("Failed to render OpenAPI document")?;
    println!("{}", json);
    Ok(())
}
