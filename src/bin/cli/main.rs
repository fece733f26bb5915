mod client;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use client::ShowroomClient;
use output::{OutputConfig, OutputFormat};
use showroom::config;
use std::process;

/// CLI for browsing the Showroom catalog
#[derive(Parser, Debug)]
#[clap(name = "showroom-cli", about = "CLI for the Showroom catalog service")]
struct Cli {
    /// Server URL to connect to
    #[clap(
        long,
        env = "SHOWROOM_URL",
        global = true
    )]
    server_url: Option<String>,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    format: OutputFormat,

    /// Quiet mode: minimal output (just slugs or counts)
    #[clap(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse projects
    #[command(subcommand)]
    Project(commands::project::ProjectCommands),
    /// Browse brands
    #[command(subcommand)]
    Brand(commands::brand::BrandCommands),
    /// Browse items
    #[command(subcommand)]
    Item(commands::item::ItemCommands),
    /// Browse the photo wall
    #[command(subcommand)]
    Photo(commands::photo::PhotoCommands),
    /// Browse tags
    #[command(subcommand)]
    Tag(commands::tag::TagCommands),
    /// Submit inquiries
    #[command(subcommand)]
    Inquiry(commands::inquiry::InquiryCommands),
}

/// Resolves the server URL from CLI args, config file, or defaults
///
/// Precedence: CLI flag / env var > config file > default (port based on debug/release)
fn resolve_server_url(cli_url: Option<String>) -> String {
    if let Some(url) = cli_url {
        return url;
    }

    // Try reading from config file
    let config_dir = config::get_config_dir_path();
    if let Some(ref dir) = config_dir {
        let config_path = dir.join("config.toml");
        if let Ok(update) = config::config_from_file(Some(config_path)) {
            if let Some(url) = update.server_url {
                return url;
            }
        }
    }

    // Default: port 3001 in debug builds, 3000 in release
    let port = if cfg!(debug_assertions) { 3001 } else { 3000 };
    format!("http://localhost:{}", port)
}

/// Formats an error for human-readable stderr output
fn format_error(err: &dyn std::error::Error) -> String {
    let err_string = err.to_string();

    // ClientError::Request wraps reqwest errors, check for connection issues
    if err_string.contains("error sending request")
        || err_string.contains("connection refused")
        || err_string.contains("Connection refused")
        || err_string.contains("tcp connect error")
    {
        return format!(
            "Could not connect to server. Is showroom running?\n  {}",
            err_string
        );
    }

    // ClientError::Server already formats as "Server error (STATUS): message"
    // so we can return it directly
    err_string
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let server_url = resolve_server_url(cli.server_url);
    let client = ShowroomClient::new(server_url);
    let output_config = OutputConfig {
        format: cli.format,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Project(cmd) => commands::project::execute(&client, cmd, &output_config).await,
        Commands::Brand(cmd) => commands::brand::execute(&client, cmd, &output_config).await,
        Commands::Item(cmd) => commands::item::execute(&client, cmd, &output_config).await,
        Commands::Photo(cmd) => commands::photo::execute(&client, cmd, &output_config).await,
        Commands::Tag(cmd) => commands::tag::execute(&client, cmd, &output_config).await,
        Commands::Inquiry(cmd) => commands::inquiry::execute(&client, cmd, &output_config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", format_error(e.as_ref()));
        process::exit(1);
    }
}
