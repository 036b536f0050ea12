mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use authfetch_lib::authfetch_api::Method;
use authfetch_lib::config::parse_timeout_ms;
use authfetch_lib::{connect, Locale, Platform, Settings, TokenSource};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "authfetch")]
#[command(about = "Send authenticated HTTP requests and surface failures as notifications")]
struct Cli {
    /// Output format: body, json, or table
    #[arg(long, default_value = "body", global = true)]
    output: String,

    /// Base URL for relative request URLs
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<String>,

    /// Notification style: android (toast), ios, web, desktop (dialog)
    #[arg(long, global = true)]
    platform: Option<String>,

    /// Notification language: ko or en
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Access token to send as a bearer token
    #[arg(long, global = true, conflicts_with_all = ["token_file", "token_env"])]
    token: Option<String>,

    /// File holding the access token, re-read on every request
    #[arg(long, global = true, conflicts_with = "token_env")]
    token_file: Option<PathBuf>,

    /// Environment variable holding the access token, re-read on every request
    #[arg(long, global = true)]
    token_env: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a GET request
    Get(commands::request::ReadArgs),
    /// Send a DELETE request
    Delete(commands::request::ReadArgs),
    /// Send a POST request
    Post(commands::request::WriteArgs),
    /// Send a PUT request
    Put(commands::request::WriteArgs),
    /// Send a PATCH request
    Patch(commands::request::WriteArgs),
}

impl Cli {
    /// Environment settings with command-line flags applied on top.
    fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::from_env()?;
        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(raw) = &self.timeout_ms {
            settings.timeout = parse_timeout_ms("--timeout-ms", raw)?;
        }
        if let Some(platform) = &self.platform {
            settings.platform = platform.parse::<Platform>().map_err(anyhow::Error::msg)?;
        }
        if let Some(locale) = &self.locale {
            settings.locale = locale.parse::<Locale>().map_err(anyhow::Error::msg)?;
        }
        if let Some(token) = &self.token {
            settings.token = TokenSource::Literal(token.clone());
        } else if let Some(path) = &self.token_file {
            settings.token = TokenSource::File(path.clone());
        } else if let Some(var) = &self.token_env {
            settings.token = TokenSource::Env(var.clone());
        }
        Ok(settings)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("authfetch=info".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "table" => OutputFormat::Table,
        _ => OutputFormat::Body,
    };

    let settings = cli.settings()?;
    let client = connect(&settings)?;

    match &cli.command {
        Commands::Get(args) => commands::request::read(args, Method::GET, &client, &format).await?,
        Commands::Delete(args) => {
            commands::request::read(args, Method::DELETE, &client, &format).await?
        }
        Commands::Post(args) => {
            commands::request::write(args, Method::POST, &client, &format).await?
        }
        Commands::Put(args) => commands::request::write(args, Method::PUT, &client, &format).await?,
        Commands::Patch(args) => {
            commands::request::write(args, Method::PATCH, &client, &format).await?
        }
    }

    Ok(())
}
