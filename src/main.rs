//! nsfwxxx-downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use nsfwxxx_downloader::{
    api::SiteClient,
    cli::Args,
    config::{validate_config, validate_username, Config},
    error::{exit_codes, Error, Result},
    output::{print_banner, print_config_summary, print_error, print_run_stats},
    pipeline::run_pipeline,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Http(_) => ExitCode::from(exit_codes::NETWORK_ERROR as u8),
                Error::Scrape(_) | Error::UrlParse(_) => {
                    ExitCode::from(exit_codes::SCRAPE_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration and apply CLI overrides
    let mut config = Config::resolve(args.config.as_deref())?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let username = validate_username(&args.username)?;

    print_config_summary(
        &username,
        &config.site.base_url,
        &config.download_directory().display().to_string(),
    );

    let client = SiteClient::new(&config.site)?;
    let stats = run_pipeline(&client, &config, &username).await?;

    print_run_stats(&stats);

    Ok(())
}
