//! fixit-geo - command line front end for category and map utilities

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fixit_geo::cli::{Cli, Command};
use fixit_geo::config::Config;
use fixit_geo::defaults::DEFAULT_LOG_FILTER;
use fixit_geo::services::category::{canonical_category_names, is_valid_category_name, normalize_category_name};
use fixit_geo::services::geo::travel_summary;
use fixit_geo::services::navigation::{
    open_maps, open_navigation, LinkHandler, MockLinkHandler, MockLinkState, SystemLinkHandler,
};
use fixit_geo::types::Coordinates;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    std::fs::create_dir_all(&config.logs_dir).ok();

    // File appender for persistent logs (daily rotation, JSON lines)
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.logs_dir, "fixit-geo.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Stdout carries command output, so console logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::fmt::layer().json().with_writer(non_blocking))
        .init();

    debug!("Configuration loaded: {:?}", config);

    run(cli.command, &config).await
}

async fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Normalize { inputs } => {
            for input in inputs {
                println!("{}", normalize_category_name(&input));
            }
        }
        Command::Validate { inputs } => {
            for input in inputs {
                println!("{}\t{}", input, is_valid_category_name(&input));
            }
        }
        Command::Categories => {
            for name in canonical_category_names() {
                println!("{}", name);
            }
        }
        Command::Distance { from_lat, from_lng, to_lat, to_lng, mode, json } => {
            let summary = travel_summary(
                &Coordinates::new(from_lat, from_lng),
                &Coordinates::new(to_lat, to_lng),
                mode,
            );
            if json {
                let out = serde_json::to_string_pretty(&summary).context("Failed to serialize travel summary")?;
                println!("{}", out);
            } else {
                println!("{} · {} ({})", summary.distance_label, summary.time_label, summary.mode);
            }
        }
        Command::Navigate { lat, lng, name, dry_run } => {
            if dry_run {
                let handler = MockLinkHandler::new(config.platform);
                open_navigation(&handler, lat, lng, name.as_deref()).await;
                print_dry_run(&handler.state());
                return Ok(());
            }
            let handler = system_handler(config);
            open_navigation(handler.as_ref(), lat, lng, name.as_deref()).await;
        }
        Command::Show { lat, lng, label, dry_run } => {
            if dry_run {
                let handler = MockLinkHandler::new(config.platform);
                open_maps(&handler, lat, lng, label.as_deref()).await;
                print_dry_run(&handler.state());
                return Ok(());
            }
            let handler = system_handler(config);
            open_maps(handler.as_ref(), lat, lng, label.as_deref()).await;
        }
    }

    Ok(())
}

/// Lines printed for a dry run: what would have been opened, or the alert
fn dry_run_lines(state: &MockLinkState) -> Vec<String> {
    let opened = state.opened.iter().map(|url| format!("open\t{}", url));
    let alerts = state
        .alerts
        .iter()
        .map(|(title, message)| format!("alert\t{}: {}", title, message));
    opened.chain(alerts).collect()
}

fn print_dry_run(state: &MockLinkState) {
    debug!("Dry run probed {} link(s)", state.probed.len());
    for line in dry_run_lines(state) {
        println!("{}", line);
    }
}

fn system_handler(config: &Config) -> Box<dyn LinkHandler> {
    info!("Using {} for {} links", config.url_opener, config.platform);
    Box::new(SystemLinkHandler::new(config.platform, config.url_opener.clone()))
}
