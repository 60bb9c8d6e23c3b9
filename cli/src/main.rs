//! CLI entrypoint for zar-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use zar_application::ChatWidgetController;
use zar_infrastructure::{ConfigLoader, FileConfig, HttpChatGateway};
use zar_presentation::{ChatRepl, Cli, ConsoleFormatter, TerminalWidget};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting zar-chat");

    // === Configuration ===
    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    config.apply_overrides(cli.endpoint.as_deref(), cli.no_color);

    let issues = config.validate();
    for issue in &issues {
        warn!("{}", issue.message);
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("Invalid configuration: {}", issue.message);
    }

    if !config.output.color {
        ConsoleFormatter::disable_color();
    }

    // === Dependency Injection ===
    let gateway = Arc::new(HttpChatGateway::new(&config.server.endpoint)?);
    let widget = TerminalWidget::new(config.widget.bot_name.clone());
    let controller = ChatWidgetController::new(gateway, widget.controls())
        .with_config(config.widget.to_widget_config());

    let repl = ChatRepl::new(
        controller,
        Arc::clone(&widget.input),
        Arc::clone(&widget.submit),
    )
    .with_bot_name(config.widget.bot_name.clone())
    .with_endpoint(config.server.endpoint.clone());

    // Single message mode
    if let Some(message) = cli.message {
        repl.send_line(&message).await;
        return Ok(());
    }

    repl.run().await?;
    Ok(())
}
