use anyhow::Result;
use clap::Parser;
use luapad::cli::Cli;
use luapad::config::AppConfig;
use luapad::console::init_console;
use luapad::tui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config to get configured verbosity level
    let mut config = AppConfig::load().unwrap_or_default();

    // Initialize console with effective verbosity (CLI takes precedence over config)
    init_console(cli.get_effective_verbosity(config.get_verbosity()));

    if let Some(endpoint) = cli.endpoint.clone() {
        config.endpoint = endpoint;
    }

    tui::run(config, cli.files).await
}
