use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;

use reelscope::config::Config;
use reelscope::controller::Controller;
use reelscope::services::BackendProvider;
use reelscope::surface::TerminalSurface;

/// Terminal viewer for a hybrid movie-recommendation service
#[derive(Parser, Debug)]
#[command(name = "reelscope", version, about)]
struct Cli {
    /// User id to analyze; omit for an interactive prompt
    user_id: Option<String>,

    /// Backend address, overrides BACKEND_URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics on stderr; stdout belongs to the surface
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reelscope=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let base_url = cli.base_url.unwrap_or(config.backend_url);
    tracing::info!(base_url = %base_url, "Starting reelscope");

    let provider = BackendProvider::new(&base_url)?;
    let controller = Controller::new(Arc::new(provider), Arc::new(TerminalSurface::new()));

    match cli.user_id {
        Some(user_id) => controller.trigger(&user_id).await,
        None => run_prompt_loop(&controller).await?,
    }

    Ok(())
}

/// Reads user ids from stdin until EOF or a quit word
async fn run_prompt_loop(controller: &Controller) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\nuser id> ");
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(line) => line?.trim().to_string(),
            None => break,
        };
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        controller.trigger(&input).await;
    }

    Ok(())
}
