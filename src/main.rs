//! engpulse: terminal dashboard for engineering delivery metrics.
//!
//! Run: `engpulse`

use engpulse::app::App;
use engpulse::config::Config;
use engpulse::shell::Tab;
use engpulse::{debug, debug_log};

use anyhow::Result;
use clap::{Parser, ValueEnum};

/// Which tab to open at startup.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StartTab {
    /// Split-panel overview.
    Overview,
    /// Detailed metrics grid.
    Details,
}

/// engpulse: terminal dashboard for engineering delivery metrics
#[derive(Parser, Debug)]
#[command(name = "engpulse")]
#[command(version)]
#[command(about = "Engineering delivery metrics in your terminal", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Tab to open at startup
    #[arg(short, long, value_enum, default_value = "overview")]
    tab: StartTab,

    /// Disable mouse support (keyboard only)
    #[arg(long)]
    no_mouse: bool,

    /// Enable debug logging to stderr
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug || std::env::var("ENGPULSE_DEBUG").is_ok() {
        debug::enable();
    }

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default_path()
            .map(Config::load_or_default)
            .unwrap_or_default(),
    };

    if cli.no_mouse {
        config.global.mouse = false;
    }

    debug_log!(
        debug::Level::Info,
        "main",
        "starting with mouse={} poll_ms={}",
        config.global.mouse,
        config.global.poll_ms
    );

    let tab = match cli.tab {
        StartTab::Overview => Tab::Overview,
        StartTab::Details => Tab::Detailed,
    };

    let mut app = App::new(config).with_tab(tab);
    app.run()?;

    Ok(())
}
