use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use closures::logging::{init_logging, LoggingConfig};
use closures::{demo, DemoConfig};

#[derive(Parser)]
#[command(name = "closure_demo")]
#[command(about = "Walk through counters and registries that hide their state in closures")]
struct Cli {
    /// TOML file overriding the default walkthrough
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let logging = LoggingConfig::default()
        .with_level(cli.log_level)
        .with_ansi(!cli.no_color);
    init_logging(&logging).map_err(|err| anyhow!("failed to initialize logging: {err}"))?;

    let config = match &cli.config {
        Some(path) => DemoConfig::from_file(path)
            .with_context(|| format!("loading demo config from {}", path.display()))?,
        None => DemoConfig::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&config, &mut out).context("running demo")?;
    out.flush()?;

    Ok(())
}
