mod config;
mod platform;
mod report;
#[cfg(test)]
mod test_support;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{CheckerConfig, CliArgs, ReportFormat, USAGE};

fn main() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    // Warnings raised while loading go through a bootstrap subscriber until
    // the configured level is known.
    let bootstrap = log_subscriber("warn");
    let config = tracing::subscriber::with_default(bootstrap, || CheckerConfig::load(&args))?;
    tracing::subscriber::set_global_default(log_subscriber(&config.log_level))
        .context("failed installing log subscriber")?;

    let platform = platform::detect(&config);
    info!(
        platform = platform.name(),
        sections = config.sections.len(),
        format = ?config.format,
        "serial checker started"
    );

    let reports = report::collect(platform.as_ref(), &config.sections);
    let rendered = match config.format {
        ReportFormat::Text => report::render_text(&reports),
        ReportFormat::Json => report::render_json(&reports)?,
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").context("failed writing report")?;
    Ok(())
}

/// `RUST_LOG` wins over the configured level.
fn log_subscriber(level: &str) -> impl tracing::Subscriber + Send + Sync {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}
