use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use diffprint::{cli::Cli, config::PrintConfig, diff_ops, Printer, Theme};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = cli.validate() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    cli.setup_logging();

    let config = match &cli.config {
        Some(path) => PrintConfig::load(path)?,
        None => PrintConfig::default(),
    };

    let old = fs::read_to_string(&cli.old)
        .with_context(|| format!("failed to read {}", cli.old.display()))?;
    let new = fs::read_to_string(&cli.new)
        .with_context(|| format!("failed to read {}", cli.new.display()))?;

    let algorithm = cli.algorithm.unwrap_or(config.algorithm);
    let granularity = cli.granularity.unwrap_or(config.granularity);
    tracing::debug!(?algorithm, ?granularity, "computing diff");

    let ops = diff_ops(&old, &new, algorithm, granularity);

    let theme = if cli.no_color || !config.color {
        Theme::plain()
    } else {
        Theme::default()
    };

    let printer = Printer::new()
        .before_label(cli.before.clone().unwrap_or(config.before_label))
        .after_label(cli.after.clone().unwrap_or(config.after_label))
        .context(cli.context.unwrap_or(config.context))
        .theme(theme);

    printer.print(&cli.diff_name(), &ops);

    Ok(())
}
