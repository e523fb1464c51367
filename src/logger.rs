use std::time::SystemTime;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

/// Installs the global logger. Output goes to stderr so CSV written to
/// stdout stays clean.
pub fn setup_logger(level: &str) -> Result<()> {
    let level: LevelFilter = level
        .parse()
        .with_context(|| format!("invalid log level '{level}'"))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                colored_level(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn colored_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red().bold(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".dimmed(),
    }
}
