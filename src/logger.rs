use std::time::SystemTime;

use colored::Colorize;
use log::{Level, LevelFilter};

pub fn setup_logger(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let level = match record.level() {
                Level::Error => "ERROR".red(),
                Level::Warn => "WARN".yellow(),
                Level::Info => "INFO".green(),
                Level::Debug => "DEBUG".blue(),
                Level::Trace => "TRACE".dimmed(),
            };
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                level,
                record.target(),
                message
            ))
        })
        .level(level)
        // diesel_migrations is chatty at debug
        .level_for("diesel_migrations", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
