//! Logging setup
//!
//! Logs go to stderr so stdout carries only the report.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_subscriber::{
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
    registry::LookupSpan,
    EnvFilter,
};

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Label and ANSI colour for a level
fn level_style(level: Level) -> (&'static str, &'static str) {
    match level {
        Level::TRACE => ("TRACE", "\x1b[35m"),
        Level::DEBUG => ("DEBUG", "\x1b[34m"),
        Level::INFO => ("INFO", "\x1b[32m"),
        Level::WARN => ("WARN", "\x1b[33m"),
        Level::ERROR => ("ERROR", "\x1b[31m"),
    }
}

/// `2025-12-02T00:50:44.809Z [INFO] message`, with the event target after
/// the level when `with_target` is set (`[DEBUG] voltage_regcodec::pipeline:`).
struct ReportLogFormat {
    with_target: bool,
}

impl<S, N> FormatEvent<S, N> for ReportLogFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let (label, color) = level_style(*meta.level());

        write!(writer, "{} ", chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"))?;
        if writer.has_ansi_escapes() {
            write!(writer, "{}[{}]\x1b[0m ", color, label)?;
        } else {
            write!(writer, "[{}] ", label)?;
        }
        if self.with_target {
            write!(writer, "{}: ", meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Build the filter: `RUST_LOG` wins over the configured level
fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| anyhow!("Invalid log level '{}': {}", level, e))
}

/// Install the global subscriber. `verbose` adds event targets to each line.
pub fn init(level: &str, verbose: bool) -> Result<()> {
    let filter = build_filter(level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .event_format(ReportLogFormat {
            with_target: verbose,
        })
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    INSTALLED.store(true, Ordering::Release);
    Ok(())
}

/// Whether `init` has installed the subscriber
pub fn is_initialized() -> bool {
    INSTALLED.load(Ordering::Acquire)
}
