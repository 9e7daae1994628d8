use colored::{ColoredString, Colorize};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "GODROLL_LOG";

/// Writes `<level> [target: ]fields`, one line per event.
///
/// The level is a lowercase tag padded to a fixed width. Debug and trace
/// events also name their target module.
pub struct GodrollFormatter;

/// Lowercase tag printed in front of each event.
fn level_tag(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "error",
        Level::WARN => "warn",
        Level::INFO => "info",
        Level::DEBUG => "debug",
        Level::TRACE => "trace",
    }
}

fn paint_tag(level: &Level) -> ColoredString {
    let tag = format!("{:<5}", level_tag(level));
    match *level {
        Level::ERROR => tag.red().bold(),
        Level::WARN => tag.yellow().bold(),
        Level::INFO => tag.green(),
        Level::DEBUG => tag.cyan(),
        Level::TRACE => tag.dimmed(),
    }
}

impl<S, N> FormatEvent<S, N> for GodrollFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(writer, "{} ", paint_tag(meta.level()))?;
        if *meta.level() >= Level::DEBUG {
            write!(writer, "{} ", format!("{}:", meta.target()).dimmed())?;
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Filter used when `GODROLL_LOG` is unset or invalid.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays clean.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A subscriber may already be set; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(GodrollFormatter)
        .try_init();
}
