use chrono::{SecondsFormat, Utc};
use std::fs::{self, OpenOptions};
use std::sync::Arc;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "logs/application.log";

/// Renders each event as `<ISO-timestamp> [<level>]: <message>`.
struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(
            writer,
            "{} [{}]: ",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            event.metadata().level().as_str().to_lowercase(),
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Initialize process-wide logging: one layer to the console, one to the
/// append-only file at `logs/application.log`. `RUST_LOG` overrides the
/// default `info` filter.
pub fn setup_logging() -> std::io::Result<()> {
    fs::create_dir_all(LOG_DIR)?;
    let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().event_format(LineFormat))
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(LineFormat)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();

    Ok(())
}
