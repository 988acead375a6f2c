//! Tracing subscriber setup.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, DEFAULT_LOG_FILTER};

/// Pick the log filter. Priority: CLI > env > default.
pub fn resolve_log_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Subscriber writing `format` lines to `writer`, filtered by `filter`.
pub fn subscriber<W>(
    filter: &str,
    format: LogFormat,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let (text_layer, json_layer) = match format {
        LogFormat::Text => (
            Some(tracing_subscriber::fmt::layer().with_writer(writer)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(tracing_subscriber::fmt::layer().json().with_writer(writer)),
        ),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(text_layer)
        .with(json_layer)
}

/// Install the process-wide subscriber, logging to stdout.
pub fn init(filter: &str, format: LogFormat) {
    subscriber(filter, format, std::io::stdout).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(filter: &str, format: LogFormat, emit: impl FnOnce()) -> String {
        let out = Captured::default();
        tracing::subscriber::with_default(subscriber(filter, format, out.clone()), emit);
        out.contents()
    }

    #[test]
    fn cli_filter_wins_over_env() {
        let filter = resolve_log_filter(Some("warn".into()), Some("trace".into()));
        assert_eq!(filter, "warn");
    }

    #[test]
    fn env_filter_used_without_cli() {
        let filter = resolve_log_filter(None, Some("trace".into()));
        assert_eq!(filter, "trace");
    }

    #[test]
    fn default_filter_when_nothing_set() {
        assert_eq!(resolve_log_filter(None, None), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn json_format_emits_one_object_per_event() {
        let out = capture("info", LogFormat::Json, || tracing::info!(port = 5000, "listening"));

        let line = out.lines().next().expect("one event");
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["level"], "INFO");
        assert_eq!(event["fields"]["message"], "listening");
        assert_eq!(event["fields"]["port"], 5000);
    }

    #[test]
    fn text_format_is_not_json() {
        let out = capture("info", LogFormat::Text, || tracing::info!("listening"));

        assert!(out.contains("listening"));
        assert!(serde_json::from_str::<serde_json::Value>(out.trim()).is_err());
    }

    #[test]
    fn filter_drops_events_below_level() {
        let out = capture("warn", LogFormat::Text, || tracing::info!("quiet"));
        assert!(out.is_empty());
    }
}
