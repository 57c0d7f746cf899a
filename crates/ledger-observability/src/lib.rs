//! Ledger Observability
//!
//! Console logging for the seeder binary. All crates log through `tracing`
//! macros; this crate only installs the subscriber.
//!
//! # Configuration
//!
//! - `RUST_LOG`: full filter directive, takes precedence when set
//! - `LOG_LEVEL`: level for the ledger crates when `RUST_LOG` is unset (default: "info")
//! - `LOG_FORMAT`: `json` for one JSON object per line, anything else for compact text

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

const LEDGER_CRATES: &[&str] = &[
    "ledger_seed",
    "ledger_cli",
    "ledger_core",
    "ledger_config",
    "ledger_db",
    "ledger_models",
];

/// Builds the default filter directive for a given level.
///
/// Workspace crates log at `level`; `sqlx` is held at `warn` so statement
/// logging does not drown the seeding progress.
pub fn default_directive(level: &str) -> String {
    let mut directive: Vec<String> = LEDGER_CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect();
    directive.push("sqlx=warn".to_string());
    directive.join(",")
}

/// Builds the console output layer, compact text or one JSON object per line.
///
/// The layer carries no filter of its own; filtering is installed once on the
/// registry so every layer sees the same decision.
pub fn console_layer<S, W>(json: bool, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if json {
        fmt::layer()
            .json()
            .with_target(true)
            .with_writer(writer)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(true)
            .with_writer(writer)
            .boxed()
    }
}

/// Initialize console logging.
///
/// Safe to call once per process; a second call panics inside
/// `tracing-subscriber`.
pub fn init_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&log_level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer(json, std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_default_directive_covers_workspace_and_quiets_sqlx() {
        let directive = default_directive("debug");

        assert!(directive.contains("ledger_cli=debug"));
        assert!(directive.contains("ledger_seed=debug"));
        assert!(directive.ends_with("sqlx=warn"));
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(default_directive("info")).is_ok());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn output(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture<F: FnOnce()>(json: bool, f: F) -> String {
        let captured = Captured::default();
        let sink = captured.clone();

        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new(default_directive("info")))
            .with(console_layer(json, move || sink.clone()));
        tracing::subscriber::with_default(subscriber, f);

        captured.output()
    }

    #[test]
    fn test_event_after_disabled_sqlx_check_is_still_logged() {
        // sqlx asks whether its query target is enabled after every statement.
        let output = capture(false, || {
            let _ = tracing::enabled!(target: "sqlx::query", tracing::Level::INFO);
            tracing::info!(target: "ledger_cli::seeder::customers", "Seeded customers");
            let _ = tracing::enabled!(target: "sqlx::query", tracing::Level::INFO);
            tracing::info!(target: "ledger_cli::seeder::invoices", "Seeded invoices");
        });

        assert!(output.contains("Seeded customers"), "missing event in: {output}");
        assert!(output.contains("Seeded invoices"), "missing event in: {output}");
    }

    #[test]
    fn test_json_layer_filters_sqlx_below_warn() {
        let output = capture(true, || {
            tracing::info!(target: "sqlx::query", "SELECT 1");
            tracing::info!(target: "ledger_cli::seeder::revenue", "Seeded revenue");
        });

        assert!(!output.contains("SELECT 1"));
        assert!(output.contains("\"Seeded revenue\""));
    }
}
