use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Set by the Lambda service when the function is configured for JSON logs.
pub const LOG_FORMAT_VAR: &str = "AWS_LAMBDA_LOG_FORMAT";

static INIT: Once = Once::new();

/// Installs the global subscriber. Safe to call more than once.
///
/// Filtering follows `RUST_LOG`, falling back to `greeting_core=info,bootstrap=info`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "greeting_core=info,bootstrap=info".into());

        let fmt_layer = if json_logs_requested(std::env::var(LOG_FORMAT_VAR).ok().as_deref()) {
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .flatten_event(true)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer().boxed()
        };

        // another subscriber may already be installed, e.g. by a test harness
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });
}

fn json_logs_requested(format: Option<&str>) -> bool {
    format.is_some_and(|f| f.eq_ignore_ascii_case("json"))
}
