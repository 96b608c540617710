use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Output shape of the process-wide subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line events.
    Compact,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// `LOG_FORMAT=json` selects JSON; anything else is compact.
    pub fn from_env() -> Self {
        Self::parse(std::env::var("LOG_FORMAT").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Compact,
        }
    }

    // Store-level events are debug; JSON mode keeps them so request traces are complete.
    fn default_directives(self) -> &'static str {
        match self {
            Self::Compact => "info,tower_http=info,axum=info",
            Self::Json => "info,service::users=debug",
        }
    }
}

/// Install the stdout subscriber. `RUST_LOG` overrides the per-format default filter.
/// Calling it again once a subscriber is set is a no-op.
pub fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format.default_directives()));
    let builder = fmt().with_env_filter(env_filter).with_target(false).with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

pub fn init_logging_from_env() {
    init_logging(LogFormat::from_env());
}
