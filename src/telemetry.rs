//! Process-wide logging setup and the scoped handler span.

use std::sync::Arc;

use tracing::Instrument;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Environment, Settings};
use crate::error::ApiError;

/// Install the global subscriber: JSON output in production, human-readable
/// otherwise. The level comes from settings unless `RUST_LOG` is set. Calling
/// this twice is a no-op, so tests can initialize freely.
pub fn init(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));
    let registry = tracing_subscriber::registry().with(filter);
    let result = match settings.environment {
        Environment::Production => registry.with(fmt::layer().json()).try_init(),
        Environment::Development => registry.with(fmt::layer()).try_init(),
    };
    let _ = result;
}

/// Scoped-span helper for request handlers. Replaces decorator-style wrapping:
/// the span is acquired at the top of the handler's work, closed on every exit
/// path, and tagged with service name, handler name, module and outcome.
#[derive(Clone)]
pub struct Tracer {
    service: Arc<str>,
}

impl Tracer {
    pub fn new(service: &str) -> Self {
        Self {
            service: Arc::from(service),
        }
    }

    /// Run a handler's service call inside its span. Failures are recorded on
    /// the span and logged before they propagate to the router boundary.
    pub async fn observe<F, T>(
        &self,
        handler: &'static str,
        module: &'static str,
        fut: F,
    ) -> Result<T, ApiError>
    where
        F: std::future::Future<Output = Result<T, ApiError>>,
    {
        let span = tracing::info_span!(
            "handler",
            service = %self.service,
            handler,
            module,
            outcome = tracing::field::Empty,
        );
        async move {
            match fut.await {
                Ok(value) => {
                    tracing::Span::current().record("outcome", "ok");
                    Ok(value)
                }
                Err(error) => {
                    tracing::Span::current().record("outcome", "error");
                    match error.code() {
                        Some(code) => tracing::warn!(code, error = %error, "handler failed"),
                        None => tracing::error!(error = %error, detail = ?error, "unhandled error"),
                    }
                    Err(error)
                }
            }
        }
        .instrument(span)
        .await
    }
}
