use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Default filter directives when `RUST_LOG` is not set
fn default_directives(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "warn,domain_products=info"
    } else {
        "info,domain_products=debug"
    }
}

/// Initialize the global tracing subscriber.
///
/// - **Production** (`APP_ENV=production`): flattened JSON events without
///   module targets, for log aggregation.
/// - **Development** (default): pretty, human-readable output.
///
/// Both variants include `tracing_error::ErrorLayer` so span traces can be
/// captured alongside errors. `RUST_LOG` overrides the default filter.
///
/// Calling this more than once is a no-op after the first successful call,
/// which keeps tests that each initialize tracing from panicking.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(()) => info!(environment = ?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}

/// Initialize tracing for the environment selected by `APP_ENV`
pub fn init_tracing_from_env() -> Environment {
    let environment = Environment::from_env();
    init_tracing(&environment);
    environment
}
