use std::error::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr subscriber. `verbose` forces debug; otherwise the
/// directive comes from `SPROUT_LOG`, defaulting to "warn".
pub fn init(
    filter: Option<&str>,
    verbose: bool,
) -> Result<(), Box<dyn Error>> {
    let directive = if verbose { "debug" } else { filter.unwrap_or("warn") };
    let filter_layer = EnvFilter::try_new(directive)
        .or_else(|_| EnvFilter::try_new("warn"))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}
