use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted for a filter override
pub const LOG_ENV_VAR: &str = "WORDLADDER_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "build_graph");
/// // Or with additional fields:
/// trace_time!(start, "build_graph", words = dictionary.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging on stderr.
///
/// `WORDLADDER_LOG` (then `RUST_LOG`) overrides the level chosen from the
/// command line.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(cli_directive(verbose, log_level)))?;

    let json = log_json.then(|| fmt::layer().json().with_writer(std::io::stderr));
    let compact = (!log_json).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_ansi(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(compact)
        .try_init()?;
    Ok(())
}

/// Filter directive for the command-line flags. A bare level applies to
/// both crates; anything containing `=` is used as given.
fn cli_directive(verbose: bool, log_level: Option<&str>) -> String {
    match log_level {
        Some(directive) if directive.contains('=') => directive.to_string(),
        Some(level) => format!("wordladder={level},wordladder_core={level}"),
        None if verbose => "wordladder=debug,wordladder_core=debug".to_string(),
        None => "wordladder=warn,wordladder_core=warn".to_string(),
    }
}
