use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// HTTP client internals are only interesting when the lookup itself misbehaves.
const QUIET_DEPENDENCIES: &[&str] = &["hyper=warn", "hyper_util=warn", "reqwest=warn", "rustls=warn"];

/// Filter used when `RUST_LOG` is unset.
///
/// Verbose mode opens up the catalogue's gate decisions (debug) without
/// letting the HTTP stack flood the terminal.
pub fn default_directives(verbose: bool) -> String {
    let own = if verbose {
        "part_catalogue=debug"
    } else {
        "part_catalogue=info"
    };
    let base = if verbose { "info" } else { "warn" };

    std::iter::once(base)
        .chain(std::iter::once(own))
        .chain(QUIET_DEPENDENCIES.iter().copied())
        .collect::<Vec<_>>()
        .join(",")
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Human-readable logs on stderr, so stdout stays free for command output.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Structured output for hosts that embed the catalogue in a service.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_levels() {
        let quiet = default_directives(false);
        assert!(quiet.starts_with("warn,part_catalogue=info"));

        let verbose = default_directives(true);
        assert!(verbose.starts_with("info,part_catalogue=debug"));
        assert!(verbose.contains("reqwest=warn"));
    }

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            let directives = default_directives(verbose);
            assert!(EnvFilter::try_new(&directives).is_ok(), "{}", directives);
        }
    }
}
