//! Logging setup for the command line binary.
//!
//! Events go to stderr so command output on stdout stays machine readable.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Returns the default filter directive for a `-v` count.
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "deskpaper_lib=info,warn",
        _ => "deskpaper_lib=debug,info",
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Calling this more than
/// once is harmless; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_by_verbosity() {
        assert_eq!(default_directive(0), "warn");
        assert!(default_directive(1).contains("deskpaper_lib=info"));
        assert!(default_directive(2).contains("deskpaper_lib=debug"));
        assert_eq!(default_directive(5), default_directive(2));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}
