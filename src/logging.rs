//! Diagnostic logging for the component and the `minisel` binary.
//!
//! Events are written to stderr so that command output on stdout stays
//! machine readable. `MINISEL_LOG` takes an `EnvFilter` directive and wins over
//! the verbosity flag.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "MINISEL_LOG";

/// Install the global subscriber. Calling it again is a no-op.
pub fn initialize(verbosity: u8) {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

/// Filter directive used when `MINISEL_LOG` is not set.
fn default_directive(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_raises_the_default_level() {
		assert_eq!(default_directive(0), "warn");
		assert_eq!(default_directive(1), "info");
		assert_eq!(default_directive(2), "debug");
		assert_eq!(default_directive(7), "trace");
	}

	#[test]
	fn initialize_twice_does_not_panic() {
		initialize(0);
		initialize(3);
	}
}
