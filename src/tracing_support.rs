//! Logging support.
//!
//! With the `tracing` feature enabled, the library emits spans and debug
//! events through `tracing`, and [`init_tracing`] installs a `fmt` subscriber
//! filtered by `RUST_LOG`. Without it, the same macros expand to nothing.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing_subscriber::EnvFilter;

    /// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to
    /// `warn`. Only the first call in a process has any effect.
    pub fn init_tracing() {
        init_tracing_with("warn");
    }

    /// Like [`init_tracing`], using `default_filter` when `RUST_LOG` is unset
    /// or invalid.
    pub fn init_tracing_with(default_filter: &str) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        });
    }

    pub use tracing::{debug, info_span};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {}

    pub fn init_tracing_with(_default_filter: &str) {}

    #[macro_export]
    #[doc(hidden)]
    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! debug {
        ($($tokens:tt)*) => {{}};
    }

    pub use crate::{debug, info_span};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing_with("debug");
        init_tracing();
        let _span = info_span!("test_span", answer = 42).entered();
        debug!(place = "Warnes", "inside span");
    }
}
