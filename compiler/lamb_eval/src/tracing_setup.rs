//! Tracing subscriber installation for drivers and debugging sessions.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once, and
/// leaves an already-installed global subscriber in place.
///
/// `RUST_LOG=lamb_eval=trace` shows every evaluation step as a nested tree;
/// `RUST_LOG=lamb_eval=debug` shows only entry points, backpatches and
/// failures.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .try_init();
        }
    });
}
