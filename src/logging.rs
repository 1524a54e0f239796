//! Logger setup
//!
//! `log` facade with an `env_logger` backend. `RUST_LOG` overrides the
//! default `info` level (e.g. `RUST_LOG=card_table=debug`).

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the global logger. Later calls are ignored.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
