//! Process-wide logger setup
//!
//! The crate logs through the `log` facade: `debug!` for encode/decode and
//! seed resolution, `trace!` for every digest. These helpers install
//! `env_logger` once per process, with an `info` filter unless `RUST_LOG` says
//! otherwise. A logger installed earlier by the host is never replaced.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize `env_logger` for an application
///
/// Safe to call repeatedly and from several threads; only the first call of
/// either initializer has any effect.
pub fn init_logging() {
    init(false);
}

/// Initialize `env_logger` with test output capture
///
/// Same as [`init_logging`], but log lines go through the test harness's
/// captured stdout instead of stderr.
pub fn init_test_logging() {
    init(true);
}

fn init(is_test: bool) {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .is_test(is_test)
            .try_init();
    });
}
