//! Logger initialization next to a host-installed logger
//!
//! Kept as a single test: the `log` facade accepts one logger per process.

use std::sync::Mutex;
use std::thread;

use codable_wrapper::{DigestConfig, EnvConfig, EquatableRecord, init_logging, init_test_logging};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct CapturingLogger {
    lines: Mutex<Vec<(Level, String, String)>>,
}

impl CapturingLogger {
    fn targets_at(&self, level: Level) -> Vec<String> {
        self.lines
            .lock()
            .expect("Logger lock poisoned")
            .iter()
            .filter(|(l, _, _)| *l == level)
            .map(|(_, target, _)| target.clone())
            .collect()
    }

    fn contains(&self, message: &str) -> bool {
        self.lines
            .lock()
            .expect("Logger lock poisoned")
            .iter()
            .any(|(_, _, m)| m == message)
    }
}

impl Log for CapturingLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines.lock().expect("Logger lock poisoned").push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static HOST_LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn test_host_logger_survives_init_and_sees_crate_logs() {
    log::set_logger(&HOST_LOGGER).expect("No logger should be installed yet");
    log::set_max_level(LevelFilter::Trace);

    let handles = (0..8)
        .map(|i| {
            thread::spawn(move || {
                if i % 2 == 0 {
                    init_logging();
                } else {
                    init_test_logging();
                }
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().expect("Init thread panicked");
    }

    // env_logger failed to install, so the level set by the host stays
    assert_eq!(log::max_level(), LevelFilter::Trace);
    log::info!("host logger still active");
    assert!(HOST_LOGGER.contains("host logger still active"));

    let digest = EquatableRecord::from("abc").digest();
    assert_eq!(digest, EquatableRecord::from("abc").digest());
    assert!(
        HOST_LOGGER
            .targets_at(Level::Trace)
            .iter()
            .any(|target| target == "codable_wrapper::digest")
    );

    let config: DigestConfig = EnvConfig::from_vars(Vec::<(String, String)>::new())
        .and_then(EnvConfig::validate)
        .expect("Empty environment should validate");
    assert_eq!(config.seed, 0);
    assert!(
        HOST_LOGGER
            .targets_at(Level::Debug)
            .iter()
            .any(|target| target == "codable_wrapper::config")
    );
}
