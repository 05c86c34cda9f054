//! Subscriber wiring. Kept in its own test binary because the global
//! subscriber can only be installed once per process.

mod common;

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

use suna_cli::decode::{DEFAULT_BATCH_SIZE, decode_log};
use suna_cli::logging::{LogConfig, LogFormat, init_logging_with_writer};

use common::{frame, write_log};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn decode_issues_are_logged_as_json_warnings() {
    let capture = Capture::default();
    let config = LogConfig {
        use_env_filter: false,
        ..LogConfig::default()
    }
    .with_level(LevelFilter::WARN)
    .with_format(LogFormat::Json)
    .with_ansi(false);
    init_logging_with_writer(&config, capture.clone());

    let log = write_log(&[frame("SATSLF", "n/a"), "garbage".to_string()]);
    let mut output = Vec::new();
    decode_log(log.path(), DEFAULT_BATCH_SIZE, &mut output).expect("decode");

    let logged = String::from_utf8(capture.0.lock().expect("capture lock").clone())
        .expect("utf-8 log output");
    let events: Vec<serde_json::Value> = logged
        .lines()
        .map(|line| serde_json::from_str(line).expect("json event"))
        .collect();

    let warnings: Vec<_> = events
        .iter()
        .filter(|event| event["level"] == "WARN")
        .collect();
    assert_eq!(warnings.len(), 1, "{logged}");
    assert_eq!(warnings[0]["fields"]["line"], 1);
    assert!(
        warnings[0]["fields"]["issue"]
            .as_str()
            .is_some_and(|issue| issue.contains("nitrate_concentration"))
    );
    // Skipped lines and summaries stay below the warn threshold.
    assert!(events.iter().all(|event| event["level"] == "WARN"));
}
