//! Caller-side recovery of guard failures.
//!
//! Guards never log on their own; the logged combinators do, and only when a
//! caller chooses to recover.

#![forbid(clippy::unwrap_used)]
#![forbid(clippy::expect_used)]
#![forbid(clippy::panic)]

use std::io;
use std::sync::{Arc, Mutex};

use guard::{argument, field, ResultExt};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        self.0
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if let Ok(mut buf) = self.0.lock() {
            buf.extend_from_slice(data);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_captured_logs<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn test_guard_failure_is_not_logged_at_detection() {
    let output = with_captured_logs(|| {
        let _ = argument::negative(-1, "offset");
    });
    assert!(output.is_empty());
}

#[test]
fn test_or_default_logged_records_violation() {
    let mut recovered = 0;
    let output = with_captured_logs(|| {
        recovered = argument::not_null(None::<u32>, "limit").or_default_logged(16);
    });
    assert_eq!(recovered, 16);
    assert!(output.contains("WARN"));
    assert!(output.contains("argument limit is null"));
    assert!(output.contains("NullReference"));
}

#[test]
fn test_into_option_logged_passes_success_silently() {
    let mut value = None;
    let output = with_captured_logs(|| {
        value = field::not_null(Some("primary"), "region").into_option_logged();
    });
    assert_eq!(value, Some("primary"));
    assert!(output.is_empty());
}
