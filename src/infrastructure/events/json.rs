//! JSON Event Sink
//!
//! Outputs reconcile events as NDJSON for CI/automation consumption.

use crate::domain::ports::{ReconcileEvent, ReconcileEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl ReconcileEventSink for JsonEventSink {
    fn on_event(&self, event: ReconcileEvent) {
        let message = match &event {
            ReconcileEvent::TaskFinished { report, .. } => Some(report.to_string()),
            _ => None,
        };

        let mut json = match serde_json::to_value(&event) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "could not serialize event");
                return;
            }
        };
        if let Some(object) = json.as_object_mut() {
            object.insert("command".to_string(), self.command.into());
            if let Some(message) = message {
                object.insert("message".to_string(), message.into());
            }
        }
        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::target::fixtures::target;
    use crate::domain::entities::{ActionOutcome, Stage, TaskReport};
    use std::sync::Arc;

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        String::from_utf8(buffer.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_one_object_per_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("reconcile", writer);

        sink.on_event(ReconcileEvent::Planned {
            compile: 1,
            install: 2,
            instantiate: 1,
        });
        sink.on_event(ReconcileEvent::Completed {
            changed: 3,
            unchanged: 1,
        });

        let events = lines(&buffer);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "planned");
        assert_eq!(events[0]["command"], "reconcile");
        assert_eq!(events[0]["install"], 2);
        assert_eq!(events[1]["event"], "completed");
        assert_eq!(events[1]["changed"], 3);
    }

    #[test]
    fn json_sink_adds_message_to_task_events() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("reconcile", writer);
        let t = target("marbles", "1.0", "ch1", "peer0");

        sink.on_event(ReconcileEvent::TaskFinished {
            stage: Stage::Install,
            report: TaskReport::new(ActionOutcome::Installed, &t),
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "task_finished");
        assert_eq!(events[0]["stage"], "install");
        assert_eq!(events[0]["report"]["outcome"], "installed");
        assert_eq!(
            events[0]["message"],
            "Installed chaincode marbles version 1.0 at chaincodes/marbles on peer0"
        );
    }
}
