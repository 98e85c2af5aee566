use crate::interface::log_sink::LogSink;
use crate::model::error::io::IOError;
use crate::model::log::mirror::MirrorLog;
use crate::model::pass_report::PassReport;
use std::sync::Arc;

/// Writes each outcome to the action log as it happens and keeps the tally.
pub struct Journal {
    sink: Arc<dyn LogSink>,
    report: PassReport,
}

impl Journal {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            report: PassReport::default(),
        }
    }

    pub fn action(&mut self, action: MirrorLog) {
        self.sink.emit(&action.to_string());
        self.report.record_action(&action);
    }

    pub fn failure(&mut self, error: IOError) {
        self.sink.emit(&error.to_string());
        self.report.record_failure(&error);
    }

    pub fn into_report(self) -> PassReport {
        self.report
    }
}
