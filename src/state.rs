use crate::model::mode::Mode;
use crate::store::event_log::EventLog;
use crate::store::identity::EmployeeDirectory;
use std::sync::Mutex;

/// Shared handler state. actix runs handlers on multiple workers, so the
/// single-writer discipline the log relies on is made explicit here: every
/// mutating handler holds `log` across both the in-memory change and the
/// durable rewrite.
pub struct AppState {
    pub mode: Mutex<Mode>,
    pub log: Mutex<EventLog>,
    pub directory: EmployeeDirectory,
}

impl AppState {
    pub fn new(mode: Mode, log: EventLog, directory: EmployeeDirectory) -> Self {
        Self {
            mode: Mutex::new(mode),
            log: Mutex::new(log),
            directory,
        }
    }
}
