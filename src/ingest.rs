use crate::errors::StoreError;
use crate::model::scan_event::ScanEvent;
use crate::state::AppState;
use chrono::{FixedOffset, Utc};
use tracing::info;

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// One scan, end to end: resolve the card against the directory, stamp the
/// active mode and a JST wall-clock timestamp, append durably. The mode is
/// read once up front; a concurrent mode switch applies to the next scan.
pub fn ingest_scan(state: &AppState, idm: &str) -> Result<ScanEvent, StoreError> {
    let mode = *state.mode.lock().map_err(|_| StoreError::LockPoisoned)?;
    let identity = state.directory.resolve(idm);
    let timestamp = jst_now();

    let mut log = state.log.lock().map_err(|_| StoreError::LockPoisoned)?;
    let event = log.append(idm, identity, mode, timestamp)?;
    info!("[{}] {} IDm: {}", event.timestamp, event.mode, event.idm);
    Ok(event)
}

fn jst_now() -> String {
    let jst = FixedOffset::east_opt(JST_OFFSET_SECS).unwrap();
    Utc::now()
        .with_timezone(&jst)
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}
