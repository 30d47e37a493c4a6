use crate::errors::StoreError;
use crate::model::employee::EmployeeIdentity;
use crate::model::mode::Mode;
use crate::model::scan_event::ScanEvent;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Authoritative store of the resident day's scan events, mirrored to
/// `<logs_dir>/<YYYY-MM-DD>.json` after every mutation. The whole artifact is
/// rewritten each time via write-then-rename, so a crash mid-write leaves the
/// previous file intact.
pub struct EventLog {
    logs_dir: PathBuf,
    events: Vec<ScanEvent>,
}

impl EventLog {
    pub fn new(logs_dir: PathBuf) -> Self {
        Self {
            logs_dir,
            events: Vec::new(),
        }
    }

    /// Startup recovery: load the most recently dated artifact as the
    /// resident day log. Only that single day comes back into memory; older
    /// days stay on disk. A missing or unreadable artifact degrades to an
    /// empty log rather than failing startup.
    pub fn load_most_recent(logs_dir: PathBuf) -> Self {
        let mut log = Self::new(logs_dir);
        let Some(path) = most_recent_artifact(&log.logs_dir) else {
            info!("no persisted day log found, starting empty");
            return log;
        };
        match read_day_log(&path) {
            Ok(events) => {
                info!(events = events.len(), path = %path.display(), "loaded resident day log");
                log.events = events;
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "day log unreadable, starting empty");
            }
        }
        log
    }

    /// Append a new scan with the sync flag down, then persist. If the
    /// durable rewrite fails the in-memory push is rolled back and the error
    /// returned, so a success here always means the event is on disk.
    pub fn append(
        &mut self,
        idm: &str,
        identity: EmployeeIdentity,
        mode: Mode,
        timestamp: String,
    ) -> Result<ScanEvent, StoreError> {
        let event = ScanEvent::new(idm, identity, mode, timestamp);
        self.events.push(event.clone());
        if let Err(e) = self.persist() {
            self.events.pop();
            return Err(e);
        }
        Ok(event)
    }

    /// Snapshot of the resident day log in insertion order. Never touches
    /// sync flags.
    pub fn list_all(&self) -> Vec<ScanEvent> {
        self.events.clone()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// One-way handoff to the GAS poller: flip every unsynced event to
    /// synced, persist once, and return exactly the flipped events. An empty
    /// frontier returns an empty vec without touching the disk. On persist
    /// failure the flips are reverted so the poller can retry.
    pub fn drain_unsynced(&mut self) -> Result<Vec<ScanEvent>, StoreError> {
        let pending: Vec<usize> = self
            .events
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_synced_with_gas)
            .map(|(i, _)| i)
            .collect();
        if pending.is_empty() {
            return Ok(Vec::new());
        }
        for &i in &pending {
            self.events[i].is_synced_with_gas = true;
        }
        if let Err(e) = self.persist() {
            for &i in &pending {
                self.events[i].is_synced_with_gas = false;
            }
            return Err(e);
        }
        Ok(pending.iter().map(|&i| self.events[i].clone()).collect())
    }

    /// Full rewrite of the artifact keyed by today's UTC date. Write to a
    /// temp file first, then rename over the target.
    fn persist(&self) -> Result<(), StoreError> {
        let key = Utc::now().format("%Y-%m-%d").to_string();
        let path = self.logs_dir.join(format!("{key}.json"));
        let tmp = self.logs_dir.join(format!("{key}.json.tmp"));
        let body = serde_json::to_vec_pretty(&self.events)?;

        let io = |source| StoreError::Persist {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(&self.logs_dir).map_err(io)?;
        fs::write(&tmp, body).map_err(io)?;
        fs::rename(&tmp, &path).map_err(io)?;
        Ok(())
    }
}

fn most_recent_artifact(dir: &Path) -> Option<PathBuf> {
    // Date-keyed filenames, so lexicographic max is the most recent day.
    fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .max_by(|a, b| a.file_name().cmp(&b.file_name()))
}

fn read_day_log(path: &Path) -> anyhow::Result<Vec<ScanEvent>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_log() -> (tempfile::TempDir, EventLog) {
        let dir = tempfile::tempdir().unwrap();
        let log = EventLog::new(dir.path().to_path_buf());
        (dir, log)
    }

    fn touch(log: &mut EventLog, idm: &str, mode: Mode) -> ScanEvent {
        log.append(
            idm,
            EmployeeIdentity::unknown(),
            mode,
            "2026/08/30 09:00:00".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn appends_preserve_insertion_order() {
        let (_dir, mut log) = scratch_log();
        touch(&mut log, "A", Mode::CheckIn);
        touch(&mut log, "B", Mode::CheckIn);
        touch(&mut log, "A", Mode::CheckOut); // no dedup by idm

        let all = log.list_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].idm, "A");
        assert_eq!(all[1].idm, "B");
        assert_eq!(all[2].idm, "A");
        assert!(all.iter().all(|e| !e.is_synced_with_gas));
    }

    #[test]
    fn drain_flips_once_and_goes_quiet() {
        let (dir, mut log) = scratch_log();
        touch(&mut log, "A", Mode::CheckIn);
        touch(&mut log, "B", Mode::CheckIn);

        let drained = log.drain_unsynced().unwrap();
        assert_eq!(drained.len(), 2);
        assert!(drained.iter().all(|e| e.is_synced_with_gas));
        assert!(log.list_all().iter().all(|e| e.is_synced_with_gas));

        // Empty frontier: nothing returned, nothing written.
        let artifact = most_recent_artifact(dir.path()).unwrap();
        let before = fs::metadata(&artifact).unwrap().modified().unwrap();
        assert!(log.drain_unsynced().unwrap().is_empty());
        let after = fs::metadata(&artifact).unwrap().modified().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn drain_returns_only_the_new_frontier() {
        let (_dir, mut log) = scratch_log();
        touch(&mut log, "X", Mode::CheckIn);
        log.drain_unsynced().unwrap();
        touch(&mut log, "Y", Mode::CheckOut);

        let drained = log.drain_unsynced().unwrap();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].idm, "Y");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn status_reads_never_flip_sync_flags() {
        let (_dir, mut log) = scratch_log();
        touch(&mut log, "X", Mode::CheckIn);
        for _ in 0..5 {
            assert!(!log.list_all()[0].is_synced_with_gas);
        }
    }

    #[test]
    fn reload_round_trips_the_resident_day() {
        let (dir, mut log) = scratch_log();
        touch(&mut log, "A", Mode::CheckIn);
        touch(&mut log, "B", Mode::CheckOut);
        log.drain_unsynced().unwrap();
        touch(&mut log, "C", Mode::CheckOut);
        let before = log.list_all();

        let reloaded = EventLog::load_most_recent(dir.path().to_path_buf());
        assert_eq!(reloaded.list_all(), before);
    }

    #[test]
    fn load_picks_lexicographically_greatest_day() {
        let dir = tempfile::tempdir().unwrap();
        let older = vec![ScanEvent::new(
            "OLD",
            EmployeeIdentity::unknown(),
            Mode::CheckIn,
            "2026/08/28 08:00:00".to_string(),
        )];
        let newer = vec![ScanEvent::new(
            "NEW",
            EmployeeIdentity::unknown(),
            Mode::CheckIn,
            "2026/08/29 08:00:00".to_string(),
        )];
        fs::write(
            dir.path().join("2026-08-28.json"),
            serde_json::to_vec(&older).unwrap(),
        )
        .unwrap();
        fs::write(
            dir.path().join("2026-08-29.json"),
            serde_json::to_vec(&newer).unwrap(),
        )
        .unwrap();

        let log = EventLog::load_most_recent(dir.path().to_path_buf());
        assert_eq!(log.len(), 1);
        assert_eq!(log.list_all()[0].idm, "NEW");
    }

    #[test]
    fn missing_or_corrupt_artifact_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = EventLog::load_most_recent(dir.path().join("nope"));
        assert!(log.is_empty());

        fs::write(dir.path().join("2026-08-29.json"), b"{not json").unwrap();
        let log = EventLog::load_most_recent(dir.path().to_path_buf());
        assert!(log.is_empty());
    }

    // Turns the logs dir into a regular file so the next rewrite fails.
    fn block_logs_dir(logs_dir: &Path) {
        fs::remove_dir_all(logs_dir).unwrap();
        fs::write(logs_dir, b"in the way").unwrap();
    }

    #[test]
    fn failed_persist_rolls_back_the_append() {
        let dir = tempfile::tempdir().unwrap();
        let logs_dir = dir.path().join("logs");
        let mut log = EventLog::new(logs_dir.clone());
        touch(&mut log, "A", Mode::CheckIn);

        block_logs_dir(&logs_dir);
        let result = log.append(
            "B",
            EmployeeIdentity::unknown(),
            Mode::CheckIn,
            "2026/08/30 09:01:00".to_string(),
        );
        assert!(result.is_err());

        // The failed scan never entered the resident log.
        let all = log.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].idm, "A");
    }

    #[test]
    fn failed_persist_reverts_the_sync_flips() {
        let dir = tempfile::tempdir().unwrap();
        let logs_dir = dir.path().join("logs");
        let mut log = EventLog::new(logs_dir.clone());
        touch(&mut log, "A", Mode::CheckIn);
        touch(&mut log, "B", Mode::CheckIn);

        block_logs_dir(&logs_dir);
        assert!(log.drain_unsynced().is_err());
        assert!(log.list_all().iter().all(|e| !e.is_synced_with_gas));

        // Disk back: the same frontier drains on retry.
        fs::remove_file(&logs_dir).unwrap();
        let drained = log.drain_unsynced().unwrap();
        assert_eq!(drained.len(), 2);
        assert!(log.list_all().iter().all(|e| e.is_synced_with_gas));
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let event = ScanEvent::new(
            "0123456789ABCDEF",
            EmployeeIdentity {
                employee_id: "E001".to_string(),
                name: "山田 太郎".to_string(),
            },
            Mode::CheckIn,
            "2026/08/30 09:12:45".to_string(),
        );
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["idm"], "0123456789ABCDEF");
        assert_eq!(value["employeeId"], "E001");
        assert_eq!(value["mode"], "出勤");
        assert_eq!(value["isSyncedWithGas"], false);
    }
}
