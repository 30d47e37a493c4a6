use crate::model::employee::EmployeeIdentity;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Read-only IDm -> employee mapping, loaded once before the server goes
/// live. An unreadable or unparseable file degrades to an empty directory so
/// the reader keeps working; every scan then resolves to the unknown
/// sentinel.
pub struct EmployeeDirectory {
    entries: HashMap<String, EmployeeIdentity>,
}

impl EmployeeDirectory {
    pub fn load(path: &Path) -> Self {
        match read_directory(path) {
            Ok(entries) => {
                info!(entries = entries.len(), path = %path.display(), "employee directory loaded");
                Self { entries }
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "employee directory unavailable, every scan will resolve to unknown");
                Self {
                    entries: HashMap::new(),
                }
            }
        }
    }

    pub fn from_entries(entries: HashMap<String, EmployeeIdentity>) -> Self {
        Self { entries }
    }

    /// Total lookup: unmapped cards get the unknown sentinel.
    pub fn resolve(&self, idm: &str) -> EmployeeIdentity {
        self.entries
            .get(idm)
            .cloned()
            .unwrap_or_else(EmployeeIdentity::unknown)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_directory(path: &Path) -> anyhow::Result<HashMap<String, EmployeeIdentity>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
