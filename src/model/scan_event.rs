use crate::model::employee::EmployeeIdentity;
use crate::model::mode::Mode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One card touch. Immutable after creation except for the sync flag,
/// which goes false -> true exactly once when the GAS poller picks it up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanEvent {
    #[schema(example = "0123456789ABCDEF")]
    pub idm: String,
    #[schema(example = "E001")]
    pub employee_id: String,
    #[schema(example = "山田 太郎")]
    pub name: String,
    pub mode: Mode,
    #[schema(example = "2026/08/30 09:12:45")]
    pub timestamp: String,
    pub is_synced_with_gas: bool,
}

impl ScanEvent {
    pub fn new(idm: &str, identity: EmployeeIdentity, mode: Mode, timestamp: String) -> Self {
        Self {
            idm: idm.to_string(),
            employee_id: identity.employee_id,
            name: identity.name,
            mode,
            timestamp,
            is_synced_with_gas: false,
        }
    }
}
