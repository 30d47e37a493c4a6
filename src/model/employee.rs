use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const UNKNOWN_IDENTITY: &str = "unknown";

/// Identity resolved from a card IDm via the employees file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeIdentity {
    #[schema(example = "E001")]
    pub employee_id: String,
    #[schema(example = "山田 太郎")]
    pub name: String,
}

impl EmployeeIdentity {
    /// Sentinel used when the card is not in the directory.
    /// Resolution never fails an ingestion.
    pub fn unknown() -> Self {
        Self {
            employee_id: UNKNOWN_IDENTITY.to_string(),
            name: UNKNOWN_IDENTITY.to_string(),
        }
    }
}
