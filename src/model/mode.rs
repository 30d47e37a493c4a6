use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Attendance action applied to every scan until the UI switches it.
/// Serialized with the kanji labels the reader UI and the GAS sheet expect.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum Mode {
    #[serde(rename = "出勤")]
    #[strum(serialize = "出勤")]
    CheckIn,
    #[serde(rename = "退勤")]
    #[strum(serialize = "退勤")]
    CheckOut,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::CheckIn
    }
}
