use crate::api::idm::IdmRequest;
use crate::api::mode::ModeRequest;
use crate::model::employee::EmployeeIdentity;
use crate::model::mode::Mode;
use crate::model::scan_event::ScanEvent;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kintai Server API",
        version = "1.0.0",
        description = r#"
## Card-scan attendance logger

Records FeliCa card touches (IDm) against the active check-in/check-out mode,
resolves each card to an employee, and keeps one durable JSON log per
calendar day.

### 🔹 Endpoints
- **Status** — current mode plus today's full scan log, for the local display
- **Scan** — IDm ingestion from the reader client
- **Mode** — switch between 出勤 (check-in) and 退勤 (check-out)
- **Sync** — GAS polling; returns each scan exactly once per unsynced→synced lifecycle

### 📦 Response Format
JSON-based responses; mutations answer `{success, message}`.

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::status::status,
        crate::api::idm::receive_idm,
        crate::api::mode::switch_mode,
        crate::api::polling::gas_polling
    ),
    components(
        schemas(
            ScanEvent,
            EmployeeIdentity,
            Mode,
            IdmRequest,
            ModeRequest
        )
    ),
    tags(
        (name = "Status", description = "Local display APIs"),
        (name = "Scan", description = "Card reader ingestion APIs"),
        (name = "Mode", description = "Attendance mode APIs"),
        (name = "Sync", description = "GAS polling APIs"),
    )
)]
pub struct ApiDoc;
