//! CSV import types.
//!
//! Validation and ingestion happen on the backend; the client uploads the
//! file, polls status and confirms.

use serde::Deserialize;

/// Lifecycle state of a CSV import job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ImportState {
    /// Rows are being validated.
    #[serde(rename = "dogrulaniyor")]
    Validating,
    /// Validation finished; waiting for the user to confirm.
    #[serde(rename = "onay_bekliyor")]
    AwaitingConfirmation,
    /// Confirmed rows are being ingested.
    #[serde(rename = "isleniyor")]
    Processing,
    /// Ingestion finished.
    #[serde(rename = "tamamlandi")]
    Completed,
    /// The job failed.
    #[serde(rename = "hatali")]
    Failed,
}

impl ImportState {
    /// Whether the job has reached a terminal state (polling may stop).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// A per-row validation error.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRowError {
    /// 1-based row number in the uploaded file.
    #[serde(rename = "satir")]
    pub row: u64,
    /// Offending column name.
    #[serde(rename = "alan")]
    pub field: String,
    /// Validation message.
    #[serde(rename = "mesaj")]
    pub message: String,
}

/// Status of a CSV import job, from `GET /import/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportStatus {
    /// Job identifier.
    pub import_id: String,
    /// Current lifecycle state.
    #[serde(rename = "durum")]
    pub state: ImportState,
    /// Progress percentage from 0 to 100.
    #[serde(rename = "ilerleme")]
    pub progress: f64,
    /// Total rows in the file.
    #[serde(rename = "toplam_satir")]
    pub total_rows: u64,
    /// Rows that passed validation.
    #[serde(rename = "gecerli_satir")]
    pub valid_rows: u64,
    /// Rows that failed validation.
    #[serde(rename = "hatali_satir")]
    pub invalid_rows: u64,
    /// Preview of parsed rows, when available.
    #[serde(rename = "on_izleme", default)]
    pub preview: Option<Vec<serde_json::Value>>,
    /// Validation errors, when any.
    #[serde(rename = "hatalar", default)]
    pub errors: Option<Vec<ImportRowError>>,
}

/// Response body for `POST /import/upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    /// Whether the upload was accepted.
    #[serde(rename = "basarili")]
    pub success: bool,
    /// Identifier of the created import job.
    pub import_id: String,
}

/// Response body for `GET /import/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportStatusResponse {
    /// Whether the lookup succeeded.
    #[serde(rename = "basarili")]
    pub success: bool,
    /// The job status.
    #[serde(rename = "import")]
    pub status: ImportStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_terminal_states() {
        assert!(ImportState::Completed.is_terminal());
        assert!(ImportState::Failed.is_terminal());
        assert!(!ImportState::Validating.is_terminal());
        assert!(!ImportState::AwaitingConfirmation.is_terminal());
    }

    #[test]
    fn test_status_wire_format() {
        let json = r#"{
            "import_id": "imp-9",
            "durum": "onay_bekliyor",
            "ilerleme": 100,
            "toplam_satir": 50,
            "gecerli_satir": 48,
            "hatali_satir": 2,
            "hatalar": [{"satir": 3, "alan": "fiyat", "mesaj": "Sayı bekleniyor"}]
        }"#;
        let status: ImportStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.state, ImportState::AwaitingConfirmation);
        assert_eq!(status.errors.unwrap()[0].field, "fiyat");
    }
}
