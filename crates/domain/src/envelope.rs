//! Response envelope types.
//!
//! The backend wraps every JSON body in a success-flag envelope with
//! Turkish field names. The envelope is decoded once at the client
//! boundary; call sites only ever see typed payloads.

use std::collections::HashMap;

use serde::Deserialize;

/// Fallback error message used when the backend omits `mesaj`.
pub const GENERIC_ERROR_MESSAGE: &str = "Beklenmeyen bir hata oluştu.";

/// Standard response envelope: a success flag and either a payload or a
/// human-readable message.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Whether the operation succeeded.
    #[serde(rename = "basarili")]
    pub success: bool,
    /// The payload, present on success.
    #[serde(rename = "veri", default = "Option::default")]
    pub data: Option<T>,
    /// Human-readable message, present on failure (and some successes).
    #[serde(rename = "mesaj")]
    pub message: Option<String>,
    /// Machine-readable error code.
    #[serde(rename = "hata_kodu")]
    pub error_code: Option<String>,
    /// Per-field validation messages.
    #[serde(rename = "detaylar")]
    pub details: Option<HashMap<String, Vec<String>>>,
}

impl<T> Envelope<T> {
    /// Returns the user-visible message, falling back to the generic one.
    #[must_use]
    pub fn message_or_default(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }
}

/// Envelope variant where the backend returns a bare result list next to
/// the success flag instead of nesting it under `veri`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultList<T> {
    /// Whether the operation succeeded.
    #[serde(rename = "basarili")]
    pub success: bool,
    /// The returned items.
    #[serde(rename = "sonuclar", default = "Vec::new")]
    pub results: Vec<T>,
}

/// Paginated listing response.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    /// The items on this page.
    #[serde(rename = "sonuclar")]
    pub results: Vec<T>,
    /// Total number of matching items.
    #[serde(rename = "toplam")]
    pub total: u64,
    /// Current page number (1-based).
    #[serde(rename = "sayfa")]
    pub page: u32,
    /// Total number of pages.
    #[serde(rename = "toplam_sayfa")]
    pub total_pages: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_envelope() {
        let json = r#"{"basarili": true, "veri": {"toplam_ilan": 12}}"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_some());
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_error_envelope_message() {
        let json = r#"{"basarili": false, "mesaj": "İlan bulunamadı", "hata_kodu": "ILAN_404"}"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message_or_default(), "İlan bulunamadı");
        assert_eq!(envelope.error_code.as_deref(), Some("ILAN_404"));
    }

    #[test]
    fn test_error_envelope_fallback_message() {
        let json = r#"{"basarili": false}"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.message_or_default(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_result_list_defaults_empty() {
        let json = r#"{"basarili": true}"#;
        let list: ResultList<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(list.success);
        assert!(list.results.is_empty());
    }

    #[test]
    fn test_paginated_wire_format() {
        let json = r#"{"sonuclar": [1, 2, 3], "toplam": 30, "sayfa": 1, "toplam_sayfa": 10}"#;
        let page: Paginated<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.results, vec![1, 2, 3]);
        assert_eq!(page.total, 30);
        assert_eq!(page.total_pages, 10);
    }
}
