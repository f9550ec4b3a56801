//! Dashboard statistics types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Summary of the most recent CSV import shown on the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct LastImport {
    /// Import identifier.
    pub id: u64,
    /// Uploaded file name.
    #[serde(rename = "dosya_adi")]
    pub file_name: String,
    /// Final state of the import.
    #[serde(rename = "durum")]
    pub state: String,
    /// Total rows in the file.
    #[serde(rename = "toplam_satir")]
    pub total_rows: u64,
    /// Successfully ingested rows.
    #[serde(rename = "basarili_satir")]
    pub succeeded_rows: u64,
    /// Failed rows.
    #[serde(rename = "hatali_satir")]
    pub failed_rows: u64,
    /// When the import ran.
    #[serde(rename = "tarih")]
    pub imported_at: DateTime<Utc>,
}

/// Aggregate counters for the internal dashboard, from
/// `GET /dashboard/stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardStats {
    /// Total number of listings.
    #[serde(rename = "toplam_ilan")]
    pub total_listings: u64,
    /// Searches executed today.
    #[serde(rename = "bugun_arama")]
    pub searches_today: u64,
    /// Number of favorited listings.
    #[serde(rename = "favori_sayisi")]
    pub favorite_count: u64,
    /// The most recent import, when one exists.
    #[serde(rename = "son_import", default)]
    pub last_import: Option<LastImport>,
}
