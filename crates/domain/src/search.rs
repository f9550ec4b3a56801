//! Search request and result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::ListingSummary;

/// Structured filters accepted by `POST /search/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Filter by city.
    #[serde(rename = "sehir", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Filter by district.
    #[serde(rename = "ilce", skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Filter by property kind.
    #[serde(rename = "tip", skip_serializing_if = "Option::is_none")]
    pub property_kind: Option<String>,
    /// Filter by sale/rent.
    #[serde(rename = "islem_tipi", skip_serializing_if = "Option::is_none")]
    pub listing_kind: Option<String>,
    /// Minimum price.
    #[serde(rename = "min_fiyat", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Maximum price.
    #[serde(rename = "max_fiyat", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Minimum area in square metres.
    #[serde(rename = "min_metrekare", skip_serializing_if = "Option::is_none")]
    pub min_square_metres: Option<f64>,
    /// Maximum area in square metres.
    #[serde(rename = "max_metrekare", skip_serializing_if = "Option::is_none")]
    pub max_square_metres: Option<f64>,
    /// Room layout, e.g. "3+1".
    #[serde(rename = "oda_sayisi", skip_serializing_if = "Option::is_none")]
    pub room_count: Option<String>,
}

/// Request body for `POST /search/`. Free-text query and structured
/// filters may be combined; the backend decides the ranking.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchRequest {
    /// Free-text query.
    #[serde(rename = "sorgu", skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Structured filters.
    #[serde(rename = "filtreler", skip_serializing_if = "Option::is_none")]
    pub filters: Option<SearchFilters>,
    /// Sort order identifier.
    #[serde(rename = "siralama", skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Page number (1-based).
    #[serde(rename = "sayfa", skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(rename = "sayfa_boyutu", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Response body for `POST /search/`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    /// Whether the search succeeded.
    #[serde(rename = "basarili")]
    pub success: bool,
    /// The matching listings.
    #[serde(rename = "sonuclar", default)]
    pub results: Vec<ListingSummary>,
    /// Total number of matches.
    #[serde(rename = "toplam")]
    pub total: u64,
    /// Current page number (1-based).
    #[serde(rename = "sayfa")]
    pub page: u32,
    /// Total number of pages.
    #[serde(rename = "toplam_sayfa")]
    pub total_pages: u32,
    /// How the backend executed the search (e.g. semantic vs. filter).
    #[serde(rename = "arama_tipi")]
    pub search_kind: String,
}

/// A recently executed search, from `GET /search/recent`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentSearch {
    /// Unique identifier.
    pub id: u64,
    /// The free-text query.
    #[serde(rename = "sorgu")]
    pub query: String,
    /// The filters used, as raw JSON.
    #[serde(rename = "filtreler", default)]
    pub filters: serde_json::Value,
    /// Number of results at execution time.
    #[serde(rename = "sonuc_sayisi")]
    pub result_count: u64,
    /// When the search ran.
    #[serde(rename = "tarih")]
    pub executed_at: DateTime<Utc>,
}

/// A named saved search, from `GET /search/saved`.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedSearch {
    /// Unique identifier.
    pub id: u64,
    /// The free-text query.
    #[serde(rename = "sorgu")]
    pub query: String,
    /// The filters used, as raw JSON.
    #[serde(rename = "filtreler", default)]
    pub filters: serde_json::Value,
    /// Number of results at save time.
    #[serde(rename = "sonuc_sayisi")]
    pub result_count: u64,
    /// User-chosen name.
    #[serde(rename = "isim")]
    pub name: String,
    /// When the search was saved.
    #[serde(rename = "olusturma_tarihi")]
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /search/save`.
#[derive(Debug, Clone, Serialize)]
pub struct SaveSearchRequest {
    /// The free-text query being saved.
    #[serde(rename = "sorgu", skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// The filters being saved.
    #[serde(rename = "filtreler", skip_serializing_if = "Option::is_none")]
    pub filters: Option<SearchFilters>,
    /// Result count at save time.
    #[serde(rename = "sonuc_sayisi")]
    pub result_count: u64,
    /// User-chosen name.
    #[serde(rename = "isim")]
    pub name: String,
}
