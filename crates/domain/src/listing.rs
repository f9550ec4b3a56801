//! Property listing types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a listing is for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingKind {
    /// For sale.
    #[serde(rename = "satilik")]
    Sale,
    /// For rent.
    #[serde(rename = "kiralik")]
    Rent,
}

/// The kind of property being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    /// Apartment flat.
    #[serde(rename = "daire")]
    Apartment,
    /// Detached villa.
    #[serde(rename = "villa")]
    Villa,
    /// Land plot.
    #[serde(rename = "arsa")]
    Land,
    /// Commercial unit.
    #[serde(rename = "isyeri")]
    Commercial,
    /// Residence complex unit.
    #[serde(rename = "residence")]
    Residence,
}

/// Publication status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingStatus {
    /// Visible in searches.
    #[serde(rename = "aktif")]
    Active,
    /// Hidden from searches.
    #[serde(rename = "pasif")]
    Passive,
    /// Not yet published.
    #[serde(rename = "taslak")]
    Draft,
    /// Soft-deleted.
    #[serde(rename = "silindi")]
    Deleted,
}

/// Geographic coordinates of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    #[serde(rename = "enlem")]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(rename = "boylam")]
    pub longitude: f64,
}

/// A full property listing as returned by `GET /properties/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing identifier.
    pub id: u64,
    /// Listing title.
    #[serde(rename = "baslik")]
    pub title: String,
    /// Sale or rent.
    #[serde(rename = "ilan_tipi")]
    pub listing_kind: ListingKind,
    /// Kind of property.
    #[serde(rename = "emlak_tipi")]
    pub property_kind: PropertyKind,
    /// City name.
    #[serde(rename = "sehir")]
    pub city: String,
    /// District name.
    #[serde(rename = "ilce")]
    pub district: String,
    /// Neighbourhood name, when known.
    #[serde(rename = "mahalle", default)]
    pub neighbourhood: Option<String>,
    /// Asking price.
    #[serde(rename = "fiyat")]
    pub price: f64,
    /// Currency code of the price.
    #[serde(rename = "para_birimi")]
    pub currency: String,
    /// Net area in square metres.
    #[serde(rename = "metrekare", default)]
    pub square_metres: Option<f64>,
    /// Room layout, e.g. "3+1".
    #[serde(rename = "oda_sayisi", default)]
    pub room_count: Option<String>,
    /// Number of bathrooms.
    #[serde(rename = "banyo_sayisi", default)]
    pub bathroom_count: Option<u32>,
    /// Building age in years.
    #[serde(rename = "bina_yasi", default)]
    pub building_age: Option<u32>,
    /// Floor the unit is on.
    #[serde(rename = "kat", default)]
    pub floor: Option<i32>,
    /// Total floors in the building.
    #[serde(rename = "toplam_kat", default)]
    pub total_floors: Option<i32>,
    /// Heating type.
    #[serde(rename = "isitma_tipi", default)]
    pub heating: Option<String>,
    /// Free-form description.
    #[serde(rename = "aciklama", default)]
    pub description: Option<String>,
    /// Feature tags.
    #[serde(rename = "ozellikler", default)]
    pub features: Vec<String>,
    /// Image URLs.
    #[serde(rename = "gorseller", default)]
    pub images: Vec<String>,
    /// Geographic location, when geocoded.
    #[serde(rename = "konum", default)]
    pub location: Option<GeoPoint>,
    /// Where the listing was sourced from.
    #[serde(rename = "kaynak")]
    pub source: String,
    /// Publication status.
    #[serde(rename = "durum")]
    pub status: ListingStatus,
    /// Price per square metre, when derivable.
    #[serde(rename = "birim_fiyat", default)]
    pub unit_price: Option<f64>,
    /// When the listing was created.
    #[serde(rename = "olusturma_tarihi")]
    pub created_at: DateTime<Utc>,
    /// When the listing was last updated.
    #[serde(rename = "guncelleme_tarihi")]
    pub updated_at: DateTime<Utc>,
}

/// Condensed listing shape used in list and search responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSummary {
    /// Unique listing identifier.
    pub id: u64,
    /// Listing title.
    #[serde(rename = "baslik")]
    pub title: String,
    /// Sale or rent.
    #[serde(rename = "ilan_tipi")]
    pub listing_kind: ListingKind,
    /// Kind of property (free-form in summaries).
    #[serde(rename = "emlak_tipi")]
    pub property_kind: String,
    /// City name.
    #[serde(rename = "sehir")]
    pub city: String,
    /// District name.
    #[serde(rename = "ilce")]
    pub district: String,
    /// Asking price.
    #[serde(rename = "fiyat")]
    pub price: f64,
    /// Net area in square metres.
    #[serde(rename = "metrekare", default)]
    pub square_metres: Option<f64>,
    /// Room layout, e.g. "3+1".
    #[serde(rename = "oda_sayisi", default)]
    pub room_count: Option<String>,
    /// Building age in years.
    #[serde(rename = "bina_yasi", default)]
    pub building_age: Option<u32>,
    /// Publication status (free-form in summaries).
    #[serde(rename = "durum")]
    pub status: String,
    /// Where the listing was sourced from.
    #[serde(rename = "kaynak")]
    pub source: String,
    /// Price per square metre, when derivable.
    #[serde(rename = "birim_fiyat", default)]
    pub unit_price: Option<f64>,
    /// Geographic location, when geocoded.
    #[serde(rename = "konum", default)]
    pub location: Option<GeoPoint>,
    /// When the listing was created.
    #[serde(rename = "olusturma_tarihi")]
    pub created_at: DateTime<Utc>,
    /// When the listing was last updated.
    #[serde(rename = "guncelleme_tarihi")]
    pub updated_at: DateTime<Utc>,
    /// Relevance score assigned by the backend's AI ranking.
    #[serde(rename = "ai_skoru", default)]
    pub ai_score: Option<f64>,
}

/// Query parameters for `GET /properties`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingQuery {
    /// Filter by city.
    #[serde(rename = "sehir", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Filter by district.
    #[serde(rename = "ilce", skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Filter by publication status.
    #[serde(rename = "durum", skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
    /// Page number (1-based).
    #[serde(rename = "sayfa", skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(rename = "sayfa_boyutu", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
