//! Favorites types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::listing::ListingSummary;

/// A favorited listing with the user's note, from `GET /favorites/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Favorite {
    /// The favorited listing.
    #[serde(rename = "ilan")]
    pub listing: ListingSummary,
    /// Free-form note attached by the user.
    #[serde(rename = "not_metni", default)]
    pub note: String,
    /// When the listing was favorited.
    #[serde(rename = "eklenme_tarihi")]
    pub added_at: DateTime<Utc>,
}
