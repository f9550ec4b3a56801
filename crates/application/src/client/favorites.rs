//! Favorites endpoints.

use emlak_domain::{ApiRequest, Favorite};

use super::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    /// Fetches the user's favorited listings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn favorites(&self) -> ApiResult<Vec<Favorite>> {
        self.request_list(ApiRequest::get("/favorites/")).await
    }

    /// Adds a listing to the favorites, optionally with a note.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn add_favorite(&self, listing_id: u64, note: Option<&str>) -> ApiResult<()> {
        let mut body = serde_json::json!({ "ilan_id": listing_id });
        if let (Some(note), Some(map)) = (note, body.as_object_mut()) {
            map.insert("not_metni".to_string(), serde_json::Value::from(note));
        }
        self.request_unit(ApiRequest::post("/favorites/").with_json(body))
            .await
    }

    /// Removes a listing from the favorites.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn remove_favorite(&self, listing_id: u64) -> ApiResult<()> {
        self.request_unit(ApiRequest::delete(format!("/favorites/{listing_id}")))
            .await
    }

    /// Replaces the note attached to a favorite.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn update_favorite_note(&self, listing_id: u64, note: &str) -> ApiResult<()> {
        let body = serde_json::json!({ "not_metni": note });
        self.request_unit(ApiRequest::patch(format!("/favorites/{listing_id}/note")).with_json(body))
            .await
    }
}
