//! Property listing endpoints.

use emlak_domain::{ApiRequest, Listing, ListingQuery, ListingSummary, Paginated};

use super::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    /// Fetches a page of listings matching the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn listings(&self, query: &ListingQuery) -> ApiResult<Paginated<ListingSummary>> {
        let request = ApiRequest::get("/properties").with_query(Self::query_pairs(query)?);
        self.request_json(request).await
    }

    /// Fetches a single listing by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn listing(&self, id: u64) -> ApiResult<Listing> {
        self.request_json(ApiRequest::get(format!("/properties/{id}")))
            .await
    }

    /// Soft-deletes a listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn delete_listing(&self, id: u64) -> ApiResult<()> {
        self.request_unit(ApiRequest::delete(format!("/properties/{id}")))
            .await
    }
}
