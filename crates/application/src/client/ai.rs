//! AI analysis, comparison and chat endpoints.

use emlak_domain::{AnalysisResponse, ApiRequest, ChatReply, ChatRequest, ComparisonResponse};

use super::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    /// Requests an AI price/value analysis of one listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn analyze_listing(&self, listing_id: u64) -> ApiResult<AnalysisResponse> {
        let body = serde_json::json!({ "ilan_id": listing_id });
        self.request_json(ApiRequest::post("/ai/analyze").with_json(body))
            .await
    }

    /// Requests an AI comparison of several listings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn compare_listings(&self, listing_ids: &[u64]) -> ApiResult<ComparisonResponse> {
        let body = serde_json::json!({ "ilan_idleri": listing_ids });
        self.request_json(ApiRequest::post("/ai/compare").with_json(body))
            .await
    }

    /// Sends a chat message; a new session is opened when the request
    /// carries no session ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn chat(&self, request: &ChatRequest) -> ApiResult<ChatReply> {
        let request = ApiRequest::post("/ai/chat").with_json(Self::to_json(request)?);
        self.request_json(request).await
    }
}
