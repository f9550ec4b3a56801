//! Search endpoints: execution, history and saved searches.

use emlak_domain::{
    ApiRequest, RecentSearch, SavedSearch, SaveSearchRequest, SearchRequest, SearchResults,
};

use super::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    /// Runs a search. Free text and structured filters may be combined;
    /// ranking is decided server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn search(&self, request: &SearchRequest) -> ApiResult<SearchResults> {
        let request = ApiRequest::post("/search/").with_json(Self::to_json(request)?);
        self.request_json(request).await
    }

    /// Fetches the user's most recent searches.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn recent_searches(&self) -> ApiResult<Vec<RecentSearch>> {
        self.request_list(ApiRequest::get("/search/recent")).await
    }

    /// Fetches the user's saved searches.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn saved_searches(&self) -> ApiResult<Vec<SavedSearch>> {
        self.request_list(ApiRequest::get("/search/saved")).await
    }

    /// Saves a search under a user-chosen name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn save_search(&self, request: &SaveSearchRequest) -> ApiResult<()> {
        let request = ApiRequest::post("/search/save").with_json(Self::to_json(request)?);
        self.request_unit(request).await
    }
}
