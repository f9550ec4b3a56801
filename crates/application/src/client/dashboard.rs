//! Dashboard endpoints.

use emlak_domain::{ApiRequest, DashboardStats};

use super::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    /// Fetches the aggregate counters shown on the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.request_enveloped(ApiRequest::get("/dashboard/stats"))
            .await
    }
}
