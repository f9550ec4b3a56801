//! CSV import endpoints: upload, status polling, confirmation.

use emlak_domain::{ApiRequest, ImportStatus, ImportStatusResponse, UploadReceipt};

use super::ApiClient;
use crate::error::ApiResult;

impl ApiClient {
    /// Uploads a CSV file for validation and returns the job receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn upload_csv(
        &self,
        file_name: impl Into<String>,
        content: Vec<u8>,
    ) -> ApiResult<UploadReceipt> {
        let request = ApiRequest::post("/import/upload").with_file("file", file_name, content);
        self.request_json(request).await
    }

    /// Polls the status of an import job. Callers stop polling once
    /// [`emlak_domain::ImportState::is_terminal`] returns true.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn import_status(&self, import_id: &str) -> ApiResult<ImportStatus> {
        let response: ImportStatusResponse = self
            .request_json(ApiRequest::get(format!("/import/{import_id}/status")))
            .await?;
        Ok(response.status)
    }

    /// Confirms a validated import so the backend starts ingesting rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn confirm_import(&self, import_id: &str) -> ApiResult<()> {
        self.request_unit(ApiRequest::post(format!("/import/{import_id}/confirm")))
            .await
    }

    /// Fetches past import jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn import_history(&self) -> ApiResult<Vec<ImportStatus>> {
        self.request_list(ApiRequest::get("/import/history")).await
    }
}
