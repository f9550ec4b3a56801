//! Raw response from the transport layer, before envelope decoding.

/// Status code and body of one completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a raw response.
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Whether the response is an authorization failure. This is the sole
    /// trigger for the token refresh flow.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(RawResponse::new(200, Vec::new()).is_success());
        assert!(RawResponse::new(204, Vec::new()).is_success());
        assert!(!RawResponse::new(401, Vec::new()).is_success());
        assert!(RawResponse::new(401, Vec::new()).is_unauthorized());
        assert!(!RawResponse::new(403, Vec::new()).is_unauthorized());
        assert!(!RawResponse::new(500, Vec::new()).is_unauthorized());
    }
}
