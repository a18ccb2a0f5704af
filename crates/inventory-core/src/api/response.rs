//! Response envelopes and pagination.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single-value response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(with = "crate::timestamp")]
    pub timestamp: NaiveDateTime,
}

impl<T> ApiResponse<T> {
    /// Wrap a value with the current timestamp.
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
            timestamp: crate::timestamp::now(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// A page of results.
///
/// `number` is the zero-based page index, matching the server's paging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub size: u64,
    pub number: u64,
    pub first: bool,
    pub last: bool,
}

impl<T> PaginatedResponse<T> {
    /// Build a page from its items and the overall element count.
    pub fn new(content: Vec<T>, number: u64, size: u64, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };

        Self {
            content,
            total_elements,
            total_pages,
            size,
            number,
            first: number == 0,
            last: number + 1 >= total_pages,
        }
    }

    /// An empty first page.
    pub fn empty(size: u64) -> Self {
        Self::new(Vec::new(), 0, size, 0)
    }

    /// Whether there is a page after this one.
    pub fn has_next(&self) -> bool {
        !self.last
    }

    /// Whether there is a page before this one.
    pub fn has_previous(&self) -> bool {
        !self.first
    }

    /// Map the items, keeping the paging information.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            size: self.size,
            number: self.number,
            first: self.first,
            last: self.last,
        }
    }
}

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    /// Server local time, without a zone.
    #[serde(with = "crate::timestamp")]
    pub timestamp: NaiveDateTime,
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    pub path: String,
}

impl ApiError {
    /// Create an error body stamped with the current time.
    pub fn new(
        status: u16,
        error: impl Into<String>,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: crate::timestamp::now(),
            status,
            error: error.into(),
            message: message.into(),
            details: None,
            path: path.into(),
        }
    }

    /// Attach field-level details.
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = Some(details);
        self
    }

    /// Whether the status is in the 4xx range.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Whether the status is in the 5xx range.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} at {}: {}", self.status, self.error, self.path, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_math() {
        let page = PaginatedResponse::new(vec![1, 2, 3], 0, 20, 45);
        assert_eq!(page.total_pages, 3);
        assert!(page.first);
        assert!(!page.last);
        assert!(page.has_next());
        assert!(!page.has_previous());

        let last = PaginatedResponse::new(vec![41, 42, 43, 44, 45], 2, 20, 45);
        assert!(last.last);
        assert!(last.has_previous());
    }

    #[test]
    fn test_empty_page_is_first_and_last() {
        let page: PaginatedResponse<u32> = PaginatedResponse::empty(20);
        assert_eq!(page.total_pages, 0);
        assert!(page.first);
        assert!(page.last);
    }

    #[test]
    fn test_page_wire_format() {
        let page = PaginatedResponse::new(vec!["a"], 0, 1, 2);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["totalElements"], 2);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["number"], 0);
        assert_eq!(json["first"], true);
        assert_eq!(json["last"], false);
    }

    #[test]
    fn test_map_keeps_paging() {
        let page = PaginatedResponse::new(vec![1, 2], 1, 2, 6).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_api_error_parse() {
        let json = r#"{
            "timestamp": "2024-05-02T08:00:00Z",
            "status": 400,
            "error": "Bad Request",
            "message": "Validation failed",
            "details": ["name: Product name is required"],
            "path": "/api/products"
        }"#;
        let err: ApiError = serde_json::from_str(json).unwrap();

        assert!(err.is_client_error());
        assert!(!err.is_server_error());
        assert_eq!(err.details.as_ref().map(Vec::len), Some(1));
        assert_eq!(
            err.to_string(),
            "400 Bad Request at /api/products: Validation failed"
        );
    }

    #[test]
    fn test_api_error_parse_zone_less_timestamp() {
        let json = r#"{
            "timestamp": "2024-03-01T10:15:00.123",
            "status": 404,
            "error": "Not Found",
            "message": "Product not found with id: 9",
            "path": "/api/products/9"
        }"#;
        let err: ApiError = serde_json::from_str(json).unwrap();

        assert_eq!(err.status, 404);
        assert!(err.details.is_none());
        assert_eq!(
            err.timestamp.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            "2024-03-01 10:15:00.123"
        );
        let back = serde_json::to_value(&err).unwrap();
        assert_eq!(back["timestamp"], "2024-03-01T10:15:00.123");
    }

    #[test]
    fn test_api_response_envelope() {
        let resp = ApiResponse::new(5u32).with_message("ok");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["data"], 5);
        assert_eq!(json["message"], "ok");
        assert!(json["timestamp"].is_string());

        let back: ApiResponse<u32> = serde_json::from_value(json).unwrap();
        assert_eq!(back, resp);
    }
}
