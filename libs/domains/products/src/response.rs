use http::StatusCode;
use serde::{Serialize, Serializer};

/// Uniform envelope returned by every service operation
///
/// ```json
/// {
///   "status_code": 201,
///   "message": "Ürün Eklendi",
///   "data": { "id": "...", "name": "Test", "stock": 25, "price": 2500.0, "category_id": 1 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceResponse<T> {
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ServiceResponse<T> {
    pub fn new(status_code: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status_code,
            message: message.into(),
            data,
        }
    }

    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::CREATED, message, Some(data))
    }

    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, message, Some(data))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, None)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, None)
    }

    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}
