use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Uniform `{message, status, data}` envelope wrapping every outcome,
/// success or failure.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub message: String,
    pub status: u16,
    pub data: Value,
}

impl Envelope {
    pub fn new(message: &str, status: StatusCode, data: impl Serialize) -> Self {
        Self {
            message: message.to_string(),
            status: status.as_u16(),
            data: serde_json::to_value(data).unwrap_or(Value::Null),
        }
    }

    pub fn without_data(message: &str, status: StatusCode) -> Self {
        Self { message: message.to_string(), status: status.as_u16(), data: Value::Null }
    }
}

/// Build the HTTP response carrying the envelope under its own status code.
pub fn envelope(status: StatusCode, message: &str, data: impl Serialize) -> Response {
    (status, Json(Envelope::new(message, status, data))).into_response()
}

pub fn envelope_without_data(status: StatusCode, message: &str) -> Response {
    (status, Json(Envelope::without_data(message, status))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_carries_message_status_and_data() {
        let e = Envelope::new("Success", StatusCode::OK, vec![1, 2, 3]);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["message"], "Success");
        assert_eq!(json["status"], 200);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn envelope_without_data_serializes_null() {
        let e = Envelope::without_data("Driver already exists", StatusCode::CONFLICT);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["status"], 409);
        assert!(json["data"].is_null());
    }
}
