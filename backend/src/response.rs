//! The JSON envelope every endpoint answers with:
//! `{"status": "success" | "fail" | "error", "message"?: ..., "data"?: ...}`.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    /// Client-caused error (4xx).
    Fail,
    /// Server-caused fault (5xx).
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn success(message: Option<&str>, data: Option<Value>) -> Self {
        Envelope {
            status: Status::Success,
            message: message.map(str::to_string),
            data,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Envelope {
            status: Status::Fail,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope {
            status: Status::Error,
            message: Some(message.into()),
            data: None,
        }
    }
}
