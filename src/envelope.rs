//! Response envelopes and the upstream error convention
//!
//! Every SL endpoint wraps its payload in an envelope carrying a status
//! section and an error indicator whose field name and type vary per
//! endpoint. This module normalizes those indicators into [`SlError::Api`]
//! so resource modules never hand out a payload alongside an error.

use serde::Deserialize;
use serde_json::Value;

use crate::error::SlError;

/// The `Message` indicator as sent by the SL API.
///
/// Declared as "any type" upstream: it may be absent, `null`, a string, or
/// occasionally a structured value. Only a non-empty string counts as an
/// error; everything else normalizes to a non-error variant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Option<Value>")]
pub(crate) enum ApiMessage {
    /// No message: absent, `null`, or an empty string
    #[default]
    Absent,
    /// A non-empty textual message, treated as an upstream error
    Text(String),
    /// A structured or otherwise non-string value, never treated as an error
    Other,
}

impl From<Option<Value>> for ApiMessage {
    fn from(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::String(text)) if text.is_empty() => Self::Absent,
            Some(Value::String(text)) => Self::Text(text),
            Some(_) => Self::Other,
        }
    }
}

impl ApiMessage {
    /// The message text, when it indicates an error
    pub(crate) fn as_error(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Absent | Self::Other => None,
        }
    }
}

/// Envelope shared by the typeahead and realtime endpoints
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct ResponseEnvelope<T> {
    #[serde(rename = "StatusCode", default)]
    pub status_code: i32,

    #[serde(rename = "ExecutionTime", default)]
    pub execution_time: i64,

    #[serde(rename = "Message", default)]
    pub message: ApiMessage,

    #[serde(rename = "ResponseData", default)]
    pub response_data: Option<T>,
}

// Manual impl so the zero-value envelope exists for any payload type; a
// derive would demand `T: Default`.
impl<T> Default for ResponseEnvelope<T> {
    fn default() -> Self {
        Self {
            status_code: 0,
            execution_time: 0,
            message: ApiMessage::Absent,
            response_data: None,
        }
    }
}

impl<T> ResponseEnvelope<T> {
    /// Normalize the envelope: a message error wins over any payload
    pub(crate) fn into_payload(self) -> Result<Option<T>, SlError> {
        if let Some(message) = self.message.as_error() {
            return Err(SlError::Api(message.to_string()));
        }
        Ok(self.response_data)
    }
}

/// Normalize the travel planner error convention: `errorText` first, then
/// `errorCode`, then the generic `Message`. All empty means success.
pub(crate) fn planner_error(
    error_text: &str,
    error_code: &str,
    message: &ApiMessage,
) -> Result<(), SlError> {
    if !error_text.is_empty() {
        return Err(SlError::Api(error_text.to_string()));
    }

    if !error_code.is_empty() {
        return Err(SlError::Api(error_code.to_string()));
    }

    if let Some(text) = message.as_error() {
        return Err(SlError::Api(text.to_string()));
    }

    Ok(())
}
