use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Reply envelope for POST /api/chat. Emergency interceptions carry
/// `isEmergency` and no timestamp; relayed replies carry a timestamp only.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(rename = "isEmergency", skip_serializing_if = "Option::is_none")]
    pub is_emergency: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ChatResponse {
    pub fn emergency(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            is_emergency: Some(true),
            timestamp: None,
        }
    }

    pub fn relayed(reply: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            reply: reply.into(),
            is_emergency: None,
            timestamp: Some(timestamp),
        }
    }
}
