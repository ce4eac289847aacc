use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A chat message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "name")]
    pub sender_name: String,
    #[serde(rename = "message")]
    pub body: String,
    /// Epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Message {
    pub fn new(sender_name: impl Into<String>, body: impl Into<String>, created_at: i64) -> Self {
        Self {
            sender_name: sender_name.into(),
            body: body.into(),
            created_at,
        }
    }

    /// Message stamped with the current wall clock.
    pub fn now(sender_name: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(sender_name, body, Utc::now().timestamp_millis())
    }

    pub fn local_time(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.created_at).single()
    }
}
