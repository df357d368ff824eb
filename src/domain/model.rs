use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single outfit suggestion: ordered garment names plus a match score (0-100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitSuggestion {
    pub items: Vec<String>,
    pub score: u8,
}

/// Request body for the color-compatibility analysis endpoint.
/// hex1/hex2 are optional extra hints the service accepts; they are left off
/// the wire entirely when not provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityRequest {
    pub color1: String,
    pub color2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex2: Option<String>,
}

impl CompatibilityRequest {
    pub fn new(color1: impl Into<String>, color2: impl Into<String>) -> Self {
        Self {
            color1: color1.into(),
            color2: color2.into(),
            hex1: None,
            hex2: None,
        }
    }

    pub fn with_hex(mut self, hex1: impl Into<String>, hex2: impl Into<String>) -> Self {
        self.hex1 = Some(hex1.into());
        self.hex2 = Some(hex2.into());
        self
    }
}

/// Response of the analysis service, trusted as-is (no extra validation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub color1: String,
    pub color2: String,
    pub compatibility_score: f64,
    pub compatible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// Acknowledgement of a save interaction. Nothing is persisted; the ack only
/// drives the transient confirmation in the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveAck {
    pub acknowledged: bool,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeAck {
    pub email: String,
    pub subscribed: bool,
}

/// Pure view model of one suggestion card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionCard {
    pub occasion_tag: String,
    pub score_label: String,
    pub items: Vec<String>,
}

/// A button-style interaction that shows `active_label` for `hold`, then
/// reverts to `idle_label`. Applying the timing is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientAction {
    pub idle_label: String,
    pub active_label: String,
    pub hold: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityView {
    pub heading: String,
    pub colors_line: String,
    pub score_line: String,
    pub verdict_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCard {
    pub heading: String,
    pub message: String,
    pub suggestion: String,
    pub detail: String,
}
