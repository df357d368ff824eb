//! Pure view-model layer: turns domain data into display-ready strings so
//! presenters stay trivial and the logic is testable without any UI.

use crate::domain::model::{
    CompatibilityResult, CompatibilityView, ErrorCard, OutfitSuggestion, Rating, SuggestionCard,
    TransientAction,
};
use crate::utils::error::DemoError;
use std::time::Duration;

/// How long a transient confirmation (saved/rated) stays visible.
pub const TRANSIENT_HOLD: Duration = Duration::from_secs(2);

/// How long the newsletter confirmation stays visible.
pub const SUBSCRIBE_HOLD: Duration = Duration::from_secs(3);

pub fn occasion_tag(occasion: &str) -> String {
    let mut chars = occasion.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn suggestion_card(occasion: &str, suggestion: &OutfitSuggestion) -> SuggestionCard {
    SuggestionCard {
        occasion_tag: occasion_tag(occasion),
        score_label: format!("{}% Match", suggestion.score),
        items: suggestion.items.clone(),
    }
}

pub fn save_action() -> TransientAction {
    TransientAction {
        idle_label: "💾 Save".to_string(),
        active_label: "✅ Saved".to_string(),
        hold: TRANSIENT_HOLD,
    }
}

pub fn rate_action(rating: &Rating) -> TransientAction {
    TransientAction {
        idle_label: "⭐ Rate".to_string(),
        active_label: format!("⭐ {}/5", rating.value),
        hold: TRANSIENT_HOLD,
    }
}

pub fn subscribe_action() -> TransientAction {
    TransientAction {
        idle_label: "Subscribe".to_string(),
        active_label: "✅ Subscribed!".to_string(),
        hold: SUBSCRIBE_HOLD,
    }
}

/// 服務回傳 0..1 的分數，畫面上以百分比（一位小數）呈現
pub fn compatibility_view(result: &CompatibilityResult) -> CompatibilityView {
    CompatibilityView {
        heading: "Color Compatibility Result".to_string(),
        colors_line: format!("Colors: {} + {}", result.color1, result.color2),
        score_line: format!(
            "Compatibility Score: {:.1}%",
            result.compatibility_score * 100.0
        ),
        verdict_line: format!(
            "Compatible: {}",
            if result.compatible { "✅ Yes" } else { "❌ No" }
        ),
    }
}

pub fn connection_error_card(error: &DemoError) -> ErrorCard {
    ErrorCard {
        heading: "Connection Error".to_string(),
        message: error.user_friendly_message(),
        suggestion: error.recovery_suggestion(),
        detail: error.to_string(),
    }
}
