use crate::core::catalog::OccasionCatalog;
use crate::domain::model::{OutfitSuggestion, Rating, SaveAck};
use crate::domain::ports::{ConfigProvider, Delay, RatingSource, SuggestionProvider};
use rand::Rng;
use std::time::Duration;

/// Demo generator backed by the static occasion catalog.
///
/// `weather` is accepted for future extension but currently has no effect on
/// the output; selection is occasion-driven only.
pub struct DemoOutfitGenerator<C: ConfigProvider, D: Delay> {
    config: C,
    delay: D,
    catalog: OccasionCatalog,
}

impl<C: ConfigProvider, D: Delay> DemoOutfitGenerator<C, D> {
    pub fn new(config: C, delay: D) -> Self {
        Self {
            config,
            delay,
            catalog: OccasionCatalog::demo(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider, D: Delay> SuggestionProvider for DemoOutfitGenerator<C, D> {
    async fn generate(&self, occasion: &str, weather: &str) -> Vec<OutfitSuggestion> {
        tracing::debug!(
            "🎽 Generating suggestions for occasion '{}' (weather '{}' is accepted but unused)",
            occasion,
            weather
        );

        // 模擬計算延遲，時間長短由配置決定
        let latency = Duration::from_millis(self.config.demo_latency_ms());
        if !latency.is_zero() {
            self.delay.wait(latency).await;
        }

        let mut suggestions = self.catalog.suggestions_for(occasion).to_vec();
        suggestions.truncate(self.config.max_suggestions());

        tracing::debug!("🎽 Produced {} suggestions", suggestions.len());
        suggestions
    }
}

/// Marks a suggestion as saved. Presentation-only: nothing is persisted,
/// the ack just drives the transient confirmation.
pub fn save(suggestion: &OutfitSuggestion) -> SaveAck {
    tracing::debug!("💾 Save requested for outfit: {}", suggestion.items.join(", "));
    SaveAck {
        acknowledged: true,
        saved_at: chrono::Utc::now(),
    }
}

/// Draws a demo rating for a suggestion from the injected source.
pub fn rate<R: RatingSource>(suggestion: &OutfitSuggestion, ratings: &R) -> Rating {
    let value = ratings.next_rating();
    debug_assert!((4..=5).contains(&value));
    tracing::debug!(
        "⭐ Rated outfit '{}' as {}/5",
        suggestion.items.join(", "),
        value
    );
    Rating { value }
}

/// Default rating source: uniform draw from {4, 5}.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngRating;

impl RatingSource for ThreadRngRating {
    fn next_rating(&self) -> u8 {
        rand::thread_rng().gen_range(4..=5)
    }
}
