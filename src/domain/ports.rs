use crate::domain::model::{CompatibilityView, ErrorCard, OutfitSuggestion, SuggestionCard};
use async_trait::async_trait;
use std::time::Duration;

/// Injectable wait so simulated latency never blocks tests.
pub trait Delay: Send + Sync {
    fn wait(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn demo_latency_ms(&self) -> u64;
    fn max_suggestions(&self) -> usize;
    fn request_timeout_secs(&self) -> u64;
}

/// Source of outfit suggestions. Total over its input domain: unknown
/// occasions fall back to a default set, so there is no error path.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn generate(&self, occasion: &str, weather: &str) -> Vec<OutfitSuggestion>;
}

/// Rating draw for the demo rate button. Implementations must stay within 4..=5.
pub trait RatingSource: Send + Sync {
    fn next_rating(&self) -> u8;
}

/// Thin rendering seam; everything it receives is precomputed view data.
pub trait Presenter: Send + Sync {
    fn show_loading(&self);
    fn hide_loading(&self);
    fn render_cards(&self, cards: &[SuggestionCard]);
    fn render_compatibility(&self, view: &CompatibilityView);
    fn render_error(&self, card: &ErrorCard);
    fn render_line(&self, line: &str);
}
