use crate::domain::model::{CompatibilityView, ErrorCard, SuggestionCard};
use crate::domain::ports::{Delay, Presenter};
use std::time::Duration;

/// Real wait backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Renders view models to stdout for the CLI demo binaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn show_loading(&self) {
        println!("⏳ Loading...");
    }

    fn hide_loading(&self) {}

    fn render_cards(&self, cards: &[SuggestionCard]) {
        for card in cards {
            println!();
            println!("  [{}] {}", card.occasion_tag, card.score_label);
            for item in &card.items {
                println!("    - {}", item);
            }
        }
        println!();
    }

    fn render_compatibility(&self, view: &CompatibilityView) {
        println!();
        println!("🎨 {}", view.heading);
        println!("  {}", view.colors_line);
        println!("  {}", view.score_line);
        println!("  {}", view.verdict_line);
        println!();
    }

    fn render_error(&self, card: &ErrorCard) {
        eprintln!();
        eprintln!("❌ {}", card.heading);
        eprintln!("  {}", card.message);
        eprintln!("  💡 {}", card.suggestion);
        eprintln!("  ({})", card.detail);
        eprintln!();
    }

    fn render_line(&self, line: &str) {
        println!("  {}", line);
    }
}
