use crate::core::view;
use crate::domain::model::{OutfitSuggestion, SuggestionCard};
use crate::domain::ports::{Presenter, SuggestionProvider};

/// Drives one generate-and-render pass: loading indicator on, suggestions
/// from the provider, cards out through the presenter.
pub struct DemoEngine<G: SuggestionProvider, P: Presenter> {
    generator: G,
    presenter: P,
}

impl<G: SuggestionProvider, P: Presenter> DemoEngine<G, P> {
    pub fn new(generator: G, presenter: P) -> Self {
        Self {
            generator,
            presenter,
        }
    }

    pub async fn run(&self, occasion: &str, weather: &str) -> Vec<OutfitSuggestion> {
        tracing::info!("🎽 Generating outfit suggestions for '{}'...", occasion);
        self.presenter.show_loading();

        let suggestions = self.generator.generate(occasion, weather).await;
        let cards: Vec<SuggestionCard> = suggestions
            .iter()
            .map(|s| view::suggestion_card(occasion, s))
            .collect();

        self.presenter.hide_loading();
        self.presenter.render_cards(&cards);

        tracing::info!("🎽 Rendered {} suggestions", cards.len());
        suggestions
    }
}
