use crate::domain::model::OutfitSuggestion;
use std::collections::HashMap;

const FALLBACK_OCCASION: &str = "casual";

/// Fixed demo catalog keyed by occasion. Unrecognized keys resolve to the
/// casual entry, so lookups never fail.
#[derive(Debug, Clone)]
pub struct OccasionCatalog {
    entries: HashMap<String, Vec<OutfitSuggestion>>,
}

fn suggestion(items: &[&str], score: u8) -> OutfitSuggestion {
    OutfitSuggestion {
        items: items.iter().map(|s| s.to_string()).collect(),
        score,
    }
}

impl OccasionCatalog {
    /// 展示用的固定穿搭資料
    pub fn demo() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            "work".to_string(),
            vec![
                suggestion(&["Navy Blazer", "White Shirt", "Black Trousers"], 95),
                suggestion(&["Gray Suit", "Blue Shirt", "Black Shoes"], 92),
            ],
        );
        entries.insert(
            "casual".to_string(),
            vec![
                suggestion(&["Denim Jacket", "White Tee", "Blue Jeans"], 88),
                suggestion(&["Cardigan", "Striped Shirt", "Khaki Pants"], 85),
            ],
        );
        entries.insert(
            "formal".to_string(),
            vec![
                suggestion(&["Black Suit", "White Shirt", "Black Tie"], 98),
                suggestion(&["Navy Dress", "Pearl Necklace", "Heels"], 94),
            ],
        );
        entries.insert(
            "party".to_string(),
            vec![
                suggestion(&["Sequin Top", "Black Skirt", "Heels"], 91),
                suggestion(&["Silk Dress", "Statement Earrings", "Clutch"], 89),
            ],
        );

        Self { entries }
    }

    /// Lookup with the casual fallback for anything outside the closed key set.
    pub fn suggestions_for(&self, occasion: &str) -> &[OutfitSuggestion] {
        self.entries
            .get(occasion)
            .or_else(|| self.entries.get(FALLBACK_OCCASION))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, occasion: &str) -> bool {
        self.entries.contains_key(occasion)
    }

    pub fn occasions(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for OccasionCatalog {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_occasions_have_ordered_non_empty_entries() {
        let catalog = OccasionCatalog::demo();

        for key in ["work", "casual", "formal", "party"] {
            let suggestions = catalog.suggestions_for(key);
            assert!(!suggestions.is_empty(), "no suggestions for '{}'", key);
            for s in suggestions {
                assert!(!s.items.is_empty());
                assert!(s.score <= 100);
            }
        }

        // Insertion order is preserved, not score order
        let work = catalog.suggestions_for("work");
        assert_eq!(work[0].items[0], "Navy Blazer");
        assert_eq!(work[0].score, 95);
        assert_eq!(work[1].score, 92);
    }

    #[test]
    fn unknown_occasion_falls_back_to_casual() {
        let catalog = OccasionCatalog::demo();

        for key in ["wedding", "gym", "", "WORK"] {
            assert_eq!(catalog.suggestions_for(key), catalog.suggestions_for("casual"));
        }
    }

    #[test]
    fn occasion_key_set_is_closed() {
        let catalog = OccasionCatalog::demo();
        assert_eq!(catalog.occasions(), vec!["casual", "formal", "party", "work"]);
        assert!(catalog.contains("party"));
        assert!(!catalog.contains("wedding"));
    }
}
