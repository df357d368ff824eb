pub mod catalog;
pub mod compatibility;
pub mod demo;
pub mod generator;
pub mod newsletter;
pub mod view;

pub use crate::domain::model::{
    CompatibilityRequest, CompatibilityResult, OutfitSuggestion, Rating, SaveAck,
};
pub use crate::domain::ports::{ConfigProvider, Delay, Presenter, RatingSource, SuggestionProvider};
pub use crate::utils::error::Result;
