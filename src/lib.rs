pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::{TerminalPresenter, TokioDelay};
pub use config::toml_config::TomlConfig;
pub use config::CliConfig;

pub use core::{
    catalog::OccasionCatalog, compatibility::CompatibilityClient, demo::DemoEngine,
    generator::DemoOutfitGenerator, newsletter::NewsletterSignup,
};
pub use domain::model::{CompatibilityRequest, CompatibilityResult, OutfitSuggestion};
pub use utils::error::{DemoError, Result};
