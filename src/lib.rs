pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{LocalStorage, OpenAiImageClient};
pub use config::credentials::{load_api_key, ApiKey};
pub use config::ComicConfig;
pub use crate::core::{comic::ComicEngine, document::DocumentAssembler, fetcher::ImageFetcher};
pub use utils::error::{ComicError, Result};
