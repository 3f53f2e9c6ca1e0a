pub mod comic;
pub mod document;
pub mod fetcher;
pub mod panels;

pub use crate::domain::model::{Chapter, ComicOutput, FetchSource, PanelDefinition};
pub use crate::domain::ports::{ConfigProvider, ImageGenerator, Storage};
pub use crate::utils::error::Result;
