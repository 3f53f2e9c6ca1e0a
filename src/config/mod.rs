#[cfg(feature = "cli")]
pub mod cli;
pub mod credentials;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/images/generations";
pub const DEFAULT_MODEL: &str = "dall-e-3";
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";
pub const DEFAULT_STYLE_SUFFIX: &str =
    " in a cartoony illustration style, similar to the Magic Treehouse series.";
pub const DEFAULT_IMAGE_DIR: &str = "img";
pub const DEFAULT_DOCUMENT_PATH: &str = "../writing/comic.md";
pub const DEFAULT_IMAGE_LINK_PREFIX: &str = "../src/img";
pub const DEFAULT_TITLE: &str = "History Comes Alive";
pub const DEFAULT_EXPLANATION_FILE: &str = "image_explanation";
/// Where the document expects the working directory to be, seen from the
/// document's own directory.
const LINK_BASE: &str = "../src";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ComicConfig {
    pub api_endpoint: String,
    pub model: String,
    pub image_size: String,
    pub style_suffix: String,
    pub timeout_seconds: Option<u64>,
    pub image_dir: PathBuf,
    pub document_path: PathBuf,
    pub image_link_prefix: String,
    pub title: String,
    pub explanation_file: String,
}

impl Default for ComicConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
            style_suffix: DEFAULT_STYLE_SUFFIX.to_string(),
            timeout_seconds: None,
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            image_link_prefix: DEFAULT_IMAGE_LINK_PREFIX.to_string(),
            title: DEFAULT_TITLE.to_string(),
            explanation_file: DEFAULT_EXPLANATION_FILE.to_string(),
        }
    }
}

impl ComicConfig {
    /// Defaults, overlaid with the TOML file at `path` when one is given.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                Self::default().merge(TomlConfig::from_file(path)?)
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn merge(mut self, file: TomlConfig) -> Self {
        if let Some(api) = file.api {
            if let Some(endpoint) = api.endpoint {
                self.api_endpoint = endpoint;
            }
            if let Some(model) = api.model {
                self.model = model;
            }
            if let Some(size) = api.size {
                self.image_size = size;
            }
            if let Some(suffix) = api.style_suffix {
                self.style_suffix = suffix;
            }
            if api.timeout_seconds.is_some() {
                self.timeout_seconds = api.timeout_seconds;
            }
        }

        if let Some(output) = file.output {
            if let Some(dir) = output.image_dir {
                self.image_dir = PathBuf::from(dir);
                if output.image_link_prefix.is_none() {
                    self.image_link_prefix = link_prefix_for(&self.image_dir);
                }
            }
            if let Some(path) = output.document_path {
                self.document_path = PathBuf::from(path);
            }
            if let Some(prefix) = output.image_link_prefix {
                self.image_link_prefix = prefix;
            }
            if let Some(title) = output.title {
                self.title = title;
            }
            if let Some(name) = output.explanation_file {
                self.explanation_file = name;
            }
        }

        self
    }
}

/// Link prefix the document uses for images stored in `image_dir`.
fn link_prefix_for(image_dir: &Path) -> String {
    if image_dir.is_absolute() {
        image_dir.to_string_lossy().into_owned()
    } else {
        format!(
            "{}/{}",
            LINK_BASE,
            image_dir.to_string_lossy().trim_start_matches("./")
        )
    }
}

impl Validate for ComicConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.endpoint", &self.api_endpoint)?;
        validation::validate_non_empty_string("api.model", &self.model)?;
        validation::validate_image_size("api.size", &self.image_size)?;
        if let Some(seconds) = self.timeout_seconds {
            validation::validate_positive_number("api.timeout_seconds", seconds, 1)?;
        }
        validation::validate_path("output.image_dir", &self.image_dir.to_string_lossy())?;
        validation::validate_path(
            "output.document_path",
            &self.document_path.to_string_lossy(),
        )?;
        validation::validate_path("output.explanation_file", &self.explanation_file)?;
        validation::validate_non_empty_string("output.title", &self.title)?;
        Ok(())
    }
}

impl ConfigProvider for ComicConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn image_size(&self) -> &str {
        &self.image_size
    }

    fn style_suffix(&self) -> &str {
        &self.style_suffix
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    fn document_path(&self) -> &Path {
        &self.document_path
    }

    fn image_link_prefix(&self) -> &str {
        &self.image_link_prefix
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn explanation_file(&self) -> &str {
        &self.explanation_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ComicError;

    #[test]
    fn test_defaults_are_valid() {
        let config = ComicConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.title, "History Comes Alive");
        assert_eq!(config.image_size, "1024x1024");
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_merge_overrides_only_given_fields() {
        let file = TomlConfig::from_toml_str(
            "[api]\ntimeout_seconds = 45\n[output]\ndocument_path = \"out/comic.md\"\n",
        )
        .unwrap();
        let config = ComicConfig::default().merge(file);

        assert_eq!(config.request_timeout(), Some(Duration::from_secs(45)));
        assert_eq!(config.document_path, PathBuf::from("out/comic.md"));
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.image_dir, PathBuf::from(DEFAULT_IMAGE_DIR));
    }

    #[test]
    fn test_image_dir_override_moves_link_prefix() {
        let file = TomlConfig::from_toml_str("[output]\nimage_dir = \"panels\"\n").unwrap();
        let config = ComicConfig::default().merge(file);
        assert_eq!(config.image_link_prefix, "../src/panels");

        let file = TomlConfig::from_toml_str(
            "[output]\nimage_dir = \"panels\"\nimage_link_prefix = \"static/panels\"\n",
        )
        .unwrap();
        let config = ComicConfig::default().merge(file);
        assert_eq!(config.image_link_prefix, "static/panels");
    }

    #[test]
    fn test_default_prefix_matches_default_image_dir() {
        assert_eq!(
            link_prefix_for(Path::new(DEFAULT_IMAGE_DIR)),
            DEFAULT_IMAGE_LINK_PREFIX
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = ComicConfig {
            api_endpoint: "not a url".to_string(),
            ..ComicConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ComicError::InvalidConfigValue { .. })
        ));

        let config = ComicConfig {
            timeout_seconds: Some(0),
            ..ComicConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = ComicConfig::resolve(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(matches!(err, ComicError::Io(_)));
    }

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        assert_eq!(ComicConfig::resolve(None).unwrap(), ComicConfig::default());
    }
}
