use crate::utils::error::{ComicError, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional overrides read from a TOML file. Every field may be omitted.
///
/// ```toml
/// [api]
/// endpoint = "https://api.openai.com/v1/images/generations"
/// model = "dall-e-3"
/// timeout_seconds = 120
///
/// [output]
/// image_dir = "img"
/// document_path = "../writing/comic.md"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub api: Option<ApiSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub size: Option<String>,
    pub style_suffix: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub image_dir: Option<String>,
    pub document_path: Option<String>,
    pub image_link_prefix: Option<String>,
    pub title: Option<String>,
    pub explanation_file: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ComicError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${NAME}` with the environment value, e.g.
    /// `endpoint = "${IMAGE_API_URL}"`. Unset names are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ComicError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.api.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_parse_sections() {
        let config = TomlConfig::from_toml_str(
            r#"
            [api]
            model = "dall-e-2"
            size = "512x512"
            timeout_seconds = 90

            [output]
            image_dir = "panels"
            title = "Another Book"
            "#,
        )
        .unwrap();

        let api = config.api.unwrap();
        assert_eq!(api.model.as_deref(), Some("dall-e-2"));
        assert_eq!(api.size.as_deref(), Some("512x512"));
        assert_eq!(api.timeout_seconds, Some(90));
        assert!(api.endpoint.is_none());

        let output = config.output.unwrap();
        assert_eq!(output.image_dir.as_deref(), Some("panels"));
        assert_eq!(output.title.as_deref(), Some("Another Book"));
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("IMAGE_API_URL", "http://localhost:9999/gen");
        let config = TomlConfig::from_toml_str(
            "[api]\nendpoint = \"${IMAGE_API_URL}\"\n",
        )
        .unwrap();
        assert_eq!(
            config.api.unwrap().endpoint.as_deref(),
            Some("http://localhost:9999/gen")
        );
    }

    #[test]
    fn test_unknown_variable_is_left_verbatim() {
        let config = TomlConfig::from_toml_str(
            "[output]\ntitle = \"${COMIC_PANELS_SURELY_UNSET_VAR}\"\n",
        )
        .unwrap();
        assert_eq!(
            config.output.unwrap().title.as_deref(),
            Some("${COMIC_PANELS_SURELY_UNSET_VAR}")
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = TomlConfig::from_toml_str("[api]\nretries = 3\n").unwrap_err();
        assert!(matches!(err, ComicError::ConfigError { .. }));
    }
}
