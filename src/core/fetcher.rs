use crate::core::{ImageGenerator, Storage};
use crate::domain::model::FetchSource;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// `"Bored in Class"` → `bored_in_class_image.png`.
pub fn image_file_name(name: &str) -> String {
    format!("{}_image.png", name.replace(' ', "_").to_lowercase())
}

pub fn target_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(image_file_name(name))
}

/// Returns panel images from disk when present, generating them otherwise.
///
/// The cache key is the file name alone. An image that exists is never
/// regenerated, even if the prompt behind it has changed since.
pub struct ImageFetcher<'a, G: ImageGenerator, S: Storage> {
    generator: &'a G,
    storage: &'a S,
    style_suffix: &'a str,
}

impl<'a, G: ImageGenerator, S: Storage> ImageFetcher<'a, G, S> {
    pub fn new(generator: &'a G, storage: &'a S, style_suffix: &'a str) -> Self {
        Self {
            generator,
            storage,
            style_suffix,
        }
    }

    pub async fn fetch(&self, prompt: &str, name: &str, dir: &Path) -> Result<PathBuf> {
        let (path, _) = self.fetch_with_source(prompt, name, dir).await?;
        Ok(path)
    }

    pub async fn fetch_with_source(
        &self,
        prompt: &str,
        name: &str,
        dir: &Path,
    ) -> Result<(PathBuf, FetchSource)> {
        let target = target_path(dir, name);

        if self.storage.exists(&target).await {
            tracing::info!("Using cached image for '{}'.", name);
            return Ok((target, FetchSource::Cached));
        }

        let styled_prompt = format!("{}{}", prompt, self.style_suffix);
        tracing::debug!("Requesting image for '{}': {}", name, styled_prompt);

        let bytes = self.generator.generate(&styled_prompt).await?;
        self.storage.write_file(&target, &bytes).await?;

        tracing::info!("Generated new image for '{}'.", name);
        Ok((target, FetchSource::Generated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ComicError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &Path, data: &[u8]) -> Self {
            let storage = Self::default();
            storage
                .files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), data.to_vec());
            storage
        }

        fn get_file(&self, path: &Path) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }

        async fn ensure_dir(&self, _path: &Path) -> Result<()> {
            Ok(())
        }

        async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), data.to_vec());
            Ok(())
        }
    }

    /// Records every prompt; fails when `status` is set.
    #[derive(Default)]
    struct RecordingGenerator {
        prompts: Mutex<Vec<String>>,
        status: Option<u16>,
    }

    #[async_trait]
    impl ImageGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<Vec<u8>> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match self.status {
                Some(status) => Err(ComicError::ImageGeneration {
                    status,
                    body: "rejected".to_string(),
                }),
                None => Ok(prompt.as_bytes().to_vec()),
            }
        }
    }

    #[test]
    fn test_image_file_name() {
        assert_eq!(image_file_name("Bored in Class"), "bored_in_class_image.png");
        assert_eq!(
            image_file_name("History is Amazing!"),
            "history_is_amazing!_image.png"
        );
    }

    #[tokio::test]
    async fn test_cache_hit_skips_generation() {
        let dir = Path::new("img");
        let existing = dir.join("ancient_egypt_image.png");
        let storage = MockStorage::with_file(&existing, b"old");
        let generator = RecordingGenerator::default();
        let fetcher = ImageFetcher::new(&generator, &storage, " styled");

        let (path, source) = fetcher
            .fetch_with_source("a brand new prompt", "Ancient Egypt", dir)
            .await
            .unwrap();

        assert_eq!(path, existing);
        assert_eq!(source, FetchSource::Cached);
        assert!(generator.prompts.lock().unwrap().is_empty());
        assert_eq!(storage.get_file(&existing).unwrap(), b"old");
    }

    #[tokio::test]
    async fn test_miss_generates_with_style_suffix_then_caches() {
        let dir = Path::new("img");
        let storage = MockStorage::default();
        let generator = RecordingGenerator::default();
        let fetcher = ImageFetcher::new(&generator, &storage, " in a cartoony style.");

        let first = fetcher.fetch("A castle", "Medieval Castle", dir).await.unwrap();
        let second = fetcher.fetch("A castle", "Medieval Castle", dir).await.unwrap();

        assert_eq!(first, dir.join("medieval_castle_image.png"));
        assert_eq!(first, second);
        assert_eq!(
            *generator.prompts.lock().unwrap(),
            vec!["A castle in a cartoony style.".to_string()]
        );
        assert_eq!(
            storage.get_file(&first).unwrap(),
            b"A castle in a cartoony style."
        );
    }

    #[tokio::test]
    async fn test_generation_failure_writes_nothing() {
        let dir = Path::new("img");
        let storage = MockStorage::default();
        let generator = RecordingGenerator {
            status: Some(500),
            ..Default::default()
        };
        let fetcher = ImageFetcher::new(&generator, &storage, "");

        let err = fetcher.fetch("A plane", "Early Flight", dir).await.unwrap_err();

        assert!(matches!(err, ComicError::ImageGeneration { status: 500, .. }));
        assert!(storage
            .get_file(&dir.join("early_flight_image.png"))
            .is_none());
    }
}
