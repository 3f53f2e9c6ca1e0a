use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn exists(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;
    fn ensure_dir(&self, path: &Path) -> impl std::future::Future<Output = Result<()>> + Send;
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn image_size(&self) -> &str;
    fn style_suffix(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn image_dir(&self) -> &Path;
    fn document_path(&self) -> &Path;
    fn image_link_prefix(&self) -> &str;
    fn title(&self) -> &str;
    fn explanation_file(&self) -> &str;
}

/// Turns a prompt into raw image bytes.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>>;
}
