use crate::core::Storage;
use crate::domain::model::Chapter;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Renders the comic page: a title heading, then one image embed and one
/// `---` separator per chapter, in order.
///
/// Images are linked as `<link_prefix>/<file name>` rather than by their
/// on-disk path, because the document lives in a different directory.
pub fn render_markdown(title: &str, chapters: &[Chapter], link_prefix: &str) -> String {
    let mut content = format!("# {}\n\n", title);
    let prefix = link_prefix.trim_end_matches('/');

    for chapter in chapters {
        let file_name = chapter
            .image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let link = if prefix.is_empty() {
            file_name
        } else {
            format!("{}/{}", prefix, file_name)
        };

        content.push_str(&format!("![{} Image]({})\n\n", chapter.title, link));
        content.push_str("---\n");
    }

    content
}

pub struct DocumentAssembler<'a, S: Storage> {
    storage: &'a S,
    output_path: &'a Path,
    link_prefix: &'a str,
}

impl<'a, S: Storage> DocumentAssembler<'a, S> {
    pub fn new(storage: &'a S, output_path: &'a Path, link_prefix: &'a str) -> Self {
        Self {
            storage,
            output_path,
            link_prefix,
        }
    }

    /// Writes the document, replacing whatever was there before.
    pub async fn assemble(&self, title: &str, chapters: &[Chapter]) -> Result<PathBuf> {
        let content = render_markdown(title, chapters, self.link_prefix);
        self.storage
            .write_file(self.output_path, content.as_bytes())
            .await?;

        tracing::info!("Markdown file generated: {}", self.output_path.display());
        Ok(self.output_path.to_path_buf())
    }
}
