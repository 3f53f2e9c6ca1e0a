use std::path::PathBuf;

/// One panel of the comic: a title and the text sent to the image model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelDefinition {
    pub title: String,
    pub image_prompt: String,
}

impl PanelDefinition {
    pub fn new(title: impl Into<String>, image_prompt: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_prompt: image_prompt.into(),
        }
    }
}

/// A panel after its image exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    pub image_path: PathBuf,
}

/// Whether `fetch` found the image on disk or had to generate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    Cached,
    Generated,
}

#[derive(Debug, Clone)]
pub struct ComicOutput {
    pub document_path: PathBuf,
    pub explanation_path: PathBuf,
    pub chapters: Vec<Chapter>,
    pub generated: usize,
    pub cached: usize,
}
