use crate::core::document::DocumentAssembler;
use crate::core::fetcher::{target_path, ImageFetcher};
use crate::core::panels::EXPLANATION_TEXT;
use crate::core::{
    Chapter, ComicOutput, ConfigProvider, FetchSource, ImageGenerator, PanelDefinition, Storage,
};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::path::{Path, PathBuf};

/// What a run would do for one panel, without doing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPanel {
    pub title: String,
    pub image_path: PathBuf,
    pub cached: bool,
}

pub async fn plan_panels<S: Storage>(
    storage: &S,
    image_dir: &Path,
    panels: &[PanelDefinition],
) -> Vec<PlannedPanel> {
    let mut planned = Vec::with_capacity(panels.len());

    for panel in panels {
        let image_path = target_path(image_dir, &panel.title);
        let cached = storage.exists(&image_path).await;
        planned.push(PlannedPanel {
            title: panel.title.clone(),
            image_path,
            cached,
        });
    }

    planned
}

/// Runs the panels through the fetcher in order, then writes the document
/// and the explanation file. The first failure ends the run; panels after
/// it are not attempted and no document is written.
pub struct ComicEngine<G: ImageGenerator, S: Storage, C: ConfigProvider> {
    generator: G,
    storage: S,
    config: C,
    panels: Vec<PanelDefinition>,
    monitor: SystemMonitor,
}

impl<G: ImageGenerator, S: Storage, C: ConfigProvider> ComicEngine<G, S, C> {
    pub fn new(generator: G, storage: S, config: C, panels: Vec<PanelDefinition>) -> Self {
        Self::new_with_monitoring(generator, storage, config, panels, false)
    }

    pub fn new_with_monitoring(
        generator: G,
        storage: S,
        config: C,
        panels: Vec<PanelDefinition>,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            generator,
            storage,
            config,
            panels,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<ComicOutput> {
        let image_dir = self.config.image_dir();
        let total = self.panels.len();
        tracing::info!(
            "Creating '{}' with {} panels in {}",
            self.config.title(),
            total,
            image_dir.display()
        );

        self.storage.ensure_dir(image_dir).await?;

        let fetcher = ImageFetcher::new(&self.generator, &self.storage, self.config.style_suffix());
        let mut chapters = Vec::with_capacity(total);
        let mut generated = 0;
        let mut cached = 0;

        for (index, panel) in self.panels.iter().enumerate() {
            let (image_path, source) = fetcher
                .fetch_with_source(&panel.image_prompt, &panel.title, image_dir)
                .await?;

            match source {
                FetchSource::Generated => generated += 1,
                FetchSource::Cached => cached += 1,
            }

            chapters.push(Chapter {
                title: panel.title.clone(),
                image_path,
            });
            self.monitor.log_panel(index + 1, total, &panel.title);
        }

        let assembler = DocumentAssembler::new(
            &self.storage,
            self.config.document_path(),
            self.config.image_link_prefix(),
        );
        let document_path = assembler.assemble(self.config.title(), &chapters).await?;

        let explanation_path = image_dir.join(self.config.explanation_file());
        self.storage
            .write_file(&explanation_path, EXPLANATION_TEXT.as_bytes())
            .await?;

        tracing::info!(
            "Finished: {} panels ({} generated, {} cached)",
            chapters.len(),
            generated,
            cached
        );
        self.monitor.log_final_stats();

        Ok(ComicOutput {
            document_path,
            explanation_path,
            chapters,
            generated,
            cached,
        })
    }
}
