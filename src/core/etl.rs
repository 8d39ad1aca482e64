use crate::domain::model::ImportSummary;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct ImportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ImportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&mut self) -> Result<ImportSummary> {
        tracing::info!("Starting stroke import...");

        // Extract
        let records = self.pipeline.extract()?;
        tracing::info!("Read {} stroke records", records.len());

        // Transform
        let curves = self.pipeline.transform(records)?;
        tracing::info!("Converted {} strokes to curves", curves.len());

        // Load
        let summary = self.pipeline.load(curves)?;
        tracing::info!(
            "Created {} curve objects with {} materials ({} strokes skipped)",
            summary.curves_created,
            summary.materials_created,
            summary.strokes_skipped
        );

        Ok(summary)
    }
}
