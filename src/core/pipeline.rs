use crate::config::ImportSettings;
use crate::core::binder::bind_curve;
use crate::core::converter::convert_strokes;
use crate::core::loader::load_strokes;
use crate::core::materials::MaterialCache;
use crate::domain::model::{CurveDescriptor, ImportSummary, StrokeRecord};
use crate::domain::ports::{Pipeline, SceneHost};
use crate::utils::error::Result;
use std::path::PathBuf;

/// 從 JSON 檔案讀取線條並建立到指定場景宿主的匯入管道
pub struct StrokePipeline<'h, H: SceneHost> {
    source: PathBuf,
    settings: ImportSettings,
    host: &'h mut H,
    summary: ImportSummary,
}

impl<'h, H: SceneHost> StrokePipeline<'h, H> {
    pub fn new(source: impl Into<PathBuf>, settings: ImportSettings, host: &'h mut H) -> Self {
        Self {
            source: source.into(),
            settings,
            host,
            summary: ImportSummary::default(),
        }
    }
}

impl<H: SceneHost> Pipeline for StrokePipeline<'_, H> {
    fn extract(&mut self) -> Result<Vec<StrokeRecord>> {
        tracing::debug!("Loading strokes from: {}", self.source.display());
        let records = load_strokes(&self.source)?;
        self.summary.records_read = records.len();
        Ok(records)
    }

    fn transform(&mut self, records: Vec<StrokeRecord>) -> Result<Vec<CurveDescriptor>> {
        let (curves, skipped) = convert_strokes(&records, &self.settings);
        self.summary.strokes_skipped = skipped;
        Ok(curves)
    }

    fn load(&mut self, curves: Vec<CurveDescriptor>) -> Result<ImportSummary> {
        let mut materials = MaterialCache::new(&self.settings);

        for curve in &curves {
            bind_curve(curve, &mut materials, self.host)?;
            self.summary.curves_created += 1;
        }

        self.summary.materials_created = materials.len();
        Ok(self.summary.clone())
    }
}
