#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::ShaderMode;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative_length, validate_output_formats,
    validate_path, validate_range, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EXTRUDE: f64 = 0.005;
pub const DEFAULT_SOLIDIFY_THICKNESS: f64 = 0.005;
pub const DEFAULT_EMISSION_STRENGTH: f64 = 1.0;
pub const MAX_EMISSION_STRENGTH: f64 = 1000.0;
pub const SUPPORTED_FORMATS: [&str; 2] = ["obj", "json"];

/// 單次匯入使用的設定，明確傳入轉換流程而不放在全域狀態
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    /// JSON 沒有 width 時的 extrude / bevel 預設值（公尺）
    pub default_extrude: f64,
    /// JSON 沒有 width 時的 solidify 厚度預設值（公尺）
    pub default_solidify_thickness: f64,
    pub add_solidify: bool,
    pub shader_mode: ShaderMode,
    pub emission_strength: f64,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            default_extrude: DEFAULT_EXTRUDE,
            default_solidify_thickness: DEFAULT_SOLIDIFY_THICKNESS,
            add_solidify: false,
            shader_mode: ShaderMode::default(),
            emission_strength: DEFAULT_EMISSION_STRENGTH,
        }
    }
}

impl Validate for ImportSettings {
    fn validate(&self) -> Result<()> {
        validate_non_negative_length("import.default_extrude", self.default_extrude)?;
        validate_non_negative_length(
            "import.default_solidify_thickness",
            self.default_solidify_thickness,
        )?;
        validate_range(
            "material.emission_strength",
            self.emission_strength,
            0.0,
            MAX_EMISSION_STRENGTH,
        )?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub output_path: String,
    /// 輸出檔名（不含副檔名）
    pub basename: String,
    pub formats: Vec<String>,
    /// 有值時將所有輸出打包成此 ZIP 檔
    pub bundle: Option<String>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            output_path: "./output".to_string(),
            basename: "strokes".to_string(),
            formats: SUPPORTED_FORMATS.iter().map(|f| f.to_string()).collect(),
            bundle: None,
        }
    }
}

impl Validate for OutputSettings {
    fn validate(&self) -> Result<()> {
        validate_path("output.output_path", &self.output_path)?;
        validate_non_empty_string("output.basename", &self.basename)?;
        validate_output_formats("output.formats", &self.formats, &SUPPORTED_FORMATS)?;
        if let Some(bundle) = &self.bundle {
            validate_non_empty_string("output.bundle.filename", bundle)?;
        }
        Ok(())
    }
}
