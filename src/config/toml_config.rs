use crate::config::{ImportSettings, OutputSettings};
use crate::domain::model::ShaderMode;
use crate::utils::error::{ImportError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub import: ImportSection,
    #[serde(default)]
    pub material: MaterialSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportSection {
    pub default_extrude: Option<f64>,
    pub default_solidify_thickness: Option<f64>,
    pub add_solidify: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialSection {
    pub shader: Option<ShaderMode>,
    pub emission_strength: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub output_path: Option<String>,
    pub basename: Option<String>,
    pub formats: Option<Vec<String>>,
    pub bundle: Option<BundleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    pub enabled: bool,
    pub filename: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ImportError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ImportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ImportError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 以預設值為底，套用檔案中有設定的匯入參數
    pub fn import_settings(&self) -> ImportSettings {
        let defaults = ImportSettings::default();
        ImportSettings {
            default_extrude: self.import.default_extrude.unwrap_or(defaults.default_extrude),
            default_solidify_thickness: self
                .import
                .default_solidify_thickness
                .unwrap_or(defaults.default_solidify_thickness),
            add_solidify: self.import.add_solidify.unwrap_or(defaults.add_solidify),
            shader_mode: self.material.shader.unwrap_or(defaults.shader_mode),
            emission_strength: self
                .material
                .emission_strength
                .unwrap_or(defaults.emission_strength),
        }
    }

    pub fn output_settings(&self) -> OutputSettings {
        let defaults = OutputSettings::default();
        let bundle = match &self.output.bundle {
            Some(b) if b.enabled => Some(
                b.filename
                    .clone()
                    .unwrap_or_else(|| format!("{}.zip", self.basename_or(&defaults))),
            ),
            _ => None,
        };

        OutputSettings {
            output_path: self
                .output
                .output_path
                .clone()
                .unwrap_or(defaults.output_path.clone()),
            basename: self.basename_or(&defaults),
            formats: self.output.formats.clone().unwrap_or(defaults.formats.clone()),
            bundle,
        }
    }

    fn basename_or(&self, defaults: &OutputSettings) -> String {
        self.output
            .basename
            .clone()
            .unwrap_or_else(|| defaults.basename.clone())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.import_settings().validate()?;
        self.output_settings().validate()
    }
}
