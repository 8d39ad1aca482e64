use crate::config::toml_config::TomlConfig;
use crate::config::{ImportSettings, OutputSettings};
use crate::domain::model::ShaderMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "qvpen-import")]
#[command(about = "Import QV-Pen stroke JSON as 3D curves with color-matched materials")]
pub struct CliConfig {
    /// Path to the JSON file produced by QvPen Export Formatter
    pub input: String,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Directory the scene files are written to")]
    pub output_path: Option<String>,

    #[arg(long, help = "Default extrude/bevel depth in meters when a stroke has no width")]
    pub extrude: Option<f64>,

    #[arg(long, help = "Add a solidify modifier to every curve")]
    pub solidify: bool,

    #[arg(
        long,
        conflicts_with = "solidify",
        help = "Do not add solidify modifiers, even if the config file enables them"
    )]
    pub no_solidify: bool,

    #[arg(long, help = "Default solidify thickness in meters when a stroke has no width")]
    pub solidify_thickness: Option<f64>,

    #[arg(long, help = "Material shading: principled or emission")]
    pub shader: Option<ShaderMode>,

    #[arg(long)]
    pub emission_strength: Option<f64>,

    #[arg(long, value_delimiter = ',', help = "Output formats: obj, json")]
    pub format: Vec<String>,

    #[arg(long, help = "Bundle all outputs into a single ZIP archive")]
    pub bundle: bool,

    #[arg(long, help = "Build the scene in memory without writing any files")]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 預設值 < TOML 檔案 < 命令列參數
    pub fn resolve(&self) -> Result<(ImportSettings, OutputSettings)> {
        let (mut settings, mut output) = match &self.config {
            Some(path) => {
                let file_config = TomlConfig::from_file(path)?;
                (file_config.import_settings(), file_config.output_settings())
            }
            None => (ImportSettings::default(), OutputSettings::default()),
        };

        if let Some(extrude) = self.extrude {
            settings.default_extrude = extrude;
        }
        if self.solidify {
            settings.add_solidify = true;
        } else if self.no_solidify {
            settings.add_solidify = false;
        }
        if let Some(thickness) = self.solidify_thickness {
            settings.default_solidify_thickness = thickness;
        }
        if let Some(shader) = self.shader {
            settings.shader_mode = shader;
        }
        if let Some(strength) = self.emission_strength {
            settings.emission_strength = strength;
        }

        if let Some(path) = &self.output_path {
            output.output_path = path.clone();
        }
        if !self.format.is_empty() {
            output.formats = self.format.clone();
        }
        if self.bundle && output.bundle.is_none() {
            output.bundle = Some(format!("{}.zip", output.basename));
        }

        settings.validate()?;
        output.validate()?;
        Ok((settings, output))
    }
}

/// 只檢查命令列本身；設定檔與數值範圍在 `resolve` 時驗證
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)
    }
}
