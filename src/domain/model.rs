use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::ImportError;

/// 找不到或無法解析顏色時使用的預設色
pub const FALLBACK_COLOR_HEX: &str = "FFFFFF";

/// 線條至少需要兩個點才能建立曲線
pub const MIN_STROKE_POINTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// 將 `RRGGBB`（可帶 `#`）轉成 0～1 的 RGBA，alpha 固定為 1.0
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = digits.as_bytes().get(..6)?;
        if !bytes.iter().all(u8::is_ascii_hexdigit) {
            return None;
        }

        // 只看前六個字元，後面多出的（例如 alpha）忽略
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .ok()
                .map(|v| f64::from(v) / 255.0)
        };

        Some(Rgba {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            a: 1.0,
        })
    }

    pub fn scaled(&self, factor: f64) -> [f64; 3] {
        [self.r * factor, self.g * factor, self.b * factor]
    }
}

/// `exportedData` 中的一筆線條資料
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRecord {
    /// 在 `exportedData` 陣列中的位置，用於命名
    pub index: usize,
    /// 攤平的 XYZ 座標
    pub positions: Vec<f64>,
    pub color_hex: String,
    pub color: Rgba,
    pub width: Option<f64>,
}

impl StrokeRecord {
    pub fn point_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn points(&self) -> Vec<[f64; 3]> {
        self.positions
            .chunks_exact(3)
            .map(|p| [p[0], p[1], p[2]])
            .collect()
    }

    pub fn is_drawable(&self) -> bool {
        self.point_count() >= MIN_STROKE_POINTS
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveDescriptor {
    pub curve_name: String,
    pub object_name: String,
    pub points: Vec<[f64; 3]>,
    pub extrude: f64,
    pub bevel_depth: f64,
    /// 只有啟用 solidify 時才有值
    pub solidify: Option<f64>,
    pub material_key: String,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShaderMode {
    #[default]
    Principled,
    Emission,
}

impl FromStr for ShaderMode {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "principled" => Ok(ShaderMode::Principled),
            "emission" => Ok(ShaderMode::Emission),
            other => Err(ImportError::InvalidConfigValueError {
                field: "shader_mode".to_string(),
                value: other.to_string(),
                reason: "Valid modes: principled, emission".to_string(),
            }),
        }
    }
}

impl fmt::Display for ShaderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderMode::Principled => f.write_str("principled"),
            ShaderMode::Emission => f.write_str("emission"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shading {
    Principled {
        metallic: f64,
        roughness: f64,
        ior: f64,
        alpha: f64,
    },
    Emission {
        strength: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescriptor {
    pub name: String,
    pub key: String,
    pub base_color: Rgba,
    pub shading: Shading,
}

impl MaterialDescriptor {
    pub fn for_color(key: &str, color: Rgba, mode: ShaderMode, emission_strength: f64) -> Self {
        let shading = match mode {
            ShaderMode::Principled => Shading::Principled {
                metallic: 0.0,
                roughness: 1.0,
                ior: 0.5,
                alpha: 1.0,
            },
            ShaderMode::Emission => Shading::Emission {
                strength: emission_strength,
            },
        };

        Self {
            name: format!("StrokeMaterial_{}", key),
            key: key.to_string(),
            base_color: color,
            shading,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Modifier {
    Solidify { thickness: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialHandle(pub usize);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub records_read: usize,
    pub strokes_skipped: usize,
    pub curves_created: usize,
    pub materials_created: usize,
}
