use crate::domain::model::{Rgba, StrokeRecord, FALLBACK_COLOR_HEX};
use crate::utils::error::{ImportError, Result};
use serde_json::Value;
use std::path::Path;

/// 讀取 QvPen Export Formatter 輸出的 JSON 並轉成線條資料
///
/// 檔案不存在或不是合法 JSON 時整個匯入中止；個別欄位缺漏則以預設值補上。
pub fn load_strokes<P: AsRef<Path>>(path: P) -> Result<Vec<StrokeRecord>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    if path_str.is_empty() || !path.is_file() {
        return Err(ImportError::FileNotFound { path: path_str });
    }

    let content = read_input(path, &path_str)?;
    tracing::debug!("Read {} bytes from {}", content.len(), path_str);
    parse_strokes(&content).map_err(|e| match e {
        ImportError::ParseError { message, .. } => ImportError::ParseError {
            path: path_str,
            message,
        },
        other => other,
    })
}

// 讀取輸入失敗屬於輸入錯誤，不是輸出端的 IoError
fn read_input(path: &Path, path_str: &str) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| ImportError::InputReadError {
        path: path_str.to_string(),
        source,
    })
}

pub fn parse_strokes(content: &[u8]) -> Result<Vec<StrokeRecord>> {
    let data: Value = serde_json::from_slice(content).map_err(|e| ImportError::ParseError {
        path: String::new(),
        message: e.to_string(),
    })?;

    let Value::Object(root) = data else {
        return Err(ImportError::ParseError {
            path: String::new(),
            message: "top-level JSON value must be an object".to_string(),
        });
    };

    let records = match root.get("exportedData") {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| parse_record(index, item))
            .collect(),
        Some(_) => {
            tracing::warn!("'exportedData' is not an array, treating as empty");
            Vec::new()
        }
        None => {
            tracing::warn!("No 'exportedData' key found in JSON");
            Vec::new()
        }
    };

    Ok(records)
}

fn parse_record(index: usize, item: &Value) -> StrokeRecord {
    let positions = parse_positions(index, item.get("positions"));

    let color_hex = item
        .get("color")
        .and_then(|c| c.get("value"))
        .and_then(Value::as_array)
        .and_then(|values| values.first())
        .and_then(Value::as_str)
        .unwrap_or(FALLBACK_COLOR_HEX);

    let (color_hex, color) = match Rgba::from_hex(color_hex) {
        Some(color) => (color_hex.to_string(), color),
        None => {
            tracing::warn!(
                "Stroke {} has invalid color '{}', using {}",
                index,
                color_hex,
                FALLBACK_COLOR_HEX
            );
            (FALLBACK_COLOR_HEX.to_string(), Rgba::WHITE)
        }
    };

    let width = item.get("width").and_then(Value::as_f64);

    StrokeRecord {
        index,
        positions,
        color_hex,
        color,
        width,
    }
}

fn parse_positions(index: usize, value: Option<&Value>) -> Vec<f64> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    let positions: Option<Vec<f64>> = items.iter().map(Value::as_f64).collect();
    positions.unwrap_or_else(|| {
        tracing::warn!("Stroke {} has non-numeric positions, it will be skipped", index);
        Vec::new()
    })
}
