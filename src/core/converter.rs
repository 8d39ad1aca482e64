use crate::config::ImportSettings;
use crate::domain::model::{CurveDescriptor, StrokeRecord};

/// 將一筆線條轉成曲線描述；不足兩點時回傳 None
pub fn convert_stroke(record: &StrokeRecord, settings: &ImportSettings) -> Option<CurveDescriptor> {
    if !record.is_drawable() {
        return None;
    }

    // JSON 有 width 就用 width，否則用設定的預設值
    let extrude = record.width.unwrap_or(settings.default_extrude);
    let solidify = settings
        .add_solidify
        .then(|| record.width.unwrap_or(settings.default_solidify_thickness));

    Some(CurveDescriptor {
        curve_name: format!("StrokeCurve_{}", record.index),
        object_name: format!("Stroke_{}", record.index),
        points: record.points(),
        extrude,
        bevel_depth: extrude,
        solidify,
        material_key: record.color_hex.clone(),
        color: record.color,
    })
}

/// 依序轉換所有線條，回傳曲線與被略過的筆數
pub fn convert_strokes(
    records: &[StrokeRecord],
    settings: &ImportSettings,
) -> (Vec<CurveDescriptor>, usize) {
    let mut curves = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for record in records {
        match convert_stroke(record, settings) {
            Some(curve) => curves.push(curve),
            None => {
                tracing::debug!(
                    "Skipping stroke {} with {} point(s)",
                    record.index,
                    record.point_count()
                );
                skipped += 1;
            }
        }
    }

    (curves, skipped)
}
