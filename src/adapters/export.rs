use crate::adapters::memory::MemoryScene;
use crate::config::OutputSettings;
use crate::domain::model::{Modifier, Shading};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::collections::HashSet;
use std::fmt::Write as _;
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

/// 將記憶體場景輸出成 OBJ/MTL 與 JSON，必要時打包成 ZIP
pub struct SceneExporter<S: Storage> {
    storage: S,
    output: OutputSettings,
}

impl<S: Storage> SceneExporter<S> {
    pub fn new(storage: S, output: OutputSettings) -> Self {
        Self { storage, output }
    }

    /// 回傳實際寫入的檔名
    pub fn export(&self, scene: &MemoryScene) -> Result<Vec<String>> {
        let files = self.render(scene)?;

        match &self.output.bundle {
            Some(bundle) => {
                tracing::debug!("Creating ZIP file {} with {} files", bundle, files.len());
                let zip_data = {
                    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                    for (name, content) in &files {
                        zip.start_file(name.as_str(), SimpleFileOptions::default())?;
                        zip.write_all(content.as_bytes())?;
                    }
                    zip.finish()?.into_inner()
                };

                tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
                self.storage.write_file(bundle, &zip_data)?;
                Ok(vec![bundle.clone()])
            }
            None => {
                for (name, content) in &files {
                    self.storage.write_file(name, content.as_bytes())?;
                    tracing::debug!("Wrote {} ({} bytes)", name, content.len());
                }
                Ok(files.into_iter().map(|(name, _)| name).collect())
            }
        }
    }

    fn render(&self, scene: &MemoryScene) -> Result<Vec<(String, String)>> {
        let basename = &self.output.basename;
        let mut files = Vec::new();

        for format in &self.output.formats {
            match format.as_str() {
                "obj" => {
                    let mtl_name = format!("{}.mtl", basename);
                    files.push((format!("{}.obj", basename), render_obj(scene, &mtl_name)));
                    files.push((mtl_name, render_mtl(scene)));
                }
                "json" => {
                    files.push((format!("{}.json", basename), render_manifest(scene)?));
                }
                other => tracing::warn!("Skipping unsupported output format: {}", other),
            }
        }

        Ok(files)
    }
}

/// OBJ/MTL 用的材質名稱，與 `scene.materials()` 同索引
///
/// 空白與 `#` 換成 `_`，換完撞名時加上 `_2`、`_3` 等後綴。
pub fn material_names(scene: &MemoryScene) -> Vec<String> {
    let mut used = HashSet::new();

    scene
        .materials()
        .iter()
        .map(|material| {
            let base: String = material
                .name
                .chars()
                .map(|c| if c.is_whitespace() || c == '#' { '_' } else { c })
                .collect();

            let mut name = base.clone();
            let mut suffix = 2;
            while !used.insert(name.clone()) {
                name = format!("{}_{}", base, suffix);
                suffix += 1;
            }
            name
        })
        .collect()
}

/// 每條線輸出成一個 OBJ 物件與一個 polyline (`l`) 元素
pub fn render_obj(scene: &MemoryScene, mtl_name: &str) -> String {
    let names = material_names(scene);
    let mut out = String::new();
    let _ = writeln!(out, "# QV-Pen strokes");
    let _ = writeln!(out, "mtllib {}", mtl_name);

    // OBJ 頂點索引從 1 開始且全檔共用
    let mut next_index = 1usize;
    for object in scene.linked_objects() {
        let curve = &object.curve;
        let _ = writeln!(out, "o {}", object.name);
        let _ = writeln!(
            out,
            "# extrude {:.6} bevel_depth {:.6}",
            curve.extrude, curve.bevel_depth
        );
        for modifier in &object.modifiers {
            match modifier {
                Modifier::Solidify { thickness } => {
                    let _ = writeln!(out, "# solidify {:.6}", thickness);
                }
            }
        }
        if let Some(name) = object.materials.first().and_then(|m| names.get(m.0)) {
            let _ = writeln!(out, "usemtl {}", name);
        }

        for [x, y, z] in &curve.points {
            let _ = writeln!(out, "v {:.6} {:.6} {:.6}", x, y, z);
        }

        let indices: Vec<String> = (next_index..next_index + curve.points.len())
            .map(|i| i.to_string())
            .collect();
        let _ = writeln!(out, "l {}", indices.join(" "));
        next_index += curve.points.len();
    }

    out
}

pub fn render_mtl(scene: &MemoryScene) -> String {
    let mut out = String::new();

    for (material, name) in scene.materials().iter().zip(material_names(scene)) {
        let c = material.base_color;
        let _ = writeln!(out, "newmtl {}", name);
        let _ = writeln!(out, "Kd {:.6} {:.6} {:.6}", c.r, c.g, c.b);

        match material.shading {
            Shading::Principled {
                roughness,
                ior,
                alpha,
                ..
            } => {
                // roughness 1.0 對應完全沒有高光
                let shininess = (1.0 - roughness).powi(2) * 1000.0;
                let _ = writeln!(out, "Ns {:.6}", shininess);
                let _ = writeln!(out, "Ni {:.6}", ior);
                let _ = writeln!(out, "d {:.6}", alpha);
                let _ = writeln!(out, "illum 1");
            }
            Shading::Emission { strength } => {
                let [r, g, b] = c.scaled(strength);
                let _ = writeln!(out, "Ke {:.6} {:.6} {:.6}", r, g, b);
                let _ = writeln!(out, "d {:.6}", c.a);
                let _ = writeln!(out, "illum 0");
            }
        }
        out.push('\n');
    }

    out
}

pub fn render_manifest(scene: &MemoryScene) -> Result<String> {
    Ok(serde_json::to_string_pretty(scene)?)
}
