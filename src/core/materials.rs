use crate::config::ImportSettings;
use crate::domain::model::{MaterialDescriptor, MaterialHandle, Rgba, ShaderMode};
use crate::domain::ports::SceneHost;
use crate::utils::error::Result;
use std::collections::HashMap;

/// 以顏色字串為鍵的材質快取，同色線條共用同一個材質
///
/// 鍵是完全相同的字串比對，不做色差合併；單次匯入只會有一種 shader 模式。
#[derive(Debug)]
pub struct MaterialCache {
    mode: ShaderMode,
    emission_strength: f64,
    entries: HashMap<String, MaterialHandle>,
}

impl MaterialCache {
    pub fn new(settings: &ImportSettings) -> Self {
        Self {
            mode: settings.shader_mode,
            emission_strength: settings.emission_strength,
            entries: HashMap::new(),
        }
    }

    pub fn get_or_create<H: SceneHost>(
        &mut self,
        key: &str,
        color: Rgba,
        host: &mut H,
    ) -> Result<MaterialHandle> {
        if let Some(handle) = self.entries.get(key) {
            return Ok(*handle);
        }

        let descriptor =
            MaterialDescriptor::for_color(key, color, self.mode, self.emission_strength);
        let handle = host.create_material(&descriptor)?;
        tracing::debug!("Created material {} ({} shading)", descriptor.name, self.mode);
        self.entries.insert(key.to_string(), handle);
        Ok(handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
