use crate::domain::model::{
    CurveDescriptor, MaterialDescriptor, MaterialHandle, Modifier, ObjectHandle,
};
use crate::domain::ports::SceneHost;
use crate::utils::error::{ImportError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneObject {
    pub name: String,
    pub curve: CurveDescriptor,
    pub linked: bool,
    pub modifiers: Vec<Modifier>,
    pub materials: Vec<MaterialHandle>,
}

/// 記憶體中的場景文件，供 dry run、測試及檔案輸出使用
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryScene {
    objects: Vec<SceneObject>,
    materials: Vec<MaterialDescriptor>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn materials(&self) -> &[MaterialDescriptor] {
        &self.materials
    }

    pub fn object(&self, handle: ObjectHandle) -> Option<&SceneObject> {
        self.objects.get(handle.0)
    }

    pub fn material(&self, handle: MaterialHandle) -> Option<&MaterialDescriptor> {
        self.materials.get(handle.0)
    }

    pub fn linked_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| o.linked)
    }

    fn object_mut(&mut self, handle: ObjectHandle) -> Result<&mut SceneObject> {
        self.objects
            .get_mut(handle.0)
            .ok_or_else(|| ImportError::HostError {
                message: format!("unknown object handle {}", handle.0),
            })
    }
}

impl SceneHost for MemoryScene {
    fn create_curve_object(&mut self, curve: &CurveDescriptor) -> Result<ObjectHandle> {
        if curve.points.len() < 2 {
            return Err(ImportError::HostError {
                message: format!("curve {} needs at least two points", curve.curve_name),
            });
        }

        self.objects.push(SceneObject {
            name: curve.object_name.clone(),
            curve: curve.clone(),
            linked: false,
            modifiers: Vec::new(),
            materials: Vec::new(),
        });
        Ok(ObjectHandle(self.objects.len() - 1))
    }

    fn create_material(&mut self, material: &MaterialDescriptor) -> Result<MaterialHandle> {
        self.materials.push(material.clone());
        Ok(MaterialHandle(self.materials.len() - 1))
    }

    fn link_object(&mut self, object: ObjectHandle) -> Result<()> {
        self.object_mut(object)?.linked = true;
        Ok(())
    }

    fn add_modifier(&mut self, object: ObjectHandle, modifier: &Modifier) -> Result<()> {
        self.object_mut(object)?.modifiers.push(*modifier);
        Ok(())
    }

    fn assign_material(&mut self, object: ObjectHandle, material: MaterialHandle) -> Result<()> {
        if material.0 >= self.materials.len() {
            return Err(ImportError::HostError {
                message: format!("unknown material handle {}", material.0),
            });
        }

        let slots = &mut self.object_mut(object)?.materials;
        match slots.first_mut() {
            Some(slot) => *slot = material,
            None => slots.push(material),
        }
        Ok(())
    }
}
