use crate::core::materials::MaterialCache;
use crate::domain::model::{CurveDescriptor, Modifier, ObjectHandle};
use crate::domain::ports::SceneHost;
use crate::utils::error::Result;

/// 建立曲線物件、連結到場景、加上 solidify 並指定材質
///
/// 任何一步失敗就中止，已建立的物件保留在場景中。
pub fn bind_curve<H: SceneHost>(
    curve: &CurveDescriptor,
    materials: &mut MaterialCache,
    host: &mut H,
) -> Result<ObjectHandle> {
    let object = host.create_curve_object(curve)?;
    host.link_object(object)?;

    if let Some(thickness) = curve.solidify {
        host.add_modifier(object, &Modifier::Solidify { thickness })?;
    }

    let material = materials.get_or_create(&curve.material_key, curve.color, host)?;
    host.assign_material(object, material)?;

    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryScene;
    use crate::config::ImportSettings;
    use crate::domain::model::Rgba;

    fn curve(solidify: Option<f64>) -> CurveDescriptor {
        CurveDescriptor {
            curve_name: "StrokeCurve_0".to_string(),
            object_name: "Stroke_0".to_string(),
            points: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            extrude: 0.005,
            bevel_depth: 0.005,
            solidify,
            material_key: "0000FF".to_string(),
            color: Rgba::from_hex("0000FF").unwrap(),
        }
    }

    #[test]
    fn test_bind_links_and_assigns_material() {
        let mut scene = MemoryScene::new();
        let mut cache = MaterialCache::new(&ImportSettings::default());

        let handle = bind_curve(&curve(None), &mut cache, &mut scene).unwrap();
        let object = scene.object(handle).unwrap();

        assert!(object.linked);
        assert!(object.modifiers.is_empty());
        assert_eq!(object.materials.len(), 1);
        assert_eq!(
            scene.material(object.materials[0]).unwrap().name,
            "StrokeMaterial_0000FF"
        );
    }

    #[test]
    fn test_bind_adds_solidify_modifier() {
        let mut scene = MemoryScene::new();
        let mut cache = MaterialCache::new(&ImportSettings::default());

        let handle = bind_curve(&curve(Some(0.002)), &mut cache, &mut scene).unwrap();
        let object = scene.object(handle).unwrap();

        assert_eq!(
            object.modifiers,
            vec![Modifier::Solidify { thickness: 0.002 }]
        );
    }
}
