use anyhow::Result;
use qvpen_import::domain::model::{ImportSummary, Modifier, Shading, ShaderMode};
use qvpen_import::{
    ImportEngine, ImportError, ImportSettings, LocalStorage, MemoryScene, OutputSettings,
    SceneExporter, StrokePipeline,
};
use std::io::Read;
use tempfile::TempDir;

fn write_input(dir: &TempDir, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join("strokes.json");
    std::fs::write(&path, content)?;
    Ok(path)
}

fn import(
    path: &std::path::Path,
    settings: ImportSettings,
) -> (qvpen_import::Result<ImportSummary>, MemoryScene) {
    let mut scene = MemoryScene::new();
    let pipeline = StrokePipeline::new(path, settings, &mut scene);
    let result = ImportEngine::new(pipeline).run();
    (result, scene)
}

#[test]
fn test_end_to_end_single_red_stroke() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        &temp_dir,
        r#"{"exportedData":[{"positions":[0,0,0,1,0,0],"color":{"value":["FF0000"]}}]}"#,
    )?;

    let (result, scene) = import(&input, ImportSettings::default());
    let summary = result?;

    assert_eq!(summary.curves_created, 1);
    assert_eq!(scene.objects().len(), 1);

    let object = &scene.objects()[0];
    assert!(object.linked);
    assert_eq!(object.name, "Stroke_0");
    assert_eq!(object.curve.curve_name, "StrokeCurve_0");
    assert_eq!(object.curve.points, vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
    assert_eq!(object.curve.extrude, 0.005);
    assert_eq!(object.curve.bevel_depth, 0.005);
    assert!(object.modifiers.is_empty());

    let material = scene.material(object.materials[0]).unwrap();
    assert_eq!(material.name, "StrokeMaterial_FF0000");
    assert_eq!(
        (material.base_color.r, material.base_color.g, material.base_color.b, material.base_color.a),
        (1.0, 0.0, 0.0, 1.0)
    );
    assert!(matches!(
        material.shading,
        Shading::Principled { metallic, roughness, ior, alpha }
            if metallic == 0.0 && roughness == 1.0 && ior == 0.5 && alpha == 1.0
    ));
    Ok(())
}

#[test]
fn test_one_point_skipped_two_points_accepted() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        &temp_dir,
        r#"{"exportedData":[
            {"positions":[5,5,5],"color":{"value":["00FF00"]}},
            {"positions":[0,0,0,1,1,1],"color":{"value":["00FF00"]}}
        ]}"#,
    )?;

    let (result, scene) = import(&input, ImportSettings::default());
    let summary = result?;

    assert_eq!(summary.records_read, 2);
    assert_eq!(summary.strokes_skipped, 1);
    assert_eq!(scene.objects().len(), 1);
    // 命名沿用原本在陣列中的位置
    assert_eq!(scene.objects()[0].name, "Stroke_1");
    Ok(())
}

#[test]
fn test_materials_are_shared_by_color() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        &temp_dir,
        r#"{"exportedData":[
            {"positions":[0,0,0,1,0,0],"color":{"value":["FF0000"]}},
            {"positions":[0,0,0,0,1,0],"color":{"value":["00FF00"]}},
            {"positions":[0,0,0,0,0,1],"color":{"value":["FF0000"]}}
        ]}"#,
    )?;

    let (result, scene) = import(&input, ImportSettings::default());
    let summary = result?;

    assert_eq!(summary.materials_created, 2);
    assert_eq!(scene.materials().len(), 2);
    let objects = scene.objects();
    assert_eq!(objects[0].materials, objects[2].materials);
    assert_ne!(objects[0].materials, objects[1].materials);
    Ok(())
}

#[test]
fn test_width_overrides_default_with_solidify() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        &temp_dir,
        r#"{"exportedData":[
            {"positions":[0,0,0,1,0,0],"color":{"value":["FF0000"]}},
            {"positions":[0,0,0,1,0,0],"color":{"value":["FF0000"]},"width":0.03}
        ]}"#,
    )?;

    let settings = ImportSettings {
        default_extrude: 0.01,
        default_solidify_thickness: 0.004,
        add_solidify: true,
        ..ImportSettings::default()
    };
    let (result, scene) = import(&input, settings);
    result?;

    let inherited = &scene.objects()[0];
    assert_eq!(inherited.curve.extrude, 0.01);
    assert_eq!(inherited.modifiers, vec![Modifier::Solidify { thickness: 0.004 }]);

    let own = &scene.objects()[1];
    assert_eq!(own.curve.extrude, 0.03);
    assert_eq!(own.curve.bevel_depth, 0.03);
    assert_eq!(own.modifiers, vec![Modifier::Solidify { thickness: 0.03 }]);
    Ok(())
}

#[test]
fn test_malformed_json_creates_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(&temp_dir, r#"{"exportedData":[{"positions":[0,0,0,1"#)?;

    let (result, scene) = import(&input, ImportSettings::default());

    assert!(matches!(result, Err(ImportError::ParseError { .. })));
    assert!(scene.objects().is_empty());
    assert!(scene.materials().is_empty());
    Ok(())
}

#[test]
fn test_missing_file_creates_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nope.json");

    let (result, scene) = import(&missing, ImportSettings::default());

    assert!(matches!(result, Err(ImportError::FileNotFound { .. })));
    assert!(scene.objects().is_empty());
    Ok(())
}

#[test]
fn test_export_writes_obj_mtl_and_manifest() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        &temp_dir,
        r#"{"exportedData":[{"positions":[0,0,0,1,0,0,1,1,0],"color":{"value":["0000FF"]}}]}"#,
    )?;
    let (result, scene) = import(&input, ImportSettings::default());
    result?;

    let out_dir = temp_dir.path().join("out");
    let output = OutputSettings {
        output_path: out_dir.to_str().unwrap().to_string(),
        ..OutputSettings::default()
    };
    let exporter = SceneExporter::new(LocalStorage::new(output.output_path.clone()), output);
    let written = exporter.export(&scene)?;

    assert_eq!(written, vec!["strokes.obj", "strokes.mtl", "strokes.json"]);
    let obj = std::fs::read_to_string(out_dir.join("strokes.obj"))?;
    assert!(obj.contains("usemtl StrokeMaterial_0000FF"));
    assert!(obj.contains("l 1 2 3"));
    let mtl = std::fs::read_to_string(out_dir.join("strokes.mtl"))?;
    assert!(mtl.contains("Kd 0.000000 0.000000 1.000000"));
    assert!(out_dir.join("strokes.json").exists());
    Ok(())
}

#[test]
fn test_export_bundles_into_zip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        &temp_dir,
        r#"{"exportedData":[{"positions":[0,0,0,1,0,0],"color":{"value":["FFFF00"]}}]}"#,
    )?;
    let (result, scene) = import(&input, ImportSettings::default());
    result?;

    let out_dir = temp_dir.path().join("bundle");
    let output = OutputSettings {
        output_path: out_dir.to_str().unwrap().to_string(),
        formats: vec!["obj".to_string()],
        bundle: Some("strokes.zip".to_string()),
        ..OutputSettings::default()
    };
    let exporter = SceneExporter::new(LocalStorage::new(output.output_path.clone()), output);
    let written = exporter.export(&scene)?;

    assert_eq!(written, vec!["strokes.zip"]);
    assert!(!out_dir.join("strokes.obj").exists());

    let zip_data = std::fs::read(out_dir.join("strokes.zip"))?;
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data))?;
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).map(|f| f.name().to_string()))
        .collect::<std::result::Result<_, _>>()?;
    assert_eq!(names, vec!["strokes.obj", "strokes.mtl"]);

    let mut mtl = String::new();
    archive.by_name("strokes.mtl")?.read_to_string(&mut mtl)?;
    assert!(mtl.contains("newmtl StrokeMaterial_FFFF00"));
    Ok(())
}

#[test]
fn test_non_array_exported_data_imports_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        &temp_dir,
        r#"{"exportedData":{"positions":[0,0,0,1,0,0],"color":{"value":["FF0000"]}}}"#,
    )?;

    let (result, scene) = import(&input, ImportSettings::default());
    let summary = result?;

    assert_eq!(summary, ImportSummary::default());
    assert!(scene.objects().is_empty());
    assert!(scene.materials().is_empty());
    Ok(())
}

#[test]
fn test_color_keys_are_kept_verbatim() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        &temp_dir,
        r##"{"exportedData":[
            {"positions":[0,0,0,1,0,0],"color":{"value":["#00FF00"]}},
            {"positions":[0,0,0,0,1,0],"color":{"value":["00FF00"]}},
            {"positions":[0,0,0,0,0,1],"color":{"value":["00FF00AA"]}},
            {"positions":[0,0,0,1,1,1],"color":{"value":["#00FF00"]}}
        ]}"##,
    )?;

    let (result, scene) = import(&input, ImportSettings::default());
    let summary = result?;

    // 同一個顏色的三種寫法各自建立材質
    assert_eq!(summary.materials_created, 3);
    let keys: Vec<&str> = scene.materials().iter().map(|m| m.key.as_str()).collect();
    assert_eq!(keys, vec!["#00FF00", "00FF00", "00FF00AA"]);
    for material in scene.materials() {
        assert_eq!(material.base_color.g, 1.0);
        assert_eq!(material.base_color.r, 0.0);
    }

    let objects = scene.objects();
    assert_eq!(objects[0].curve.material_key, "#00FF00");
    assert_eq!(objects[2].curve.material_key, "00FF00AA");
    assert_eq!(objects[0].materials, objects[3].materials);
    Ok(())
}

#[test]
fn test_emission_mode_through_pipeline() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_input(
        &temp_dir,
        r#"{"exportedData":[
            {"positions":[0,0,0,1,0,0],"color":{"value":["FF8000"]}},
            {"positions":[0,0,0,0,1,0],"color":{"value":["FF8000"]}}
        ]}"#,
    )?;

    let settings = ImportSettings {
        shader_mode: ShaderMode::Emission,
        emission_strength: 4.0,
        ..ImportSettings::default()
    };
    let (result, scene) = import(&input, settings);
    let summary = result?;

    assert_eq!(summary.curves_created, 2);
    assert_eq!(summary.materials_created, 1);
    let material = &scene.materials()[0];
    assert_eq!(material.name, "StrokeMaterial_FF8000");
    assert_eq!(material.shading, Shading::Emission { strength: 4.0 });
    for object in scene.objects() {
        assert_eq!(scene.material(object.materials[0]), Some(material));
    }
    Ok(())
}
