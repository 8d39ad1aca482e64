use clap::Parser;
use qvpen_import::utils::error::ErrorSeverity;
use qvpen_import::utils::{logger, validation::Validate};
use qvpen_import::{
    CliConfig, ImportEngine, ImportError, LocalStorage, MemoryScene, SceneExporter,
    StrokePipeline,
};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting qvpen-import");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Import failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<(), ImportError> {
    // 驗證配置（設定檔只讀取一次）
    config.validate()?;
    let (settings, output) = config.resolve()?;
    tracing::info!(
        "🔧 extrude={} solidify={} (thickness {}) shader={}",
        settings.default_extrude,
        settings.add_solidify,
        settings.default_solidify_thickness,
        settings.shader_mode
    );

    let mut scene = MemoryScene::new();
    let pipeline = StrokePipeline::new(&config.input, settings, &mut scene);
    let summary = ImportEngine::new(pipeline).run()?;

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - scene was built in memory only");
        println!(
            "✅ {} curves, {} materials ({} strokes skipped)",
            summary.curves_created, summary.materials_created, summary.strokes_skipped
        );
        return Ok(());
    }

    let storage = LocalStorage::new(output.output_path.clone());
    let exporter = SceneExporter::new(storage, output.clone());
    let written = exporter.export(&scene)?;

    tracing::info!("✅ Paths generated successfully!");
    println!(
        "✅ Imported {} curves with {} materials ({} strokes skipped)",
        summary.curves_created, summary.materials_created, summary.strokes_skipped
    );
    for file in written {
        println!("📁 {}/{}", output.output_path, file);
    }

    Ok(())
}
