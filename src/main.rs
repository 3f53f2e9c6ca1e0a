use clap::Parser;
use comic_panels::core::comic::plan_panels;
use comic_panels::core::panels;
use comic_panels::utils::logger;
use comic_panels::{
    load_api_key, CliArgs, ComicConfig, ComicEngine, ComicError, LocalStorage, OpenAiImageClient,
};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting comic-panels");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    if let Err(e) = run(&args).await {
        tracing::error!(
            "❌ Comic generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}

async fn run(args: &CliArgs) -> Result<(), ComicError> {
    let config = ComicConfig::resolve(args.config.as_deref())?;
    let storage = LocalStorage::new(".");

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No images will be generated");
        return dry_run(config, storage).await;
    }

    let api_key = load_api_key(&args.env_file)?;
    let client = OpenAiImageClient::new(&config, api_key)?;
    let engine = ComicEngine::new_with_monitoring(
        client,
        storage,
        config,
        panels::history_comes_alive(),
        args.monitor,
    );

    let output = engine.run().await?;
    println!("✅ Comic generated: {} panels", output.chapters.len());
    println!("📁 Output saved to: {}", output.document_path.display());
    Ok(())
}

/// Lists each panel and whether its image is already on disk.
async fn dry_run(config: ComicConfig, storage: LocalStorage) -> Result<(), ComicError> {
    let panels = panels::history_comes_alive();

    for planned in plan_panels(&storage, &config.image_dir, &panels).await {
        let state = if planned.cached { "cached" } else { "generate" };
        println!(
            "{:<9} {:<24} {}",
            state,
            planned.title,
            planned.image_path.display()
        );
    }
    Ok(())
}
