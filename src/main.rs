use clap::Parser;
use sample_asset::utils::{logger, validation::Validate};
use sample_asset::{
    AssetDescriptor, AssetError, AssetPipeline, AssetRunner, CliConfig, LocalStorage,
    MonotonicClock, SystemClock, SUCCESS_MESSAGE,
};

fn exit_with(e: &AssetError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let loaded = match config.descriptor.as_deref() {
        Some(path) => {
            tracing::debug!("Loading descriptor from {}", path);
            AssetDescriptor::from_file(path)
        }
        None => AssetDescriptor::builtin(),
    };
    let descriptor = match loaded {
        Ok(descriptor) => descriptor,
        Err(e) => exit_with(&e),
    };

    if config.describe {
        println!("{}", descriptor.to_json_pretty()?);
        return Ok(());
    }

    tracing::info!("Running asset '{}'", descriptor.name);

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = match AssetPipeline::new(storage, config, MonotonicClock::new(SystemClock))
        .with_asset_name(&descriptor.name)
    {
        Ok(pipeline) => pipeline,
        Err(e) => exit_with(&e),
    };
    let runner = AssetRunner::new(pipeline);

    match runner.run().await {
        Ok(outcome) => {
            println!("{}", SUCCESS_MESSAGE);
            println!("{}", outcome.preview);
            if let Some(path) = outcome.export_path {
                tracing::info!("📁 CSV saved to: {}", path);
            }
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
