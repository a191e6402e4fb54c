use clap::Parser;
use compose2kube::utils::{logger, validation::Validate};
use compose2kube::{CliConfig, ComposePipeline, ConvertEngine, LocalManifest, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting compose2kube");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }

    let manifest = LocalManifest::new(config.compose_file.clone());
    let storage = LocalStorage::new(config.output_dir.clone());
    let pipeline = ComposePipeline::new(manifest, storage, config);

    let engine = ConvertEngine::new(pipeline);
    match engine.run().await {
        Ok(paths) => {
            tracing::info!("Conversion completed: {} files written", paths.len());
        }
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
