use clap::Parser;
use compose2kube::config::toml_config::TomlConfig;
use compose2kube::core::{ConfigProvider, ManifestSource};
use compose2kube::utils::{logger, validation::Validate};
use compose2kube::{ComposePipeline, ConvertEngine, LocalManifest, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-convert")]
#[command(about = "compose2kube with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "convert-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - list the services that would be converted without writing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config file '{}': {}", args.config, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }

    if args.dry_run {
        tracing::info!("Dry run - no files will be written");
        return perform_dry_run(&config).await;
    }

    let manifest = LocalManifest::new(config.compose_file().to_string());
    let storage = LocalStorage::new(config.output_dir().to_string());
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

async fn perform_dry_run(config: &TomlConfig) -> anyhow::Result<()> {
    let manifest = LocalManifest::new(config.compose_file().to_string());
    let bytes = manifest.read_manifest().await?;
    let services = compose2kube::compose::parse(&bytes)?;

    println!("Would convert {} services:", services.len());
    for (name, definition) in &services {
        let restart = if definition.restart.is_empty() {
            "always (default)"
        } else {
            &definition.restart
        };
        println!("  {} (image: {}, restart: {})", name, definition.image, restart);
    }

    Ok(())
}
