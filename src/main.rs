use maven_push::utils::logger;
use maven_push::{CfDeployer, CliConfig, MavenPush};

#[tokio::main]
async fn main() {
    let raw: Vec<String> = std::env::args().skip(1).collect();

    // Plugin-style dispatch: anything other than our subcommand is a no-op.
    if raw.first().map(String::as_str) != Some("maven-push") {
        std::process::exit(0);
    }

    // The subcommand token doubles as the binary name for flag parsing.
    let config = CliConfig::from_args(&raw);

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting maven-push");
    tracing::info!("using manifest file {}", config.manifest);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let push = MavenPush::new(CfDeployer);
    match push.run(&config.manifest, &raw).await {
        Ok(()) => {
            tracing::info!("✅ maven-push completed successfully");
        }
        Err(e) => {
            tracing::error!("❌ maven-push failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
