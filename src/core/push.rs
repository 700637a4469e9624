use crate::config::manifest::Manifest;
use crate::core::fetcher::ArtifactFetcher;
use crate::core::rewrite::strip_plugin_flags;
use crate::utils::error::{PushError, Result};
use async_trait::async_trait;
use std::path::Path;
use tempfile::TempDir;
use tokio::process::Command;

/// Seam to the external deployment tool, so tests can capture the forwarded
/// command line instead of spawning a real process.
#[async_trait]
pub trait Deployer: Send + Sync {
    async fn deploy(&self, args: &[String]) -> Result<()>;
}

/// Hands the rewritten command line to the cf CLI as a child process.
pub struct CfDeployer;

#[async_trait]
impl Deployer for CfDeployer {
    async fn deploy(&self, args: &[String]) -> Result<()> {
        let status = Command::new("cf")
            .args(args)
            .status()
            .await
            .map_err(|source| PushError::DeploySpawnError { source })?;

        if !status.success() {
            return Err(PushError::DeployExitError { status });
        }
        Ok(())
    }
}

pub struct MavenPush<D: Deployer> {
    deployer: D,
    fetcher: ArtifactFetcher,
}

impl<D: Deployer> MavenPush<D> {
    pub fn new(deployer: D) -> Self {
        Self {
            deployer,
            fetcher: ArtifactFetcher::new(),
        }
    }

    /// Runs one deployment: manifest → coordinates → download → rewritten
    /// `cf push`. `args` is the original argument sequence beginning with the
    /// subcommand token. Any error aborts before the deployer is invoked.
    pub async fn run(&self, manifest_path: &str, args: &[String]) -> Result<()> {
        let application = Manifest::load(Path::new(manifest_path))?;
        if let Some(name) = &application.name {
            tracing::info!("Deploying application: {}", name);
        }

        let coordinates = application.maven.resolve()?;
        let url = coordinates.artifact_url();
        tracing::info!("Resolved artifact URL: {}", url);

        // One uniquely-named directory per run; the guard removes it on every
        // exit path, including download failures.
        let artifact_dir = TempDir::with_prefix("maven-push-")?;
        let artifact_path = artifact_dir.path().join(coordinates.artifact_name());

        self.fetcher
            .download(&url, &artifact_path, coordinates.credentials.as_ref())
            .await?;
        tracing::info!("Artifact downloaded to: {}", artifact_path.display());

        let mut forwarded = strip_plugin_flags(args);
        if forwarded.is_empty() {
            forwarded.push("push".to_string());
        } else {
            forwarded[0] = "push".to_string();
        }
        forwarded.push("-p".to_string());
        forwarded.push(artifact_path.display().to_string());

        tracing::info!("running: cf {}", forwarded.join(" "));
        self.deployer.deploy(&forwarded).await
    }
}
