use crate::core::coordinates::MavenConfig;
use crate::utils::error::{PushError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub applications: Vec<Application>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub name: Option<String>,
    #[serde(default)]
    pub maven: MavenConfig,
}

impl Manifest {
    /// Reads the manifest and returns its single application with maven
    /// defaults already applied. Manifests with zero or multiple applications
    /// are rejected; this tool deploys exactly one artifact per run.
    pub fn load(path: &Path) -> Result<Application> {
        let raw = std::fs::read_to_string(path).map_err(|source| PushError::ManifestIoError {
            path: path.display().to_string(),
            source,
        })?;

        let manifest: Manifest =
            serde_yaml::from_str(&raw).map_err(|source| PushError::ManifestDecodeError {
                path: path.display().to_string(),
                source,
            })?;

        let count = manifest.applications.len();
        let mut applications = manifest.applications;
        let mut application = match applications.pop() {
            Some(application) if count == 1 => application,
            _ => return Err(PushError::ApplicationCountError { count }),
        };

        application.maven = application.maven.with_defaults();
        Ok(application)
    }
}
