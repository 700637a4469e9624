pub mod config;
pub mod core;
pub mod utils;

pub use config::{manifest::Manifest, CliConfig};
pub use core::{
    coordinates::{Coordinates, Credentials, MavenConfig},
    fetcher::ArtifactFetcher,
    push::{CfDeployer, Deployer, MavenPush},
};
pub use utils::error::{PushError, Result};
