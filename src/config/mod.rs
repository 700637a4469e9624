pub mod manifest;

use crate::core::rewrite::strip_plugin_flags;
use clap::Parser;

/// Flags owned by the plugin itself. The `--maven-*` and
/// `--remote-manifest-*` families plus everything destined for `cf push`
/// travel in the same argument sequence, so unknown flags are ignored here
/// rather than rejected; the rewriter strips ours before forwarding.
#[derive(Debug, Clone, Parser)]
#[command(name = "maven-push")]
#[command(about = "Download and push an application based on maven coordinates defined in the manifest")]
#[command(ignore_errors = true)]
pub struct CliConfig {
    #[arg(
        short = 'f',
        long = "file",
        default_value = "manifest.yml",
        help = "Path to manifest"
    )]
    pub manifest: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Parses the plugin's flags from the raw argument sequence, whose first
    /// token is the subcommand. clap stops filling in known flags at the
    /// first token it cannot place, so the plugin-flag families are stripped
    /// before parsing; `ignore_errors` then covers whatever cf flags remain.
    pub fn from_args(raw: &[String]) -> Self {
        let cleaned = strip_plugin_flags(raw);
        Self::parse_from(&cleaned)
    }
}
