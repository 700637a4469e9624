use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_required_field, validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PACKAGING: &str = "jar";
pub const DEFAULT_REPOSITORY_URL: &str = "https://repo.maven.apache.org/maven2";

/// The `maven:` section of a manifest application, exactly as written by the
/// operator. Absent fields stay `None` until `with_defaults` runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MavenConfig {
    #[serde(default)]
    pub group_id: String,

    #[serde(default)]
    pub artifact_id: String,

    pub version: Option<String>,
    pub classifier: Option<String>,
    pub packaging: Option<String>,
    pub repository_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl MavenConfig {
    /// Fills in `packaging` and `repository-url` when the manifest left them
    /// out. Explicitly provided values are never touched, so applying this
    /// twice changes nothing.
    pub fn with_defaults(self) -> Self {
        Self {
            packaging: self
                .packaging
                .or_else(|| Some(DEFAULT_PACKAGING.to_string())),
            repository_url: self
                .repository_url
                .or_else(|| Some(DEFAULT_REPOSITORY_URL.to_string())),
            ..self
        }
    }

    /// Turns the raw manifest section into fully-populated coordinates.
    /// Defaulting happens here exactly once; downstream code never sees a
    /// half-filled config.
    pub fn resolve(self) -> Result<Coordinates> {
        let config = self.with_defaults();
        config.validate()?;

        // Requests go out unauthenticated unless both halves of the
        // credentials are actually present; an empty string counts as absent.
        let credentials = match (&config.username, &config.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some(Credentials {
                    username: username.clone(),
                    password: password.clone(),
                })
            }
            _ => None,
        };

        Ok(Coordinates {
            group_id: config.group_id,
            artifact_id: config.artifact_id,
            version: config.version.unwrap_or_default(),
            classifier: config.classifier,
            packaging: config.packaging.unwrap_or_default(),
            repository_url: config.repository_url.unwrap_or_default(),
            credentials,
        })
    }
}

impl Validate for MavenConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("group-id", &self.group_id)?;
        validate_non_empty_string("artifact-id", &self.artifact_id)?;

        // An absent version is a validation failure rather than an implicit
        // "latest": silently resolving a moving target is how the wrong build
        // ends up in production.
        let version = validate_required_field("version", &self.version)?;
        validate_non_empty_string("version", version)?;

        if let Some(repository_url) = &self.repository_url {
            validate_url("repository-url", repository_url)?;
        }

        Ok(())
    }
}

/// HTTP Basic auth credentials for the artifact repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Fully-populated, immutable Maven coordinates. Constructed only through
/// `MavenConfig::resolve`, so every field is already defaulted and validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub classifier: Option<String>,
    pub packaging: String,
    pub repository_url: String,
    pub credentials: Option<Credentials>,
}

impl Coordinates {
    /// `<artifact-id>-<version>[-<classifier>].<packaging>`. The classifier
    /// segment disappears entirely when no classifier is set.
    pub fn artifact_name(&self) -> String {
        let classifier = match &self.classifier {
            Some(classifier) => format!("-{}", classifier),
            None => String::new(),
        };
        format!(
            "{}-{}{}.{}",
            self.artifact_id, self.version, classifier, self.packaging
        )
    }

    /// Standard Maven repository layout: the group id's dots become path
    /// segments. Pure string composition, no I/O, no validation of what the
    /// operator put in the coordinates.
    pub fn artifact_url(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.repository_url,
            self.group_id.replace('.', "/"),
            self.artifact_id,
            self.version,
            self.artifact_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_config() -> MavenConfig {
        MavenConfig {
            group_id: "com.group.my".to_string(),
            artifact_id: "my-artifact".to_string(),
            version: Some("1.0.0".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_with_defaults_fills_absent_fields() {
        let config = simple_config().with_defaults();

        assert_eq!(config.packaging.as_deref(), Some("jar"));
        assert_eq!(
            config.repository_url.as_deref(),
            Some("https://repo.maven.apache.org/maven2")
        );
    }

    #[test]
    fn test_with_defaults_keeps_provided_values() {
        let config = MavenConfig {
            packaging: Some("zip".to_string()),
            repository_url: Some("https://nexus.internal/repository".to_string()),
            ..simple_config()
        }
        .with_defaults();

        assert_eq!(config.packaging.as_deref(), Some("zip"));
        assert_eq!(
            config.repository_url.as_deref(),
            Some("https://nexus.internal/repository")
        );
    }

    #[test]
    fn test_with_defaults_is_idempotent() {
        let once = simple_config().with_defaults();
        let twice = once.clone().with_defaults();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_artifact_name_simple() {
        let coords = simple_config().resolve().unwrap();
        assert_eq!(coords.artifact_name(), "my-artifact-1.0.0.jar");
    }

    #[test]
    fn test_artifact_name_classifier() {
        let coords = MavenConfig {
            classifier: Some("javadoc".to_string()),
            ..simple_config()
        }
        .resolve()
        .unwrap();

        assert_eq!(coords.artifact_name(), "my-artifact-1.0.0-javadoc.jar");
    }

    #[test]
    fn test_artifact_name_zip() {
        let coords = MavenConfig {
            packaging: Some("zip".to_string()),
            ..simple_config()
        }
        .resolve()
        .unwrap();

        assert_eq!(coords.artifact_name(), "my-artifact-1.0.0.zip");
    }

    #[test]
    fn test_artifact_name_classifier_and_zip() {
        let coords = MavenConfig {
            classifier: Some("complex".to_string()),
            packaging: Some("zip".to_string()),
            ..simple_config()
        }
        .resolve()
        .unwrap();

        assert_eq!(coords.artifact_name(), "my-artifact-1.0.0-complex.zip");
    }

    #[test]
    fn test_artifact_url_simple() {
        let coords = simple_config().resolve().unwrap();
        assert_eq!(
            coords.artifact_url(),
            "https://repo.maven.apache.org/maven2/com/group/my/my-artifact/1.0.0/my-artifact-1.0.0.jar"
        );
    }

    #[test]
    fn test_resolve_rejects_missing_group_id() {
        let config = MavenConfig {
            group_id: String::new(),
            ..simple_config()
        };
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_resolve_rejects_missing_artifact_id() {
        let config = MavenConfig {
            artifact_id: String::new(),
            ..simple_config()
        };
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_resolve_rejects_missing_version() {
        let config = MavenConfig {
            version: None,
            ..simple_config()
        };
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_resolve_builds_credentials_only_when_both_present() {
        let with_both = MavenConfig {
            username: Some("bob".to_string()),
            password: Some("s3cret".to_string()),
            ..simple_config()
        }
        .resolve()
        .unwrap();
        assert_eq!(
            with_both.credentials,
            Some(Credentials {
                username: "bob".to_string(),
                password: "s3cret".to_string(),
            })
        );

        let username_only = MavenConfig {
            username: Some("bob".to_string()),
            ..simple_config()
        }
        .resolve()
        .unwrap();
        assert_eq!(username_only.credentials, None);
    }

    #[test]
    fn test_resolve_treats_empty_credentials_as_absent() {
        let empty_username = MavenConfig {
            username: Some(String::new()),
            password: Some("s3cret".to_string()),
            ..simple_config()
        }
        .resolve()
        .unwrap();
        assert_eq!(empty_username.credentials, None);

        let empty_password = MavenConfig {
            username: Some("bob".to_string()),
            password: Some(String::new()),
            ..simple_config()
        }
        .resolve()
        .unwrap();
        assert_eq!(empty_password.credentials, None);
    }

    #[test]
    fn test_deserialize_kebab_case_keys() {
        let yaml = r#"
group-id: com.group.my
artifact-id: my-artifact
version: 1.0.0
classifier: sources
repository-url: https://nexus.internal/repository
"#;
        let config: MavenConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.group_id, "com.group.my");
        assert_eq!(config.artifact_id, "my-artifact");
        assert_eq!(config.version.as_deref(), Some("1.0.0"));
        assert_eq!(config.classifier.as_deref(), Some("sources"));
        assert_eq!(
            config.repository_url.as_deref(),
            Some("https://nexus.internal/repository")
        );
        assert_eq!(config.packaging, None);
    }
}
