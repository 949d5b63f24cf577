use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Artifact not found: {name} (expected at {path:?})")]
    NotFound { name: String, path: PathBuf },
}

/// Compiled contract ready to be handed to a runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
    bytecode: PathBuf,
}

impl Artifact {
    pub fn new(name: impl Into<String>, bytecode: impl Into<PathBuf>) -> Self {
        Artifact {
            name: name.into(),
            bytecode: bytecode.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytecode(&self) -> &Path {
        &self.bytecode
    }
}

/// Build output layout: `<root>/<name>/out/<profile>/<name>.bin`.
#[derive(Debug, Clone)]
pub struct ArtifactSource {
    root: PathBuf,
    profile: String,
}

impl ArtifactSource {
    pub fn new(root: impl Into<PathBuf>, profile: impl Into<String>) -> Self {
        ArtifactSource {
            root: root.into(),
            profile: profile.into(),
        }
    }

    pub fn artifact(&self, name: &str) -> Artifact {
        let bytecode = self
            .root
            .join(name)
            .join("out")
            .join(&self.profile)
            .join(format!("{}.bin", name));
        Artifact::new(name, bytecode)
    }

    pub fn require(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let artifact = self.artifact(name);
        if !artifact.bytecode().is_file() {
            return Err(ArtifactError::NotFound {
                name: name.to_string(),
                path: artifact.bytecode,
            });
        }
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_path_follows_build_layout() {
        let source = ArtifactSource::new("..", "release");
        let artifact = source.artifact("cred_eth");
        assert_eq!(artifact.name(), "cred_eth");
        assert_eq!(
            artifact.bytecode(),
            Path::new("../cred_eth/out/release/cred_eth.bin")
        );
    }

    #[test]
    fn test_require_missing_artifact() {
        let source = ArtifactSource::new("/nonexistent-artifacts-root", "debug");
        let err = source.require("cred_eth").unwrap_err();
        match err {
            ArtifactError::NotFound { name, path } => {
                assert_eq!(name, "cred_eth");
                assert!(path.ends_with("cred_eth/out/debug/cred_eth.bin"));
            }
        }
    }
}
