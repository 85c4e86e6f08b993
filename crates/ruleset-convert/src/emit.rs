//! Artifact emission: one `.json` and one `.srs` file per rule-set.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ruleset_rules::{Artifact, JsonEncoder, RuleSetEncoder};
use ruleset_srs::SrsEncoder;
use tracing::{info, warn};

use crate::error::ConvertError;
use crate::output::artifact_path;

/// Writes artifacts at a fixed rule-set version.
#[derive(Debug, Clone, Copy)]
pub struct Emitter {
    version: u8,
    json: JsonEncoder,
    srs: SrsEncoder,
}

impl Emitter {
    pub fn new(version: u8) -> Self {
        Self {
            version,
            json: JsonEncoder,
            srs: SrsEncoder,
        }
    }

    /// Write `<name>-v<N>.json` then `<name>-v<N>.srs`.
    ///
    /// A binary rule-set that cannot be encoded leaves no `.srs` file, and
    /// a failed binary write removes the partial file. The JSON file is
    /// kept either way.
    pub fn emit(&self, artifact: &Artifact) -> Result<Vec<PathBuf>, ConvertError> {
        let json_path = self.write_with(&self.json, artifact, false)?;
        let srs_path = self.write_with(&self.srs, artifact, true)?;
        Ok(vec![json_path, srs_path])
    }

    /// Emit every artifact in order, stopping at the first failure.
    pub fn emit_all(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, ConvertError> {
        let mut written = Vec::with_capacity(artifacts.len() * 2);
        for artifact in artifacts {
            written.extend(self.emit(artifact)?);
        }
        Ok(written)
    }

    fn write_with(
        &self,
        encoder: &dyn RuleSetEncoder,
        artifact: &Artifact,
        remove_partial: bool,
    ) -> Result<PathBuf, ConvertError> {
        let path = artifact_path(&artifact.name, self.version, encoder.extension());
        let bytes = encoder
            .encode(&artifact.rule_set, self.version)
            .map_err(|e| ConvertError::encode(path.clone(), e))?;

        // A file that could not be created is not ours to remove.
        let mut file = File::create(&path).map_err(|e| ConvertError::write(path.clone(), e))?;
        if let Err(e) = write_fully(&mut file, &bytes) {
            drop(file);
            if remove_partial {
                remove_partial_file(&path);
            }
            return Err(ConvertError::write(path, e));
        }

        info!(
            path = %path.display(),
            rules = artifact.rule_set.rules.len(),
            bytes = bytes.len(),
            "wrote rule-set"
        );
        Ok(path)
    }
}

fn write_fully(file: &mut File, bytes: &[u8]) -> io::Result<()> {
    file.write_all(bytes)?;
    file.sync_all()
}

fn remove_partial_file(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "failed to remove partial file"),
    }
}
