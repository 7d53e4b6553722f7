//! In-memory model of a Solidity contract file.

use crate::result::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A contract source file loaded into memory.
///
/// The buffer is mutated in place by transform steps and persisted at most
/// once per pipeline invocation. No state is carried between invocations.
#[derive(Debug, Clone)]
pub struct ContractSource {
    /// Path the source was loaded from and will be persisted to.
    pub path: PathBuf,
    /// File stem, e.g. `CreditScore` for `CreditScore.sol`.
    pub name: String,
    /// Full UTF-8 source text.
    pub text: String,
}

impl ContractSource {
    /// Reads a contract file into memory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            path: path.to_path_buf(),
            name,
            text,
        })
    }

    /// Builds an in-memory source that was never read from disk.
    pub fn from_text(name: &str, text: impl Into<String>) -> Self {
        Self {
            path: PathBuf::from(format!("{name}.sol")),
            name: name.to_string(),
            text: text.into(),
        }
    }

    /// Writes the buffer back to its path.
    ///
    /// The content goes to a sibling temporary file first and is renamed
    /// over the target, so a crash mid-write never leaves a half-patched
    /// contract on disk.
    pub fn persist(&self) -> Result<()> {
        let write_err = |source| Error::FileWrite {
            path: self.path.display().to_string(),
            source,
        };

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let tmp = tempfile::Builder::new()
            .prefix(".aegis-")
            .tempfile_in(dir)
            .map_err(write_err)?;
        fs::write(tmp.path(), self.text.as_bytes()).map_err(write_err)?;
        tmp.persist(&self.path)
            .map_err(|e| write_err(e.error))?;
        Ok(())
    }
}
