//! Writes a page to its output file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::page::Page;

/// Where the assembled page goes.
#[derive(Debug, Clone)]
pub struct AssembleConfig {
    /// Output file, truncated before writing
    pub output: PathBuf,
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("index.html"),
        }
    }
}

/// Outcome of a successful write.
#[derive(Debug)]
pub struct AssembleReport {
    /// File that was written
    pub output: PathBuf,

    /// Bytes written to it
    pub bytes: usize,
}

/// Errors that can occur while writing the page.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes the fragments of a page, in order, to a single file.
pub struct PageAssembler {
    config: AssembleConfig,
    page: Page,
}

impl PageAssembler {
    /// Create an assembler for the ENT page.
    pub fn new(config: AssembleConfig) -> Self {
        Self {
            config,
            page: Page::ent(),
        }
    }

    /// Create or truncate the output file and write every fragment into it.
    ///
    /// The handle is closed when the writer drops, including on the error
    /// path. Nothing is retried.
    pub fn assemble(&self) -> Result<AssembleReport, AssembleError> {
        let path = &self.config.output;
        let io_err = |source| AssembleError::Io {
            path: path.clone(),
            source,
        };

        tracing::debug!("Creating {}", path.display());

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);

        for fragment in self.page.fragments() {
            writer.write_all(fragment.as_bytes()).map_err(io_err)?;
        }

        writer.flush().map_err(io_err)?;

        tracing::info!("Wrote {} bytes to {}", self.page.byte_len(), path.display());

        Ok(AssembleReport {
            output: path.clone(),
            bytes: self.page.byte_len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragments::{HEAD, TOP_HEADER};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn assembler_in(dir: &Path) -> PageAssembler {
        PageAssembler::new(AssembleConfig {
            output: dir.join("index.html"),
        })
    }

    #[test]
    fn defaults_to_index_html() {
        let config = AssembleConfig::default();

        assert_eq!(config.output, PathBuf::from("index.html"));
    }

    #[test]
    fn writes_head_then_header() {
        let temp = tempdir().unwrap();
        let assembler = assembler_in(temp.path());

        let report = assembler.assemble().unwrap();

        let written = fs::read(temp.path().join("index.html")).unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), format!("{HEAD}{TOP_HEADER}"));
        assert_eq!(report.bytes, 1358);
        assert_eq!(report.output, temp.path().join("index.html"));
    }

    #[test]
    fn output_has_structural_markers() {
        let temp = tempdir().unwrap();
        assembler_in(temp.path()).assemble().unwrap();

        let html = fs::read_to_string(temp.path().join("index.html")).unwrap();

        assert!(html.contains("<!doctype html>"));
        assert!(html.contains("<title>CAS - Central Authentication Service Connexion</title>"));
        assert!(html.contains("<header role=\"banner\">"));
    }

    #[test]
    fn repeated_runs_are_idempotent() {
        let temp = tempdir().unwrap();
        let assembler = assembler_in(temp.path());
        let out = temp.path().join("index.html");

        assembler.assemble().unwrap();
        let first = fs::read(&out).unwrap();
        assembler.assemble().unwrap();
        let second = fs::read(&out).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn truncates_existing_content() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("index.html");
        fs::write(&out, "x".repeat(HEAD.len() + TOP_HEADER.len() + 4096)).unwrap();

        assembler_in(temp.path()).assemble().unwrap();

        let len = fs::metadata(&out).unwrap().len() as usize;
        assert_eq!(len, HEAD.len() + TOP_HEADER.len());
    }

    #[test]
    fn missing_directory_is_io_error() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("missing").join("index.html");
        let assembler = PageAssembler::new(AssembleConfig {
            output: out.clone(),
        });

        let err = assembler.assemble().unwrap_err();

        let AssembleError::Io { path, .. } = &err;
        assert_eq!(path, &out);
        assert!(err.to_string().contains("index.html"));
        assert!(!out.exists());
    }
}
