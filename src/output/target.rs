//! Destinations for copied text and downloaded files.

use crate::error::ExportError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Capabilities the calculator hands its results to.
///
/// Only the contract lives here; whether a copy lands on a clipboard, a
/// terminal or a test buffer is up to the implementation.
pub trait ExportTarget {
    /// Copy plain text.
    fn copy_text(&mut self, text: &str) -> Result<(), ExportError>;

    /// Copy structured data as a JSON document.
    fn copy_json(&mut self, json: &str) -> Result<(), ExportError>;

    /// Save `bytes` under `filename` with the given MIME type.
    fn download(&mut self, filename: &str, mime: &str, bytes: &[u8]) -> Result<(), ExportError>;
}

/// Copies go to a writer, downloads are saved in a directory.
pub struct ConsoleTarget<W: Write> {
    out: W,
    dir: PathBuf,
}

impl ConsoleTarget<std::io::Stdout> {
    /// Copy to stdout and save downloads under `dir`.
    pub fn stdout(dir: impl Into<PathBuf>) -> Self {
        ConsoleTarget::new(std::io::stdout(), dir)
    }
}

impl<W: Write> ConsoleTarget<W> {
    pub fn new(out: W, dir: impl Into<PathBuf>) -> Self {
        ConsoleTarget {
            out,
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ExportTarget for ConsoleTarget<W> {
    fn copy_text(&mut self, text: &str) -> Result<(), ExportError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn copy_json(&mut self, json: &str) -> Result<(), ExportError> {
        writeln!(self.out, "{json}")?;
        Ok(())
    }

    fn download(&mut self, filename: &str, mime: &str, bytes: &[u8]) -> Result<(), ExportError> {
        let path = self.dir.join(filename);
        log::info!(
            "Writing {} bytes ({mime}) to {}",
            bytes.len(),
            path.display()
        );
        std::fs::write(&path, bytes).map_err(|source| ExportError::Write {
            path: path.display().to_string(),
            source,
        })?;
        writeln!(self.out, "Saved {}", path.display())?;
        Ok(())
    }
}
