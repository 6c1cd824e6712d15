use std::convert::Infallible;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::MoveLog;

/// Error when appending to the move record file.
#[derive(Debug, Error)]
#[error("failed to record move in '{}': {source}", .path.display())]
pub struct RecordError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

/// Append-only text file holding one line per completed move.
///
/// The file is opened and closed on every append; no handle is kept.
#[derive(Debug, Clone)]
pub struct FileMoveLog {
    path: PathBuf,
}

impl FileMoveLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl MoveLog for FileMoveLog {
    type Error = RecordError;

    fn append(&mut self, line: &str) -> Result<(), Self::Error> {
        self.write_line(line).map_err(|source| RecordError {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory move log for scripted sessions and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryMoveLog {
    lines: Vec<String>,
}

impl MemoryMoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl MoveLog for MemoryMoveLog {
    type Error = Infallible;

    fn append(&mut self, line: &str) -> Result<(), Self::Error> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}
