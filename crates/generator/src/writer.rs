//! Create-or-append placement of rendered artifacts

use crate::RenderedArtifact;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;
use terrawrap_common::{GeneratorError, Result};
use tracing::info;

/// Separator written before a rendering appended to an existing file
pub const APPEND_SEPARATOR: &str = "\n\n";

/// What happened to the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Appended,
}

/// Write an artifact into `dir`.
///
/// A missing file is created; an existing file gets [`APPEND_SEPARATOR`]
/// followed by the new rendering, so repeated runs accumulate several
/// resources in one module.
pub fn write_artifact(dir: &Path, artifact: &RenderedArtifact) -> Result<WriteOutcome> {
    let path = dir.join(artifact.file_name);

    let (mut file, outcome) = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => (file, WriteOutcome::Created),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            let file = OpenOptions::new().append(true).open(&path).map_err(|e| {
                GeneratorError::Generation(format!(
                    "Failed to open existing {}: {}",
                    path.display(),
                    e
                ))
            })?;
            (file, WriteOutcome::Appended)
        }
        Err(e) => {
            return Err(GeneratorError::Generation(format!(
                "Failed to create {}: {}",
                path.display(),
                e
            )))
        }
    };

    match outcome {
        WriteOutcome::Created => info!(path = %path.display(), "creating"),
        WriteOutcome::Appended => info!(path = %path.display(), "appending to"),
    }

    write_contents(&mut file, &path, outcome, &artifact.contents)?;
    Ok(outcome)
}

fn write_contents<W: Write>(
    out: &mut W,
    path: &Path,
    outcome: WriteOutcome,
    contents: &str,
) -> Result<()> {
    let write = |out: &mut W| -> std::io::Result<()> {
        if outcome == WriteOutcome::Appended {
            out.write_all(APPEND_SEPARATOR.as_bytes())?;
        }
        out.write_all(contents.as_bytes())
    };

    write(out).map_err(|e| {
        GeneratorError::Generation(format!("Failed to write {}: {}", path.display(), e))
    })
}
