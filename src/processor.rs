//! Core generation orchestration.
//! Combines the structure builder and the template composer and writes the
//! result to disk.

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::generators::{compose, GeneratedFile};
use crate::structure::{create_structure, project_layout};

/// Writes a single generated file below `root`, creating parent directories
/// as needed.
///
/// # Errors
/// * `Error::IoError` if the file or its parent directories cannot be created
pub fn write_file(root: &Path, file: &GeneratedFile) -> Result<()> {
    let target = root.join(&file.path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, file.rendered()?)?;
    debug!("Created file: {}", target.display());
    Ok(())
}

/// Generates a complete project at `root` for the given configuration.
///
/// Writes are sequential; the generated files do not depend on one another,
/// so their order carries no meaning. A failed write aborts the run and
/// leaves any partial output in place.
pub fn generate(root: &Path, config: &ProjectConfig) -> Result<()> {
    create_structure(root, &project_layout())?;

    for file in compose(config)? {
        write_file(root, &file)?;
    }

    Ok(())
}
