//! Directory skeleton handling for generated projects.
//! Walks a declarative directory tree description and materializes it on
//! disk; files are added separately by the generators.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;

use crate::error::Result;

/// Nested directory description.
///
/// Keys are directory names; values hold the subdirectories to create
/// beneath them. Iteration follows insertion order, so a given description
/// is always traversed the same way.
#[derive(Debug, Default, Clone)]
pub struct DirectoryStructure(IndexMap<String, DirectoryStructure>);

impl DirectoryStructure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, children: DirectoryStructure) {
        self.0.insert(name.to_string(), children);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DirectoryStructure)> {
        self.0.iter()
    }
}

/// The fixed skeleton of a generated bot project.
/// `config/` stays empty; the generators fill the rest with files.
pub fn project_layout() -> DirectoryStructure {
    let mut src = DirectoryStructure::new();
    src.insert("commands", DirectoryStructure::new());
    src.insert("events", DirectoryStructure::new());
    src.insert("utils", DirectoryStructure::new());

    let mut root = DirectoryStructure::new();
    root.insert("src", src);
    root.insert("config", DirectoryStructure::new());
    root
}

/// Recursively creates every directory in `structure` under `root`.
/// Creation is idempotent; directories that already exist are left alone.
///
/// # Errors
/// * `Error::IoError` if a directory cannot be created
pub fn create_structure(root: &Path, structure: &DirectoryStructure) -> Result<()> {
    for (name, children) in structure.iter() {
        let dir = root.join(name);
        fs::create_dir_all(&dir)?;
        debug!("Created directory: {}", dir.display());
        if !children.is_empty() {
            create_structure(&dir, children)?;
        }
    }
    Ok(())
}
