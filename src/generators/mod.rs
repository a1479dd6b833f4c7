//! Template composition for generated projects.
//! One generator per artifact; every generator is a pure function of the
//! project configuration, and `compose` assembles the complete file set.

mod manifest;
mod meta;
mod source;

pub use manifest::{package_manifest, typescript_config};
pub use meta::{env_file, gitignore, readme, TOKEN_ENV_KEY};
pub use source::{
    entry_point, interaction_event, logger_util, ping_command, ready_event,
};

use std::path::PathBuf;

use crate::config::{InteractionHandling, Language, ProjectConfig};
use crate::error::Result;

/// Content of a generated file.
/// Structured values are pretty-printed when the file is written.
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    Text(String),
    Json(serde_json::Value),
}

/// A file to be written below the target root. The path is always relative.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: FileContent,
}

impl GeneratedFile {
    pub fn text(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: FileContent::Text(content.into()) }
    }

    pub fn json(path: impl Into<PathBuf>, value: serde_json::Value) -> Self {
        Self { path: path.into(), content: FileContent::Json(value) }
    }

    /// Renders the content to the exact bytes written to disk.
    ///
    /// # Errors
    /// * `Error::JsonError` if structured content cannot be serialized
    pub fn rendered(&self) -> Result<String> {
        match &self.content {
            FileContent::Text(text) => Ok(text.clone()),
            FileContent::Json(value) => {
                let mut out = serde_json::to_string_pretty(value)?;
                out.push('\n');
                Ok(out)
            }
        }
    }
}

/// Produces the complete, consistent file set for a configuration.
///
/// Conditional artifacts are registered per configuration variant; a
/// disabled variant leaves no file behind, and no other generated file
/// references it.
pub fn compose(config: &ProjectConfig) -> Result<Vec<GeneratedFile>> {
    let mut files = vec![
        package_manifest(config)?,
        entry_point(config),
        ping_command(config),
        ready_event(config),
        logger_util(config),
        env_file(),
        gitignore(),
        readme(config),
    ];

    if let Language::TypeScript = config.language {
        files.push(typescript_config()?);
    }

    match config.interactions {
        InteractionHandling::Enabled => files.push(interaction_event(config)),
        InteractionHandling::Disabled => {}
    }

    Ok(files)
}
