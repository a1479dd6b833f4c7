//! Project configuration for the generator.
//! The configuration is built once from the command line and prompt answers;
//! every generator reads it and nothing mutates it afterwards.

use std::fmt;

use crate::error::Result;
use crate::prompt::Prompter;

/// Project name used when the user accepts the default.
pub const DEFAULT_PROJECT_NAME: &str = "my-discord-bot";

/// Language variant of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    /// Selectable variants, in prompt order.
    pub const CHOICES: [Language; 2] = [Language::JavaScript, Language::TypeScript];

    /// Source file extension shared by every generated file and import path.
    pub fn file_ext(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
        }
    }

    /// Entry point the manifest's `main` field and `start` script refer to.
    /// The TypeScript variant runs compiled output.
    pub fn entry_point(&self) -> &'static str {
        match self {
            Language::JavaScript => "src/index.js",
            Language::TypeScript => "dist/index.js",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::JavaScript => write!(f, "JavaScript"),
            Language::TypeScript => write!(f, "TypeScript"),
        }
    }
}

/// Whether the project includes the slash command interaction handler.
///
/// Modeled as a variant rather than a raw boolean so the conditional
/// generators register off the variant itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionHandling {
    Enabled,
    Disabled,
}

impl InteractionHandling {
    pub fn is_enabled(&self) -> bool {
        matches!(self, InteractionHandling::Enabled)
    }
}

impl From<bool> for InteractionHandling {
    fn from(value: bool) -> Self {
        if value {
            InteractionHandling::Enabled
        } else {
            InteractionHandling::Disabled
        }
    }
}

/// Immutable set of answers driving the generators.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Manifest name and display name of the project
    pub project_name: String,
    /// Language variant of the generated sources
    pub language: Language,
    /// Slash command interaction handler inclusion
    pub interactions: InteractionHandling,
}

/// Collects the project configuration, prompting for whatever the command
/// line did not provide.
///
/// # Arguments
/// * `prompt` - Prompter implementation for user interaction
/// * `project_directory` - Optional project name from the command line;
///   when present, the name question is skipped entirely
///
/// # Errors
/// * `Error::PromptError` if an interaction fails
pub fn collect_config(
    prompt: &dyn Prompter,
    project_directory: Option<String>,
) -> Result<ProjectConfig> {
    let project_name = match project_directory {
        Some(name) => name,
        None => prompt.input("What is your project named?", DEFAULT_PROJECT_NAME)?,
    };

    let choices: Vec<String> =
        Language::CHOICES.iter().map(|language| language.to_string()).collect();
    let selection =
        prompt.select("Which language would you like to use?", &choices, 0)?;
    let language = Language::CHOICES[selection];

    let use_interactions =
        prompt.confirm("Would you like to include slash commands support?", true)?;

    Ok(ProjectConfig { project_name, language, interactions: use_interactions.into() })
}
