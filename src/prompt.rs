//! User input and interaction handling.
//! The `Prompter` trait is the seam between answer collection and the
//! terminal; the dialoguer implementation is the one wired up in `main`.

use dialoguer::{Confirm, Input, Select};

use crate::error::{Error, Result};

/// Interactive question interface used while collecting the configuration.
pub trait Prompter {
    /// Asks for a free-form text value with a default.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;

    /// Asks the user to pick one of `items`; returns the selected index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Asks a yes/no question with a default.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Prompter backed by dialoguer's terminal widgets.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
