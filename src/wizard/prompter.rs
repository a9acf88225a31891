//! Terminal prompts behind a trait so the wizard can be scripted in tests.

use dialoguer::{Confirm, Editor, Input, MultiSelect, Select};

use crate::error::WizardError;

/// Interactive questions asked by the wizard.
///
/// `Ok(None)` means the user cancelled the prompt (Esc / q).
pub trait Prompter {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>, WizardError>;

    fn multi_select(&self, prompt: &str, items: &[String]) -> Result<Option<Vec<usize>>, WizardError>;

    fn input(&self, prompt: &str, initial: &str) -> Result<String, WizardError>;

    /// Offer to edit `initial`; `Ok(None)` keeps it unchanged.
    fn edit(&self, prompt: &str, initial: &str) -> Result<Option<String>, WizardError>;

    fn confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>, WizardError>;
}

/// Prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

fn prompt_error(e: impl std::fmt::Display) -> WizardError {
    WizardError::Prompt(e.to_string())
}

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>, WizardError> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(prompt_error)
    }

    fn multi_select(&self, prompt: &str, items: &[String]) -> Result<Option<Vec<usize>>, WizardError> {
        if items.is_empty() {
            return Ok(Some(Vec::new()));
        }
        MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .interact_opt()
            .map_err(prompt_error)
    }

    fn input(&self, prompt: &str, initial: &str) -> Result<String, WizardError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn edit(&self, prompt: &str, initial: &str) -> Result<Option<String>, WizardError> {
        println!("{prompt}:\n{initial}");

        let wants_edit = Confirm::new()
            .with_prompt("Edit the body in your editor?")
            .default(false)
            .interact()
            .map_err(prompt_error)?;

        if !wants_edit {
            return Ok(None);
        }

        Editor::new()
            .extension(".md")
            .edit(initial)
            .map_err(prompt_error)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>, WizardError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(prompt_error)
    }
}
