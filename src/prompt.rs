//! User interaction for create-vanilla.
//! Collects the project name, package name and TypeScript choice, asking
//! only the questions the command line left open.

use crate::config::ProjectOptions;
use crate::constants::DEFAULT_PROJECT_NAME;
use crate::error::{Error, Result};
use crate::validation::{is_valid_package_name, to_valid_package_name};
use dialoguer::{Confirm, Input};
use std::io;

/// Validation callback for text answers.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Source of answers to interactive questions.
pub trait Prompter {
    /// Asks for a line of text, offering `default`.
    fn input(&self, prompt: &str, default: &str, validator: Option<Validator<'_>>) -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn map_dialoguer_error(err: dialoguer::Error) -> Error {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => Error::CancelledError,
        other => Error::PromptError(other.to_string()),
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str, validator: Option<Validator<'_>>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).default(default.to_string());
        if let Some(validate) = validator {
            input = input.validate_with(move |value: &String| validate(value.as_str()));
        }

        input.interact_text().map_err(map_dialoguer_error)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(map_dialoguer_error)?
            .ok_or(Error::CancelledError)
    }
}

/// Choices already made on the command line.
#[derive(Debug, Clone, Default)]
pub struct Presets {
    /// Project directory argument
    pub project_dir: Option<String>,
    /// `--typescript` / `--ts`
    pub typescript: bool,
    /// `--default`
    pub default: bool,
}

impl Presets {
    /// Whether a feature flag was given, which skips the feature questions.
    pub fn feature_flags_used(&self) -> bool {
        self.typescript || self.default
    }
}

fn validate_package_name(name: &str) -> std::result::Result<(), String> {
    if is_valid_package_name(name) {
        Ok(())
    } else {
        Err("Invalid package.json name".to_string())
    }
}

/// Resolves the project options from presets and, where needed, prompts.
///
/// # Errors
/// * `Error::CancelledError` if the user interrupts a prompt
/// * `Error::ValidationError` if the package name answer is invalid
/// * `Error::PromptError` if the terminal cannot be used
pub fn resolve_options(presets: &Presets, prompter: &dyn Prompter) -> Result<ProjectOptions> {
    let default_project_name =
        presets.project_dir.clone().unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

    let project_name = match &presets.project_dir {
        Some(dir) => dir.clone(),
        None => {
            let answer = prompter.input("Project name:", &default_project_name, None)?;
            let answer = answer.trim();
            if answer.is_empty() {
                default_project_name
            } else {
                answer.to_string()
            }
        }
    };

    let package_name = if is_valid_package_name(&project_name) {
        project_name.clone()
    } else {
        let answer = prompter.input(
            "Package name:",
            &to_valid_package_name(&project_name),
            Some(&validate_package_name),
        )?;
        validate_package_name(&answer).map_err(Error::ValidationError)?;
        answer
    };

    let needs_typescript = if presets.feature_flags_used() {
        presets.typescript
    } else {
        prompter.confirm("Add TypeScript?", false)?
    };

    Ok(ProjectOptions { project_name, package_name, needs_typescript })
}
