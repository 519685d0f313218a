//! User input abstraction layer
//!
//! Every prompt returns `Ok(None)` when the user cancels (ESC or `q`), so
//! callers can end a session without treating it as an error.

use std::io;

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use watchroll::ui::{DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
/// let items = vec!["Any".to_string(), "Movie".to_string()];
/// if let Some(index) = input.prompt_select("Type of Media", &items, Some(0)).unwrap() {
///     println!("Picked {}", items[index]);
/// }
/// ```
pub trait UserInput {
    /// Prompt user to select one entry from a list
    ///
    /// # Returns
    ///
    /// * `Ok(Some(usize))` - Index of selected item
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>>;

    /// Prompt user to select any number of entries from a list
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Vec<usize>))` - Indices of selected items, possibly empty
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed
    fn prompt_multi_select(&self, prompt: &str, items: &[String]) -> Result<Option<Vec<usize>>>;

    /// Prompt user for confirmation (yes/no)
    ///
    /// # Returns
    ///
    /// * `Ok(Some(bool))` - User confirmed (true) or denied (false)
    /// * `Ok(None)` - User cancelled
    /// * `Err(_)` - Input operation failed
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A prompt answer that does not fit the prompt
    #[error("Invalid input: {0}")]
    Invalid(String),
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        use dialoguer::Select;

        let mut select = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items);

        if let Some(def) = default {
            select = select.default(def);
        }

        select
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_multi_select(&self, prompt: &str, items: &[String]) -> Result<Option<Vec<usize>>> {
        use dialoguer::MultiSelect;

        MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}
