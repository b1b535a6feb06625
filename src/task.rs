use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_CATEGORY, ValidationResult, validate_category, validate_description, validate_title,
};

/// A new task as captured by the create form, before submission.
/// Field checks mirror what the backend enforces, so a draft that
/// validates here is not bounced by the server for length reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Falls back to [`DEFAULT_CATEGORY`] when absent
    #[serde(default = "default_category")]
    pub category: String,
}

/// A partial update to an existing task. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Completion toggle; carried as data, never validated here
    #[serde(default)]
    pub is_completed: Option<bool>,
}

/// Error type for draft and patch validation.
/// The payload is the same user-facing message the field validators
/// produce, tagged with the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// Title was rejected.
    #[error("{0}")]
    Title(String),

    /// Description was rejected.
    #[error("{0}")]
    Description(String),

    /// Category was rejected.
    #[error("{0}")]
    Category(String),
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_owned()
}

fn check(result: ValidationResult, reject: fn(String) -> DraftError) -> Result<(), DraftError> {
    match result {
        ValidationResult::Valid => Ok(()),
        ValidationResult::Invalid(message) => Err(reject(message)),
    }
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            category: default_category(),
        }
    }
}

impl TaskDraft {
    /// Starts a draft with the given title and the default category
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Runs every field check, title first.
    ///
    /// # Errors
    /// Returns `DraftError` for the first rejected field.
    pub fn validate(&self) -> Result<(), DraftError> {
        check(validate_title(&self.title), DraftError::Title)?;
        if let Some(description) = &self.description {
            check(validate_description(description), DraftError::Description)?;
        }
        check(validate_category(&self.category), DraftError::Category)?;
        Ok(())
    }
}

impl TaskPatch {
    /// True when the patch touches nothing
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.is_completed.is_none()
    }

    /// Runs field checks on the fields the patch actually sets.
    ///
    /// # Errors
    /// Returns `DraftError` for the first rejected field.
    pub fn validate(&self) -> Result<(), DraftError> {
        if let Some(title) = &self.title {
            check(validate_title(title), DraftError::Title)?;
        }
        if let Some(description) = &self.description {
            check(validate_description(description), DraftError::Description)?;
        }
        if let Some(category) = &self.category {
            check(validate_category(category), DraftError::Category)?;
        }
        Ok(())
    }
}
