use crate::consts::{
    CATEGORY_MAX_LENGTH, DESCRIPTION_EXPAND_THRESHOLD, DESCRIPTION_MAX_LENGTH, TITLE_MAX_LENGTH,
};
use crate::prelude::*;

/// Outcome of a single form-field check: either the field passed, or it
/// was rejected with a message the form can show inline.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ValidationResult {
    #[display(fmt = "ok")]
    Valid,
    /// Rejected; the payload is the user-facing message
    #[display(fmt = "{_0}")]
    Invalid(String),
}

impl ValidationResult {
    /// True when the field passed
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The rejection message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Checks a task title: required, and at most [`TITLE_MAX_LENGTH`]
/// characters after trimming.
pub fn validate_title(title: &str) -> ValidationResult {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid("任务标题不能为空！");
    }
    if char_count(trimmed) > TITLE_MAX_LENGTH {
        return ValidationResult::invalid(format!("任务标题不能超过{TITLE_MAX_LENGTH}个字符！"));
    }
    ValidationResult::Valid
}

/// Checks a task description. The field is optional: empty and
/// whitespace-only values pass.
pub fn validate_description(description: &str) -> ValidationResult {
    if description.is_empty() {
        return ValidationResult::Valid;
    }
    let trimmed = description.trim();
    if !trimmed.is_empty() && char_count(trimmed) > DESCRIPTION_MAX_LENGTH {
        return ValidationResult::invalid(format!(
            "任务描述不能超过{DESCRIPTION_MAX_LENGTH}个字符！"
        ));
    }
    ValidationResult::Valid
}

/// Checks a category name. Empty is allowed; a non-empty value may not
/// exceed [`CATEGORY_MAX_LENGTH`] characters after trimming.
pub fn validate_category(category: &str) -> ValidationResult {
    let trimmed = category.trim();
    if !trimmed.is_empty() && char_count(trimmed) > CATEGORY_MAX_LENGTH {
        return ValidationResult::invalid(format!("分类名称不能超过{CATEGORY_MAX_LENGTH}个字符！"));
    }
    ValidationResult::Valid
}

/// Whether a description needs an expand/collapse control: longer than
/// [`DESCRIPTION_EXPAND_THRESHOLD`] characters, or spanning multiple lines.
pub fn should_show_expand_button(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    char_count(text) > DESCRIPTION_EXPAND_THRESHOLD || text.contains('\n')
}

/// Characters as the limits count them: Unicode scalar values, so CJK
/// text spends one unit per character, not one per byte.
fn char_count(text: &str) -> usize {
    text.chars().count()
}
