//! Input validation shared by the create and update paths.
//!
//! Both paths enforce the same title rule, so it lives here once instead of
//! being repeated per handler.

use thiserror::Error;

/// Minimum accepted title length, in characters.
pub const MIN_TITLE_LEN: usize = 5;

/// Validation failures for a task title. The display strings are the
/// user-visible messages returned by the API.
#[derive(Debug, Error, PartialEq)]
pub enum TitleError {
    #[error("Title cannot be empty")]
    Empty,

    #[error("Title length must be at least {MIN_TITLE_LEN}")]
    TooShort,
}

/// Validate a task title against the create/update rule.
///
/// # Examples
/// ```
/// use db::validation::{TitleError, validate_title};
///
/// assert!(validate_title("Buy groceries").is_ok());
/// assert_eq!(validate_title(""), Err(TitleError::Empty));
/// assert_eq!(validate_title("ab"), Err(TitleError::TooShort));
/// ```
pub fn validate_title(title: &str) -> Result<(), TitleError> {
    if title.is_empty() {
        return Err(TitleError::Empty);
    }
    if title.chars().count() < MIN_TITLE_LEN {
        return Err(TitleError::TooShort);
    }
    Ok(())
}
