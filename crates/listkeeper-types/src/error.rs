use thiserror::Error;

/// Which kind of name a validation failure is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    List,
    Item,
}

/// A proposed list or item name was rejected.
///
/// The Display text is what the visitor sees in the error flash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", invalid_length_message(.0))]
    InvalidLength(NameKind),

    #[error("{}", duplicate_name_message(.0))]
    DuplicateName(NameKind),
}

fn invalid_length_message(kind: &NameKind) -> &'static str {
    match kind {
        NameKind::List => "The list name must be between 1 and 100 characters.",
        NameKind::Item => "The list item must be between 1 and 100 characters.",
    }
}

fn duplicate_name_message(kind: &NameKind) -> &'static str {
    match kind {
        NameKind::List => "List name must be unique",
        NameKind::Item => "List item must be unique",
    }
}

/// Errors from list and item operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("list {0} not found")]
    ListNotFound(usize),

    #[error("item {item} not found in list {list}")]
    ItemNotFound { list: usize, item: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ListError {
    /// True for out-of-range positions, as opposed to rejected input.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ListError::ListNotFound(_) | ListError::ItemNotFound { .. })
    }
}

/// Errors from session cookie handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("malformed session cookie")]
    MalformedCookie,

    #[error("session cookie signature mismatch")]
    BadSignature,

    #[error("invalid session signing key: {0}")]
    InvalidKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::InvalidLength(NameKind::List).to_string(),
            "The list name must be between 1 and 100 characters."
        );
        assert_eq!(
            ValidationError::DuplicateName(NameKind::List).to_string(),
            "List name must be unique"
        );
        assert_eq!(
            ValidationError::InvalidLength(NameKind::Item).to_string(),
            "The list item must be between 1 and 100 characters."
        );
        assert_eq!(
            ValidationError::DuplicateName(NameKind::Item).to_string(),
            "List item must be unique"
        );
    }

    #[test]
    fn test_list_error_wraps_validation_transparently() {
        let err = ListError::from(ValidationError::DuplicateName(NameKind::List));
        assert_eq!(err.to_string(), "List name must be unique");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_display() {
        let err = ListError::ItemNotFound { list: 2, item: 7 };
        assert_eq!(err.to_string(), "item 7 not found in list 2");
        assert!(err.is_not_found());
        assert!(ListError::ListNotFound(0).is_not_found());
    }
}
