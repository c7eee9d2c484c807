//! Name validation for lists and items.
//!
//! Both checks are pure: they look at the proposed name and the siblings it
//! must not collide with, and report the first rule it breaks. Length is
//! checked before uniqueness.

use listkeeper_types::error::{NameKind, ValidationError};
use listkeeper_types::list::{MAX_NAME_CHARS, MIN_NAME_CHARS, TodoItem, TodoList};

/// Check a proposed list name against the lists it must be distinct from.
pub fn validate_list_name<'a>(
    name: &str,
    existing: impl IntoIterator<Item = &'a TodoList>,
) -> Result<(), ValidationError> {
    check_length(name, NameKind::List)?;
    if existing.into_iter().any(|list| list.name == name) {
        return Err(ValidationError::DuplicateName(NameKind::List));
    }
    Ok(())
}

/// Check a proposed item name against the items already in its list.
pub fn validate_item_name<'a>(
    name: &str,
    existing: impl IntoIterator<Item = &'a TodoItem>,
) -> Result<(), ValidationError> {
    check_length(name, NameKind::Item)?;
    if existing.into_iter().any(|item| item.name == name) {
        return Err(ValidationError::DuplicateName(NameKind::Item));
    }
    Ok(())
}

// Counted in chars so multi-byte names get the same 100-character budget.
fn check_length(name: &str, kind: NameKind) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if (MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLength(kind))
    }
}
