//! Structured errors
//!
//! Every failure is returned to the caller. A failed mutation never leaves
//! a collection or plugin partially modified.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const TYPE_CONSTRAINT: &str = "TYPE_CONSTRAINT";
    pub const MISSING_KEY: &str = "MISSING_KEY";
    pub const COMPONENT_NOT_FOUND: &str = "COMPONENT_NOT_FOUND";
    pub const ITEM_NOT_FOUND: &str = "ITEM_NOT_FOUND";
    pub const INDEX_OUT_OF_RANGE: &str = "INDEX_OUT_OF_RANGE";
}

/// Which part of a stored entry failed its type check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Element,
    Key,
    Value,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Element => write!(f, "element"),
            Slot::Key => write!(f, "key"),
            Slot::Value => write!(f, "value"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A value handed over at a dynamic boundary is not of the declared type.
    #[error("{slot} at position {position} must be of type {expected}")]
    TypeConstraintViolation {
        slot: Slot,
        expected: &'static str,
        position: usize,
    },

    #[error("no key '{0}' in the plugin's components")]
    MissingKey(String),

    #[error("no component '{name}' for key '{key}'")]
    ComponentNotFound { key: String, name: String },

    #[error("item not found in list of {expected}")]
    ItemNotFound { expected: &'static str },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn type_constraint<T: ?Sized>(slot: Slot, position: usize) -> Self {
        Self::TypeConstraintViolation {
            slot,
            expected: std::any::type_name::<T>(),
            position,
        }
    }

    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey(key.into())
    }

    pub fn component_not_found(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self::ComponentNotFound { key: key.into(), name: name.into() }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::TypeConstraintViolation { .. } => codes::TYPE_CONSTRAINT,
            Self::MissingKey(_) => codes::MISSING_KEY,
            Self::ComponentNotFound { .. } => codes::COMPONENT_NOT_FOUND,
            Self::ItemNotFound { .. } => codes::ITEM_NOT_FOUND,
            Self::IndexOutOfRange { .. } => codes::INDEX_OUT_OF_RANGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_constraint_names_expected_type() {
        let err = CoreError::type_constraint::<u32>(Slot::Element, 2);
        assert_eq!(err.code(), codes::TYPE_CONSTRAINT);
        assert_eq!(err.to_string(), "element at position 2 must be of type u32");
    }

    #[test]
    fn test_component_not_found_code_and_message() {
        let err = CoreError::component_not_found("cmds", "build");
        assert_eq!(err.code(), "COMPONENT_NOT_FOUND");
        assert_eq!(err.to_string(), "no component 'build' for key 'cmds'");
    }

    #[test]
    fn test_missing_key_message() {
        let err = CoreError::missing_key("assets");
        assert_eq!(err.to_string(), "no key 'assets' in the plugin's components");
    }
}
