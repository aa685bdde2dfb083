use alloc::string::String;

use thiserror::Error;

use crate::access::AccessError;
use crate::document::NodeKind;
use crate::info::ReflectKind;

// -----------------------------------------------------------------------------
// MarshalError

/// A recoverable failure at one place of a value.
///
/// None of these abort an encode or decode; each one is recorded as a
/// [`Warning`](crate::codec::Warning) and turns the overall success to `false`.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MarshalError {
    /// The document object has no key for a member. The member keeps its value.
    #[error("missing member `{name}`")]
    MissingField { name: &'static str },
    /// The scalar kind or range does not fit the target primitive.
    #[error("`{expected}` cannot hold {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
    /// The node's shape does not match the target's kind.
    #[error("`{type_path}` is {expected} but the node is {found}")]
    StructuralMismatch {
        type_path: &'static str,
        expected: ReflectKind,
        found: NodeKind,
    },
    /// A document array is longer than the fixed array it is read into.
    #[error("{len} items do not fit `{type_path}` (capacity {capacity}), extra items ignored")]
    TruncatedArray {
        type_path: &'static str,
        capacity: usize,
        len: usize,
    },
    /// The integer read for an enum-encoded member names no variant.
    #[error("`{value}` is not a valid discriminant of `{enum_path}`")]
    InvalidDiscriminant {
        enum_path: &'static str,
        value: String,
    },
    /// The document backend has no node for the value.
    #[error("`{type_path}` value {value} has no document representation")]
    Unrepresentable {
        type_path: &'static str,
        value: String,
    },
    #[error(transparent)]
    Access(AccessError),
}

impl From<AccessError> for MarshalError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::InvalidDiscriminant { enum_path, value } => {
                Self::InvalidDiscriminant { enum_path, value }
            }
            err => Self::Access(err),
        }
    }
}

// -----------------------------------------------------------------------------
// ErrorCategory

/// The failure classes a caller can react to.
///
/// A type that is neither primitive, object nor container cannot implement
/// [`Reflect`](crate::Reflect), so unsupported types never reach the codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// An expected document key is absent.
    MissingField,
    /// A scalar does not fit the target value.
    TypeMismatch,
    /// A node or container has the wrong shape or size.
    StructuralMismatch,
}

impl MarshalError {
    /// Returns the [`ErrorCategory`] of this error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingField { .. } => ErrorCategory::MissingField,
            Self::TypeMismatch { .. }
            | Self::InvalidDiscriminant { .. }
            | Self::Unrepresentable { .. } => ErrorCategory::TypeMismatch,
            Self::StructuralMismatch { .. } | Self::TruncatedArray { .. } | Self::Access(_) => {
                ErrorCategory::StructuralMismatch
            }
        }
    }
}
