use alloc::string::String;

use thiserror::Error;

/// An error produced while reaching a member through a
/// [`ValueAccessor`](super::ValueAccessor).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// The owner passed to the accessor is not the type the member belongs to.
    #[error("member of `{expected}` accessed through a `{found}`")]
    OwnerMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// The underlying integer does not name any variant of the enum.
    #[error("`{value}` is not a valid discriminant of `{enum_path}`")]
    InvalidDiscriminant {
        enum_path: &'static str,
        value: String,
    },
}
