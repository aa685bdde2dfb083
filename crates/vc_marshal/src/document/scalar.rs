use alloc::borrow::Cow;
use core::fmt;

// -----------------------------------------------------------------------------
// Scalar

/// A leaf value of a document.
///
/// Integers are split by sign so that every `u64` and every `i64` is exact.
/// Backends normalize non-negative integers freely between
/// [`Int`](Scalar::Int) and [`UInt`](Scalar::UInt); the primitive
/// conversions accept both.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Cow<'a, str>),
}

impl Scalar<'_> {
    /// Returns the [`NodeKind`] a node holding this scalar has.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Bool(_) => NodeKind::Bool,
            Self::Int(_) | Self::UInt(_) | Self::Float(_) => NodeKind::Number,
            Self::Str(_) => NodeKind::String,
        }
    }

    /// Converts into a scalar that owns its string.
    pub fn into_owned(self) -> Scalar<'static> {
        match self {
            Self::Bool(v) => Scalar::Bool(v),
            Self::Int(v) => Scalar::Int(v),
            Self::UInt(v) => Scalar::UInt(v),
            Self::Float(v) => Scalar::Float(v),
            Self::Str(v) => Scalar::Str(Cow::Owned(v.into_owned())),
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "bool `{v}`"),
            Self::Int(v) => write!(f, "number `{v}`"),
            Self::UInt(v) => write!(f, "number `{v}`"),
            Self::Float(v) => write!(f, "number `{v}`"),
            Self::Str(v) => write!(f, "string {v:?}"),
        }
    }
}

// -----------------------------------------------------------------------------
// NodeKind

/// The shape of a document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
    Blob,
}

impl NodeKind {
    /// Returns `true` for the leaf kinds, null excluded.
    #[inline]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Bool | Self::Number | Self::String)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Blob => "blob",
        })
    }
}
