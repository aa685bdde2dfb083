use crate::info::ReflectKind;
use crate::reflection::{Array, Object, Primitive, Sequence};

/// An immutable view of a [`Reflect`](crate::Reflect) value as its kind trait.
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Primitive(&'a dyn Primitive),
    Object(&'a dyn Object),
    Sequence(&'a dyn Sequence),
    Array(&'a dyn Array),
}

/// A mutable view of a [`Reflect`](crate::Reflect) value as its kind trait.
pub enum ReflectMut<'a> {
    Primitive(&'a mut dyn Primitive),
    Object(&'a mut dyn Object),
    Sequence(&'a mut dyn Sequence),
    Array(&'a mut dyn Array),
}

impl ReflectRef<'_> {
    /// Returns the [`ReflectKind`] of the viewed value.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Primitive(_) => ReflectKind::Primitive,
            Self::Object(_) => ReflectKind::Object,
            Self::Sequence(_) => ReflectKind::Sequence,
            Self::Array(_) => ReflectKind::Array,
        }
    }
}

impl ReflectMut<'_> {
    /// Returns the [`ReflectKind`] of the viewed value.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Primitive(_) => ReflectKind::Primitive,
            Self::Object(_) => ReflectKind::Object,
            Self::Sequence(_) => ReflectKind::Sequence,
            Self::Array(_) => ReflectKind::Array,
        }
    }
}
