use core::any::{Any, TypeId};
use core::{error, fmt};

use crate::info::{ArrayInfo, ObjectInfo, PrimitiveInfo, SequenceInfo};

// -----------------------------------------------------------------------------
// Type

/// The identity of a type: its [`TypeId`] and its path.
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    /// Create the [`Type`] of `T`.
    #[inline]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type path, e.g. `alloc::vec::Vec<u8>`.
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

// -----------------------------------------------------------------------------
// ReflectKind

/// The marshaling category of a type.
///
/// Each kind corresponds to one codec and one sub-trait of
/// [`Reflect`](crate::Reflect).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Primitive,
    Object,
    Sequence,
    Array,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive => f.pad("Primitive"),
            Self::Object => f.pad("Object"),
            Self::Sequence => f.pad("Sequence"),
            Self::Array => f.pad("Array"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Static information about how a type is marshaled.
///
/// Obtained through [`Typed::type_info`], [`DynamicTyped::reflect_type_info`]
/// or [`TypeRegistry::get`]. Every `TypeInfo` is built once and lives for the
/// rest of the process.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
/// [`TypeRegistry::get`]: crate::registry::TypeRegistry::get
#[derive(Debug)]
pub enum TypeInfo {
    Primitive(PrimitiveInfo),
    Object(ObjectInfo),
    Sequence(SequenceInfo),
    Array(ArrayInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_primitive: Primitive => PrimitiveInfo);
    impl_cast_method!(as_object: Object => ObjectInfo);
    impl_cast_method!(as_sequence: Sequence => SequenceInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);

    /// Returns the [`Type`] this information describes.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Primitive(info) => info.ty(),
            Self::Object(info) => info.ty(),
            Self::Sequence(info) => info.ty(),
            Self::Array(info) => info.ty(),
        }
    }

    /// Returns the [kind](ReflectKind) of this information.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Primitive(_) => ReflectKind::Primitive,
            Self::Object(_) => ReflectKind::Object,
            Self::Sequence(_) => ReflectKind::Sequence,
            Self::Array(_) => ReflectKind::Array,
        }
    }

    /// Returns the type path, e.g. `my_crate::Settings`.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty().path()
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty().id()
    }

    /// Check if this information describes `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty().is::<T>()
    }
}
