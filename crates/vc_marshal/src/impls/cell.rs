//! Containers for static storage of type information.
//!
//! For non-generic types, [`NonGenericTypeInfoCell`] wraps a [`OnceLock`].
//!
//! For generic types, the `static CELL` inside `type_info` is shared by every
//! instantiation, so [`GenericTypeInfoCell`] keeps one entry per [`TypeId`].

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use hashbrown::HashMap;

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Container for static storage of non-generic type information.
///
/// See [`Typed`](crate::info::Typed) for an example.
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the `TypeInfo` stored in the cell.
    ///
    /// If the cell is empty, the value is generated from the given function.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeInfoCell

/// Container for static storage of type information with generics.
///
/// Each entry is leaked, so references stay valid for the rest of the process.
///
/// ## Example
///
/// ```
/// use vc_marshal::impls::GenericTypeInfoCell;
/// use vc_marshal::info::{PrimitiveInfo, TypeInfo, Typed};
///
/// struct Tagged<T>(T);
///
/// impl<T: Typed> Typed for Tagged<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::Primitive(PrimitiveInfo::new::<Self>()))
///     }
/// }
///
/// assert!(<Tagged<u8>>::type_info().type_is::<Tagged<u8>>());
/// assert!(<Tagged<i64>>::type_info().type_is::<Tagged<i64>>());
/// ```
pub struct GenericTypeInfoCell(OnceLock<RwLock<HashMap<TypeId, &'static TypeInfo>>>);

impl GenericTypeInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the `TypeInfo` of `G`, generating it from `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &'static TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &'static TypeInfo {
        let map = self.0.get_or_init(|| RwLock::new(HashMap::new()));

        let cached = map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied();
        if let Some(info) = cached {
            return info;
        }

        // `f` may recurse into other cells (or this one, for another
        // instantiation), so it must run without holding the lock. A thread
        // that loses the race drops its copy and returns the stored one.
        let info = f();
        *map.write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(info)))
    }
}
