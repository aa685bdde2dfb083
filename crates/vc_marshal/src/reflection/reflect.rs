use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTyped, ReflectKind};
use crate::reflection::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait of [`vc_marshal`](crate).
///
/// A `Reflect` value knows its static [`TypeInfo`](crate::info::TypeInfo)
/// (through [`DynamicTyped`]) and can be viewed as one of the kind traits,
/// which is all the codecs need to encode or decode it.
///
/// # Recommendations
///
/// Use [`#[derive(Marshal)]`](crate::derive::Marshal) for structs. The
/// primitive and container types are implemented in [`impls`](crate::impls).
///
/// # Manual Implementation
///
/// Both methods return the variant matching the type's [`ReflectKind`]:
///
/// ```rust, ignore
/// fn reflect_ref(&self) -> ReflectRef<'_> {
///     ReflectRef::Object(self)
/// }
///
/// fn reflect_mut(&mut self) -> ReflectMut<'_> {
///     ReflectMut::Object(self)
/// }
/// ```
///
/// See [`Typed`](crate::info::Typed) for a complete manual example.
pub trait Reflect: DynamicTyped + Any + Send + Sync {
    /// Casts this value to a reference of its kind trait.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Casts this value to a mutable reference of its kind trait.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Returns the [`ReflectKind`] of this value.
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.reflect_ref().kind()
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_marshal::Reflect;
    /// let x: &dyn Reflect = &10_i32;
    ///
    /// assert!(x.is::<i32>());
    /// ```
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        <dyn Any>::type_id(self) == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_marshal::Reflect;
    /// let x: &dyn Reflect = &String::from("abc");
    ///
    /// assert_eq!(x.downcast_ref::<String>().unwrap(), "abc");
    /// assert!(x.downcast_ref::<i32>().is_none());
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Returns the type path of the underlying value.
    #[inline]
    pub fn reflect_type_path(&self) -> &'static str {
        self.reflect_type_info().type_path()
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dyn Reflect<{}>", self.reflect_type_path())
    }
}
