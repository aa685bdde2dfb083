use core::any::Any;

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to the marshaling information of a type.
///
/// Implemented by [`#[derive(Marshal)]`](crate::derive::Marshal) and by this
/// crate for the primitive and container types.
///
/// # Manually Impl
///
/// A hand-written implementation is the manual registration path: build the
/// member table once inside a [`NonGenericTypeInfoCell`].
///
/// ```
/// use std::sync::RwLock;
/// use vc_marshal::{Object, Reflect, ReflectMut, ReflectRef};
/// use vc_marshal::impls::NonGenericTypeInfoCell;
/// use vc_marshal::info::{MemberInfo, ObjectInfo, TypeInfo, Typed};
///
/// static LAUNCHES: RwLock<u32> = RwLock::new(0);
///
/// #[derive(Default)]
/// struct Window {
///     width: u16,
///     title: String,
/// }
///
/// impl Window {
///     fn title(&self) -> String { self.title.clone() }
///     fn set_title(&mut self, title: String) { self.title = title; }
/// }
///
/// impl Typed for Window {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Object(ObjectInfo::new::<Self>([
///             MemberInfo::field::<Self, u16>("width", |w| &w.width, |w| &mut w.width),
///             MemberInfo::property::<Self, String>("title", Window::title, Window::set_title),
///             MemberInfo::shared("launches", &LAUNCHES),
///         ])))
///     }
/// }
///
/// impl Reflect for Window {
///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Object(self) }
///     fn reflect_mut(&mut self) -> ReflectMut<'_> { ReflectMut::Object(self) }
/// }
///
/// impl Object for Window {
///     fn object_info(&self) -> &'static ObjectInfo {
///         Self::type_info().as_object().expect("`Window` is an object")
///     }
/// }
///
/// let info = Window::type_info().as_object().unwrap();
/// assert_eq!(info.member_names(), ["width", "title", "launches"]);
/// ```
///
/// For generic types use [`GenericTypeInfoCell`] instead, which keeps one
/// entry per instantiated type.
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: Any {
    /// A static accessor to the type's marshaling information.
    ///
    /// Note: Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`].
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
