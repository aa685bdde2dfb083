use core::fmt::Display;

use crate::Primitive;
use crate::info::Typed;

/// A fieldless enum encoded through its underlying integer type.
///
/// Enums are not [`Reflect`](crate::Reflect) and are never encoded by name.
/// A member of an enum type is declared enum-encoded (`#[marshal(enum_repr)]`)
/// and the codecs see the [`Repr`](ReprEnum::Repr) value instead.
///
/// Derive it with `#[derive(Marshal)]` on an enum carrying an explicit
/// integer `#[repr(..)]`.
///
/// # Examples
///
/// ```
/// use vc_marshal::{ReprEnum, derive::Marshal};
///
/// #[derive(Marshal, Debug, PartialEq)]
/// #[repr(i32)]
/// enum Filter {
///     Nearest = 0,
///     Linear = 1,
///     Cubic = 4,
/// }
///
/// assert_eq!(Filter::Cubic.to_repr(), 4);
/// assert_eq!(Filter::from_repr(1), Some(Filter::Linear));
/// assert_eq!(Filter::from_repr(2), None);
/// ```
///
/// An enum without an integer `#[repr(..)]` has no underlying integer:
///
/// ```compile_fail
/// use vc_marshal::derive::Marshal;
///
/// #[derive(Marshal)]
/// enum Filter {
///     Nearest,
///     Linear,
/// }
/// ```
///
/// Neither does one whose variants carry data:
///
/// ```compile_fail
/// use vc_marshal::derive::Marshal;
///
/// #[derive(Marshal)]
/// #[repr(u8)]
/// enum Filter {
///     Nearest = 0,
///     Linear(f32) = 1,
/// }
/// ```
pub trait ReprEnum: Sized + Send + Sync + 'static {
    /// The underlying integer type.
    type Repr: Primitive + Typed + Copy + Display;

    /// Returns the underlying integer of this variant.
    fn to_repr(&self) -> Self::Repr;

    /// Returns the variant with the given underlying integer, if any.
    fn from_repr(repr: Self::Repr) -> Option<Self>;
}
