//! Static type information consumed by the codecs.
//!
//! ## Menu
//!
//! - [`Type`]: A `TypeId` together with the type path, used for identification and messages.
//!
//! - [`TypeInfo`]: A enum describing how a type is marshaled, the inner is one of following:
//!     - [`PrimitiveInfo`]: Maps directly onto a document scalar (e.g. `f32`, `String`).
//!     - [`ObjectInfo`]: A type with an ordered member table, encoded as a document object.
//!     - [`SequenceInfo`]: A growable homogeneous container (e.g. `Vec<T>`).
//!     - [`ArrayInfo`]: A fixed-capacity homogeneous container (e.g. `[T; N]`).
//!
//! - [`MemberInfo`]: One member of an [`ObjectInfo`]: display name, [`MemberKind`],
//!   enum-encoding flag and the [`ValueAccessor`](crate::access::ValueAccessor) used to reach it.
//!
//! - [`ReflectKind`]: The category of a type, one of `Primitive`, `Object`, `Sequence` and `Array`.
//!
//! - [`Typed`]: A trait for obtaining the `&'static TypeInfo` of a type.
//!
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod container_info;
mod member_info;
mod object_info;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use container_info::{ArrayInfo, PrimitiveInfo, SequenceInfo};
pub use member_info::{MemberInfo, MemberKind};
pub use object_info::ObjectInfo;
pub use type_info::{ReflectKind, ReflectKindError, Type, TypeInfo};
pub use typed::{DynamicTyped, Typed};
