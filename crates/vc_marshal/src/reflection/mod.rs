//! The object-safe traits the codecs dispatch on.
//!
//! [`Reflect`] is implemented by every marshalable type and casts to exactly
//! one of the kind traits through [`ReflectRef`] and [`ReflectMut`]:
//!
//! - [`Primitive`]: a value that maps onto a document scalar.
//! - [`Object`]: a value with an ordered member table.
//! - [`Sequence`]: a growable homogeneous container.
//! - [`Array`]: a fixed-capacity homogeneous container.
//!
//! [`ReprEnum`] is separate: enums are never marshaled on their own, only as
//! enum-encoded members seen through their underlying integer.

// -----------------------------------------------------------------------------
// Modules

mod container;
mod kind;
mod object;
mod primitive;
mod reflect;
mod repr_enum;

// -----------------------------------------------------------------------------
// Exports

pub use container::{Array, Sequence};
pub use kind::{ReflectMut, ReflectRef};
pub use object::Object;
pub use primitive::Primitive;
pub use reflect::Reflect;
pub use repr_enum::ReprEnum;
