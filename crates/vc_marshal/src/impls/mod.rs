//! Implementations for foreign types, and utilities for implementing the
//! marshaling traits by hand.
//!
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//!
//! ## Implemented Menu
//!
//! - [`Primitive`]:
//!     - `bool`, `char`, `String`
//!     - `i8`-`i64`, `isize`, `u8`-`u64`, `usize`
//!     - `f32`, `f64`
//! - [`Sequence`]: `Vec<T>`, `T: Default`
//! - [`Array`]: `[T; N]`
//!
//! ## Scalar conversions
//!
//! - Integers accept any integral number in range, integral floats included.
//! - Floats accept any number.
//! - `char` is encoded as a one-character string, and also accepts an
//!   integer code point.
//! - `String` and `bool` accept only their own kind.
//!
//! [`Typed`]: crate::info::Typed
//! [`Primitive`]: crate::Primitive
//! [`Sequence`]: crate::Sequence
//! [`Array`]: crate::Array

// -----------------------------------------------------------------------------
// Modules

mod array;
mod cell;
mod primitive;
mod vec;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
