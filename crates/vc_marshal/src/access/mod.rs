//! Uniform read/write access to the members of an object.
//!
//! A [`ValueAccessor`] hides how a member is stored. The codecs only ever
//! see a `&dyn Reflect` (or `&mut dyn Reflect`) inside a visitor callback,
//! whether the member is:
//!
//! - a field stored in the instance,
//! - a property backed by a getter and a setter,
//! - a shared field living in a `static` and reached through any instance.
//!
//! Enum-encoded members are presented as their underlying integer.
//!
//! The reference handed to the visitor only lives for the duration of the
//! call, so a member reference can never be retained past its owner.
//!
//! # Examples
//!
//! ```
//! use vc_marshal::{access::ValueAccessor, derive::Marshal};
//!
//! #[derive(Marshal)]
//! struct Point { x: f32, y: f32 }
//!
//! let accessor = ValueAccessor::field::<Point, f32>(|p| &p.y, |p| &mut p.y);
//!
//! let mut point = Point { x: 1.0, y: 2.0 };
//! accessor.write(&mut point, &mut |value| {
//!     *value.downcast_mut::<f32>().unwrap() = 5.0;
//!     true
//! }).unwrap();
//!
//! assert_eq!(point.y, 5.0);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod error;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::ValueAccessor;
pub use error::AccessError;
