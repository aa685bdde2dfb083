#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::vc_marshal::...` paths; inside this crate (unit tests
// included) that only resolves through this alias.
extern crate self as vc_marshal;

// -----------------------------------------------------------------------------
// no_std support

// `RwLock` and `OnceLock` back shared members and type info cells.
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod codec;
pub mod document;
pub mod impls;
pub mod info;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use codec::{Marshaler, deserialize, serialize};
pub use reflection::{Array, Object, Primitive, ReprEnum, Sequence};
pub use reflection::{Reflect, ReflectMut, ReflectRef};
pub use vc_marshal_derive as derive;
