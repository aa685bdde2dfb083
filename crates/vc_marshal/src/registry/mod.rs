//! A process-wide index of marshalable types.
//!
//! The codecs never need the registry: every value carries its own
//! [`TypeInfo`]. The registry serves code that only has a [`TypeId`] or a
//! type path, e.g. a loader choosing the target type of a document.
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`].
//!
//! We use the [`inventory`] crate to implement static registration.
//! Not all platforms support it, although the major ones do.
//!
//! [`TypeInfo`]: crate::info::TypeInfo
//! [`TypeId`]: core::any::TypeId
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_registry::TypeRegistry;
