//! See [`Marshal`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static MARSHAL_ATTRIBUTE_NAME: &str = "marshal";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Marshal Derivation
///
/// `#[derive(Marshal)]` accepts two shapes of types.
///
/// For a struct with named fields it implements:
///
/// - `Typed`, holding an `ObjectInfo` with one member per field
/// - `Reflect`
/// - `Object`
///
/// For a fieldless enum with an explicit integer `#[repr(..)]` it implements
/// `ReprEnum`, so the enum can be stored as its underlying integer. Such an
/// enum is not a value on its own; mark the members holding it with
/// `enum_repr` (see below).
///
/// Tuple structs, unit structs, unions, enums with data and enums without an
/// integer `repr` are rejected at compile time.
///
/// Member types must implement `Reflect` and `Typed` themselves: the
/// primitives, `String`, `Vec<T>`, `[T; N]` and other derived types.
///
/// ## Member Order
///
/// Members are encoded in declaration order: fields first, then the
/// properties and shared members declared at the type level, in the order of
/// their attributes.
///
/// ## Field Attributes
///
/// ```rust, ignore
/// #[derive(Marshal)]
/// struct Window {
///     #[marshal(rename = "w")]
///     width: u32,
///     #[marshal(skip)]
///     cache: Vec<u8>,
///     #[marshal(enum_repr)]
///     mode: WindowMode,
/// }
/// ```
///
/// - `rename = "..."`: the document key, defaults to the field ident.
/// - `skip`: the field is not a member and is neither read nor written.
/// - `enum_repr`: the field is a `ReprEnum` and is encoded as its integer.
///
/// ## Properties
///
/// A property is a member backed by a getter `fn(&Self) -> V` and a setter
/// `fn(&mut Self, V)`. A bare ident names a method of the type, any other path
/// is used as written.
///
/// ```rust, ignore
/// #[derive(Marshal)]
/// #[marshal(property(name = "title", get = title, set = set_title))]
/// #[marshal(property(name = "mode", get = mode, set = set_mode, enum_repr))]
/// struct Window { /* ... */ }
/// ```
///
/// Decoding a property reads the current value through the getter, decodes
/// into it, then always hands it to the setter.
///
/// ## Shared Members
///
/// A shared member lives in a `static RwLock<V>` and is reached through any
/// instance. Writing it through one instance changes it for all of them.
///
/// ```rust, ignore
/// static LAUNCHES: RwLock<u32> = RwLock::new(0);
///
/// #[derive(Marshal)]
/// #[marshal(shared(name = "launches", storage = LAUNCHES))]
/// struct Window { /* ... */ }
/// ```
///
/// `enum_repr` may be added as for properties.
///
/// ## Auto Registration
///
/// `#[marshal(auto_register)]` submits the type so that
/// `TypeRegistry::auto_register` picks it up.
///
/// ```rust, ignore
/// #[derive(Marshal)]
/// #[marshal(auto_register)]
/// struct Window { /* ... */ }
/// ```
///
/// This attribute has no effect on generic types, as we cannot determine
/// which concrete types will be instantiated. It is a no-op when the
/// `auto_register` feature is disabled.
///
/// ## Errors
///
/// These shapes are compile errors:
///
/// - two members with the same name after renaming, including a field named
///   like a `property(..)` or `shared(..)` declaration;
/// - tuple structs, unit structs and unions;
/// - structs with lifetime parameters;
/// - enums without an integer `#[repr(..)]`, and enums with data-carrying
///   variants.
///
/// Each one is shown as a `compile_fail` example on `vc_marshal::Object` and
/// `vc_marshal::ReprEnum`.
#[proc_macro_derive(Marshal, attributes(marshal))]
pub fn derive_marshal(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::MarshalDerive::from_input(&ast) {
        Ok(derive_data::MarshalDerive::Struct(data)) => impls::impl_object(&data),
        Ok(derive_data::MarshalDerive::Enum(data)) => impls::impl_repr_enum(&data),
        Err(err) => err.into_compile_error(),
    }
    .into()
}
