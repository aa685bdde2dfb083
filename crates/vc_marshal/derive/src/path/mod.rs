//! Paths of the runtime items named by generated code.
//!
//! Kept in one place so that moving an item in `vc_marshal` only touches
//! this module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_marshal` crate.
///
/// 1. For crates that depend on `vc_marshal`, `::vc_marshal` is returned.
/// 2. For crates that depend on `vc_persist`, `::vc_persist::marshal` is returned.
/// 3. For other situations, `::vc_marshal` is returned, but this may be incorrect.
///
/// This reads the caller's manifest, so the path is resolved once per
/// invocation and passed around.
pub(crate) fn vc_marshal() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_marshal"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;

#[inline(always)]
pub(crate) fn macro_exports_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::__macro_exports
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::__macro_exports::auto_register
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn type_registry_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::registry::TypeRegistry
    }
}

#[inline(always)]
pub(crate) fn reflect_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn object_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::Object
    }
}

#[inline(always)]
pub(crate) fn repr_enum_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::ReprEnum
    }
}
