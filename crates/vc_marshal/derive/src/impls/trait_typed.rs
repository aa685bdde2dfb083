use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::MarshalMeta;

/// Generate implementation code for `Typed`.
///
/// `type_info_tokens` builds the `TypeInfo`, it runs once per concrete type.
pub(crate) fn impl_trait_typed(
    meta: &MarshalMeta,
    type_info_tokens: TokenStream,
    bounds: &[TokenStream],
) -> TokenStream {
    let vc_marshal_path = meta.vc_marshal_path();
    let typed_ = crate::path::typed_(vc_marshal_path);
    let type_info_ = crate::path::type_info_(vc_marshal_path);

    let inner_cell_tokens = if meta.impl_with_generic() {
        let info_cell = crate::path::generic_type_info_cell_(vc_marshal_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(vc_marshal_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(bounds);

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}
