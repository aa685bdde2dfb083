use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::MarshalMeta;

/// Generate implementation code for `Reflect`.
///
/// `reflect_kind_token` is the variant of `ReflectRef`/`ReflectMut` the
/// type is seen as.
pub(crate) fn impl_trait_reflect(
    meta: &MarshalMeta,
    reflect_kind_token: TokenStream,
    bounds: &[TokenStream],
) -> TokenStream {
    let vc_marshal_path = meta.vc_marshal_path();
    let reflect_ = crate::path::reflect_(vc_marshal_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_marshal_path);
    let reflect_mut_ = crate::path::reflect_mut_(vc_marshal_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(bounds);

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#reflect_kind_token(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#reflect_kind_token(self)
            }
        }
    }
}
