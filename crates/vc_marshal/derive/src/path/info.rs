use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn typed_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn object_info_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::info::ObjectInfo
    }
}

#[inline(always)]
pub(crate) fn member_info_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::info::MemberInfo
    }
}
