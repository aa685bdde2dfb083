use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::MarshalEnum;

/// Generate implementation code for `ReprEnum`.
pub(crate) fn impl_repr_enum(data: &MarshalEnum) -> TokenStream {
    let meta = data.meta();
    let vc_marshal_path = meta.vc_marshal_path();
    let repr_enum_ = crate::path::repr_enum_(vc_marshal_path);
    let option_ = {
        let macro_exports_ = crate::path::macro_exports_(vc_marshal_path);
        quote!(#macro_exports_::Option)
    };

    let ident = meta.ident();
    let repr = data.repr();

    let to_repr_arms = data.variants().iter().map(|variant| {
        quote! {
            Self::#variant => Self::#variant as #repr,
        }
    });

    let from_repr_checks = data.variants().iter().map(|variant| {
        quote! {
            if repr == Self::#variant as #repr {
                return #option_::Some(Self::#variant);
            }
        }
    });

    quote! {
        impl #repr_enum_ for #ident {
            type Repr = #repr;

            #[inline]
            fn to_repr(&self) -> #repr {
                match self {
                    #(#to_repr_arms)*
                }
            }

            fn from_repr(repr: #repr) -> #option_<Self> {
                #(#from_repr_checks)*
                #option_::None
            }
        }
    }
}
