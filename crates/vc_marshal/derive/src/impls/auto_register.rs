use crate::derive_data::MarshalMeta;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &MarshalMeta) -> proc_macro2::TokenStream {
    let Some(span) = meta.attrs().auto_register else {
        return crate::utils::empty();
    };

    // Invalid for generic types.
    if meta.impl_with_generic() {
        return crate::utils::empty();
    }

    let vc_marshal_path = meta.vc_marshal_path();
    let auto_register_ = crate::path::auto_register_(vc_marshal_path);
    let type_registry_ = crate::path::type_registry_(vc_marshal_path);
    let ident = meta.ident();

    quote::quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::AutoRegistration(#type_registry_::register::<#ident>)
        }
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &MarshalMeta) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
