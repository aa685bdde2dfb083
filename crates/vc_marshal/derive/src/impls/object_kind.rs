use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{MarshalStruct, MemberDecl, MemberSource, StructField, method_tokens};
use crate::impls::{get_auto_register_impl, impl_trait_reflect, impl_trait_typed};

/// Generate `Typed`, `Reflect` and `Object` for a struct with named fields.
pub(crate) fn impl_object(data: &MarshalStruct) -> TokenStream {
    let meta = data.meta();
    let vc_marshal_path = meta.vc_marshal_path();

    let reflect_ = crate::path::reflect_(vc_marshal_path);
    let typed_ = crate::path::typed_(vc_marshal_path);
    let object_ = crate::path::object_(vc_marshal_path);
    let repr_enum_ = crate::path::repr_enum_(vc_marshal_path);
    let type_info_ = crate::path::type_info_(vc_marshal_path);
    let object_info_ = crate::path::object_info_(vc_marshal_path);
    let member_info_ = crate::path::member_info_(vc_marshal_path);

    // Field types of generic structs must be usable as members.
    let bounds: Vec<TokenStream> = if meta.impl_with_generic() {
        data.fields()
            .iter()
            .map(|field| {
                let ty = field.ty;
                if field.enum_repr {
                    quote!(#ty: #repr_enum_)
                } else {
                    quote!(#ty: #reflect_ + #typed_)
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let members = data
        .fields()
        .iter()
        .map(|field| field_member_tokens(field, &member_info_))
        .chain(
            meta.attrs()
                .members
                .iter()
                .map(|decl| decl_member_tokens(decl, &member_info_)),
        );

    let type_info_tokens = quote! {
        #type_info_::Object(#object_info_::new::<Self>([
            #(#members,)*
        ]))
    };

    let typed_impl = impl_trait_typed(meta, type_info_tokens, &bounds);
    let reflect_impl = impl_trait_reflect(meta, quote!(Object), &bounds);
    let auto_register_impl = get_auto_register_impl(meta);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&bounds);

    quote! {
        #typed_impl

        #reflect_impl

        impl #impl_generics #object_ for #ident #ty_generics #where_clause {
            fn object_info(&self) -> &'static #object_info_ {
                match <Self as #typed_>::type_info() {
                    #type_info_::Object(info) => info,
                    _ => ::core::unreachable!("derived `Typed` always describes an object"),
                }
            }
        }

        #auto_register_impl
    }
}

/// `MemberInfo::field::<Self, Ty>("name", |owner| &owner.f, |owner| &mut owner.f)`
fn field_member_tokens(field: &StructField, member_info_: &TokenStream) -> TokenStream {
    let StructField {
        ident,
        ty,
        name,
        enum_repr,
    } = field;

    let constructor = if *enum_repr {
        quote!(enum_field)
    } else {
        quote!(field)
    };

    quote! {
        #member_info_::#constructor::<Self, #ty>(
            #name,
            |owner| &owner.#ident,
            |owner| &mut owner.#ident,
        )
    }
}

/// `MemberInfo::property::<Self, _>(..)` or `MemberInfo::shared(..)`
fn decl_member_tokens(decl: &MemberDecl, member_info_: &TokenStream) -> TokenStream {
    let name = &decl.name;

    match &decl.source {
        MemberSource::Property { get, set } => {
            let constructor = if decl.enum_repr {
                quote!(enum_property)
            } else {
                quote!(property)
            };
            let get = method_tokens(get);
            let set = method_tokens(set);
            quote! {
                #member_info_::#constructor::<Self, _>(#name, #get, #set)
            }
        }
        MemberSource::Shared { storage } => {
            let constructor = if decl.enum_repr {
                quote!(enum_shared)
            } else {
                quote!(shared)
            };
            quote! {
                #member_info_::#constructor(#name, &#storage)
            }
        }
    }
}
