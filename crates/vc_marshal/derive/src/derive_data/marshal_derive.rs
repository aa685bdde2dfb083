use syn::{Data, DeriveInput, Fields};

use super::{MarshalEnum, MarshalMeta, MarshalStruct, TypeAttributes};

/// The shapes `#[derive(Marshal)]` accepts.
pub(crate) enum MarshalDerive<'a> {
    Struct(MarshalStruct<'a>),
    Enum(MarshalEnum<'a>),
}

impl<'a> MarshalDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.lifetime.apostrophe,
                "`Marshal` types must be `'static`, lifetime parameters are not supported",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => {
                    let meta = MarshalMeta::new(attrs, &input.ident, &input.generics);
                    MarshalStruct::new(meta, named).map(Self::Struct)
                }
                _ => Err(syn::Error::new(
                    input.ident.span(),
                    "`#[derive(Marshal)]` only supports structs with named fields",
                )),
            },
            Data::Enum(data) => {
                let meta = MarshalMeta::new(attrs, &input.ident, &input.generics);
                MarshalEnum::new(meta, &input.attrs, data).map(Self::Enum)
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "unions cannot derive `Marshal`",
            )),
        }
    }
}
