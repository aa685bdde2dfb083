use syn::{Attribute, DataEnum, Fields, Ident, spanned::Spanned};

use super::MarshalMeta;
use crate::MARSHAL_ATTRIBUTE_NAME;

/// The `repr` types that have a primitive counterpart.
const INTEGER_REPRS: &[&str] = &[
    "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

/// A fieldless enum with an explicit integer representation.
pub(crate) struct MarshalEnum<'a> {
    meta: MarshalMeta<'a>,
    repr: Ident,
    variants: Vec<&'a Ident>,
}

impl<'a> MarshalEnum<'a> {
    pub fn new(
        meta: MarshalMeta<'a>,
        attrs: &'a [Attribute],
        data: &'a DataEnum,
    ) -> syn::Result<Self> {
        if let Some(span) = meta.attrs().first_span {
            return Err(syn::Error::new(
                span,
                "`#[marshal(..)]` is not supported on enums",
            ));
        }
        if meta.impl_with_generic() {
            return Err(syn::Error::new(
                meta.ident().span(),
                "generic enums cannot derive `Marshal`",
            ));
        }

        let repr = find_integer_repr(attrs)?.ok_or_else(|| {
            syn::Error::new(
                meta.ident().span(),
                "`#[derive(Marshal)]` on an enum needs an integer `#[repr(..)]`, such as `#[repr(u8)]`",
            )
        })?;

        if data.variants.is_empty() {
            return Err(syn::Error::new(
                meta.ident().span(),
                "an enum without variants has no integer representation",
            ));
        }

        let mut variants = Vec::with_capacity(data.variants.len());
        for variant in &data.variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new(
                    variant.span(),
                    "only fieldless variants can be encoded as an integer",
                ));
            }
            if let Some(attr) = variant
                .attrs
                .iter()
                .find(|attr| attr.path().is_ident(MARSHAL_ATTRIBUTE_NAME))
            {
                return Err(syn::Error::new(
                    attr.span(),
                    "`#[marshal(..)]` is not supported on variants",
                ));
            }
            variants.push(&variant.ident);
        }

        Ok(Self {
            meta,
            repr,
            variants,
        })
    }

    #[inline]
    pub fn meta(&self) -> &MarshalMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn repr(&self) -> &Ident {
        &self.repr
    }

    #[inline]
    pub fn variants(&self) -> &[&'a Ident] {
        &self.variants
    }
}

/// Find the integer type in `#[repr(..)]`, e.g. `u8` in `#[repr(C, u8)]`.
fn find_integer_repr(attrs: &[Attribute]) -> syn::Result<Option<Ident>> {
    let mut found = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident()
                && INTEGER_REPRS.contains(&ident.to_string().as_str())
            {
                found = Some(ident.clone());
            }
            // `align(N)` and `packed(N)` carry an argument.
            if !meta.input.is_empty() && !meta.input.peek(syn::Token![,]) {
                meta.input.parse::<proc_macro2::TokenTree>()?;
            }
            Ok(())
        })?;
    }
    Ok(found)
}
