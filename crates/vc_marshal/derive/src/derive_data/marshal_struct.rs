use std::collections::HashSet;

use syn::{FieldsNamed, Ident, Type, ext::IdentExt, spanned::Spanned};

use super::{FieldAttributes, MarshalMeta};

/// A field that is encoded as a member.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The document key.
    pub name: String,
    pub enum_repr: bool,
}

/// A struct with named fields.
///
/// Skipped fields are dropped while parsing, `fields` only holds members.
pub(crate) struct MarshalStruct<'a> {
    meta: MarshalMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> MarshalStruct<'a> {
    pub fn new(meta: MarshalMeta<'a>, named: &'a FieldsNamed) -> syn::Result<Self> {
        let mut names = HashSet::new();
        let mut fields = Vec::with_capacity(named.named.len());

        for field in &named.named {
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if attrs.skip.is_some() {
                continue;
            }

            let ident = field
                .ident
                .as_ref()
                .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;
            let name = match &attrs.rename {
                Some(lit) => lit.value(),
                None => ident.unraw().to_string(),
            };

            if !names.insert(name.clone()) {
                let span = attrs.rename.as_ref().map_or(ident.span(), |lit| lit.span());
                return Err(syn::Error::new(span, format!("duplicate member `{name}`")));
            }

            fields.push(StructField {
                ident,
                ty: &field.ty,
                name,
                enum_repr: attrs.enum_repr.is_some(),
            });
        }

        for decl in &meta.attrs().members {
            let name = decl.name.value();
            if !names.insert(name.clone()) {
                return Err(syn::Error::new(
                    decl.name.span(),
                    format!("duplicate member `{name}`"),
                ));
            }
        }

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &MarshalMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }
}
