//! Parsing of `#[marshal(...)]` attributes.

use proc_macro2::Span;
use quote::{ToTokens, quote};
use syn::{Attribute, LitStr, Path, Token, parenthesized, parse::ParseStream};

use crate::MARSHAL_ATTRIBUTE_NAME;

mod kw {
    syn::custom_keyword!(rename);
    syn::custom_keyword!(skip);
    syn::custom_keyword!(enum_repr);
    syn::custom_keyword!(auto_register);
    syn::custom_keyword!(property);
    syn::custom_keyword!(shared);
    syn::custom_keyword!(name);
    syn::custom_keyword!(get);
    syn::custom_keyword!(set);
    syn::custom_keyword!(storage);
}

// -----------------------------------------------------------------------------
// Helpers

/// Parse a comma separated list, calling `item` once per entry.
fn parse_list(
    input: ParseStream,
    mut item: impl FnMut(ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    while !input.is_empty() {
        item(input)?;
        if input.is_empty() {
            break;
        }
        input.parse::<Token![,]>()?;
    }
    Ok(())
}

/// Parse every `#[marshal(...)]` in `attrs`.
fn parse_marshal_attrs(
    attrs: &[Attribute],
    mut item: impl FnMut(ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    for attr in attrs {
        if attr.path().is_ident(MARSHAL_ATTRIBUTE_NAME) {
            attr.parse_args_with(|input: ParseStream| parse_list(input, &mut item))?;
        }
    }
    Ok(())
}

fn set_once<T>(slot: &mut Option<T>, value: T, span: Span, key: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(span, format!("duplicate `{key}`")));
    }
    *slot = Some(value);
    Ok(())
}

fn required<T>(slot: Option<T>, span: Span, message: &str) -> syn::Result<T> {
    slot.ok_or_else(|| syn::Error::new(span, message))
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes of a struct field.
///
/// Format: `#[marshal(rename = "key", skip, enum_repr)]`
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub rename: Option<LitStr>,
    pub skip: Option<Span>,
    pub enum_repr: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        parse_marshal_attrs(attrs, |input| this.parse_item(input))?;
        Ok(this)
    }

    fn parse_item(&mut self, input: ParseStream) -> syn::Result<()> {
        let lookahead = input.lookahead1();
        if lookahead.peek(kw::rename) {
            let span = input.parse::<kw::rename>()?.span;
            input.parse::<Token![=]>()?;
            set_once(&mut self.rename, input.parse()?, span, "rename")
        } else if lookahead.peek(kw::skip) {
            let span = input.parse::<kw::skip>()?.span;
            set_once(&mut self.skip, span, span, "skip")
        } else if lookahead.peek(kw::enum_repr) {
            let span = input.parse::<kw::enum_repr>()?.span;
            set_once(&mut self.enum_repr, span, span, "enum_repr")
        } else {
            Err(lookahead.error())
        }
    }
}

// -----------------------------------------------------------------------------
// MemberDecl

/// Where a type-level member gets its value.
pub(crate) enum MemberSource {
    /// `property(get = .., set = ..)`
    Property { get: Path, set: Path },
    /// `shared(storage = ..)`
    Shared { storage: Path },
}

/// A member declared on the type rather than on a field.
pub(crate) struct MemberDecl {
    pub name: LitStr,
    pub source: MemberSource,
    pub enum_repr: bool,
}

impl MemberDecl {
    /// Format: `property(name = "key", get = path, set = path [, enum_repr])`
    fn parse_property(input: ParseStream, span: Span) -> syn::Result<Self> {
        let content;
        parenthesized!(content in input);

        let mut name = None;
        let mut get = None;
        let mut set = None;
        let mut enum_repr = None;
        parse_list(&content, |input| {
            let lookahead = input.lookahead1();
            if lookahead.peek(kw::name) {
                let span = input.parse::<kw::name>()?.span;
                input.parse::<Token![=]>()?;
                set_once(&mut name, input.parse()?, span, "name")
            } else if lookahead.peek(kw::get) {
                let span = input.parse::<kw::get>()?.span;
                input.parse::<Token![=]>()?;
                set_once(&mut get, input.parse()?, span, "get")
            } else if lookahead.peek(kw::set) {
                let span = input.parse::<kw::set>()?.span;
                input.parse::<Token![=]>()?;
                set_once(&mut set, input.parse()?, span, "set")
            } else if lookahead.peek(kw::enum_repr) {
                let span = input.parse::<kw::enum_repr>()?.span;
                set_once(&mut enum_repr, span, span, "enum_repr")
            } else {
                Err(lookahead.error())
            }
        })?;

        Ok(Self {
            name: required(name, span, "`property` needs `name = \"...\"`")?,
            source: MemberSource::Property {
                get: required(get, span, "`property` needs `get = ...`")?,
                set: required(set, span, "`property` needs `set = ...`")?,
            },
            enum_repr: enum_repr.is_some(),
        })
    }

    /// Format: `shared(name = "key", storage = path [, enum_repr])`
    fn parse_shared(input: ParseStream, span: Span) -> syn::Result<Self> {
        let content;
        parenthesized!(content in input);

        let mut name = None;
        let mut storage = None;
        let mut enum_repr = None;
        parse_list(&content, |input| {
            let lookahead = input.lookahead1();
            if lookahead.peek(kw::name) {
                let span = input.parse::<kw::name>()?.span;
                input.parse::<Token![=]>()?;
                set_once(&mut name, input.parse()?, span, "name")
            } else if lookahead.peek(kw::storage) {
                let span = input.parse::<kw::storage>()?.span;
                input.parse::<Token![=]>()?;
                set_once(&mut storage, input.parse()?, span, "storage")
            } else if lookahead.peek(kw::enum_repr) {
                let span = input.parse::<kw::enum_repr>()?.span;
                set_once(&mut enum_repr, span, span, "enum_repr")
            } else {
                Err(lookahead.error())
            }
        })?;

        Ok(Self {
            name: required(name, span, "`shared` needs `name = \"...\"`")?,
            source: MemberSource::Shared {
                storage: required(storage, span, "`shared` needs `storage = ...`")?,
            },
            enum_repr: enum_repr.is_some(),
        })
    }
}

/// A bare ident names a method of `Self`, anything else is used as written.
pub(crate) fn method_tokens(path: &Path) -> proc_macro2::TokenStream {
    match path.get_ident() {
        Some(ident) => quote!(Self::#ident),
        None => path.to_token_stream(),
    }
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes of the deriving type.
///
/// Format: `#[marshal(auto_register, property(..), shared(..))]`
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub auto_register: Option<Span>,
    pub members: Vec<MemberDecl>,
    /// Span of the first attribute, for errors on types that take none.
    pub first_span: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        parse_marshal_attrs(attrs, |input| this.parse_item(input))?;
        Ok(this)
    }

    fn parse_item(&mut self, input: ParseStream) -> syn::Result<()> {
        self.first_span.get_or_insert(input.span());

        let lookahead = input.lookahead1();
        if lookahead.peek(kw::auto_register) {
            let span = input.parse::<kw::auto_register>()?.span;
            set_once(&mut self.auto_register, span, span, "auto_register")
        } else if lookahead.peek(kw::property) {
            let span = input.parse::<kw::property>()?.span;
            self.members.push(MemberDecl::parse_property(input, span)?);
            Ok(())
        } else if lookahead.peek(kw::shared) {
            let span = input.parse::<kw::shared>()?.span;
            self.members.push(MemberDecl::parse_shared(input, span)?);
            Ok(())
        } else {
            Err(lookahead.error())
        }
    }
}
