use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericParam, Generics, Ident, Path};

use super::TypeAttributes;

/// Information shared by every shape of deriving type.
pub(crate) struct MarshalMeta<'a> {
    vc_marshal_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for MarshalMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MarshalMeta")
            .field("vc_marshal_path", &self.vc_marshal_path.to_token_stream())
            .field("ident", &self.ident)
            .finish_non_exhaustive()
    }
}

impl<'a> MarshalMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            vc_marshal_path: crate::path::vc_marshal(),
            attrs,
            ident,
            generics,
        }
    }

    #[inline]
    pub fn vc_marshal_path(&self) -> &Path {
        &self.vc_marshal_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }

    /// Split generics for an impl block.
    ///
    /// Every type parameter gets `Send + Sync + 'static`, and `bounds` are
    /// appended to the user's where clause. Returns
    /// `(impl_generics, ty_generics, where_clause)` tokens.
    pub fn split_generics(&self, bounds: &[TokenStream]) -> (TokenStream, TokenStream, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let param_bounds = self.generics.params.iter().filter_map(|param| match param {
            GenericParam::Type(param) => {
                let ident = &param.ident;
                Some(quote! {
                    #ident: ::core::marker::Send + ::core::marker::Sync + 'static
                })
            }
            _ => None,
        });

        let user_predicates = where_clause.map(|clause| {
            let predicates = clause.predicates.iter();
            quote!(#(#predicates,)*)
        });

        let mut predicates = param_bounds.chain(bounds.iter().cloned()).peekable();
        let where_tokens = if user_predicates.is_none() && predicates.peek().is_none() {
            crate::utils::empty()
        } else {
            quote! {
                where #user_predicates #(#predicates,)*
            }
        };

        (
            impl_generics.to_token_stream(),
            ty_generics.to_token_stream(),
            where_tokens,
        )
    }
}
