use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, Fields, FieldsNamed, Ident, Token, Type, Visibility, braced, parse_macro_input};

pub fn loggable_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LoggableInput);

    let enum_attrs = &input.attrs;
    let enum_name = &input.enum_name;
    let variants = &input.variants;

    let enum_variants = variants.iter().map(|variant| {
        let attrs = &variant.attrs;
        let name = &variant.name;
        let fields = &variant.fields;

        quote! {
            #(#attrs)*
            #name #fields
        }
    });

    let level_match_arms = variants.iter().map(|variant| {
        let name = &variant.name;
        let level = &variant.level;
        let pattern = match &variant.fields {
            Fields::Named(_) => quote! { { .. } },
            _ => quote! {},
        };

        quote! {
            Self::#name #pattern => #level
        }
    });

    quote! {
        #(#enum_attrs)*
        #[allow(dead_code)]
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum #enum_name {
            #(#enum_variants,)*
        }

        impl #enum_name {
            #[allow(dead_code)]
            pub fn level(&self) -> tracing::Level {
                match self {
                    #(#level_match_arms,)*
                }
            }
        }
    }
    .into()
}

struct LoggableInput {
    attrs: Vec<Attribute>,
    enum_name: Ident,
    variants: Vec<LoggableVariant>,
}

struct LoggableVariant {
    // #[doc] and #[error(..)] are forwarded verbatim so thiserror sees the full format args.
    attrs: Vec<Attribute>,
    name: Ident,
    fields: Fields,
    level: Expr,
}

impl Parse for LoggableInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let enum_name = input.parse::<Ident>()?;

        let content;
        braced!(content in input);

        let mut variants = Vec::new();

        while !content.is_empty() {
            let attrs = content.call(Attribute::parse_outer)?;
            if !attrs.iter().any(|attr| attr.path().is_ident("error")) {
                return Err(content.error("Expected #[error(...)] attribute"));
            }

            let name = content.parse::<Ident>()?;

            let fields = if content.peek(syn::token::Brace) {
                let field_content;
                braced!(field_content in content);

                let mut named = Punctuated::new();
                while !field_content.is_empty() {
                    let field_name = field_content.parse::<Ident>()?;
                    field_content.parse::<Token![:]>()?;
                    let field_type = field_content.parse::<Type>()?;

                    named.push(syn::Field {
                        attrs: vec![],
                        vis: Visibility::Inherited,
                        mutability: syn::FieldMutability::None,
                        ident: Some(field_name),
                        colon_token: Some(Default::default()),
                        ty: field_type,
                    });

                    if field_content.peek(Token![,]) {
                        field_content.parse::<Token![,]>()?;
                    }
                }

                Fields::Named(FieldsNamed {
                    brace_token: Default::default(),
                    named,
                })
            } else {
                Fields::Unit
            };

            content.parse::<Token![=>]>()?;
            let level = content.parse::<Expr>()?;

            if content.peek(Token![,]) {
                content.parse::<Token![,]>()?;
            }

            variants.push(LoggableVariant {
                attrs,
                name,
                fields,
                level,
            });
        }

        Ok(LoggableInput {
            attrs,
            enum_name,
            variants,
        })
    }
}
