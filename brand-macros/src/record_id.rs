use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::{ToTokens, quote};
use syn::spanned::Spanned;
use syn::{Item, parse_macro_input};

pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[record_id] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[record_id] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let inner_ty = match &st.fields {
        syn::Fields::Unnamed(f) if f.unnamed.len() == 1 => f.unnamed[0].ty.clone(),
        _ => {
            return syn::Error::new(
                st.span(),
                "#[record_id] supports only tuple struct, e.g., struct AssetId(i64);",
            )
            .to_compile_error()
            .into();
        }
    };

    // 记录标识统一为数据库自增整型
    if inner_ty.to_token_stream().to_string() != "i64" {
        return syn::Error::new(inner_ty.span(), "#[record_id] requires an i64 field")
            .to_compile_error()
            .into();
    }

    apply_derives(
        &mut st.attrs,
        vec![
            syn::parse_quote!(Clone),
            syn::parse_quote!(Copy),
            syn::parse_quote!(Debug),
            syn::parse_quote!(PartialEq),
            syn::parse_quote!(Eq),
            syn::parse_quote!(Hash),
            syn::parse_quote!(PartialOrd),
            syn::parse_quote!(Ord),
            syn::parse_quote!(serde::Serialize),
            syn::parse_quote!(serde::Deserialize),
        ],
    );
    st.attrs.push(syn::parse_quote!(#[serde(transparent)]));

    let ident = &st.ident;

    let out = quote! {
        #st

        impl #ident {
            pub const fn new(value: i64) -> Self { Self(value) }

            pub const fn value(&self) -> i64 { self.0 }
        }

        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::str::FromStr for #ident {
            type Err = ::std::num::ParseIntError;
            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok(Self(s.trim().parse()?))
            }
        }

        impl ::core::convert::From<i64> for #ident {
            fn from(value: i64) -> Self { Self(value) }
        }

        impl ::core::convert::From<#ident> for i64 {
            fn from(value: #ident) -> Self { value.0 }
        }

        impl ::brand_domain::record::RecordId for #ident {}
    };

    TokenStream::from(out)
}
