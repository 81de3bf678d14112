use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    Ident, Item, Result as SynResult, Token, Type, parse::Parse, parse::ParseStream,
    parse_macro_input,
};

pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as RecordAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[record] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let id_ty = cfg.id_ty;
    let kind = cfg.kind;

    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "#[record] supports only named-field struct")
                .to_compile_error()
                .into();
        }
    };

    // id 字段：存在则移到最前，否则按配置类型新增
    let mut reordered: Punctuated<syn::Field, Token![,]> = Punctuated::new();
    let existing_id = fields_named
        .named
        .iter()
        .find(|f| f.ident.as_ref().is_some_and(|i| i == "id"))
        .cloned();
    reordered.push(existing_id.unwrap_or_else(|| syn::parse_quote! { pub id: #id_ty }));

    let mut links = Vec::new();

    for mut field in fields_named.named.clone().into_iter() {
        if field.ident.as_ref().is_some_and(|i| i == "id") {
            continue;
        }

        let mut retained = Vec::with_capacity(field.attrs.len());
        for attr in std::mem::take(&mut field.attrs) {
            if !attr.path().is_ident("belongs_to") {
                retained.push(attr);
                continue;
            }
            match attr.parse_args::<BelongsTo>() {
                Ok(belongs_to) => links.push(link_tokens(&field, belongs_to)),
                Err(err) => return err.to_compile_error().into(),
            }
        }
        field.attrs = retained;
        reordered.push(field);
    }

    fields_named.named = reordered;

    apply_derives(
        &mut st.attrs,
        vec![
            syn::parse_quote!(Debug),
            syn::parse_quote!(Clone),
            syn::parse_quote!(PartialEq),
            syn::parse_quote!(serde::Serialize),
            syn::parse_quote!(serde::Deserialize),
        ],
    );

    let ident = &st.ident;
    let link_count = links.len();

    let out = quote! {
        #st

        impl ::brand_domain::record::Record for #ident {
            type Id = #id_ty;

            const KIND: ::brand_domain::record::ResourceKind =
                ::brand_domain::record::ResourceKind::#kind;

            fn id(&self) -> Self::Id {
                self.id
            }

            fn links(&self) -> ::std::vec::Vec<::brand_domain::record::Link> {
                let entries: [::std::option::Option<::brand_domain::record::Link>; #link_count] =
                    [#( #links ),*];
                entries.into_iter().flatten().collect()
            }
        }
    };

    TokenStream::from(out)
}

// 单个 belongs_to 字段 -> Option<Link> 表达式
fn link_tokens(field: &syn::Field, belongs_to: BelongsTo) -> proc_macro2::TokenStream {
    let name = field.ident.as_ref().expect("named field");
    let name_lit = syn::LitStr::new(&name.to_string(), name.span());
    let kind = belongs_to.kind;
    let on_delete = if belongs_to.set_null {
        quote! { ::brand_domain::record::OnDelete::SetNull }
    } else {
        quote! { ::brand_domain::record::OnDelete::Cascade }
    };

    let make = quote! {
        |target| ::brand_domain::record::Link::new(
            ::brand_domain::record::ResourceRef::new(
                ::brand_domain::record::ResourceKind::#kind,
                ::core::convert::Into::<i64>::into(target),
            ),
            #name_lit,
            #on_delete,
        )
    };

    if is_option(&field.ty) {
        quote! { self.#name.map(#make) }
    } else {
        quote! { ::std::option::Option::Some((#make)(self.#name)) }
    }
}

fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(p) => p
            .path
            .segments
            .last()
            .is_some_and(|seg| seg.ident == "Option"),
        _ => false,
    }
}

struct RecordAttrConfig {
    kind: Ident,
    id_ty: Type,
}

impl Parse for RecordAttrConfig {
    fn parse(input: ParseStream) -> SynResult<Self> {
        let mut kind: Option<Ident> = None;
        let mut id_ty: Option<Type> = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match key.to_string().as_str() {
                "kind" if kind.is_none() => kind = Some(input.parse()?),
                "id" if id_ty.is_none() => id_ty = Some(input.parse()?),
                "kind" | "id" => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("duplicate key '{key}' in attribute"),
                    ));
                }
                _ => {
                    return Err(syn::Error::new(
                        key.span(),
                        "unknown key in attribute; expected 'kind' or 'id'",
                    ));
                }
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        let span = input.span();
        Ok(Self {
            kind: kind.ok_or_else(|| syn::Error::new(span, "missing 'kind = ..'"))?,
            id_ty: id_ty.ok_or_else(|| syn::Error::new(span, "missing 'id = ..'"))?,
        })
    }
}

/// `#[belongs_to(Kind)]` 或 `#[belongs_to(Kind, on_delete = cascade | set_null)]`
struct BelongsTo {
    kind: Ident,
    set_null: bool,
}

impl Parse for BelongsTo {
    fn parse(input: ParseStream) -> SynResult<Self> {
        let kind: Ident = input.parse()?;
        let mut set_null = false;

        if input.parse::<Option<Token![,]>>()?.is_some() && !input.is_empty() {
            let key: Ident = input.parse()?;
            if key != "on_delete" {
                return Err(syn::Error::new(key.span(), "expected 'on_delete'"));
            }
            input.parse::<Token![=]>()?;
            let rule: Ident = input.parse()?;
            set_null = match rule.to_string().as_str() {
                "cascade" => false,
                "set_null" => true,
                _ => {
                    return Err(syn::Error::new(
                        rule.span(),
                        "on_delete expects 'cascade' or 'set_null'",
                    ));
                }
            };
        }

        Ok(Self { kind, set_null })
    }
}
