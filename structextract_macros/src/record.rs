use darling::{
    ast::{Data, Style},
    util::Ignored,
    Error, FromDeriveInput, FromField,
};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{ext::IdentExt, parse_quote, Attribute, DeriveInput, Generics, Path, Type};

use crate::attrs::FieldAttributes;

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(extract))]
struct RecordOpts {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, RecordStructFieldOpt>,
    #[darling(default, rename = "crate")]
    krate: Option<Path>,
}

#[derive(Debug, FromField)]
#[darling(forward_attrs(extract))]
struct RecordStructFieldOpt {
    ident: Option<Ident>,
    ty: Type,
    attrs: Vec<Attribute>,
}

pub(crate) fn handle(ast: DeriveInput) -> darling::Result<TokenStream> {
    match &ast.data {
        syn::Data::Struct(_) => {}
        syn::Data::Enum(_) => {
            return Err(Error::custom("enum is not supported").with_span(&ast.ident));
        }
        syn::Data::Union(_) => {
            return Err(Error::custom("union is not supported").with_span(&ast.ident));
        }
    }

    let record_opts = RecordOpts::from_derive_input(&ast)?;
    let struct_name = &record_opts.ident;
    let Data::Struct(data_struct) = record_opts.data else {
        return Err(Error::custom("enum is not supported").with_span(struct_name));
    };
    if matches!(data_struct.style, Style::Tuple) {
        return Err(
            Error::custom("tuple struct is not supported, use named fields").with_span(struct_name),
        );
    }

    let krate = record_opts
        .krate
        .unwrap_or_else(|| parse_quote!(::structextract));

    let mut field_entries: Vec<TokenStream> = Vec::new();
    let mut bounds: Vec<TokenStream> = Vec::new();

    for field in data_struct.fields.iter() {
        let attributes = FieldAttributes::parse_field(&field.attrs)?;
        if attributes.skip {
            continue;
        }
        let Some(field_ident) = field.ident.as_ref() else {
            return Err(Error::custom("expect named struct field").with_span(&field.ty));
        };
        let field_name = field_ident.unraw().to_string();
        let tags = attributes
            .tags
            .iter()
            .map(|(key, value)| quote! { (#key, #value) });

        let ty = &field.ty;
        if attributes.any {
            field_entries.push(quote! {
                #krate::Field::new_any(#field_name, &[#(#tags),*], &self.#field_ident)
            });
            bounds.push(quote!(#ty: #krate::ToAnyValue));
        } else {
            field_entries.push(quote! {
                #krate::Field::new(#field_name, &[#(#tags),*], &self.#field_ident)
            });
            bounds.push(quote!(#ty: #krate::ToValue));
        }
    }

    let generics = &record_opts.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let mut where_clause = where_clause.cloned().unwrap_or_else(|| syn::WhereClause {
        where_token: Default::default(),
        predicates: Default::default(),
    });
    // generic fields only convert when their type parameters do
    if generics.type_params().next().is_some() {
        for bound in bounds {
            where_clause.predicates.push(parse_quote!(#bound));
        }
    }

    Ok(quote! {
        impl #impl_generics #krate::Record for #struct_name #ty_generics #where_clause {
            fn fields(&self) -> ::core::option::Option<::std::vec::Vec<#krate::Field<'_>>> {
                ::core::option::Option::Some(::std::vec![#(#field_entries),*])
            }
        }
    })
}
