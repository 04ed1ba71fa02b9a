//! Procedural macros for contract_models
//!
//! This crate provides the `Model` and `ModelEdit` derive macros used to
//! describe data models to the contract_models registry.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Fields, FieldsNamed, LitStr, Path, Type,
};

/// Derive macro implementing `contract_models::models::Model`
///
/// ```ignore
/// #[derive(Model)]
/// #[model(kind = "entity", collection = "sows")]
/// pub struct Sow {
///     #[model_field(primary_key)]
///     pub id: String,
///     #[model_field(reference = "msas.id", comment = "Owning master agreement")]
///     pub msa_id: String,
/// }
/// ```
#[proc_macro_derive(Model, attributes(model, model_field))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand_model(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro implementing `contract_models::models::ModelEdit`
///
/// Every field must be an `Option<_>`. Fields whose target field is itself
/// optional are marked with `#[edit(wrap)]`.
#[proc_macro_derive(ModelEdit, attributes(edit))]
pub fn derive_model_edit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand_model_edit(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Default)]
struct ModelArgs {
    collection: Option<LitStr>,
    kind: Option<LitStr>,
}

#[derive(Default)]
struct FieldArgs {
    primary_key: bool,
    flatten: bool,
    reference: Option<(String, String)>,
    comment: Option<String>,
}

fn named_fields<'a>(input: &'a DeriveInput, derive: &str) -> syn::Result<&'a FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            _ => Err(syn::Error::new_spanned(
                &input.ident,
                format!("{} only supports structs with named fields", derive),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{} only supports structs", derive),
        )),
    }
}

/// Parse `#[model(...)]` arguments on the struct
fn parse_model_args(attrs: &[Attribute]) -> syn::Result<ModelArgs> {
    let mut args = ModelArgs::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("model")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("collection") {
                args.collection = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("kind") {
                args.kind = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported model attribute, expected `collection` or `kind`"))
            }
        })?;
    }

    Ok(args)
}

/// Parse `#[model_field(...)]` arguments on a field
fn parse_field_args(attrs: &[Attribute]) -> syn::Result<FieldArgs> {
    let mut args = FieldArgs::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("model_field")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("primary_key") {
                args.primary_key = true;
                Ok(())
            } else if meta.path.is_ident("flatten") {
                args.flatten = true;
                Ok(())
            } else if meta.path.is_ident("reference") {
                let value: LitStr = meta.value()?.parse()?;
                let target = value.value();

                // References are written as "collection.field"
                match target.split_once('.') {
                    Some((collection, field))
                        if !collection.is_empty() && !field.is_empty() && !field.contains('.') =>
                    {
                        args.reference = Some((collection.to_string(), field.to_string()));
                        Ok(())
                    }
                    _ => Err(syn::Error::new_spanned(
                        value,
                        "reference must be written as \"collection.field\"",
                    )),
                }
            } else if meta.path.is_ident("comment") {
                let value: LitStr = meta.value()?.parse()?;
                args.comment = Some(value.value());
                Ok(())
            } else {
                Err(meta.error(
                    "unsupported model_field attribute, expected `primary_key`, `flatten`, `reference` or `comment`",
                ))
            }
        })?;
    }

    Ok(args)
}

fn kind_tokens(kind: Option<&LitStr>) -> syn::Result<TokenStream2> {
    let value = kind.map(LitStr::value).unwrap_or_else(|| "entity".to_string());

    let variant = match value.as_str() {
        "entity" => quote!(Entity),
        "edit" => quote!(Edit),
        "request" => quote!(Request),
        "response" => quote!(Response),
        "enumeration" => quote!(Enumeration),
        "validation_result" => quote!(ValidationResult),
        other => {
            let message = format!("unknown model kind `{}`", other);
            return Err(match kind {
                Some(lit) => syn::Error::new_spanned(lit, message),
                None => syn::Error::new(proc_macro2::Span::call_site(), message),
            });
        }
    };

    Ok(quote!(::contract_models::models::ModelKind::#variant))
}

/// Render a type the way the registry stores it, without token spacing
fn type_string(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}

fn expand_model(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let args = parse_model_args(&input.attrs)?;
    let kind = kind_tokens(args.kind.as_ref())?;
    let collection = match &args.collection {
        Some(collection) => quote!(::core::option::Option::Some(#collection)),
        None => quote!(::core::option::Option::None),
    };

    let mut statements = Vec::new();

    for field in &named_fields(&input, "Model")?.named {
        let Some(ident) = &field.ident else {
            continue;
        };
        let field_args = parse_field_args(&field.attrs)?;
        let ty = &field.ty;

        if field_args.flatten {
            let source = type_string(ty);
            statements.push(quote! {
                fields.extend(
                    <#ty as ::contract_models::models::Model>::field_definitions()
                        .into_iter()
                        .map(|field| field.flattened_from(#source)),
                );
            });
            continue;
        }

        let field_name = ident.unraw().to_string();
        let rust_type = type_string(ty);
        let mut definition =
            quote!(::contract_models::schema::FieldDefinition::new(#field_name, #rust_type));

        if field_args.primary_key {
            definition = quote!(#definition.primary_key(true));
        }

        if let Some((ref_collection, ref_field)) = &field_args.reference {
            definition = quote!(#definition.references(#ref_collection, #ref_field));
        }

        if let Some(comment) = &field_args.comment {
            definition = quote!(#definition.comment(#comment));
        }

        statements.push(quote!(fields.push(#definition);));
    }

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::contract_models::models::Model for #name #ty_generics #where_clause {
            fn model_name() -> &'static str {
                #name_str
            }

            fn kind() -> ::contract_models::models::ModelKind {
                #kind
            }

            fn collection_name() -> ::core::option::Option<&'static str> {
                #collection
            }

            fn field_definitions() -> ::std::vec::Vec<::contract_models::schema::FieldDefinition> {
                #[allow(unused_mut)]
                let mut fields = ::std::vec::Vec::new();
                #(#statements)*
                fields
            }
        }
    })
}

/// Parse the `#[edit(target = Type)]` struct attribute
fn parse_edit_target(attrs: &[Attribute]) -> syn::Result<Option<Path>> {
    let mut target = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("edit")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("target") {
                target = Some(meta.value()?.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported edit attribute, expected `target`"))
            }
        })?;
    }

    Ok(target)
}

/// Returns true when a field carries `#[edit(wrap)]`
fn parse_edit_wrap(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut wrap = false;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("edit")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("wrap") {
                wrap = true;
                Ok(())
            } else {
                Err(meta.error("unsupported edit field attribute, expected `wrap`"))
            }
        })?;
    }

    Ok(wrap)
}

fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map_or(false, |segment| segment.ident == "Option"),
        _ => false,
    }
}

fn expand_model_edit(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let target = parse_edit_target(&input.attrs)?.ok_or_else(|| {
        syn::Error::new_spanned(name, "ModelEdit requires `#[edit(target = Type)]`")
    })?;

    let mut applies = Vec::new();
    let mut unset = Vec::new();

    for field in &named_fields(&input, "ModelEdit")?.named {
        let Some(ident) = &field.ident else {
            continue;
        };

        if !is_option(&field.ty) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "ModelEdit fields must be `Option<_>`",
            ));
        }

        let field_name = ident.unraw().to_string();
        let value = if parse_edit_wrap(&field.attrs)? {
            quote!(::core::option::Option::Some(value))
        } else {
            quote!(value)
        };

        applies.push(quote! {
            if let ::core::option::Option::Some(value) = self.#ident {
                target.#ident = #value;
                applied.push(#field_name);
            }
        });
        unset.push(quote!(self.#ident.is_none()));
    }

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::contract_models::models::ModelEdit for #name #ty_generics #where_clause {
            type Target = #target;

            fn apply_to(self, target: &mut Self::Target) -> ::std::vec::Vec<&'static str> {
                #[allow(unused_mut)]
                let mut applied = ::std::vec::Vec::new();
                #(#applies)*
                applied
            }

            fn is_empty(&self) -> bool {
                true #(&& #unset)*
            }
        }
    })
}
