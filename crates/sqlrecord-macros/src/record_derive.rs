//! Implementation of the Record derive macro.
//!
//! This module generates the static metadata table for a record type based on
//! its fields and their `#[record(...)]` attributes.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Error, Field, Fields, Ident, LitStr, Path, Result, Type};

const SQL_IDENT_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";
const TYPE_PATH_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$";

/// Parsed definition of a struct with `#[derive(Record)]`.
#[derive(Debug)]
pub struct RecordDef {
    /// The struct name.
    pub name: Ident,
    /// Explicit type identifier (`#[record(name = "...")]`).
    pub type_name: Option<String>,
    /// Explicit table name (`#[record(table = "...")]`).
    pub table: Option<String>,
    /// Parent record (`#[record(extends = Parent)]`).
    pub extends: Option<Path>,
    /// Parsed fields, in declaration order.
    pub fields: Vec<RecordFieldDef>,
}

/// Parsed attributes for a single field.
#[derive(Debug)]
pub struct RecordFieldDef {
    /// The field name.
    pub name: Ident,
    /// The field type.
    pub ty: Type,
    /// `#[record(ignore)]`
    pub ignore: bool,
    /// `#[record(opaque)]`
    pub opaque: bool,
    /// `#[record(list = "...")]`
    pub list: Option<String>,
    /// `#[record(column = "...")]`
    pub column: Option<String>,
    /// `#[record(sql_type = "...")]`
    pub sql_type: Option<String>,
}

/// Parse a `DeriveInput` into a `RecordDef`.
pub fn parse_record(input: &DeriveInput) -> Result<RecordDef> {
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Record cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => parse_record_fields(&data.fields)?,
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                input,
                "Record can only be derived for structs, not enums",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                input,
                "Record can only be derived for structs, not unions",
            ));
        }
    };

    let mut type_name = None;
    let mut table = None;
    let mut extends = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            let path = &meta.path;

            if path.is_ident("table") {
                let value: LitStr = meta.value()?.parse()?;
                table = Some(checked(&value, SQL_IDENT_PATTERN, "table name")?);
            } else if path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                type_name = Some(checked(&value, TYPE_PATH_PATTERN, "type identifier")?);
            } else if path.is_ident("extends") {
                extends = Some(meta.value()?.parse::<Path>()?);
            } else {
                let attr_name = path.to_token_stream().to_string();
                return Err(Error::new_spanned(
                    path,
                    format!(
                        "unknown record attribute `{attr_name}`. \
                         Valid attributes are: table, name, extends"
                    ),
                ));
            }

            Ok(())
        })?;
    }

    Ok(RecordDef {
        name: input.ident.clone(),
        type_name,
        table,
        extends,
        fields,
    })
}

fn parse_record_fields(fields: &Fields) -> Result<Vec<RecordFieldDef>> {
    match fields {
        Fields::Named(named) => named.named.iter().map(parse_record_field).collect(),
        Fields::Unnamed(_) => Err(Error::new_spanned(
            fields,
            "Record requires a struct with named fields",
        )),
        Fields::Unit => Ok(Vec::new()),
    }
}

fn parse_record_field(field: &Field) -> Result<RecordFieldDef> {
    let name = field
        .ident
        .clone()
        .ok_or_else(|| Error::new_spanned(field, "expected named field"))?;

    let mut def = RecordFieldDef {
        name,
        ty: field.ty.clone(),
        ignore: false,
        opaque: false,
        list: None,
        column: None,
        sql_type: None,
    };

    for attr in &field.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            let path = &meta.path;

            if path.is_ident("ignore") {
                def.ignore = true;
            } else if path.is_ident("opaque") {
                def.opaque = true;
            } else if path.is_ident("list") {
                let value: LitStr = meta.value()?.parse()?;
                def.list = Some(checked(&value, TYPE_PATH_PATTERN, "element type identifier")?);
            } else if path.is_ident("column") {
                let value: LitStr = meta.value()?.parse()?;
                def.column = Some(checked(&value, SQL_IDENT_PATTERN, "column name")?);
            } else if path.is_ident("sql_type") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().trim().is_empty() {
                    return Err(Error::new_spanned(value, "sql_type must not be empty"));
                }
                def.sql_type = Some(value.value());
            } else {
                let attr_name = path.to_token_stream().to_string();
                return Err(Error::new_spanned(
                    path,
                    format!(
                        "unknown record attribute `{attr_name}`. \
                         Valid attributes are: ignore, opaque, list, column, sql_type"
                    ),
                ));
            }

            Ok(())
        })?;
    }

    Ok(def)
}

/// Validate a string literal against `pattern`.
fn checked(value: &LitStr, pattern: &str, what: &str) -> Result<String> {
    let text = value.value();
    let re = regex::Regex::new(pattern)
        .map_err(|e| Error::new_spanned(value, format!("internal pattern error: {e}")))?;
    if re.is_match(&text) {
        Ok(text)
    } else {
        Err(Error::new_spanned(value, format!("invalid {what} `{text}`")))
    }
}

/// Generate the `Record` and `FieldKind` implementations.
pub fn generate_record_impl(def: &RecordDef) -> TokenStream {
    let name = &def.name;
    let name_str = name.unraw().to_string();

    let type_name = match &def.type_name {
        Some(explicit) => quote! { #explicit },
        None => quote! { concat!(module_path!(), "::", #name_str) },
    };

    let table = match &def.table {
        Some(table) => quote! { Some(#table) },
        None => quote! { None },
    };

    let parent = match &def.extends {
        Some(path) => quote! {
            Some(sqlrecord_core::RecordRef::new(
                <#path as sqlrecord_core::Record>::record_info,
            ))
        },
        None => quote! { None },
    };

    let fields: Vec<TokenStream> = def.fields.iter().map(generate_field_info).collect();

    quote! {
        impl sqlrecord_core::Record for #name {
            fn record_info() -> &'static sqlrecord_core::RecordInfo {
                static INFO: sqlrecord_core::RecordInfo = sqlrecord_core::RecordInfo {
                    name: #type_name,
                    table_name: #table,
                    fields: &[#(#fields),*],
                    parent: #parent,
                };
                &INFO
            }
        }

        impl sqlrecord_core::FieldKind for #name {
            const FIELD_TYPE: sqlrecord_core::FieldType = sqlrecord_core::FieldType::Record(
                sqlrecord_core::RecordRef::new(<#name as sqlrecord_core::Record>::record_info),
            );
        }
    }
}

/// Generate the `FieldInfo` expression for one field.
fn generate_field_info(field: &RecordFieldDef) -> TokenStream {
    let field_name = field.name.unraw().to_string();
    let ty = &field.ty;

    let field_type = if field.ignore || field.opaque {
        let ty_str = ty.to_token_stream().to_string().replace(' ', "");
        quote! { sqlrecord_core::FieldType::Opaque(#ty_str) }
    } else {
        quote! { <#ty as sqlrecord_core::FieldKind>::FIELD_TYPE }
    };

    let mut expr = quote! { sqlrecord_core::FieldInfo::new(#field_name, #field_type) };

    if let Some(column) = &field.column {
        expr = quote! { #expr.column(#column) };
    }
    if field.ignore {
        expr = quote! { #expr.ignore() };
    }
    if let Some(list) = &field.list {
        expr = quote! { #expr.list_of(#list) };
    }
    if let Some(sql_type) = &field.sql_type {
        expr = quote! { #expr.sql_type_override(#sql_type) };
    }

    expr
}
