//! Attribute parsing for the Record derive macro.

use syn::{LitStr, Result};

#[derive(Clone, Copy)]
pub(crate) enum Case {
    Lower,
    Upper,
}

#[derive(Clone, Copy)]
pub(crate) enum Date {
    Now,
    CurrentTimestamp,
}

#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub(crate) db: Option<String>,
    pub(crate) skip: bool,
    pub(crate) default: Option<Case>,
    pub(crate) case: Option<Case>,
    pub(crate) date: Option<Date>,
}

impl FieldAttrs {
    /// Merge every `#[record(...)]` attribute on a field
    pub(crate) fn from_field(field: &syn::Field) -> Result<Self> {
        let mut attrs = FieldAttrs::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                let key = meta
                    .path
                    .get_ident()
                    .map(|ident| ident.to_string())
                    .unwrap_or_default();

                match key.as_str() {
                    "skip" => {
                        attrs.skip = true;
                        Ok(())
                    }
                    "db" => {
                        let value: LitStr = meta.value()?.parse()?;
                        if value.value().trim().is_empty() {
                            return Err(syn::Error::new_spanned(&value, "db must not be empty"));
                        }
                        attrs.db = Some(value.value());
                        Ok(())
                    }
                    "default" => {
                        let value: LitStr = meta.value()?.parse()?;
                        attrs.default = Some(parse_case(&value)?);
                        Ok(())
                    }
                    "case" => {
                        let value: LitStr = meta.value()?.parse()?;
                        attrs.case = Some(parse_case(&value)?);
                        Ok(())
                    }
                    "date" => {
                        let value: LitStr = meta.value()?.parse()?;
                        attrs.date = Some(parse_date(&value)?);
                        Ok(())
                    }
                    _ => Err(meta.error(
                        "unknown record attribute, expected one of: db, skip, default, case, date",
                    )),
                }
            })?;
        }

        Ok(attrs)
    }
}

fn parse_case(value: &LitStr) -> Result<Case> {
    match value.value().as_str() {
        "lower" => Ok(Case::Lower),
        "upper" => Ok(Case::Upper),
        _ => Err(syn::Error::new_spanned(
            value,
            "expected \"lower\" or \"upper\"",
        )),
    }
}

fn parse_date(value: &LitStr) -> Result<Date> {
    match value.value().as_str() {
        "now" => Ok(Date::Now),
        "CURRENT_TIMESTAMP" => Ok(Date::CurrentTimestamp),
        _ => Err(syn::Error::new_spanned(
            value,
            "expected \"now\" or \"CURRENT_TIMESTAMP\"",
        )),
    }
}
