use syn::{ext::IdentExt, Attribute, LitStr, Token};

/// Parsed `#[extract(...)]` entries of one field.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    pub(crate) skip: bool,
    /// Read the field through `ToAnyValue` instead of `ToValue`.
    pub(crate) any: bool,
    pub(crate) tags: Vec<(String, LitStr)>,
}

impl FieldAttributes {
    pub(crate) fn parse_field(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = FieldAttributes::default();

        for attr in attrs {
            if !attr.path().is_ident("extract") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                // bare `skip`; `skip = "..."` is an ordinary tag
                if meta.path.is_ident("skip") && !meta.input.peek(Token![=]) {
                    parsed.skip = true;
                    return Ok(());
                }
                if meta.path.is_ident("any") && !meta.input.peek(Token![=]) {
                    parsed.any = true;
                    return Ok(());
                }

                let Some(key) = meta.path.get_ident() else {
                    return Err(meta.error("expected a tag key, e.g. `json = \"name\"`"));
                };
                let key = key.unraw().to_string();
                let value: LitStr = meta.value()?.parse()?;

                if parsed.tags.iter().any(|(existing, _)| *existing == key) {
                    return Err(meta.error(format!("duplicate tag `{key}`")));
                }
                parsed.tags.push((key, value));
                Ok(())
            })?;
        }

        Ok(parsed)
    }
}
