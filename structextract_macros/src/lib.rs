mod attrs;
mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Generates the `structextract::Record` descriptor table for a struct with
/// named fields.
///
/// # Example
///
/// ```no_rust
/// use structextract::Record;
///
/// #[derive(Record)]
/// pub struct Music {
///     #[extract(json = "id", db = "music_id")]
///     pub id: u32,
///     #[extract(json = "name")]
///     pub name: String,
///     #[extract(skip)]
///     pub cached_len: usize,
/// }
/// ```
#[proc_macro_derive(Record, attributes(extract))]
pub fn extract_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let result = record::handle(ast);
    match result {
        Ok(codegen) => codegen.into(),
        Err(e) => e.write_errors().into(),
    }
}
