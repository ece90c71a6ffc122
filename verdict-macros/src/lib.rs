use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Member};

/// Picks the field holding the wrapped error.
///
/// A tuple struct must have exactly one field. A struct with named fields
/// uses the field marked `#[base]`, or its only field.
fn base_member(input: &DeriveInput) -> syn::Result<Member> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ErrorKind can only be derived for structs",
        ));
    };

    match &data.fields {
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(Member::from(0)),
        Fields::Named(fields) => {
            let mut marked = fields
                .named
                .iter()
                .filter(|f| f.attrs.iter().any(|a| a.path().is_ident("base")));
            let field = match (marked.next(), marked.next()) {
                (Some(field), None) => field,
                (Some(_), Some(extra)) => {
                    return Err(syn::Error::new_spanned(
                        extra,
                        "only one field can be marked #[base]",
                    ))
                }
                (None, _) if fields.named.len() == 1 => &fields.named[0],
                (None, _) => {
                    return Err(syn::Error::new_spanned(
                        &input.ident,
                        "mark the field holding the wrapped error with #[base]",
                    ))
                }
            };
            field
                .ident
                .clone()
                .map(Member::Named)
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))
        }
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "ErrorKind needs a single wrapped error field",
        )),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "ErrorKind cannot be derived for generic types",
        ));
    }

    let ident = &input.ident;
    let name = ident.to_string();
    let base = base_member(input)?;

    Ok(quote! {
        impl ::verdict::ErrorKind for #ident {
            fn kind_name(&self) -> &'static str {
                #name
            }

            fn message(&self) -> &str {
                ::verdict::ErrorKind::message(&self.#base)
            }

            fn metadata(&self) -> &::verdict::Metadata {
                ::verdict::ErrorKind::metadata(&self.#base)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::verdict::render::fmt_error(self, f)
            }
        }

        impl ::std::error::Error for #ident {}

        ::verdict::inventory::submit!(::verdict::registry::KindInfo {
            name: #name,
            module: ::std::module_path!(),
        });
    })
}

/// Implements `verdict::ErrorKind` for a struct wrapping an error.
///
/// The kind name is the struct's name. Message and metadata come from the
/// wrapped error, and the kind is added to `verdict::registry`.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, ErrorKind)]
/// pub struct QuotaExceededError(Error);
///
/// #[derive(Debug, ErrorKind)]
/// pub struct RateLimitedError {
///     #[base]
///     inner: Error,
///     retry_after_secs: u64,
/// }
/// ```
#[proc_macro_derive(ErrorKind, attributes(base))]
pub fn derive_error_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
