//! Procedural macros for the aoc-runner library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro for automatically registering solutions with the plugin system
///
/// Generates an `inventory::submit!` of a `SolutionPlugin` pointing at the type,
/// so `RegistryBuilder::register_all_plugins` picks it up. The day comes from
/// the type's own `Solution::day`.
///
/// # Attributes
///
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid", "parsing"])
///
/// # Requirements
///
/// The type must be a unit struct (it is referenced as a value) and must
/// implement the `Solution` trait. If the trait is not implemented, you will
/// get a compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `YourSolution: Solution` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_runner::{AutoRegisterSolution, SolveContext, SolveError, Solution};
///
/// #[derive(AutoRegisterSolution)]
/// #[aoc(tags = ["grid"])]
/// struct Day12;
///
/// impl Solution for Day12 {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolution, attributes(aoc))]
pub fn derive_auto_register_solution(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let is_unit_struct = matches!(
        &input.data,
        syn::Data::Struct(data) if matches!(data.fields, syn::Fields::Unit)
    );
    if !is_unit_struct {
        return Err(syn::Error::new_spanned(
            name,
            "AutoRegisterSolution can only be derived for unit structs",
        ));
    }

    let mut tags: Vec<String> = Vec::new();

    // #[aoc(...)] is optional; without it the solution has no tags
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("aoc")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("tags") {
                // Parse array of string literals: tags = ["a", "b"]
                let _ = meta.value()?; // Consume the '='
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    let lit: Lit = content.parse()?;
                    match lit {
                        Lit::Str(lit_str) => tags.push(lit_str.value()),
                        other => {
                            return Err(syn::Error::new_spanned(
                                other,
                                "tags must be string literals",
                            ));
                        }
                    }
                    // Skip comma if present
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
                Ok(())
            } else {
                Err(meta.error("unsupported #[aoc(...)] key, expected `tags`"))
            }
        })?;
    }

    let tag_strs = tags.iter().map(|s| s.as_str());

    Ok(quote! {
        // Compile-time check that the type implements Solution
        const _: () = {
            trait MustImplementSolution: ::aoc_runner::Solution {}
            impl MustImplementSolution for #name {}
        };

        ::aoc_runner::inventory::submit! {
            ::aoc_runner::SolutionPlugin {
                solution: &#name,
                tags: &[#(#tag_strs),*],
            }
        }
    })
}
