//! `#[bootstrap]` - turns a registration function into a collected unit.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Ident, ItemFn, LitStr, ReturnType, Token, parse::Parse, parse_macro_input};

/// Arguments for the `#[bootstrap]` macro.
pub(crate) struct BootstrapArgs {
    /// Explicit unit name.
    pub name: Option<LitStr>,
}

impl Parse for BootstrapArgs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    name = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(BootstrapArgs { name })
    }
}

pub(crate) fn bootstrap_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as BootstrapArgs);
    let input = parse_macro_input!(item as ItemFn);
    let fn_name = &input.sig.ident;

    if let Some(asyncness) = &input.sig.asyncness {
        return syn::Error::new_spanned(asyncness, "bootstrap function must not be async")
            .to_compile_error()
            .into();
    }

    if input.sig.inputs.len() != 2 {
        return syn::Error::new_spanned(
            &input.sig.inputs,
            "bootstrap function must take `(ext: &Dispatcher, di: &Di)`",
        )
        .to_compile_error()
        .into();
    }

    let name = match &args.name {
        Some(lit) => quote! { #lit },
        None => quote! { ::core::concat!(::core::module_path!(), "::", ::core::stringify!(#fn_name)) },
    };

    let call = match &input.sig.output {
        ReturnType::Default => quote! {
            #fn_name(ext, di);
            ::core::result::Result::Ok(())
        },
        ReturnType::Type(..) => quote! {
            #fn_name(ext, di).map_err(::core::convert::Into::into)
        },
    };

    let expanded = quote! {
        #input

        ::xtpoint::inventory::submit! {
            ::xtpoint::loader::CollectedUnit::new(#name, {
                fn __xtpoint_bootstrap(
                    ext: &::xtpoint::Dispatcher,
                    di: &::xtpoint::loader::Di,
                ) -> ::core::result::Result<(), ::xtpoint::BoxError> {
                    #call
                }
                __xtpoint_bootstrap
            })
        }
    };

    TokenStream::from(expanded)
}
