//! Proc macros to help with lineshape-lib.
//!
//! The pool static is exported under a crate-specific symbol name, so the attribute macro can
//! reach it from any module without an import. Compare to
//! https://docs.rust-embedded.org/embedonomicon/singleton.html

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Expr, Ident, ItemFn, LitStr, Meta, Token};

/// The pool to be registered: `static POOL = LazyLock::new(|| build_pool());`.
struct PoolItem {
    attrs: Vec<Attribute>,
    ident: Ident,
    expr: Box<Expr>,
}

impl Parse for PoolItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        input.parse::<Token![static]>()?;
        let ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let expr = input.parse()?;
        input.parse::<Token![;]>()?;

        Ok(PoolItem { attrs, ident, expr })
    }
}

/// Returns the export name of the pool of the crate currently being compiled.
fn pool_symbol() -> String {
    const POOL_SYMBOL: &str = "__LINESHAPE_MACRO_INTERNALS_POOL";
    let crate_name = std::env::var("CARGO_PKG_NAME")
        .expect("CARGO_PKG_NAME must be set to the name of the calling crate")
        .replace('-', "_");

    format!("{POOL_SYMBOL}_{crate_name}")
}

/// Registers the given static as the rayon pool used by [use_thread_pool]. Must be called exactly
/// once per crate that uses [use_thread_pool].
///
/// The static gets the type `std::sync::LazyLock<rayon::ThreadPool>`, so no type is written.
/// Visibility and `#[export_name]` are set by this macro.
///
/// ```ignore
/// use lineshape_lib_derive::register_thread_pool;
///
/// register_thread_pool! {
///     static SAMPLING_POOL = LazyLock::new(|| ThreadPoolBuilder::new().build().unwrap());
/// }
/// ```
#[proc_macro]
pub fn register_thread_pool(input: TokenStream) -> TokenStream {
    let PoolItem { attrs, ident, expr } = syn::parse_macro_input!(input as PoolItem);

    for attr in &attrs {
        if let Meta::NameValue(name_value) = &attr.meta {
            if name_value.path.is_ident("export_name") {
                return syn::Error::new_spanned(attr, "'export_name' is set by register_thread_pool!")
                    .to_compile_error()
                    .into();
            }
        }
    }

    let used = if attrs.iter().any(|attr| attr.path().is_ident("used")) {
        quote!()
    } else {
        quote!(#[used])
    };
    let symbol = LitStr::new(&pool_symbol(), Span::call_site());

    TokenStream::from(quote! {
        #(#attrs)*
        #used
        #[export_name = #symbol]
        pub static #ident: ::std::sync::LazyLock<::rayon::ThreadPool> = #expr;
    })
}

/// Runs the body of the annotated function inside the pool registered with
/// [register_thread_pool], so every rayon iterator inside it uses that pool instead of the
/// global one. A `tracing` trace event naming the function is emitted on entry.
///
/// Used on all public entry points that sample a lineshape.
#[proc_macro_attribute]
pub fn use_thread_pool(_: TokenStream, input: TokenStream) -> TokenStream {
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = syn::parse_macro_input!(input as ItemFn);

    let symbol = Ident::new(&pool_symbol(), Span::call_site());
    let fn_name = sig.ident.to_string();

    TokenStream::from(quote! {
        #(#attrs)*
        #vis #sig {
            let body = move || #block;

            // SAFETY: the symbol is defined by register_thread_pool! in this crate, with exactly
            // this type.
            let pool = unsafe {
                extern "Rust" {
                    static #symbol: ::std::sync::LazyLock<::rayon::ThreadPool>;
                }
                &#symbol
            };
            ::tracing::trace!(function = #fn_name, threads = pool.current_num_threads(), "entering sampling pool");
            pool.install(body)
        }
    })
}
