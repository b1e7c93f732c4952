extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{self, parse_macro_input, Expr, ItemStruct, LitStr};

/// Register a struct as a builtin callable
///
/// ```ignore
/// #[builtin(sym = "c")]
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct PrimitiveC;
/// ```
///
/// An optional `kind` (`Infix`, `Prefix`, `PostfixCall("[", "]")`, ...)
/// determines how calls are deparsed. The `sym` is also scraped by `build.rs` to populate the table of
/// builtins that can be called by name.
///
#[proc_macro_attribute]
pub fn builtin(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut sym: Option<LitStr> = None;
    let mut kind: Option<Expr> = None;

    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("sym") {
            sym = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("kind") {
            kind = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported builtin property"))
        }
    });

    parse_macro_input!(attr with parser);
    let item = parse_macro_input!(item as ItemStruct);
    let what = &item.ident;

    let Some(sym) = sym else {
        return syn::Error::new(Span::call_site(), "builtin requires a `sym`")
            .to_compile_error()
            .into();
    };

    let kind = match kind {
        Some(kind) => quote! { #kind },
        None => quote! { Function },
    };

    let expanded = quote! {
        #item

        #[automatically_derived]
        impl crate::callable::core::CallableClone for #what {
            fn callable_clone(&self) -> Box<dyn crate::callable::core::Builtin> {
                Box::new(self.clone())
            }
        }

        #[automatically_derived]
        impl crate::callable::core::Builtin for #what {
            fn sym(&self) -> &'static str {
                #sym
            }

            fn kind(&self) -> crate::callable::core::SymKind {
                crate::callable::core::SymKind::#kind
            }
        }
    };

    TokenStream::from(expanded)
}
