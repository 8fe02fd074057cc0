use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, ItemFn};

/// Test attribute shared by the rxsingle test-suite.
///
/// - A plain `fn` becomes a regular `#[test]`.
/// - An `async fn` runs on a current-thread tokio runtime with paused time,
///   inside a `LocalSet`, so `LocalScheduler` tasks can be spawned and timers
///   advance as soon as the runtime is idle.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
  let input = parse_macro_input!(item as ItemFn);

  let raw_args = proc_macro2::TokenStream::from(attr);
  if !raw_args.is_empty() {
    return TokenStream::from(
      syn::Error::new(raw_args.span(), "rxsingle_macro::test takes no arguments")
        .to_compile_error(),
    );
  }

  if input.sig.asyncness.is_none() {
    return TokenStream::from(quote! {
      #[test]
      #input
    });
  }

  let ItemFn { attrs, vis, sig, block } = input;
  let expanded = quote! {
    #(#attrs)*
    #[::tokio::test(flavor = "current_thread", start_paused = true)]
    #vis #sig {
      ::tokio::task::LocalSet::new().run_until(async move #block).await
    }
  };

  TokenStream::from(expanded)
}
