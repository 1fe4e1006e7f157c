use proc_macro2::TokenStream;

/// An empty token stream, for optional pieces of generated code.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}
