use proc_macro::TokenStream;

mod render;
mod utils;
mod zeroable;

/// Derives `opt::Zeroable` with the structural rule: a value is zero when
/// every field is zero.
///
/// Fields marked `#[zeroable(skip)]` do not take part in the check.
#[proc_macro_derive(Zeroable, attributes(zeroable))]
pub fn zeroable_derive(input: TokenStream) -> TokenStream {
    zeroable::derive(input)
}

/// Derives `opt::Render` by forwarding to the type's `Display` impl.
#[proc_macro_derive(Render)]
pub fn render_derive(input: TokenStream) -> TokenStream {
    render::derive(input)
}
