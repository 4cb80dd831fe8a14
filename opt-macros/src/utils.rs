use syn::{parse_quote, Attribute, Generics};

/// Check if attribute contains a specific flag like `skip`
pub fn has_attr_flag(attr: &Attribute, flag: &str) -> bool {
    let mut found = false;
    let _ = attr.parse_nested_meta(|meta| {
        if meta.path.is_ident(flag) {
            found = true;
        }
        Ok(())
    });
    found
}

/// Check whether any `#[name(flag)]` attribute is present on an item
pub fn has_flag(attrs: &[Attribute], name: &str, flag: &str) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(name))
        .any(|attr| has_attr_flag(attr, flag))
}

/// Add `bound` to every type parameter of `generics`
pub fn add_trait_bound(mut generics: Generics, bound: syn::TypeParamBound) -> Generics {
    for param in generics.type_params_mut() {
        param.bounds.push(bound.clone());
    }
    generics
}

pub fn zeroable_bound() -> syn::TypeParamBound {
    parse_quote!(::opt::Zeroable)
}
