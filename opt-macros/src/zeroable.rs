use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Index};

use crate::utils::{add_trait_bound, has_flag, zeroable_bound};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new_spanned(name, "Zeroable can only be derived for structs")
            .to_compile_error()
            .into();
    };

    let mut checks = Vec::new();

    match &data_struct.fields {
        Fields::Named(fields) => {
            for field in fields.named.iter() {
                if has_flag(&field.attrs, "zeroable", "skip") {
                    continue;
                }
                let Some(field_name) = field.ident.as_ref() else {
                    continue;
                };
                checks.push(quote! {
                    ::opt::Zeroable::is_zero(&self.#field_name)
                });
            }
        }
        Fields::Unnamed(fields) => {
            for (position, field) in fields.unnamed.iter().enumerate() {
                if has_flag(&field.attrs, "zeroable", "skip") {
                    continue;
                }
                let index = Index::from(position);
                checks.push(quote! {
                    ::opt::Zeroable::is_zero(&self.#index)
                });
            }
        }
        Fields::Unit => {}
    }

    let generics = add_trait_bound(input.generics.clone(), zeroable_bound());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::opt::Zeroable for #name #ty_generics #where_clause {
            fn is_zero(&self) -> bool {
                true #(&& #checks)*
            }
        }
    };

    TokenStream::from(expanded)
}
