use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate an immutable three component color model with an alpha channel.
///
/// The struct name must match both the `Space` tag and the `Color` variant
/// that holds the model.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Model components must be named.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Components can only be read through accessors.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Inherited;
    });

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    if let syn::Fields::Named(ref mut named) = input.fields {
        named.named.push(
            syn::Field::parse_named
                .parse2(syn::parse_quote! {
                    alpha: crate::color::Component
                })
                .unwrap(),
        );
    }

    let accessors = field_names.iter().map(|name| {
        let doc = format!(" Return the {} component of the color.", name);
        quote! {
            #[doc = #doc]
            pub fn #name(&self) -> crate::color::Component {
                self.#name
            }
        }
    });

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            #(#accessors)*

            /// Return the alpha component of the color.
            pub fn alpha(&self) -> crate::color::Component {
                self.alpha
            }

            /// Return the three color components in declaration order.
            pub fn components(&self) -> [crate::color::Component; 3] {
                [self.#field1, self.#field2, self.#field3]
            }

            /// Build the model without validating the components. Only used
            /// by conversions that already produce values in range.
            pub(crate) fn from_parts(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
                alpha: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    alpha,
                }
            }
        }

        impl crate::color::HasSpace for #struct_name {
            const SPACE: crate::color::Space = crate::color::Space::#struct_name;
        }

        impl From<#struct_name> for crate::color::Color {
            fn from(value: #struct_name) -> Self {
                crate::color::Color::#struct_name(value)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
