use proc_macro::{self, TokenStream};
use quote::quote;
use syn::{parse_macro_input, AttributeArgs, DeriveInput, Ident, Meta, NestedMeta};

#[proc_macro_attribute]
pub fn handler(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as AttributeArgs);
    let ast = parse_macro_input!(input as DeriveInput);
    expand(args, ast, Kind::Handler)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

#[proc_macro_attribute]
pub fn handler_builder(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as AttributeArgs);
    let ast = parse_macro_input!(input as DeriveInput);
    expand(args, ast, Kind::Builder)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

enum Kind {
    Handler,
    Builder,
}

fn expand(
    args: AttributeArgs,
    ast: DeriveInput,
    kind: Kind,
) -> syn::Result<proc_macro2::TokenStream> {
    if !matches!(ast.data, syn::Data::Struct(_)) {
        return Err(syn::Error::new_spanned(
            &ast.ident,
            "template attributes have to be used with structs",
        ));
    }

    let templates = args
        .iter()
        .map(template_name)
        .collect::<syn::Result<Vec<_>>>()?;

    let struct_name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let tokens = match kind {
        Kind::Handler => {
            let accessors = templates.iter().map(|template| {
                quote! {
                    fn #template(
                        &self,
                    ) -> ::std::option::Option<&dyn mixer_example_adapter::template::#template::Handler> {
                        ::std::option::Option::Some(self)
                    }
                }
            });
            quote! {
                #ast
                impl #impl_generics mixer_example_adapter::adapter::HandlerTemplates
                    for #struct_name #ty_generics #where_clause
                {
                    #(#accessors)*
                }
            }
        }
        Kind::Builder => {
            let accessors = templates.iter().map(|template| {
                quote! {
                    fn #template(
                        &mut self,
                    ) -> ::std::option::Option<&mut dyn mixer_example_adapter::template::#template::HandlerBuilder> {
                        ::std::option::Option::Some(self)
                    }
                }
            });
            quote! {
                #ast
                impl #impl_generics mixer_example_adapter::adapter::BuilderTemplates
                    for #struct_name #ty_generics #where_clause
                {
                    #(#accessors)*
                }
            }
        }
    };

    Ok(tokens)
}

fn template_name(arg: &NestedMeta) -> syn::Result<Ident> {
    match arg {
        NestedMeta::Meta(Meta::Path(path)) => path.get_ident().cloned().ok_or_else(|| {
            syn::Error::new_spanned(path, "expected a template name like `checknothing`")
        }),
        other => Err(syn::Error::new_spanned(
            other,
            "expected a template name like `checknothing`",
        )),
    }
}
