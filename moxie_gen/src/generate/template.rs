use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote, ToTokens};
use syn::ext::IdentExt;

use super::GenerateError;
use crate::{InterfaceDeclaration, MethodSignature};

/// Builds the syntax tree of the mock for `interface`.
///
/// The file glob-imports the module the trait was declared in, the
/// way a file of the same package would see it, followed by every
/// import of the source file and the runtime.
pub fn mock_file(interface: &InterfaceDeclaration) -> Result<syn::File, GenerateError> {
    let package = if interface.package.is_empty() {
        quote! { use super::*; }
    } else {
        let package: syn::Ident = parse("module name", &interface.package)?;
        quote! { use super::#package::*; }
    };

    let imports = interface
        .imports
        .iter()
        .map(|import| parse::<syn::ItemUse>("import", import))
        .collect::<Result<Vec<_>, _>>()?;

    let name: syn::Ident = parse("trait name", &interface.name)?;
    let mock_name = format_ident!("{}Mock", name);
    let doc = format!(" Mock implementation of [`{}`] generated by moxie.", name.unraw());

    let methods = interface
        .methods
        .iter()
        .map(forwarding_method)
        .collect::<Result<Vec<_>, _>>()?;

    let tokens = quote! {
        #package
        #(#imports)*
        use moxie::Mock;

        #[doc = #doc]
        #[derive(Debug)]
        pub struct #mock_name {
            mock: Mock,
        }

        impl #mock_name {
            pub fn new() -> Self {
                #mock_name { mock: Mock::new() }
            }
        }

        impl Default for #mock_name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::ops::Deref for #mock_name {
            type Target = Mock;

            fn deref(&self) -> &Mock {
                &self.mock
            }
        }

        impl #name for #mock_name {
            #(#methods)*
        }
    };

    parse_tokens("mock file", tokens)
}

// every parameter is recorded under the method's name and every
// return slot is cast back to its declared type
fn forwarding_method(method: &MethodSignature) -> Result<syn::ImplItemFn, GenerateError> {
    let name: syn::Ident = parse("method name", &method.name)?;
    let key = name.unraw().to_string();
    let receiver: syn::Receiver = parse("receiver", &method.receiver)?;

    let mut param_names = vec![];
    let mut inputs = vec![receiver.into_token_stream()];
    for param in &method.params {
        let param_name: syn::Ident = parse("parameter name", &param.name)?;
        let ty: syn::Type = parse("type", &param.ty)?;
        inputs.push(quote! { #param_name: #ty });
        param_names.push(param_name);
    }

    let call = quote! {
        self.mock.call_method(#key, vec![#(moxie::Value::new(#param_names)),*])
    };

    let returns = Returns::new(method)?;
    let ok_ty = returns.ok_type();
    let ok = returns.ok_expr();

    let tokens = match (&returns.error, returns.values.is_empty()) {
        (Some((index, err_ty)), _) => quote! {
            fn #name(#(#inputs),*) -> Result<#ok_ty, #err_ty> {
                let rets = #call;
                match moxie::error::<#err_ty>(&rets[#index]) {
                    Some(err) => Err(err),
                    None => Ok(#ok),
                }
            }
        },
        (None, true) => quote! {
            fn #name(#(#inputs),*) {
                #call;
            }
        },
        (None, false) => quote! {
            fn #name(#(#inputs),*) -> #ok_ty {
                let rets = #call;
                #ok
            }
        },
    };

    parse_tokens("forwarding method", tokens)
}

struct Returns {
    values: Vec<(Literal, syn::Type)>,
    error: Option<(Literal, syn::Type)>,
}

impl Returns {
    fn new(method: &MethodSignature) -> Result<Self, GenerateError> {
        let mut values = vec![];
        let mut error = None;

        for (i, slot) in method.returns.iter().enumerate() {
            let ty: syn::Type = parse("type", &slot.ty)?;
            // unsuffixed so indices read `rets[0]` rather than `rets[0usize]`
            let index = Literal::usize_unsuffixed(i);
            if !slot.is_error {
                values.push((index, ty));
            } else if i + 1 == method.returns.len() {
                error = Some((index, ty));
            } else {
                return Err(GenerateError::MisplacedError {
                    method: method.name.clone(),
                });
            }
        }

        Ok(Returns { values, error })
    }

    fn ok_type(&self) -> TokenStream {
        match self.values.as_slice() {
            [] => quote! { () },
            [(_, ty)] => ty.to_token_stream(),
            values => {
                let tys = values.iter().map(|(_, ty)| ty);
                quote! { (#(#tys),*) }
            }
        }
    }

    fn ok_expr(&self) -> TokenStream {
        let mut casts = self
            .values
            .iter()
            .map(|(index, ty)| quote! { rets[#index].cast::<#ty>() });

        match self.values.len() {
            0 => quote! { () },
            1 => casts.next().unwrap_or_default(),
            _ => quote! { (#(#casts),*) },
        }
    }
}

fn parse<T: syn::parse::Parse>(kind: &'static str, text: &str) -> Result<T, GenerateError> {
    syn::parse_str(text).map_err(|source| GenerateError::Syntax {
        kind,
        text: text.to_owned(),
        source,
    })
}

fn parse_tokens<T: syn::parse::Parse>(
    kind: &'static str,
    tokens: TokenStream,
) -> Result<T, GenerateError> {
    let text = tokens.to_string();
    syn::parse2(tokens).map_err(|source| GenerateError::Syntax { kind, text, source })
}
