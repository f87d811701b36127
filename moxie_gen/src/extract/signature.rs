use super::unsupported;
use crate::{MethodSignature, Parameter, ReturnSlot};

/// Flattens a trait method into a [`MethodSignature`].
///
/// Fails for methods a forwarding method cannot be written for.
pub fn method_signature(sig: &syn::Signature) -> darling::Result<MethodSignature> {
    let mut errors = darling::Error::accumulator();

    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        errors.push(unsupported("generic methods", &sig.generics));
    }
    if let Some(asyncness) = &sig.asyncness {
        errors.push(unsupported("async methods", asyncness));
    }
    if let Some(unsafety) = &sig.unsafety {
        errors.push(unsupported("unsafe methods", unsafety));
    }
    if let Some(constness) = &sig.constness {
        errors.push(unsupported("const methods", constness));
    }
    if let Some(abi) = &sig.abi {
        errors.push(unsupported("extern methods", abi));
    }
    if let Some(variadic) = &sig.variadic {
        errors.push(unsupported("variadic methods", variadic));
    }

    let receiver = match sig.receiver() {
        Some(receiver) => receiver_text(receiver),
        None => {
            errors.push(unsupported("methods without a self receiver", &sig.ident));
            String::new()
        }
    };

    let params: Vec<_> = sig
        .inputs
        .iter()
        .filter_map(|arg| match arg {
            syn::FnArg::Receiver(_) => None,
            syn::FnArg::Typed(arg) => Some(arg),
        })
        .enumerate()
        .map(|(i, arg)| {
            if let syn::Type::ImplTrait(impl_trait) = arg.ty.as_ref() {
                errors.push(unsupported("`impl Trait` arguments", impl_trait));
            }
            Parameter {
                name: param_name(i, &arg.pat),
                ty: type_text(&arg.ty),
            }
        })
        .collect();

    errors.finish_with(MethodSignature {
        name: sig.ident.to_string(),
        receiver,
        params,
        returns: return_slots(&sig.output),
    })
}

// patterns other than plain bindings have no name to forward so one
// is made up from the position
fn param_name(index: usize, pat: &syn::Pat) -> String {
    match pat {
        syn::Pat::Ident(pat_ident) if pat_ident.subpat.is_none() => pat_ident.ident.to_string(),
        _ => format!("arg{index}"),
    }
}

fn receiver_text(receiver: &syn::Receiver) -> String {
    if receiver.colon_token.is_some() {
        return format!("self: {}", type_text(&receiver.ty));
    }

    match &receiver.reference {
        None => "self".to_owned(),
        Some((_, lifetime)) => {
            let lifetime = lifetime
                .as_ref()
                .map(|lifetime| format!("{lifetime} "))
                .unwrap_or_default();
            let mutability = if receiver.mutability.is_some() {
                "mut "
            } else {
                ""
            };
            format!("&{lifetime}{mutability}self")
        }
    }
}

fn return_slots(output: &syn::ReturnType) -> Vec<ReturnSlot> {
    let ty = match output {
        syn::ReturnType::Default => return vec![],
        syn::ReturnType::Type(_, ty) => ty.as_ref(),
    };

    match split_result(ty) {
        Some((ok, err)) => {
            let mut slots = value_slots(ok);
            slots.push(ReturnSlot::error(type_text(err)));
            slots
        }
        None => value_slots(ty),
    }
}

fn value_slots(ty: &syn::Type) -> Vec<ReturnSlot> {
    match ty {
        syn::Type::Paren(paren) => value_slots(&paren.elem),
        // a one element tuple is a type of its own
        syn::Type::Tuple(tuple) if tuple.elems.len() != 1 => tuple
            .elems
            .iter()
            .map(|elem| ReturnSlot::value(type_text(elem)))
            .collect(),
        ty => vec![ReturnSlot::value(type_text(ty))],
    }
}

// only a bare `Result<T, E>` is split; aliases such as `io::Result<T>`
// stay a single slot
fn split_result(ty: &syn::Type) -> Option<(&syn::Type, &syn::Type)> {
    let syn::Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some()
        || type_path.path.leading_colon.is_some()
        || type_path.path.segments.len() != 1
    {
        return None;
    }

    let segment = &type_path.path.segments[0];
    if segment.ident != "Result" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(generics) = &segment.arguments else {
        return None;
    };

    let mut args = generics.args.iter();
    match (args.next(), args.next(), args.next()) {
        (Some(syn::GenericArgument::Type(ok)), Some(syn::GenericArgument::Type(err)), None) => {
            Some((ok, err))
        }
        _ => None,
    }
}

/// Source text of a type, formatted the same way no matter how it was
/// written
pub fn type_text(ty: &syn::Type) -> String {
    let alias: syn::File = syn::parse_quote! { type __Moxie = #ty; };
    let text = prettyplease::unparse(&alias);
    let text = text.trim();
    let text = text.strip_prefix("type __Moxie = ").unwrap_or(text);
    let text = text.strip_suffix(';').unwrap_or(text);
    text.to_owned()
}
