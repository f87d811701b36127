mod signature;

use std::{fs, io, path::Path};

use syn::spanned::Spanned;
use thiserror::Error;

use crate::InterfaceDeclaration;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read source: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse source at {line}:{column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
}

impl From<syn::Error> for ExtractError {
    fn from(error: syn::Error) -> Self {
        let start = error.span().start();
        ExtractError::Parse {
            line: start.line,
            // columns are zero-based
            column: start.column + 1,
            message: error.to_string(),
        }
    }
}

/// Everything found in one source file
#[derive(Debug)]
pub struct SourceFile {
    pub package: String,
    pub imports: Vec<String>,
    /// Traits a mock can be generated for, in declaration order
    pub interfaces: Vec<InterfaceDeclaration>,
    /// Traits using syntax a mock cannot be generated for
    pub rejected: Vec<Rejection>,
}

/// Why a trait was not turned into an [`InterfaceDeclaration`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub interface: String,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// Reads and extracts the file at `path`.
///
/// The package is derived from the file stem, see [`package_name`].
pub fn extract_file(path: &Path) -> Result<SourceFile, ExtractError> {
    let source = fs::read_to_string(path)?;
    extract(&package_name(path), &source)
}

/// Name of the module the file at `path` defines, relative to the
/// directory it lives in.
///
/// `lib.rs`, `main.rs` and `mod.rs` define the module of their
/// directory; mocks generated next to them are its children so their
/// package is empty.
pub fn package_name(path: &Path) -> String {
    match path.file_stem().and_then(|stem| stem.to_str()) {
        Some("lib") | Some("main") | Some("mod") | None => String::new(),
        Some(stem) => stem.to_owned(),
    }
}

/// Extracts every trait declared at the top level of `source`.
///
/// `package` and the file's `use` items are attached to every
/// extracted trait. Traits that cannot be mocked are reported in
/// [`SourceFile::rejected`] instead of being skipped silently.
pub fn extract(package: &str, source: &str) -> Result<SourceFile, ExtractError> {
    let file = syn::parse_file(source)?;

    let imports: Vec<_> = file
        .items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Use(item_use) => Some(import_text(item_use)),
            _ => None,
        })
        .collect();

    let mut interfaces = vec![];
    let mut rejected = vec![];
    for item in &file.items {
        let syn::Item::Trait(item_trait) = item else {
            continue;
        };

        let name = item_trait.ident.to_string();
        match interface_methods(item_trait) {
            Ok(methods) => {
                tracing::debug!(interface = %name, methods = methods.len(), "extracted trait");
                interfaces.push(InterfaceDeclaration {
                    package: package.to_owned(),
                    imports: imports.clone(),
                    name,
                    methods,
                });
            }
            Err(errors) => rejected.extend(errors.into_iter().map(|error| {
                let start = error.span().start();
                Rejection {
                    interface: name.clone(),
                    line: start.line,
                    column: start.column + 1,
                    message: error.to_string(),
                }
            })),
        }
    }

    Ok(SourceFile {
        package: package.to_owned(),
        imports,
        interfaces,
        rejected,
    })
}

fn interface_methods(
    item_trait: &syn::ItemTrait,
) -> darling::Result<Vec<crate::MethodSignature>> {
    let mut errors = darling::Error::accumulator();

    if !item_trait.generics.params.is_empty() || item_trait.generics.where_clause.is_some() {
        errors.push(unsupported("generic traits", &item_trait.generics));
    }
    if !item_trait.supertraits.is_empty() {
        errors.push(unsupported("supertraits", &item_trait.supertraits));
    }
    if let Some(unsafety) = &item_trait.unsafety {
        errors.push(unsupported("unsafe traits", unsafety));
    }
    if let Some(auto_token) = &item_trait.auto_token {
        errors.push(unsupported("auto traits", auto_token));
    }

    let mut methods = vec![];
    for item in &item_trait.items {
        match item {
            // nothing to forward through; the mock inherits the default
            syn::TraitItem::Fn(method)
                if method.default.is_some() && method.sig.receiver().is_none() =>
            {
                tracing::debug!(
                    interface = %item_trait.ident,
                    method = %method.sig.ident,
                    "skipping default method without a receiver"
                );
            }
            syn::TraitItem::Fn(method) => {
                if let Some(method) = errors.handle(signature::method_signature(&method.sig)) {
                    methods.push(method);
                }
            }
            syn::TraitItem::Const(item) => {
                errors.push(unsupported("associated constants", item));
            }
            syn::TraitItem::Type(item) => errors.push(unsupported("associated types", item)),
            syn::TraitItem::Macro(item) => errors.push(unsupported("macros in traits", item)),
            other => errors.push(unsupported("this trait item", other)),
        }
    }

    errors.finish_with(methods)
}

fn unsupported(what: &str, node: &impl Spanned) -> darling::Error {
    darling::Error::custom(format!("moxie does not support {what}")).with_span(node)
}

// pretty-printed so every import reads the same regardless of how it
// was formatted in the source
fn import_text(item_use: &syn::ItemUse) -> String {
    let file = syn::File {
        shebang: None,
        attrs: vec![],
        items: vec![syn::Item::Use(item_use.clone())],
    };
    prettyplease::unparse(&file).trim().to_owned()
}
