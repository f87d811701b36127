//! Turns Rust traits into mock implementations backed by
//! [`moxie::Mock`](https://docs.rs/moxie).
//!
//! Generation runs in two steps:
//!
//! 1. [`extract`] parses a source file and returns one
//!    [`InterfaceDeclaration`] per trait it can mock.
//! 2. [`render`] turns a declaration into the source of its mock and
//!    [`Generator`] writes it next to the others as
//!    `<lower-cased trait name>_mock.rs`.
//!
//! ```
//! let source = r#"
//!     use std::fmt;
//!
//!     pub trait Greeter {
//!         fn greet(&self, name: String) -> Result<String, fmt::Error>;
//!     }
//! "#;
//!
//! let file = moxie_gen::extract("greeter", source).unwrap();
//! let greeter = &file.interfaces[0];
//! assert_eq!(greeter.file_name(), "greeter_mock.rs");
//!
//! let code = moxie_gen::render(greeter).unwrap();
//! assert!(code.contains("impl Greeter for GreeterMock"));
//! ```
//!
//! The generated file glob-imports the trait's module and repeats
//! every `use` item of the source file, whether or not the mock needs
//! it. Imports written relative to `self` (or relative to `super` in
//! `lib.rs`, `main.rs` and `mod.rs`) do not resolve from the mock's
//! module.

mod extract;
mod generate;
mod model;

pub use extract::{extract, extract_file, package_name, ExtractError, Rejection, SourceFile};
pub use generate::{mock_file, render, Failure, GenerateError, Generator, Report, HEADER};
pub use model::{InterfaceDeclaration, MethodSignature, Parameter, ReturnSlot, MOCK_FILE_SUFFIX};
