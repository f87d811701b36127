/// Suffix appended to the lower-cased trait name to name its mock file
pub const MOCK_FILE_SUFFIX: &str = "_mock.rs";

/// A trait found in a source file
///
/// `package` and `imports` describe the whole file the trait was
/// declared in; every trait of the same file carries the same values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDeclaration {
    /// Module the file defines relative to its parent; empty for
    /// `lib.rs`, `main.rs` and `mod.rs`
    pub package: String,
    /// Every top-level `use` item of the file, in order
    pub imports: Vec<String>,
    pub name: String,
    pub methods: Vec<MethodSignature>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    /// `&self`, `&mut self`, `self` or `self: <type>`
    pub receiver: String,
    pub params: Vec<Parameter>,
    pub returns: Vec<ReturnSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
}

/// One positional return value
///
/// `Result<T, E>` returns are split into the slots of `T` followed by
/// an error slot for `E`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnSlot {
    pub ty: String,
    pub is_error: bool,
}

impl InterfaceDeclaration {
    pub fn mock_name(&self) -> String {
        format!("{}Mock", self.name)
    }

    /// Name of the generated file
    ///
    /// Traits whose names only differ by case share a file name.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.name.to_lowercase(), MOCK_FILE_SUFFIX)
    }
}

impl ReturnSlot {
    pub fn value(ty: impl Into<String>) -> Self {
        ReturnSlot {
            ty: ty.into(),
            is_error: false,
        }
    }

    pub fn error(ty: impl Into<String>) -> Self {
        ReturnSlot {
            ty: ty.into(),
            is_error: true,
        }
    }
}
