use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct GreetError(pub String);

impl fmt::Display for GreetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot greet {}", self.0)
    }
}

impl std::error::Error for GreetError {}

pub trait Greeter {
    fn greet(&self, name: String) -> Result<String, GreetError>;

    fn shout(&mut self, name: String, times: u32) -> (String, usize);

    fn reset(&self);

    fn close(self: Box<Self>) -> Result<(), GreetError>;
}

/// Greets everyone in `names` through `greeter`, stopping at the
/// first failure.
pub fn greet_all(greeter: &dyn Greeter, names: &[&str]) -> Result<Vec<String>, GreetError> {
    names
        .iter()
        .map(|name| greeter.greet(name.to_string()))
        .collect()
}
