// @generated by moxie. Do not edit.

use super::greeter::*;
use std::fmt;
use moxie::Mock;

/// Mock implementation of [`Greeter`] generated by moxie.
#[derive(Debug)]
pub struct GreeterMock {
    mock: Mock,
}

impl GreeterMock {
    pub fn new() -> Self {
        GreeterMock { mock: Mock::new() }
    }
}

impl Default for GreeterMock {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for GreeterMock {
    type Target = Mock;

    fn deref(&self) -> &Mock {
        &self.mock
    }
}

impl Greeter for GreeterMock {
    fn greet(&self, name: String) -> Result<String, GreetError> {
        let rets = self.mock.call_method("greet", vec![moxie::Value::new(name)]);
        match moxie::error::<GreetError>(&rets[1]) {
            Some(err) => Err(err),
            None => Ok(rets[0].cast::<String>()),
        }
    }

    fn shout(&mut self, name: String, times: u32) -> (String, usize) {
        let rets = self
            .mock
            .call_method("shout", vec![moxie::Value::new(name), moxie::Value::new(times)]);
        (rets[0].cast::<String>(), rets[1].cast::<usize>())
    }

    fn reset(&self) {
        self.mock.call_method("reset", vec![]);
    }

    fn close(self: Box<Self>) -> Result<(), GreetError> {
        let rets = self.mock.call_method("close", vec![]);
        match moxie::error::<GreetError>(&rets[0]) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
