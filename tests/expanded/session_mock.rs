// @generated by moxie. Do not edit.

use super::session::*;
use std::cell::RefCell;
use std::rc::Rc;
use moxie::Mock;

/// Mock implementation of [`Login`] generated by moxie.
#[derive(Debug)]
pub struct LoginMock {
    mock: Mock,
}

impl LoginMock {
    pub fn new() -> Self {
        LoginMock { mock: Mock::new() }
    }
}

impl Default for LoginMock {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for LoginMock {
    type Target = Mock;

    fn deref(&self) -> &Mock {
        &self.mock
    }
}

impl Login for LoginMock {
    fn login(&self, session: Session) -> u8 {
        let rets = self.mock.call_method("login", vec![moxie::Value::new(session)]);
        rets[0].cast::<u8>()
    }

    fn current(&self) -> Session {
        let rets = self.mock.call_method("current", vec![]);
        rets[0].cast::<Session>()
    }
}
