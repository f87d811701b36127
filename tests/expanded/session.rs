use std::cell::RefCell;
use std::rc::Rc;

/// Login state shared between the caller and the service
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: String,
    pub seen: Rc<RefCell<u32>>,
}

pub trait Login {
    fn login(&self, session: Session) -> u8;

    fn current(&self) -> Session;

    fn version() -> u32
    where
        Self: Sized,
    {
        1
    }
}
