use std::{
    cell::RefCell,
    collections::HashMap,
    fmt::{self, Formatter},
    rc::Rc,
};

use crate::Value;

/// The configured return values of a method
///
/// The same sequence is handed out on every call until the method is
/// reconfigured, hence it is shared and immutable.
pub type Returns = Rc<[Value]>;

#[derive(Debug)]
struct Call {
    args: Vec<Vec<Value>>,
    rets: Returns,
}

/// Records calls and stores return values for every method of a mock
///
/// Every generated mock holds one `Mock` and dereferences to it, so
/// the methods below are called directly on the generated type.
/// Methods are keyed by name rather than by a generated type which
/// lets this one implementation back any trait. The price is that
/// misuse is only detected at call time: asking about a method that
/// was never configured through [`Mock::set_returns`] panics.
///
/// Nothing is locked and values are reference counted without
/// atomics, so a `Mock` stays on the thread that created it.
#[derive(Default)]
pub struct Mock {
    calls: RefCell<HashMap<String, Call>>,
}

impl Mock {
    pub fn new() -> Self {
        Mock::default()
    }

    /// Records a call to `name` with `args` and returns the values
    /// configured for it.
    ///
    /// # Panics
    ///
    /// If `name` was never configured.
    pub fn call_method(&self, name: &str, args: Vec<Value>) -> Returns {
        let mut calls = self.calls.borrow_mut();
        let call = calls.get_mut(name).unwrap_or_else(|| never_configured(name));
        call.args.push(args);
        call.rets.clone()
    }

    /// Configures what calls to `name` return.
    ///
    /// Values configured earlier are overwritten; calls recorded
    /// earlier are kept.
    pub fn set_returns(&self, name: &str, values: impl IntoIterator<Item = Value>) {
        let rets: Returns = values.into_iter().collect();

        use std::collections::hash_map::Entry;
        match self.calls.borrow_mut().entry(name.to_owned()) {
            Entry::Occupied(o) => o.into_mut().rets = rets,
            Entry::Vacant(v) => {
                v.insert(Call { args: vec![], rets });
            }
        }
    }

    /// Makes calls to `name` return nothing.
    ///
    /// Does nothing if `name` was never configured.
    pub fn clear_returns(&self, name: &str) {
        if let Some(call) = self.calls.borrow_mut().get_mut(name) {
            call.rets = Vec::new().into();
        }
    }

    /// Returns the argument at `position` of the `call`th call to
    /// `name`, both zero-based.
    ///
    /// # Panics
    ///
    /// If `name` was never configured or no such call or argument was
    /// recorded.
    pub fn call_param(&self, name: &str, call: usize, position: usize) -> Value {
        let calls = self.calls.borrow();
        let recorded = calls.get(name).unwrap_or_else(|| never_configured(name));

        let args = match recorded.args.get(call) {
            Some(args) => args,
            None => panic!(
                "moxie: method `{}` was called {} time(s); there is no call at index {}",
                name,
                recorded.args.len(),
                call
            ),
        };

        match args.get(position) {
            Some(arg) => arg.clone(),
            None => panic!(
                "moxie: call {} of method `{}` has {} argument(s); there is no argument at index {}",
                call,
                name,
                args.len(),
                position
            ),
        }
    }

    /// Returns how many times `name` was called.
    ///
    /// # Panics
    ///
    /// If `name` was never configured.
    pub fn call_count(&self, name: &str) -> usize {
        let calls = self.calls.borrow();
        let recorded = calls.get(name).unwrap_or_else(|| never_configured(name));
        recorded.args.len()
    }
}

fn never_configured(name: &str) -> ! {
    panic!(
        "moxie: no such method `{}`; configure it with `set_returns` first",
        name
    )
}

impl fmt::Debug for Mock {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // sort so the output does not depend on the hash order
        let calls = self.calls.borrow();
        let mut names: Vec<_> = calls.keys().collect();
        names.sort();

        let mut map = f.debug_map();
        for name in names {
            map.entry(name, &calls[name]);
        }
        map.finish()
    }
}
