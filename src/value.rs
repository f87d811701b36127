use std::{
    any::{self, Any},
    fmt::{self, Formatter},
    rc::Rc,
};

/// A type-erased argument or return value
///
/// Generated mocks store every argument and every configured return
/// as a `Value` so one [`Mock`](crate::Mock) can back any trait. The
/// static type is only recovered at the point of use, either through
/// [`Value::cast`] or [`error`](crate::error).
///
/// A `Value` may also be *nil*, which is what an error slot holds
/// when the stubbed method should succeed.
#[derive(Clone)]
pub struct Value {
    inner: Option<Rc<dyn Any>>,
    // the payload is opaque once erased so remember what it was for
    // debugging purposes
    type_name: &'static str,
}

impl Value {
    /// Erases `value`.
    ///
    /// Passing in a `Value` returns it as is instead of nesting it,
    /// so [`nil`] can be mixed with regular values in [`values!`].
    ///
    /// [`values!`]: crate::values
    pub fn new<T: Any>(value: T) -> Self {
        let boxed: Box<dyn Any> = Box::new(value);
        match boxed.downcast::<Value>() {
            Ok(value) => *value,
            Err(boxed) => Value {
                inner: Some(Rc::from(boxed)),
                type_name: any::type_name::<T>(),
            },
        }
    }

    /// The absence of a value
    pub fn nil() -> Self {
        Value {
            inner: None,
            type_name: "nil",
        }
    }

    pub fn is_nil(&self) -> bool {
        self.inner.is_none()
    }

    /// Name of the type this value was created from, `"nil"` for nil
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns a reference to the payload if it is of type `T`
    ///
    /// `None` is returned for nil values and for payloads of any
    /// other type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.as_deref().and_then(|inner| inner.downcast_ref())
    }

    /// Recovers a clone of the payload as a `T`.
    ///
    /// # Panics
    ///
    /// If the value is nil or was not created from a `T`.
    pub fn cast<T: Any + Clone>(&self) -> T {
        if self.is_nil() {
            panic!(
                "moxie: cannot cast nil to `{}`; configure a value for this slot",
                any::type_name::<T>()
            );
        }

        match self.downcast_ref::<T>() {
            Some(value) => value.clone(),
            None => panic!(
                "moxie: expected a value of type `{}` but found `{}`",
                any::type_name::<T>(),
                self.type_name
            ),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // do not try to look into the erased payload
        match self.inner {
            None => f.write_str("nil"),
            Some(_) => write!(f, "Value({})", self.type_name),
        }
    }
}

/// Shorthand for [`Value::nil`]
pub fn nil() -> Value {
    Value::nil()
}

/// Converts an erased return slot back into an optional error.
///
/// Generated code calls this for the error half of a `Result` return
/// since it cannot statically tell "no error" apart from "some error"
/// when reading an erased slot. A nil value means no error.
///
/// # Panics
///
/// If the value is neither nil nor an `E`.
pub fn error<E: Any + Clone>(value: &Value) -> Option<E> {
    if value.is_nil() {
        return None;
    }

    match value.downcast_ref::<E>() {
        Some(error) => Some(error.clone()),
        None => panic!(
            "moxie: expected nil or an error of type `{}` but found `{}`",
            any::type_name::<E>(),
            value.type_name()
        ),
    }
}

/// Erases every argument into a `Vec<Value>`
///
/// ```
/// let values = moxie::values!["hi".to_string(), moxie::nil()];
/// assert_eq!(values.len(), 2);
/// assert!(values[1].is_nil());
/// ```
#[macro_export]
macro_rules! values {
    ($($value:expr),* $(,)?) => {
        ::std::vec![$($crate::Value::new($value)),*]
    };
}
