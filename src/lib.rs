//! Runtime support for mocks generated by `moxie`.
//!
//! Every generated mock wraps a single [`Mock`] which records the
//! arguments of each call and hands back the values configured for
//! the called method. Arguments and return values are stored
//! type-erased as [`Value`]s; the generated forwarding methods
//! recover their static types with [`Value::cast`] and [`error`].
//!
//! ```
//! use moxie::{nil, values, Mock};
//!
//! let mock = Mock::new();
//! mock.set_returns("greet", values!["hi".to_string(), nil()]);
//!
//! let rets = mock.call_method("greet", values!["bob".to_string()]);
//! assert_eq!(rets[0].cast::<String>(), "hi");
//! assert_eq!(moxie::error::<std::fmt::Error>(&rets[1]), None);
//!
//! assert_eq!(mock.call_count("greet"), 1);
//! assert_eq!(mock.call_param("greet", 0, 0).cast::<String>(), "bob");
//! ```
//!
//! Misusing a mock, such as calling a method that was never
//! configured or asking for a call that never happened, panics and
//! fails the test.

mod mock;
mod value;

pub use mock::{Mock, Returns};
pub use value::{error, nil, Value};
