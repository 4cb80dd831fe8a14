//! A present-or-absent value type that speaks the ambient dialects of absence.
//!
//! [`Opt<V>`] wraps a `V` next to a presence flag and converts to and from:
//! - nullable references (`Option<&V>` in, `Option<Box<V>>` out)
//! - zero values, through the [`Zeroable`] capability
//! - JSON `null`, through serde
//! - NULL columns, through sqlx (feature `sqlx`)
//!
//! ```
//! use opt::Opt;
//!
//! let nothing = Opt::<String>::none();
//! let something = Opt::some("hello".to_string());
//!
//! assert_eq!(nothing.to_string(), "None[String]()");
//! assert_eq!(something.to_string(), "Some[String](hello)");
//! assert_eq!(nothing.value_or("world".to_string()), "world");
//! ```

extern crate self as opt;

pub mod aliases;
#[cfg(feature = "rand")]
pub mod generate;
pub mod json;
pub mod optional;
pub mod render;
#[cfg(feature = "sqlx")]
pub mod sql;
pub mod zero;

pub use aliases::*;
pub use optional::{none, some, Opt};
pub use opt_macros::{Render, Zeroable};
pub use render::{type_label, Render, Rendered, NIL};
pub use zero::{is_structural_zero, Zeroable};
