//! `json-shape` — composable runtime validation for JSON values.
//!
//! A schema is a tree of [`Validator`] nodes: primitive leaves
//! ([`string`], [`number`], [`integer`], [`boolean`], [`null`],
//! [`undefined`], [`exact`], [`regex`]) composed by [`object`],
//! [`array_of`], [`map_of`], [`one_of`], [`nullable`], [`optional`] and
//! [`custom`]. Build the tree once, then ask it two questions about any
//! untyped value: does it conform ([`Validator::is_valid`]), and if not,
//! what exactly is wrong ([`Validator::get_messages`]). The two answers
//! always agree: diagnostics are empty exactly when the value is valid.
//!
//! Validation never mutates or coerces the input, and a schema tree is
//! immutable after construction, so one tree can serve any number of
//! concurrent callers.
//!
//! # Example
//!
//! ```
//! use json_shape::{array_of, boolean, number, object, optional, string};
//! use serde_json::json;
//!
//! let schema = object([
//!     ("name", string()),
//!     ("age", number()),
//!     ("cool", optional(boolean())),
//!     ("powers", array_of(string())),
//! ]);
//!
//! let body = json!({"name": "Superman", "age": 30, "powers": ["flight"]});
//! assert!(schema.is_valid(&body));
//!
//! let partial = json!({"name": "Superman"});
//! assert_eq!(
//!     schema.get_messages(&partial, "input"),
//!     vec![
//!         "\"input\".\"age\" is not a number".to_string(),
//!         "\"input\".\"powers\" is not an array".to_string(),
//!     ],
//! );
//! ```

pub mod build;
pub mod error;
pub mod input;
pub mod message;
pub mod validator;

// Re-export the core public API
pub use build::{
    array_of, boolean, custom, exact, integer, map_of, null, nullable, number, object, one_of,
    optional, regex, regex_with_message, string, undefined,
};
pub use error::ValidationError;
pub use input::Input;
pub use validator::Validator;

// Re-export so schemas can be built without a direct `regex` dependency.
pub use regex::Regex;
