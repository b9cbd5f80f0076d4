//! Template-driven validation of nested maps.
//!
//! A [`Template`] declares the expected keys, each with a primitive type or a
//! nested template. Validation stops at the first failure.

pub mod template;
pub mod validator;

pub use template::{Template, TemplateBuilder, TemplateNode};
pub use validator::{check, validate, validate_at, validate_json};
