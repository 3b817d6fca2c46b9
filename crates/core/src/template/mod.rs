//! Template handling: parsing `.prompty` documents, binding variable values,
//! and rendering bodies with substitution.

pub mod bindings;
pub mod discovery;
pub mod engine;
pub mod parser;
pub mod repository;
pub mod types;

pub use bindings::Bindings;
pub use parser::parse;
pub use types::{Template, VarKind, Variable};
