//! Template data structures.

use serde::Serialize;

/// Input kind for a declared variable, inferred from its directive config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VarKind {
    /// Single-line free text.
    Text,
    /// Multi-line free text (identifiers like `prompt`, `subject`, `details`).
    Textarea,
    /// Numeric input.
    Number,
    /// One of a fixed list of options.
    Select,
}

/// A variable declared by the first occurrence of a `{{name}}` or
/// `{{name:config}}` directive in a template body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    pub kind: VarKind,
    /// Seed value for the variable's binding. For selects this is the first
    /// option; otherwise the raw config text (possibly empty).
    pub default_value: String,
    /// Only present for [`VarKind::Select`] variables.
    pub options: Option<Vec<String>>,
}

/// A parsed `.prompty` template.
///
/// Produced by [`crate::template::parse`]; never constructed incrementally.
/// Variables appear in first-occurrence order and names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Body text with directives left in place.
    pub body: String,
    pub variables: Vec<Variable>,
    /// `mcp-cli call ...` lines embedded in the body, in document order.
    /// These are ready-made workflow commands carried by the template.
    pub commands: Vec<String>,
}

impl VarKind {
    /// Human-readable label for listings.
    pub fn label(self) -> &'static str {
        match self {
            VarKind::Text => "text",
            VarKind::Textarea => "textarea",
            VarKind::Number => "number",
            VarKind::Select => "select",
        }
    }
}
