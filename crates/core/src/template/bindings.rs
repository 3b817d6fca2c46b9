//! Current values for a template's declared variables.

use std::collections::HashMap;

use chrono::Local;

use super::types::Template;

/// A mapping from variable name to its current string value.
///
/// Exists only alongside a [`Template`]; when the active template changes the
/// caller discards the old bindings and seeds a fresh set from the new
/// template's declared defaults.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: HashMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed bindings from a template's declared defaults.
    pub fn from_template(template: &Template) -> Self {
        let mut bindings = Self::new();
        bindings.reset_from(template);
        bindings
    }

    /// Replace all values with the template's declared defaults.
    pub fn reset_from(&mut self, template: &Template) {
        self.values.clear();
        for var in &template.variables {
            self.values.insert(var.name.clone(), var.default_value.clone());
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Iterate over bound names and values, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Built-in date/time bindings available to every render.
///
/// Callers merge these in before user-supplied values so an explicit
/// `--var date=...` still wins.
pub fn builtin_bindings() -> Bindings {
    let now = Local::now();
    let mut bindings = Bindings::new();
    bindings.set("date", now.format("%Y-%m-%d").to_string());
    bindings.set("time", now.format("%H:%M").to_string());
    bindings.set("datetime", now.to_rfc3339());
    bindings.set("today", now.format("%Y-%m-%d").to_string());
    bindings.set("now", now.to_rfc3339());
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parse;

    #[test]
    fn seeding_uses_declared_defaults() {
        let tpl = parse("{{style:bold|subtle}} {{title:Hello}} {{notes}}");
        let bindings = Bindings::from_template(&tpl);
        assert_eq!(bindings.get("style"), Some("bold"));
        assert_eq!(bindings.get("title"), Some("Hello"));
        assert_eq!(bindings.get("notes"), Some(""));
    }

    #[test]
    fn reset_replaces_previous_values() {
        let first = parse("{{a:one}}");
        let second = parse("{{b:two}}");
        let mut bindings = Bindings::from_template(&first);
        bindings.set("a", "edited");

        bindings.reset_from(&second);
        assert!(!bindings.contains("a"));
        assert_eq!(bindings.get("b"), Some("two"));
    }

    #[test]
    fn builtin_bindings_have_dates() {
        let bindings = builtin_bindings();
        assert!(bindings.get("date").is_some_and(|d| d.contains('-')));
        assert!(bindings.contains("today"));
        assert!(bindings.contains("now"));
    }
}
