//! Substitution of bound values into template bodies.

use regex::{Captures, Regex};

use super::bindings::Bindings;

/// Render a template body by substituting bound variable values.
///
/// Every occurrence of `{{name}}` or `{{name:config}}` whose name has a
/// non-empty binding is replaced with the bound value; all other directives
/// are left intact, so callers can detect unresolved directives by scanning
/// the result for `{{`. A single pass over the body keeps substituted values
/// from being re-expanded. Total function, cannot fail.
pub fn render(body: &str, bindings: &Bindings) -> String {
    let re = Regex::new(r"\{\{(\w+)(?::[^}]+)?\}\}").expect("valid directive regex");

    re.replace_all(body, |caps: &Captures<'_>| {
        let name = &caps[1];
        match bindings.get(name) {
            Some(value) if !value.is_empty() => value.to_string(),
            // Unbound or still-empty values leave the directive in place.
            _ => caps[0].to_string(),
        }
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(pairs: &[(&str, &str)]) -> Bindings {
        let mut bindings = Bindings::new();
        for (k, v) in pairs {
            bindings.set(*k, *v);
        }
        bindings
    }

    #[test]
    fn substitutes_every_occurrence() {
        let out = render("{{x}} {{x}}", &bound(&[("x", "v")]));
        assert_eq!(out, "v v");
    }

    #[test]
    fn config_form_is_replaced_too() {
        let out = render("{{style:bold|subtle}} and {{style}}", &bound(&[("style", "subtle")]));
        assert_eq!(out, "subtle and subtle");
    }

    #[test]
    fn unbound_directive_left_intact() {
        let out = render("{{y}}", &Bindings::new());
        assert_eq!(out, "{{y}}");
    }

    #[test]
    fn empty_value_keeps_placeholder() {
        let out = render("{{topic}}", &bound(&[("topic", "")]));
        assert_eq!(out, "{{topic}}");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let out = render("{{a}}", &bound(&[("a", "{{b}}"), ("b", "nope")]));
        assert_eq!(out, "{{b}}");
    }

    #[test]
    fn rendering_is_idempotent_on_missing_data() {
        let body = "keep {{missing:with|options}} text";
        let once = render(body, &Bindings::new());
        assert_eq!(once, body);
        assert_eq!(render(&once, &Bindings::new()), once);
    }
}
