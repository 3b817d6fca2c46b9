//! Parsing `.prompty` documents into [`Template`] values.
//!
//! Parsing is a total function: a template-authoring surface must keep
//! working on partial or malformed input, so every failure mode degrades to
//! defaults (missing metadata) or to literal text (unmatched directives).

use regex::Regex;

use super::types::{Template, VarKind, Variable};

/// Pattern for `{{name}}` and `{{name:config}}` directives.
const DIRECTIVE_PATTERN: &str = r"\{\{(\w+)(?::([^}]+))?\}\}";

/// A single directive occurrence found in a template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub name: &'a str,
    /// Text after the `:` inside the braces, if any.
    pub config: Option<&'a str>,
}

/// Parse raw `.prompty` text into a [`Template`].
///
/// Never fails. Missing frontmatter fields default (`name` becomes
/// "Untitled"), absent frontmatter delimiters make the whole input the body,
/// and unbalanced `{{`/`}}` sequences stay as literal text.
pub fn parse(raw: &str) -> Template {
    let (name, description, tags, body) = split_frontmatter(raw);
    let variables = declare_variables(&body);
    let commands = extract_commands(&body);

    Template { name, description, tags, body, variables, commands }
}

/// Scan a body left-to-right for directives, in document order.
///
/// Pure function of its input; repeated occurrences of the same name are all
/// reported (declaration dedup happens in [`declare_variables`]).
pub fn scan_directives(body: &str) -> Vec<Directive<'_>> {
    let re = Regex::new(DIRECTIVE_PATTERN).expect("valid directive regex");
    re.captures_iter(body)
        .map(|caps| Directive {
            name: caps.get(1).map_or("", |m| m.as_str()),
            config: caps.get(2).map(|m| m.as_str()),
        })
        .collect()
}

/// Split frontmatter metadata from the document body.
///
/// Frontmatter sits between a leading `---` line and the next `---` line and
/// is scanned per-field; anything not recognized is ignored. Without both
/// delimiters the entire input is the body with default metadata.
fn split_frontmatter(raw: &str) -> (String, String, Vec<String>, String) {
    let mut name = "Untitled".to_string();
    let mut description = String::new();
    let mut tags = Vec::new();

    let trimmed = raw.trim_start();
    let Some(rest) = trimmed.strip_prefix("---") else {
        return (name, description, tags, raw.to_string());
    };

    // The opening line must be exactly `---`; `----` or trailing text on the
    // line is body, not a frontmatter delimiter.
    let Some(after_newline) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) else {
        return (name, description, tags, raw.to_string());
    };

    let Some(end_pos) = find_closing_delimiter(after_newline) else {
        // No closing ---, treat as body-only input.
        return (name, description, tags, raw.to_string());
    };

    let frontmatter = &after_newline[..end_pos];
    let body = after_newline[end_pos + 3..].trim().to_string();

    for line in frontmatter.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("name:") {
            name = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("description:") {
            description = rest.trim().to_string();
        }
    }

    let tags_re = Regex::new(r"tags:\s*\[([^\]]+)\]").expect("valid tags regex");
    if let Some(caps) = tags_re.captures(frontmatter) {
        tags = caps[1].split(',').map(|t| t.trim().to_string()).collect();
    }

    (name, description, tags, body)
}

/// Find the position of the closing `---` delimiter at the start of a line.
fn find_closing_delimiter(content: &str) -> Option<usize> {
    let mut pos = 0;
    for line in content.lines() {
        if line.trim() == "---" {
            return Some(pos);
        }
        pos += line.len() + 1;
    }
    None
}

/// Declare variables from the first occurrence of each unique identifier.
fn declare_variables(body: &str) -> Vec<Variable> {
    let mut variables: Vec<Variable> = Vec::new();

    for directive in scan_directives(body) {
        if variables.iter().any(|v| v.name == directive.name) {
            // Later occurrences reuse the declaration, never redeclare.
            continue;
        }
        variables.push(infer_variable(directive.name, directive.config.unwrap_or("")));
    }

    variables
}

/// Infer a variable's kind and default from its directive config.
///
/// Priority: `|`-separated options win, then the literal config `number`,
/// then textarea-leaning identifiers, then plain text.
fn infer_variable(name: &str, config: &str) -> Variable {
    if config.contains('|') {
        let options: Vec<String> = config.split('|').map(|o| o.trim().to_string()).collect();
        let default_value = options[0].clone();
        return Variable {
            name: name.to_string(),
            kind: VarKind::Select,
            default_value,
            options: Some(options),
        };
    }

    if config == "number" {
        return Variable {
            name: name.to_string(),
            kind: VarKind::Number,
            default_value: String::new(),
            options: None,
        };
    }

    let lower = name.to_lowercase();
    let kind = if lower.contains("prompt") || lower.contains("subject") || lower.contains("details")
    {
        VarKind::Textarea
    } else {
        VarKind::Text
    };

    Variable {
        name: name.to_string(),
        kind,
        default_value: config.to_string(),
        options: None,
    }
}

/// Extract embedded `mcp-cli call ...` lines as ready-made workflow commands.
fn extract_commands(body: &str) -> Vec<String> {
    let re = Regex::new(r"mcp-cli\s+call\s+[^\n]+").expect("valid command regex");
    re.find_iter(body).map(|m| m.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_frontmatter() {
        let tpl = parse("Just a body with {{x}}");
        assert_eq!(tpl.name, "Untitled");
        assert_eq!(tpl.description, "");
        assert!(tpl.tags.is_empty());
        assert_eq!(tpl.body, "Just a body with {{x}}");
        assert_eq!(tpl.variables.len(), 1);
    }

    #[test]
    fn parse_unclosed_frontmatter_is_body() {
        let tpl = parse("---\nname: X\nno closing delimiter");
        assert_eq!(tpl.name, "Untitled");
        assert!(tpl.body.contains("no closing delimiter"));
    }

    #[test]
    fn opener_longer_than_three_dashes_is_body() {
        let tpl = parse("----\nname: X\n---\nbody");
        assert_eq!(tpl.name, "Untitled");
        assert!(tpl.body.starts_with("----"));
    }

    #[test]
    fn opener_with_trailing_text_is_body() {
        let tpl = parse("--- extra\nname: X\n---\nbody");
        assert_eq!(tpl.name, "Untitled");
        assert!(tpl.body.contains("name: X"));
    }

    #[test]
    fn parse_frontmatter_fields() {
        let raw = "---\nname: Image Gen\ndescription: Generate images\ntags: [imagegen, dalle]\n---\n\nBody text";
        let tpl = parse(raw);
        assert_eq!(tpl.name, "Image Gen");
        assert_eq!(tpl.description, "Generate images");
        assert_eq!(tpl.tags, vec!["imagegen", "dalle"]);
        assert_eq!(tpl.body, "Body text");
    }

    #[test]
    fn first_occurrence_declares_variable() {
        let tpl = parse("{{style:bold|subtle}} then {{style:ignored}} and {{style}}");
        assert_eq!(tpl.variables.len(), 1);
        assert_eq!(tpl.variables[0].kind, VarKind::Select);
        assert_eq!(tpl.variables[0].options, Some(vec!["bold".to_string(), "subtle".to_string()]));
    }

    #[test]
    fn select_options_are_trimmed() {
        let tpl = parse("{{fmt: a | b | c }}");
        let var = &tpl.variables[0];
        assert_eq!(var.options, Some(vec!["a".to_string(), "b".to_string(), "c".to_string()]));
        assert_eq!(var.default_value, "a");
    }

    #[test]
    fn number_config_has_empty_default() {
        let tpl = parse("{{count:number}}");
        assert_eq!(tpl.variables[0].kind, VarKind::Number);
        assert_eq!(tpl.variables[0].default_value, "");
    }

    #[test]
    fn textarea_from_identifier() {
        let tpl = parse("{{subject:A mystical forest}} {{MyPrompt}} {{extra_details}}");
        assert!(tpl.variables.iter().all(|v| v.kind == VarKind::Textarea));
        assert_eq!(tpl.variables[0].default_value, "A mystical forest");
    }

    #[test]
    fn unbalanced_braces_stay_literal() {
        let tpl = parse("open {{broken and {{ok}} close");
        assert_eq!(tpl.variables.len(), 1);
        assert_eq!(tpl.variables[0].name, "ok");
        assert!(tpl.body.contains("{{broken"));
    }

    #[test]
    fn scan_reports_every_occurrence_in_order() {
        let found = scan_directives("{{a}} {{b:x}} {{a}}");
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].name, "a");
        assert_eq!(found[1].config, Some("x"));
        assert_eq!(found[2].name, "a");
    }

    #[test]
    fn embedded_commands_are_extracted() {
        let raw = "Run:\nmcp-cli call tabz/tabz_click '{\"selector\": \"#a\"}'\ntext\nmcp-cli call tabz/tabz_screenshot '{}'";
        let tpl = parse(raw);
        assert_eq!(tpl.commands.len(), 2);
        assert!(tpl.commands[0].contains("tabz_click"));
    }
}
