//! Variable substitution engine for email templates.
//!
//! Placeholders use the `${variable}` form, where the variable name is one or
//! more word characters. Substitution, extraction, and validation are pure
//! functions over the template string.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a well-formed `${variable}` placeholder
    static ref PLACEHOLDER: Regex = Regex::new(r"\$\{(\w+)\}").unwrap();
}

/// Substitute `${variable}` placeholders in a template string.
///
/// Each placeholder is replaced with its mapped value. Placeholders with no
/// mapping are replaced with the empty string rather than left in the output.
/// Malformed sequences (an unclosed `${`, a stray `}`) do not match the
/// placeholder pattern and pass through as literal text.
pub fn substitute(template: &str, variables: &HashMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures<'_>| {
            variables.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

/// Extract the variable names of every placeholder occurrence.
///
/// Names are returned in source order, one entry per occurrence, so a name
/// appearing twice is reported twice.
pub fn extract_variables(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Check that a template string is well-formed.
///
/// A template is valid when it contains at least one `${variable}` placeholder
/// and the number of `${` occurrences equals the number of `}` occurrences.
/// The brace comparison is a global count, not a structural check, so it
/// catches an unclosed `${name` or a stray trailing `}` but not every
/// pathological arrangement. A string with no placeholders at all is invalid.
pub fn is_valid(template: &str) -> bool {
    PLACEHOLDER.is_match(template)
        && template.matches("${").count() == template.matches('}').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_substitute_simple() {
        let result = substitute("Hello ${name}!", &vars(&[("name", "John")]));
        assert_eq!(result, "Hello John!");
    }

    #[test]
    fn test_substitute_multiple() {
        let result = substitute(
            "Dear ${name}, your report for ${month} was approved.",
            &vars(&[("name", "Tanaka"), ("month", "July")]),
        );
        assert_eq!(result, "Dear Tanaka, your report for July was approved.");
    }

    #[test]
    fn test_substitute_repeated_placeholder() {
        let result = substitute("${name} ${name}", &vars(&[("name", "Sato")]));
        assert_eq!(result, "Sato Sato");
    }

    #[test]
    fn test_substitute_missing_variable_removed() {
        // Unresolved placeholders are dropped, not retained as literal text
        let result = substitute("Hello ${name}!", &HashMap::new());
        assert_eq!(result, "Hello !");
    }

    #[test]
    fn test_substitute_malformed_left_as_literal() {
        let variables = vars(&[("name", "John")]);
        assert_eq!(substitute("Hello ${name!", &variables), "Hello ${name!");
        assert_eq!(substitute("stray } brace", &variables), "stray } brace");
    }

    #[test]
    fn test_substitute_no_recursive_expansion() {
        // A replacement value containing placeholder syntax is not expanded
        let variables = vars(&[("a", "${b}"), ("b", "deep")]);
        assert_eq!(substitute("${a}", &variables), "${b}");
    }

    #[test]
    fn test_substitute_is_idempotent_for_plain_values() {
        let variables = vars(&[("name", "John"), ("city", "Osaka")]);
        let once = substitute("${name} of ${city} and ${unknown}", &variables);
        let twice = substitute(&once, &variables);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_substitute_empty_template() {
        assert_eq!(substitute("", &vars(&[("name", "John")])), "");
    }

    #[test]
    fn test_extract_variables_in_order_with_duplicates() {
        assert_eq!(extract_variables("${a}-${b}-${a}"), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_extract_variables_none() {
        assert!(extract_variables("no placeholders here").is_empty());
        assert!(extract_variables("").is_empty());
    }

    #[test]
    fn test_extract_variables_skips_malformed() {
        assert_eq!(
            extract_variables("${open and ${closed} and } extra"),
            vec!["closed"]
        );
    }

    #[test]
    fn test_is_valid_with_placeholder() {
        assert!(is_valid("Hello ${name}!"));
        assert!(is_valid("${a} ${b}"));
    }

    #[test]
    fn test_is_valid_rejects_plain_text() {
        // A template with no placeholders at all is rejected
        assert!(!is_valid("Hello name!"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_is_valid_rejects_unbalanced_braces() {
        assert!(!is_valid("Hello ${name!"));
        assert!(!is_valid("Hello ${name} }"));
        assert!(!is_valid("${a} ${b"));
    }

    #[test]
    fn test_substituted_output_contains_no_mapped_placeholders() {
        let variables = vars(&[("user", "Suzuki"), ("total", "40")]);
        let result = substitute(
            "${user} logged ${total} hours; contact ${user} at ${address}",
            &variables,
        );
        for key in variables.keys() {
            assert!(!result.contains(&format!("${{{}}}", key)));
        }
    }
}
