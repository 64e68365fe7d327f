//! camelCase → snake_case conversion for module identifiers.

use std::sync::OnceLock;

use regex::Regex;

fn word_boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(.)([A-Z][a-z]+)").unwrap())
}

fn residual_boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap())
}

/// Convert a camelCase or PascalCase identifier to snake_case.
///
/// Two ordered passes: the first splits before a capitalized word
/// (`fooBar` → `foo_Bar`), the second catches the boundaries the first
/// pass leaves behind, a lowercase letter or digit directly against an
/// uppercase letter. Runs of capitals split however the passes land
/// (`ABTest` → `ab_test`, `HTMLParser` → `html_parser`); templates
/// migrated in earlier theme releases already carry exactly that
/// output, so the pass order must not change.
pub(crate) fn camel_to_snake(name: &str) -> String {
    let split = word_boundary_re().replace_all(name, "${1}_${2}");
    let split = residual_boundary_re().replace_all(&split, "${1}_${2}");
    split.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_splits() {
        assert_eq!(camel_to_snake("FooBar"), "foo_bar");
    }

    #[test]
    fn camel_case_splits() {
        assert_eq!(camel_to_snake("fooBarBaz"), "foo_bar_baz");
    }

    #[test]
    fn single_word_lowercases() {
        assert_eq!(camel_to_snake("Widget"), "widget");
    }

    #[test]
    fn capital_runs_follow_pass_order() {
        // Pass 1 splits before "Test", pass 2 finds nothing more
        assert_eq!(camel_to_snake("ABTest"), "ab_test");
        assert_eq!(camel_to_snake("HTMLParser"), "html_parser");
        assert_eq!(camel_to_snake("HtmlParser"), "html_parser");
    }

    #[test]
    fn trailing_acronym_stays_joined() {
        assert_eq!(camel_to_snake("WidgetCTA"), "widget_cta");
    }

    #[test]
    fn digits_bound_words() {
        assert_eq!(camel_to_snake("Widget2Col"), "widget2_col");
        assert_eq!(camel_to_snake("Col2Widget"), "col2_widget");
    }

    #[test]
    fn snake_case_is_stable() {
        assert_eq!(camel_to_snake("my_widget"), "my_widget");
    }
}
