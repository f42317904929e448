use minijinja::syntax::SyntaxConfig;
use minijinja::{AutoEscape, Environment};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use tracing::error;

/// Generated sources are full of `{{ }}` (JSX style objects) and `{% %}`-like
/// text, so placeholders use square brackets: `[[ name ]]`.
static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_syntax(
        SyntaxConfig::builder()
            .block_delimiters("[%", "%]")
            .variable_delimiters("[[", "]]")
            .comment_delimiters("[#", "#]")
            .build()
            .unwrap(),
    );
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
});

/// Fill `[[ key ]]` placeholders in a template.
///
/// Values are inserted verbatim and never rendered again, so a name that
/// itself contains `[[ description ]]` stays literal. A template that fails
/// to render is logged and returned unchanged.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let context: BTreeMap<&str, &str> = vars.iter().copied().collect();
    TEMPLATES
        .render_str(template, context)
        .unwrap_or_else(|e| {
            error!(error = %e, "failed to render template");
            template.to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_known_keys() {
        let out = render("<h1>[[ name ]]</h1><p>[[ description ]]</p>", &[
            ("name", "Foo"),
            ("description", "Bar"),
        ]);
        assert_eq!(out, "<h1>Foo</h1><p>Bar</p>");
    }

    #[test]
    fn test_render_repeated_key() {
        assert_eq!(render("[[ name ]]-[[ name ]]", &[("name", "x")]), "x-x");
    }

    #[test]
    fn test_render_leaves_jsx_objects() {
        let template = "style={{ width: `${pct}%` }} title=\"[[ name ]]\"";
        let out = render(template, &[("name", "App")]);
        assert_eq!(out, "style={{ width: `${pct}%` }} title=\"App\"");
    }

    #[test]
    fn test_render_leaves_brace_percent_and_hash() {
        let template = "{% if x %}{# note #}{{name}}";
        assert_eq!(render(template, &[("name", "App")]), template);
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        let out = render("[[ name ]] / [[ description ]]", &[
            ("name", "[[ description ]]"),
            ("description", "d"),
        ]);
        assert_eq!(out, "[[ description ]] / d");
    }

    #[test]
    fn test_render_does_not_escape_markup() {
        let out = render("<p>[[ name ]]</p>", &[("name", "<b>\"A&B\"</b>")]);
        assert_eq!(out, "<p><b>\"A&B\"</b></p>");
    }

    #[test]
    fn test_render_keeps_trailing_newline() {
        assert_eq!(render("[[ name ]]\n", &[("name", "x")]), "x\n");
    }
}
