//! Stylesheet composition: header text → page CSS.
//!
//! The stylesheet is assembled from two parts: a generated `@page` block
//! carrying the `@top-center` running-header declaration, and a static rule
//! set (typography, heading colours, code blocks, tables). Assembling in
//! code with a named slot — rather than search-and-replace over one big
//! template string — means the static rules can change freely without
//! breaking the injection point.
//!
//! The header text is attacker-controlled form input, so every literal `"`
//! is escaped before it lands inside the CSS string value. Backslashes pass
//! through unescaped; that is a known, accepted limitation of the original
//! design, kept for output parity.

/// Static rules applied to the rendered document body.
///
/// Nothing in here varies per call. Paged-media renderers that understand
/// `@page` margin boxes pick up the header from the generated block; the
/// rest is plain print styling.
const STATIC_RULES: &str = "\
body {
    font-family: 'Segoe UI', sans-serif;
    font-size: 10.5px;
    color: #111;
    line-height: 1.5;
}

h1 {
    font-size: 18px;
    color: #1a4e8a;
    border-bottom: 1px solid #ccc;
    margin-top: 24px;
}

h2 {
    font-size: 16px;
    color: #1a4e8a;
    margin-top: 20px;
}

h3 {
    font-size: 14px;
    color: #444;
    margin-top: 16px;
}

pre, code {
    font-family: \"Roboto Mono\", monospace;
    font-size: 9px;
    white-space: pre;
    overflow-x: auto;
    background: #f5f5f5;
    padding: 6px 8px;
    border-left: 3px solid #1a4e8a;
    border-radius: 4px;
    margin: 8px 0;
}

table {
    width: 100%;
    border-collapse: collapse;
    font-size: 9.5px;
    margin: 10px 0;
}

th, td {
    border: 1px solid #ccc;
    padding: 4px 6px;
    text-align: left;
}

th {
    background: #f0f0f0;
}
";

/// Compose the full page stylesheet with `header_text` as the top-centre
/// running header.
///
/// Never fails: any string, including the empty string, is valid header
/// content once its double quotes are escaped. Deterministic — equal input
/// yields byte-identical output.
pub fn compose(header_text: &str) -> String {
    let mut css = page_block(&escape_content_string(header_text));
    css.push('\n');
    css.push_str(STATIC_RULES);
    css
}

/// The generated `@page` block. `escaped` must already be safe to embed
/// inside a double-quoted CSS string.
fn page_block(escaped: &str) -> String {
    format!(
        r#"@page {{
    size: A4;
    margin: 2cm;

    @top-center {{
        content: "{escaped}";
        font-size: 10px;
        font-style: italic;
        color: #555;
    }}
}}
"#
    )
}

/// Escape a string for embedding inside a double-quoted CSS `content` value.
/// Only `"` needs neutralising to keep the string terminated where we
/// terminate it.
fn escape_content_string(text: &str) -> String {
    text.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Count unescaped double quotes and check braces pair up — a cheap
    /// stand-in for "parses as CSS" that catches unterminated strings.
    fn assert_balanced_css(css: &str) {
        let mut quotes = 0usize;
        let mut depth = 0isize;
        let mut chars = css.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    chars.next();
                }
                '"' => quotes += 1,
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            assert!(depth >= 0, "closing brace before opening one");
        }
        assert_eq!(quotes % 2, 0, "unterminated string in: {css}");
        assert_eq!(depth, 0, "unbalanced braces");
    }

    #[test]
    fn header_text_lands_in_content_declaration() {
        let css = compose("Payments API");
        assert!(css.contains("content: \"Payments API\";"));
        assert!(css.contains("@top-center"));
        assert_balanced_css(&css);
    }

    #[test]
    fn double_quotes_are_escaped() {
        let css = compose("Say \"Hi\"");
        assert!(css.contains(r#"Say \"Hi\""#));
        assert_balanced_css(&css);
    }

    #[test]
    fn empty_header_is_valid() {
        let css = compose("");
        assert!(css.contains("content: \"\";"));
        assert_balanced_css(&css);
    }

    #[test]
    fn static_rules_present() {
        let css = compose("x");
        assert!(css.contains("size: A4"));
        assert!(css.contains("border-collapse: collapse"));
        assert!(css.contains("Roboto Mono"));
    }

    #[test]
    fn compose_is_deterministic() {
        assert_eq!(compose("Same header"), compose("Same header"));
    }

    #[test]
    fn quote_only_header() {
        let css = compose("\"\"\"");
        assert_balanced_css(&css);
    }
}
