use std::sync::LazyLock;

use regex::Regex;

/// Known upstream malformations, applied in order. Patterns swallow repeated
/// wrappers so nesting is stripped in one go.
const FIXES: [(&str, &str); 6] = [
    // stray closing image tags
    (r"(?i)</img\s*>", ""),
    // doubled cell closings
    (r"(?:</td>\s*){2,}", "</td>"),
    // anchors wrapped around icon images
    (r"(?:<a\b[^>]*>\s*)+(<img\b[^>]*>)(?:\s*</a>)+", "$1"),
    // <p> wrappers around tables
    (r"(?:<p>\s*)+(<table\b)", "$1"),
    (r"(</table>)(?:\s*</p>)+", "$1"),
    // ranked section is never closed, only marked
    (r"<!--\s*/ranked\s*-->", "</div>"),
];

static PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    FIXES
        .iter()
        .map(|(pattern, replacement)| {
            let regex = Regex::new(pattern).expect("sanitizer pattern is valid");
            (regex, *replacement)
        })
        .collect()
});

/// Repair the upstream profile page so it parses into the expected tree.
///
/// Passes repeat until one changes nothing, so the result is a fixed point.
/// Every fix shortens the text, which bounds the loop.
pub fn sanitize_html(html: &str) -> String {
    let mut current = html.to_string();
    loop {
        let next = apply_fixes(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn apply_fixes(html: &str) -> String {
    PATTERNS
        .iter()
        .fold(html.to_string(), |acc, (regex, replacement)| {
            regex.replace_all(&acc, *replacement).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_closing_img() {
        assert_eq!(sanitize_html(r#"<img src="a.png"></img>"#), r#"<img src="a.png">"#);
        assert_eq!(sanitize_html(r#"<img src="a.png"></IMG >"#), r#"<img src="a.png">"#);
    }

    #[test]
    fn test_collapses_doubled_cell_closings() {
        assert_eq!(
            sanitize_html("<tr><td>1</td></td>\n  </td><td>2</td></tr>"),
            "<tr><td>1</td><td>2</td></tr>"
        );
    }

    #[test]
    fn test_unwraps_icon_anchor() {
        assert_eq!(
            sanitize_html(r#"<td><a href="/pokemon/pikachu"> <img src="t_Square_Pikachu.png"> </a></td>"#),
            r#"<td><img src="t_Square_Pikachu.png"></td>"#
        );
    }

    #[test]
    fn test_keeps_text_anchors() {
        let html = r#"<a href="/p/someone">someone</a>"#;
        assert_eq!(sanitize_html(html), html);
    }

    #[test]
    fn test_removes_paragraph_around_table() {
        assert_eq!(
            sanitize_html("<p>\n<table class=\"t\"></table>\n</p>"),
            "<table class=\"t\"></table>"
        );
    }

    #[test]
    fn test_closes_ranked_section() {
        assert_eq!(
            sanitize_html(r#"<div id="ranked"><div></div><!-- /ranked --><footer>"#),
            r#"<div id="ranked"><div></div></div><footer>"#
        );
    }

    #[test]
    fn test_idempotent() {
        let raw = include_str!("fixtures/profile.html");
        let once = sanitize_html(raw);
        let twice = sanitize_html(&once);
        assert_ne!(raw, once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_nested_wrappers_in_one_pass() {
        let tables = "<p><p>\n<table></table></p>\n</p>";
        let once = sanitize_html(tables);
        assert_eq!(once, "<table></table>");
        assert_eq!(sanitize_html(&once), once);

        let icons = r#"<a href="/x"><a href="/y"><img src="t_Square_Absol.png"></a></a>"#;
        let once = sanitize_html(icons);
        assert_eq!(once, r#"<img src="t_Square_Absol.png">"#);
        assert_eq!(sanitize_html(&once), once);
    }

    #[test]
    fn test_mixed_malformations_settle_in_one_pass() {
        // the stray </img> separates the doubled cell closing
        let html = "<td>1</td></img></td><td><a href=\"/p\"><img src=\"a.png\"></img></a></td>";
        let once = sanitize_html(html);
        assert_eq!(once, r#"<td>1</td><td><img src="a.png"></td>"#);
        assert_eq!(apply_fixes(&once), once);
    }

    #[test]
    fn test_clean_input_untouched() {
        let html = "<html><body><table><tr><td>1</td></tr></table></body></html>";
        assert_eq!(sanitize_html(html), html);
    }
}
