//! Text helpers for emitting patch XML.

use std::borrow::Cow;

/// Escape `&`, `<` and `>` so the value can sit inside element text
pub fn escape_xml_text(s: &str) -> Cow<'_, str> {
    quick_xml::escape::partial_escape(s)
}

/// Escape a value for use inside a double-quoted attribute
pub fn escape_xml_attr(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}

/// Make a string safe for the body of an XML comment.
///
/// Comments may not contain `--` or end with `-`.
pub fn sanitize_comment(s: &str) -> Cow<'_, str> {
    if !s.contains("--") && !s.ends_with('-') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c == '-' && out.ends_with('-') {
            out.push(' ');
        }
        out.push(c);
    }
    if out.ends_with('-') {
        out.push(' ');
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml_text() {
        assert_eq!(escape_xml_text("Brave"), "Brave");
        assert!(matches!(escape_xml_text("Brave"), Cow::Borrowed(_)));
        assert_eq!(escape_xml_text("Fish & <Chips>"), "Fish &amp; &lt;Chips&gt;");
        assert_eq!(escape_xml_text(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_escape_xml_attr() {
        assert_eq!(escape_xml_attr("RimLife.PersonalityExtension"), "RimLife.PersonalityExtension");
        assert_eq!(escape_xml_attr(r#"a"b"#), "a&quot;b");
    }

    #[test]
    fn test_sanitize_comment() {
        assert_eq!(sanitize_comment("very gentle"), "very gentle");
        assert_eq!(sanitize_comment("a--b"), "a- -b");
        assert_eq!(sanitize_comment("a---b"), "a- - -b");
        assert_eq!(sanitize_comment("ends-"), "ends- ");
        assert_eq!(sanitize_comment("温柔"), "温柔");
    }
}
