use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::borrow::Cow;

// Static initialization: automaton is built only once, thread-safe.
// The pattern set is fixed, so construction can only fail on a programming error;
// the fallback keeps the escaper total without panicking.
static XML_ESCAPER: Lazy<Option<AhoCorasick>> =
    Lazy::new(|| AhoCorasick::builder().build(["&", "<", ">", "\"", "'"]).ok());

const REPLACEMENTS: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

/// Whether `c` may appear in an XML 1.0 document.
#[inline]
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Remove characters XML 1.0 forbids.
///
/// Vertical tab and form feed become a space so adjacent words stay apart;
/// every other forbidden character is dropped.
fn strip_invalid_xml_chars(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .filter_map(|c| match c {
                '\u{0B}' | '\u{0C}' => Some(' '),
                c if is_xml_char(c) => Some(c),
                _ => None,
            })
            .collect(),
    )
}

/// Escape XML special characters and strip characters XML cannot carry.
///
/// # Examples
///
/// ```
/// use strategy_deck::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("a\u{1}b\u{0B}c"), "ab c");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    let s = strip_invalid_xml_chars(s);
    let s = s.as_ref();
    match XML_ESCAPER.as_ref() {
        Some(escaper) => escaper.replace_all(s, &REPLACEMENTS),
        None => s
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(escape_xml(r#"<a & 'b' "c">"#), "&lt;a &amp; &apos;b&apos; &quot;c&quot;&gt;");
    }

    #[test]
    fn test_escape_strips_forbidden_chars() {
        assert_eq!(escape_xml("Reliable\u{0B}hardware"), "Reliable hardware");
        assert_eq!(escape_xml("a\u{0}\u{8}\u{1F}b\u{FFFE}\u{FFFF}"), "ab");
        assert_eq!(escape_xml("tab\tnew\nline\r"), "tab\tnew\nline\r");
        assert_eq!(escape_xml("\u{C}<x>"), " &lt;x&gt;");
    }

    #[test]
    fn test_strip_borrows_clean_input() {
        assert!(matches!(strip_invalid_xml_chars("plain 😀 text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_leaves_unicode_alone() {
        assert_eq!(escape_xml("ACME × Sensors → New"), "ACME × Sensors → New");
    }
}
