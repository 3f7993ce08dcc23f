//! WordprocessingML part generation.
//!
//! Each submodule renders one XML part of the package as a string; the
//! package assembler stitches them together and hands the result to the
//! ZIP container writer.

pub(crate) mod document;
pub(crate) mod image;
pub(crate) mod props;
pub(crate) mod rels;
pub(crate) mod styles;

/// Escape XML special characters.
///
/// Every user-supplied string interpolated into a part goes through here;
/// the generators never splice raw text into markup.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        let escaped = escape_xml(r#"<foo & "bar">"#);
        assert_eq!(escaped, "&lt;foo &amp; &quot;bar&quot;&gt;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_escape_amp_first() {
        // Ampersands must not be double-escaped through later passes.
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
    }

    proptest::proptest! {
        #[test]
        fn prop_escape_round_trips(text in "\\PC*") {
            let escaped = escape_xml(&text);
            proptest::prop_assert!(!escaped.contains('<'));
            proptest::prop_assert!(!escaped.contains('>'));
            proptest::prop_assert!(!escaped.contains('"'));

            let unescaped = quick_xml::escape::unescape(&escaped).unwrap();
            proptest::prop_assert_eq!(unescaped, text.as_str());
        }
    }
}
