//! # Text Normalization
//!
//! Prose fields from the content source carry HTML: footnote markers wrapped
//! in `<sup>` inside translations, paragraph and heading tags inside chapter
//! descriptions. Nothing leaves the core with that markup intact.

use std::sync::LazyLock;

use regex::Regex;

/// `<sup ...>` through the nearest `</sup>`, across line breaks.
static ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<sup[^>]*>.*?</sup>").expect("annotation pattern is valid"));

static BLOCK_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(p|div|h[1-6]|li)\s*>").expect("block break pattern is valid")
});

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*(\n[ \t]*)+").expect("blank run pattern is valid"));

/// Removes every annotation span from `text`, leaving all other characters in order.
///
/// Absent input yields an empty string. Removal repeats until no span is left,
/// so the result never contains a tag that a previous removal spliced together.
pub fn strip_annotations(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut current = text.to_string();
    while ANNOTATION.is_match(&current) {
        current = ANNOTATION.replace_all(&current, "").into_owned();
    }
    current
}

/// Converts HTML prose into plain terminal text.
///
/// Block-closing tags become line breaks, other tags are dropped, common
/// entities are decoded and runs of blank lines collapse into one.
pub fn markup_to_plain(text: &str) -> String {
    let with_breaks = BLOCK_BREAK.replace_all(text, "\n");
    let untagged = ANY_TAG.replace_all(&with_breaks, "");
    let decoded = decode_entities(&untagged);
    let collapsed = BLANK_RUN.replace_all(&decoded, "\n\n");
    collapsed
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        // Last, so "&amp;lt;" stays "&lt;".
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_strip_rules {
        ( $($name:ident: $input:expr => $expected:expr,)+ ) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(strip_annotations(Some($input)), $expected);
                }
            )+
        };
    }

    test_strip_rules! {
        test_strip_single_footnote: "abc<sup>1</sup>def" => "abcdef",
        test_strip_footnote_with_attributes: "Praise<sup foot_note=\"75\">1</sup> be" => "Praise be",
        test_strip_multiple_footnotes: "a<sup>1</sup>b<sup>2</sup>c" => "abc",
        test_strip_is_non_greedy: "x<sup>1</sup>keep<sup>2</sup>y" => "xkeepy",
        test_strip_across_lines: "a<sup>\n1\n</sup>b" => "ab",
        test_strip_uppercase_tag: "a<SUP>1</SUP>b" => "ab",
        test_strip_leaves_other_tags: "<p>a</p>" => "<p>a</p>",
        test_strip_unclosed_tag_untouched: "a<sup>1" => "a<sup>1",
        test_strip_plain_text_untouched: "In the name of God" => "In the name of God",
    }

    #[test]
    fn test_strip_absent_and_empty() {
        assert_eq!(strip_annotations(None), "");
        assert_eq!(strip_annotations(Some("")), "");
    }

    #[test]
    fn test_strip_is_idempotent_on_spliced_tags() {
        // Removing the inner span leaves "<sup>b</sup>" behind.
        let input = "a<su<sup>x</sup>p>b</sup>c";
        let once = strip_annotations(Some(input));
        assert_eq!(once, "ac");
        assert_eq!(strip_annotations(Some(&once)), once);
    }

    #[test]
    fn test_strip_is_idempotent() {
        for input in [
            "",
            "plain",
            "abc<sup>1</sup>def",
            "<sup><sup>1</sup></sup>",
            "</sup>x<sup",
            "<p>Text<sup foot_note=1>1</sup></p>",
        ] {
            let once = strip_annotations(Some(input));
            assert_eq!(strip_annotations(Some(&once)), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_markup_to_plain_paragraphs() {
        let html = "<h2>Name</h2><p>First &amp; foremost.</p><p>Second&nbsp;line.</p>";
        assert_eq!(markup_to_plain(html), "Name\nFirst & foremost.\nSecond line.");
    }

    #[test]
    fn test_markup_to_plain_collapses_blank_runs() {
        let html = "<p>One</p>\n\n\n<p>Two</p>";
        assert_eq!(markup_to_plain(html), "One\n\nTwo");
    }

    #[test]
    fn test_markup_to_plain_drops_inline_tags() {
        assert_eq!(markup_to_plain("a <b>bold</b> <i>word</i>"), "a bold word");
        assert_eq!(markup_to_plain("line<br/>break"), "line\nbreak");
    }

    #[test]
    fn test_markup_to_plain_double_encoded_entity() {
        assert_eq!(markup_to_plain("&amp;lt;"), "&lt;");
    }
}
