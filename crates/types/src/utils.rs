use std::sync::OnceLock;

use regex::Regex;

fn br_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<br\s*/?>|</p>|</h[1-6]>|</li>").expect("valid regex"))
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("<[^>]*>").expect("valid regex"))
}

fn space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Strips rich-text markup and decodes entities. Block-level closing tags
/// become line breaks.
pub fn remove_html(input: &str) -> String {
    let broken = br_re().replace_all(input, "\n");
    let stripped = tag_re().replace_all(&broken, "");
    html_entities::decode_html_entities(&stripped).unwrap_or_else(|_| stripped.into_owned())
}

/// Markup-free text with whitespace collapsed to single spaces.
pub fn plain_text(input: &str) -> String {
    space_re()
        .replace_all(&remove_html(input), " ")
        .trim()
        .to_string()
}

/// Cuts `text` at a word boundary so the result is at most `max_chars`
/// characters, appending an ellipsis when anything was dropped.
pub fn truncate_words(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out = String::new();
    for word in text.split(' ') {
        let extra = if out.is_empty() { 0 } else { 1 };
        if out.chars().count() + extra + word.chars().count() + 1 > max_chars {
            if out.is_empty() {
                out.extend(word.chars().take(max_chars.saturating_sub(1)));
            }
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_html() {
        let input = "<h2>Intro</h2><p>Hello <strong>world</strong> &amp; friends</p>line<br/>two";
        assert_eq!(remove_html(input), "Intro\nHello world & friends\nline\ntwo");
    }

    #[test]
    fn test_plain_text_collapses_whitespace() {
        assert_eq!(plain_text("<p>a</p>\n\n<p>  b </p>"), "a b");
    }

    #[test]
    fn test_truncate_words() {
        assert_eq!(truncate_words("short", 10), "short");
        assert_eq!(truncate_words("one two three four", 10), "one two…");
    }

    #[test]
    fn test_truncate_long_first_word() {
        let url = format!("https://example.com/{}", "a".repeat(200));
        let text = format!("{} is where the guide lives", url);
        let cut = truncate_words(&text, 160);
        assert_eq!(cut.chars().count(), 160);
        assert!(cut.starts_with("https://example.com/aaa"));
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_truncate_long_first_word_on_char_boundary() {
        let text = format!("{} tail", "é".repeat(30));
        assert_eq!(truncate_words(&text, 10), format!("{}…", "é".repeat(9)));
    }
}
