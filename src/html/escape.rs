//! HTML entity encoding.

/// Encode the characters that are special in HTML text and quoted
/// attribute values: `&`, `<`, `>`, `"` and `'`.
pub fn encode(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(ch),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(encode("My Application"), "My Application");
    }

    #[test]
    fn special_characters_are_encoded() {
        assert_eq!(
            encode(r#"<Tom & "Jerry's">"#),
            "&lt;Tom &amp; &quot;Jerry&#039;s&quot;&gt;"
        );
    }

    #[test]
    fn existing_entities_are_double_encoded() {
        assert_eq!(encode("&amp;"), "&amp;amp;");
    }

    #[test]
    fn empty_string() {
        assert_eq!(encode(""), "");
    }
}
